// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_codec::{Codec, CodecConfig, Column, ColumnSchema, FieldType, Type};

#[test]
fn test_unsupported_types_fail_at_bind() {
	for token in ["decimal", "decimal(12,4)", "binary", "array<int>", "map<string,int>", "struct<a:int>", "uniontype<int,string>", "void"]
	{
		let schema = ColumnSchema::parse(&[("ok", "int"), ("bad", token)]).unwrap();
		let err = Codec::bind(schema).unwrap_err();

		assert_eq!(err.code(), "SCHEMA_001", "token {}", token);
		assert_eq!(err.column.as_ref().unwrap().name, "bad");
	}
}

#[test]
fn test_invalid_token() {
	let err = ColumnSchema::parse(&[("a", "int"), ("b", "integer(4)")]).unwrap_err();
	assert_eq!(err.code(), "SCHEMA_004");
}

#[test]
fn test_count_mismatch() {
	let err = ColumnSchema::from_parts(vec!["a".to_string(), "b".to_string()], vec![Type::Int4]).unwrap_err();
	assert_eq!(err.code(), "SCHEMA_002");
}

#[test]
fn test_duplicate_column() {
	let err = ColumnSchema::parse(&[("a", "int"), ("a", "string")]).unwrap_err();
	assert_eq!(err.code(), "SCHEMA_003");
}

#[test]
fn test_empty_schema() {
	let mut codec = Codec::bind(ColumnSchema::new(vec![]).unwrap()).unwrap();
	assert_eq!(codec.record_size(), 0);
	assert!(codec.encode(&[]).unwrap().is_empty());
	assert!(codec.decode(&[]).unwrap().is_empty());
}

#[test]
fn test_configured_string_width() {
	let schema = ColumnSchema::new(vec![Column::new("s", Type::Utf8), Column::new("c", Type::Char(40))]).unwrap();
	let codec = Codec::bind_with(schema, CodecConfig::default().with_string_width(16)).unwrap();

	assert_eq!(
		codec.field_types(),
		[
			FieldType::FixedString {
				width: 16
			},
			FieldType::FixedString {
				width: 16
			}
		]
	);
	assert_eq!(codec.layout().tforms(), ["16A", "16A"]);
	assert_eq!(codec.record_size(), 32);
}

#[test]
fn test_config_from_json() {
	let config: CodecConfig = serde_json::from_str(r#"{"string_width": 20, "truncate_strings": false}"#).unwrap();
	let schema = ColumnSchema::parse(&[("s", "string")]).unwrap();
	let mut codec = Codec::bind_with(schema, config).unwrap();

	assert_eq!(codec.record_size(), 20);
	let err = codec.encode(&["x".repeat(21).into()]).unwrap_err();
	assert_eq!(err.code(), "ENCODE_004");
}
