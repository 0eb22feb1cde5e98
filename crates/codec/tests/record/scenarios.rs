// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_codec::{Codec, ColumnSchema, Date, Type, Value};

#[test]
fn test_boolean_and_null_int() {
	let schema = ColumnSchema::from_parts(vec!["ok".to_string(), "n".to_string()], vec![Type::Boolean, Type::Int4])
		.unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let record = codec.encode(&[Value::Boolean(true), Value::Undefined]).unwrap();
	assert_eq!(record, [b'T', 0x80, 0x00, 0x00, 0x00]);
	assert_eq!(record.len(), 5);
}

#[test]
fn test_short_string() {
	let schema = ColumnSchema::parse(&[("s", "string")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let record = codec.encode(&[Value::from("ab")]).unwrap();
	let mut expected = vec![0u8; 255];
	expected[0] = b'a';
	expected[1] = b'b';
	assert_eq!(record, expected.as_slice());
}

#[test]
fn test_date() {
	let schema = ColumnSchema::parse(&[("d", "date")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let record = codec.encode(&[Value::Date(Date::new(2024, 1, 5).unwrap())]).unwrap();
	assert_eq!(record, b"2024-01-05");
}

#[test]
fn test_mixed_row() {
	let schema = ColumnSchema::parse(&[
		("id", "bigint"),
		("flag", "boolean"),
		("score", "double"),
		("tag", "varchar(8)"),
		("at", "timestamp"),
	])
	.unwrap();
	let mut codec = Codec::bind(schema).unwrap();
	assert_eq!(codec.record_size(), 8 + 1 + 8 + 255 + 23);

	let row = [
		Value::Int8(42),
		Value::Boolean(false),
		Value::Float8(0.5),
		Value::from("alpha"),
		Value::DateTime(recarray_codec::DateTime::new(2001, 2, 3, 4, 5, 6, 7_000_000).unwrap()),
	];
	let record = codec.encode_to_vec(&row).unwrap();

	assert_eq!(&record[0..8], &42i64.to_be_bytes());
	assert_eq!(record[8], b'F');
	assert_eq!(&record[9..17], &0.5f64.to_be_bytes());
	assert_eq!(&record[17..22], b"alpha");
	assert!(record[22..272].iter().all(|&b| b == 0));
	assert_eq!(&record[272..295], b"2001-02-03T04:05:06.007");
}
