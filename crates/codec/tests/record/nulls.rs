// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_codec::{Codec, CodecConfig, ColumnSchema, Date, DateTime, Value};

fn all_types() -> ColumnSchema {
	ColumnSchema::parse(&[
		("b", "boolean"),
		("i1", "tinyint"),
		("i2", "smallint"),
		("i4", "int"),
		("i8", "bigint"),
		("f4", "float"),
		("f8", "double"),
		("s", "string"),
		("d", "date"),
		("t", "timestamp"),
	])
	.unwrap()
}

fn full_row() -> Vec<Value> {
	vec![
		Value::Boolean(true),
		Value::Int1(1),
		Value::Int2(2),
		Value::Int4(3),
		Value::Int8(4),
		Value::Float4(5.0),
		Value::Float8(6.0),
		Value::from("seven"),
		Value::Date(Date::new(2008, 8, 8).unwrap()),
		Value::DateTime(DateTime::new(2009, 9, 9, 9, 9, 9, 0).unwrap()),
	]
}

fn null_row() -> Vec<Value> {
	vec![Value::Undefined; 10]
}

fn expected_nulls(boolean_null: u8) -> Vec<u8> {
	let mut out = vec![boolean_null];
	out.extend_from_slice(&i8::MIN.to_be_bytes());
	out.extend_from_slice(&i16::MIN.to_be_bytes());
	out.extend_from_slice(&i32::MIN.to_be_bytes());
	out.extend_from_slice(&i64::MIN.to_be_bytes());
	out.extend_from_slice(&f32::NAN.to_be_bytes());
	out.extend_from_slice(&f64::NAN.to_be_bytes());
	out.extend_from_slice(&[0u8; 255 + 10 + 23]);
	out
}

#[test]
fn test_null_encodings() {
	let mut codec = Codec::bind(all_types()).unwrap();
	assert_eq!(codec.encode(&null_row()).unwrap(), expected_nulls(0).as_slice());
}

#[test]
fn test_null_after_value_does_not_leak() {
	let mut codec = Codec::bind(all_types()).unwrap();

	let first = codec.encode_to_vec(&full_row()).unwrap();
	assert_ne!(first, expected_nulls(0));

	assert_eq!(codec.encode(&null_row()).unwrap(), expected_nulls(0).as_slice());
}

#[test]
fn test_configured_boolean_null() {
	let mut codec = Codec::bind_with(all_types(), CodecConfig::default().with_boolean_null(b'?')).unwrap();
	assert_eq!(codec.encode(&null_row()).unwrap(), expected_nulls(b'?').as_slice());
	assert_eq!(codec.decode(&expected_nulls(b'?')).unwrap(), null_row());
}

#[test]
fn test_nulls_decode_to_undefined() {
	let codec = Codec::bind(all_types()).unwrap();
	assert_eq!(codec.decode(&expected_nulls(0)).unwrap(), null_row());
}

#[test]
fn test_sentinel_values_read_back_as_null() {
	let schema = ColumnSchema::parse(&[("n", "int"), ("s", "string")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let record = codec.encode_to_vec(&[Value::Int4(i32::MIN), Value::from("")]).unwrap();
	assert_eq!(codec.decode(&record).unwrap(), [Value::Undefined, Value::Undefined]);
}
