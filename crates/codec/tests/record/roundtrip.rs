// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_codec::{Codec, ColumnSchema, Date, DateTime, Type, Value};

#[test]
fn test_decode_inverts_encode() {
	let schema = ColumnSchema::parse(&[
		("b", "boolean"),
		("i1", "int8"),
		("i2", "int16"),
		("i4", "int32"),
		("i8", "int64"),
		("f4", "float32"),
		("f8", "float64"),
		("s", "string"),
		("d", "date"),
		("t", "timestamp"),
	])
	.unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let rows = [
		vec![
			Value::Boolean(false),
			Value::Int1(-7),
			Value::Int2(1234),
			Value::Int4(-1),
			Value::Int8(i64::MAX),
			Value::Float4(2.5),
			Value::Float8(-1e300),
			Value::from("naïve café"),
			Value::Date(Date::new(1, 1, 1).unwrap()),
			Value::DateTime(DateTime::new(9999, 12, 31, 23, 59, 59, 999_000_000).unwrap()),
		],
		vec![
			Value::Undefined,
			Value::Int1(0),
			Value::Undefined,
			Value::Int4(0),
			Value::Undefined,
			Value::Float4(0.0),
			Value::Undefined,
			Value::from(" padded "),
			Value::Undefined,
			Value::DateTime(DateTime::from_timestamp_millis(-1).unwrap()),
		],
	];

	for row in rows {
		let record = codec.encode_to_vec(&row).unwrap();
		assert_eq!(codec.decode(&record).unwrap(), row);
	}
}

#[test]
fn test_timestamp_loses_sub_millisecond_digits() {
	let schema = ColumnSchema::new(vec![recarray_codec::Column::new("t", Type::Timestamp)]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let value = DateTime::new(2024, 6, 1, 12, 0, 0, 123_456_789).unwrap();
	let record = codec.encode_to_vec(&[Value::DateTime(value)]).unwrap();
	assert_eq!(
		codec.decode(&record).unwrap(),
		[Value::DateTime(DateTime::new(2024, 6, 1, 12, 0, 0, 123_000_000).unwrap())]
	);
}

#[test]
fn test_decode_rejects_wrong_length() {
	let schema = ColumnSchema::parse(&[("n", "int")]).unwrap();
	let codec = Codec::bind(schema).unwrap();
	assert_eq!(codec.decode(&[0; 5]).unwrap_err().code(), "DECODE_001");
}
