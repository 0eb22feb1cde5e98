// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_codec::{Codec, ColumnSchema, Value};

#[test]
fn test_string_field_is_always_full_width() {
	let schema = ColumnSchema::parse(&[("before", "tinyint"), ("s", "varchar(3)"), ("after", "tinyint")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	for len in [0usize, 3, 254, 255, 256, 1000] {
		let value = "y".repeat(len);
		let record = codec.encode(&[Value::Int1(1), Value::Utf8(value), Value::Int1(2)]).unwrap();

		assert_eq!(record.len(), 257, "length {}", len);
		assert_eq!(record[0], 1);
		assert_eq!(record[256], 2, "length {}", len);

		let kept = len.min(255);
		assert!(record[1..1 + kept].iter().all(|&b| b == b'y'));
		assert!(record[1 + kept..256].iter().all(|&b| b == 0));
	}
}

#[test]
fn test_record_length_is_sum_of_widths() {
	let schema = ColumnSchema::parse(&[
		("a", "boolean"),
		("b", "int16"),
		("c", "int64"),
		("d", "float32"),
		("e", "char(1)"),
		("f", "date"),
		("g", "timestamp"),
	])
	.unwrap();
	let mut codec = Codec::bind(schema).unwrap();
	let expected: usize = codec.layout().fields.iter().map(|f| f.size).sum();
	assert_eq!(expected, 1 + 2 + 8 + 4 + 255 + 10 + 23);
	assert_eq!(codec.record_size(), expected);

	let rows = [
		vec![Value::Undefined; 7],
		vec![
			Value::Boolean(true),
			Value::Int2(-1),
			Value::Int8(1),
			Value::Float4(-0.0),
			Value::from("z"),
			Value::Date(recarray_codec::Date::new(1999, 12, 31).unwrap()),
			Value::DateTime(recarray_codec::DateTime::from_timestamp_millis(0).unwrap()),
		],
	];
	for row in rows {
		assert_eq!(codec.encode(&row).unwrap().len(), expected);
	}
}

#[test]
fn test_numeric_values_at_their_offsets() {
	let schema =
		ColumnSchema::parse(&[("a", "tinyint"), ("b", "smallint"), ("c", "int"), ("d", "bigint"), ("e", "float"), ("f", "double")])
			.unwrap();
	let mut codec = Codec::bind(schema).unwrap();
	let layout = codec.layout().clone();

	let cases: [(i8, i16, i32, i64, f32, f64); 3] = [
		(i8::MAX, i16::MAX, i32::MAX, i64::MAX, f32::MAX, f64::MAX),
		(i8::MIN + 1, i16::MIN + 1, i32::MIN + 1, i64::MIN + 1, f32::MIN_POSITIVE, -f64::EPSILON),
		(0, -1, 123_456, -9_876_543_210, 3.25, f64::INFINITY),
	];

	for (a, b, c, d, e, f) in cases {
		let row = [Value::Int1(a), Value::Int2(b), Value::Int4(c), Value::Int8(d), Value::Float4(e), Value::Float8(f)];
		let record = codec.encode(&row).unwrap();

		assert_eq!(i8::from_be_bytes(layout.field_slice(record, 0).unwrap().try_into().unwrap()), a);
		assert_eq!(i16::from_be_bytes(layout.field_slice(record, 1).unwrap().try_into().unwrap()), b);
		assert_eq!(i32::from_be_bytes(layout.field_slice(record, 2).unwrap().try_into().unwrap()), c);
		assert_eq!(i64::from_be_bytes(layout.field_slice(record, 3).unwrap().try_into().unwrap()), d);
		assert_eq!(f32::from_be_bytes(layout.field_slice(record, 4).unwrap().try_into().unwrap()), e);
		assert_eq!(f64::from_be_bytes(layout.field_slice(record, 5).unwrap().try_into().unwrap()), f);
	}
}
