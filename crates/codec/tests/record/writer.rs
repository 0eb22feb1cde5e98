// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::{self, Write};

use recarray_codec::{Codec, ColumnSchema, Value};

struct FailOnce {
	failed: bool,
	out: Vec<u8>,
}

impl Write for FailOnce {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if !self.failed {
			self.failed = true;
			return Err(io::Error::other("disk full"));
		}
		self.out.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn test_records_concatenate() {
	let schema = ColumnSchema::parse(&[("id", "smallint"), ("ok", "boolean")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let mut out = Vec::new();
	for (id, ok) in [(1i16, true), (2, false), (3, true)] {
		codec.encode_into(&[Value::Int2(id), Value::Boolean(ok)], &mut out).unwrap();
	}

	assert_eq!(out, [0, 1, b'T', 0, 2, b'F', 0, 3, b'T']);
	assert_eq!(out.len(), 3 * codec.record_size());
}

#[test]
fn test_io_failure_affects_one_record() {
	let schema = ColumnSchema::parse(&[("id", "int")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();
	let mut sink = FailOnce {
		failed: false,
		out: Vec::new(),
	};

	let err = codec.encode_into(&[Value::Int4(1)], &mut sink).unwrap_err();
	assert_eq!(err.code(), "IO_001");

	codec.encode_into(&[Value::Int4(2)], &mut sink).unwrap();
	assert_eq!(sink.out, [0, 0, 0, 2]);
}

#[test]
fn test_row_error_writes_nothing() {
	let schema = ColumnSchema::parse(&[("id", "int")]).unwrap();
	let mut codec = Codec::bind(schema).unwrap();

	let mut out = Vec::new();
	assert!(codec.encode_into(&[Value::Int8(1)], &mut out).is_err());
	assert!(out.is_empty());
}
