// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Write;

use recarray_type::Result;

use crate::{ModelRow, error::IoError};

/// Flattens a model row into one big-endian record. The output buffer is
/// cleared and reused for every record.
#[derive(Debug, Clone, Default)]
pub struct RecordWriter {
	buffer: Vec<u8>,
}

impl RecordWriter {
	pub fn new(record_size: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(record_size),
		}
	}

	pub fn write(&mut self, model: &ModelRow) -> &[u8] {
		self.buffer.clear();
		for slot in model.slots() {
			slot.write_be(&mut self.buffer);
		}
		debug_assert_eq!(self.buffer.len(), model.record_size());
		&self.buffer
	}

	/// The last record written.
	pub fn buffer(&self) -> &[u8] {
		&self.buffer
	}

	/// Copies the last record into `out`.
	pub fn flush_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
		out.write_all(&self.buffer).map_err(|err| {
			IoError::Flush {
				size: self.buffer.len(),
				reason: err.to_string(),
			}
			.into()
		})
	}
}

#[cfg(test)]
mod tests {
	use std::io;

	use recarray_type::{Type, Value};

	use super::*;
	use crate::{CodecConfig, ColumnSchema, ModelRowBuilder, RowEncoder, TypeMapper};

	fn model(types: &[Type]) -> ModelRow {
		let names = (0..types.len()).map(|i| format!("c{}", i)).collect();
		let schema = ColumnSchema::from_parts(names, types.to_vec()).unwrap();
		let fields = TypeMapper::default().map_all(&schema).unwrap();
		ModelRowBuilder::new(&schema, &fields).build().unwrap().0
	}

	struct Broken;

	impl Write for Broken {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_reuses_buffer() {
		let mut model = model(&[Type::Int4]);
		let encoder = RowEncoder::new(&CodecConfig::default());
		let mut writer = RecordWriter::new(model.record_size());

		encoder.encode(&mut model, &[Value::Int4(1)]).unwrap();
		assert_eq!(writer.write(&model), [0, 0, 0, 1]);

		encoder.encode(&mut model, &[Value::Int4(2)]).unwrap();
		assert_eq!(writer.write(&model), [0, 0, 0, 2]);
		assert_eq!(writer.buffer().len(), 4);
	}

	#[test]
	fn test_flush_to() {
		let mut model = model(&[Type::Boolean, Type::Int2]);
		RowEncoder::new(&CodecConfig::default()).encode(&mut model, &[Value::Boolean(true), Value::Int2(-1)]).unwrap();

		let mut writer = RecordWriter::default();
		writer.write(&model);

		let mut out = Vec::new();
		writer.flush_to(&mut out).unwrap();
		writer.flush_to(&mut out).unwrap();
		assert_eq!(out, [b'T', 0xff, 0xff, b'T', 0xff, 0xff]);
	}

	#[test]
	fn test_flush_failure() {
		let mut writer = RecordWriter::default();
		writer.write(&model(&[Type::Int8]));

		let err = writer.flush_to(&mut Broken).unwrap_err();
		assert_eq!(err.code(), "IO_001");
	}
}
