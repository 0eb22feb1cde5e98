// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Write;

use recarray_type::{Result, Value};
use tracing::{debug, instrument, warn};

use crate::{
	CodecConfig, ColumnSchema, FieldType, ModelRow, ModelRowBuilder, RecordDecoder, RecordLayout, RecordWriter,
	RowEncoder, TypeMapper,
};

/// A record codec bound to one schema.
///
/// Binding validates the whole schema up front. Encoding reuses one model
/// row and one output buffer, so a codec serves a single caller at a time;
/// independent codecs may live on different threads.
#[derive(Debug)]
pub struct Codec {
	schema: ColumnSchema,
	config: CodecConfig,
	types: Vec<FieldType>,
	sample: Vec<Value>,
	model: ModelRow,
	encoder: RowEncoder,
	writer: RecordWriter,
	decoder: RecordDecoder,
}

impl Codec {
	pub fn bind(schema: ColumnSchema) -> Result<Self> {
		Self::bind_with(schema, CodecConfig::default())
	}

	#[instrument(name = "codec::bind", level = "debug", skip(schema, config), fields(columns = schema.len()))]
	pub fn bind_with(schema: ColumnSchema, config: CodecConfig) -> Result<Self> {
		if let Err(err) = config.validate() {
			warn!(error = %err, "rejected codec configuration");
			return Err(err.into());
		}

		let types = match TypeMapper::new(config.string_width).map_all(&schema) {
			Ok(types) => types,
			Err(err) => {
				warn!(error = %err, "rejected schema");
				return Err(err.into());
			}
		};

		let (model, sample) = ModelRowBuilder::new(&schema, &types).build()?;
		let layout = model.layout().clone();

		debug!(columns = layout.len(), record_size = layout.record_size(), "schema bound");

		Ok(Self {
			encoder: RowEncoder::new(&config),
			writer: RecordWriter::new(layout.record_size()),
			decoder: RecordDecoder::new(layout, &config),
			schema,
			config,
			types,
			sample,
			model,
		})
	}

	/// Encodes one row. The returned record is valid until the next call.
	#[instrument(name = "codec::encode", level = "trace", skip(self, row))]
	pub fn encode(&mut self, row: &[Value]) -> Result<&[u8]> {
		if let Err(err) = self.encoder.encode(&mut self.model, row) {
			debug!(code = err.code(), "row rejected");
			return Err(err);
		}
		Ok(self.writer.write(&self.model))
	}

	/// Encodes one row into an owned record.
	pub fn encode_to_vec(&mut self, row: &[Value]) -> Result<Vec<u8>> {
		self.encode(row).map(<[u8]>::to_vec)
	}

	/// Encodes one row and writes the record to `out`.
	#[instrument(name = "codec::encode_into", level = "trace", skip(self, row, out))]
	pub fn encode_into<W: Write + ?Sized>(&mut self, row: &[Value], out: &mut W) -> Result<()> {
		self.encode(row)?;
		if let Err(err) = self.writer.flush_to(out) {
			debug!(code = err.code(), "record not written");
			return Err(err);
		}
		Ok(())
	}

	#[instrument(name = "codec::decode", level = "trace", skip(self, record), fields(len = record.len()))]
	pub fn decode(&self, record: &[u8]) -> Result<Vec<Value>> {
		self.decoder.decode(record)
	}

	pub fn schema(&self) -> &ColumnSchema {
		&self.schema
	}

	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	pub fn field_types(&self) -> &[FieldType] {
		&self.types
	}

	pub fn layout(&self) -> &RecordLayout {
		self.model.layout()
	}

	pub fn record_size(&self) -> usize {
		self.model.record_size()
	}

	/// The representative row the model was built from.
	pub fn sample(&self) -> &[Value] {
		&self.sample
	}
}
