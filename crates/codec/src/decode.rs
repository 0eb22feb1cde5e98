// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_type::{Date, DateTime, Result, Value};

use crate::{
	CodecConfig, Field, FieldType, RecordLayout,
	error::DecodeError,
	text,
};

/// Reads records produced by the encoder back into values.
///
/// Null sentinels decode to `Value::Undefined`: the minimum integer, any
/// NaN, and an all-NUL text field. A non-null value equal to a sentinel
/// therefore does not survive a round trip.
#[derive(Debug, Clone)]
pub struct RecordDecoder {
	layout: RecordLayout,
	boolean_null: u8,
}

impl RecordDecoder {
	pub fn new(layout: RecordLayout, config: &CodecConfig) -> Self {
		Self {
			layout,
			boolean_null: config.boolean_null,
		}
	}

	pub fn layout(&self) -> &RecordLayout {
		&self.layout
	}

	pub fn decode(&self, record: &[u8]) -> Result<Vec<Value>> {
		if record.len() != self.layout.record_size() {
			return Err(DecodeError::LengthMismatch {
				expected: self.layout.record_size(),
				actual: record.len(),
			}
			.into());
		}

		self.layout
			.fields
			.iter()
			.map(|field| self.decode_field(field, &record[field.offset..field.offset + field.size]))
			.collect()
	}

	fn decode_field(&self, field: &Field, bytes: &[u8]) -> Result<Value> {
		Ok(match field.r#type {
			FieldType::Boolean => match bytes[0] {
				b'T' => Value::Boolean(true),
				b'F' => Value::Boolean(false),
				byte if byte == self.boolean_null => Value::Undefined,
				byte => {
					return Err(DecodeError::InvalidBoolean {
						column: field.name.clone(),
						declared: field.declared.clone(),
						byte,
					}
					.into());
				}
			},
			FieldType::Int8 => match i8::from_be_bytes(array(bytes)) {
				i8::MIN => Value::Undefined,
				v => Value::Int1(v),
			},
			FieldType::Int16 => match i16::from_be_bytes(array(bytes)) {
				i16::MIN => Value::Undefined,
				v => Value::Int2(v),
			},
			FieldType::Int32 => match i32::from_be_bytes(array(bytes)) {
				i32::MIN => Value::Undefined,
				v => Value::Int4(v),
			},
			FieldType::Int64 => match i64::from_be_bytes(array(bytes)) {
				i64::MIN => Value::Undefined,
				v => Value::Int8(v),
			},
			FieldType::Float32 => match f32::from_be_bytes(array(bytes)) {
				v if v.is_nan() => Value::Undefined,
				v => Value::Float4(v),
			},
			FieldType::Float64 => match f64::from_be_bytes(array(bytes)) {
				v if v.is_nan() => Value::Undefined,
				v => Value::Float8(v),
			},
			FieldType::FixedString { .. } => {
				if text::is_null(bytes) {
					return Ok(Value::Undefined);
				}
				let trimmed = text::trim_padding(bytes);
				match std::str::from_utf8(trimmed) {
					Ok(s) => Value::Utf8(s.to_string()),
					Err(err) => return Err(invalid_text(field, err.to_string())),
				}
			}
			FieldType::Date => {
				if text::is_null(bytes) {
					return Ok(Value::Undefined);
				}
				let s = std::str::from_utf8(bytes).map_err(|err| invalid_text(field, err.to_string()))?;
				Value::Date(Date::parse(s).map_err(|err| invalid_text(field, err.to_string()))?)
			}
			FieldType::Timestamp => {
				if text::is_null(bytes) {
					return Ok(Value::Undefined);
				}
				if bytes[10] != b'T' || bytes[19] != b'.' {
					return Err(invalid_text(field, "expected yyyy-MM-ddTHH:mm:ss.SSS".to_string()));
				}
				let s = std::str::from_utf8(bytes).map_err(|err| invalid_text(field, err.to_string()))?;
				Value::DateTime(DateTime::parse(s).map_err(|err| invalid_text(field, err.to_string()))?)
			}
		})
	}
}

fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let mut out = [0u8; N];
	out.copy_from_slice(bytes);
	out
}

fn invalid_text(field: &Field, reason: String) -> recarray_type::Error {
	DecodeError::InvalidText {
		column: field.name.clone(),
		declared: field.declared.clone(),
		ty: field.r#type,
		reason,
	}
	.into()
}
