// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_type::{Result, Value};

use crate::{
	CodecConfig, Field, FieldType, ModelRow,
	error::EncodeError,
	text,
};

/// Overwrites every slot of a model row from one row of values.
#[derive(Debug, Clone, Copy)]
pub struct RowEncoder {
	boolean_null: u8,
	truncate_strings: bool,
}

impl RowEncoder {
	pub fn new(config: &CodecConfig) -> Self {
		Self {
			boolean_null: config.boolean_null,
			truncate_strings: config.truncate_strings,
		}
	}

	/// Encodes `row` in schema order. `Value::Undefined` is the null marker
	/// for every column. On error the model holds a partially written row,
	/// which the next successful call overwrites completely.
	pub fn encode(&self, model: &mut ModelRow, row: &[Value]) -> Result<()> {
		let layout = model.layout().clone();
		if row.len() != layout.len() {
			return Err(EncodeError::ArityMismatch {
				expected: layout.len(),
				actual: row.len(),
			}
			.into());
		}

		for (index, (field, value)) in layout.fields.iter().zip(row).enumerate() {
			self.encode_value(model, index, field, value)?;
		}
		Ok(())
	}

	fn encode_value(&self, model: &mut ModelRow, index: usize, field: &Field, value: &Value) -> Result<()> {
		match (field.r#type, value) {
			(_, Value::Undefined) => model.set_undefined(index, self.boolean_null),

			(FieldType::Boolean, Value::Boolean(v)) => model.set_bool(index, *v),
			(FieldType::Int8, Value::Int1(v)) => model.set_i8(index, *v),
			(FieldType::Int16, Value::Int2(v)) => model.set_i16(index, *v),
			(FieldType::Int32, Value::Int4(v)) => model.set_i32(index, *v),
			(FieldType::Int64, Value::Int8(v)) => model.set_i64(index, *v),
			(FieldType::Float32, Value::Float4(v)) => model.set_f32(index, *v),
			(FieldType::Float64, Value::Float8(v)) => model.set_f64(index, *v),

			(
				FieldType::FixedString {
					width,
				},
				Value::Utf8(v),
			) => {
				let fitted = self.fit(field, width, v)?;
				model.set_text(index, fitted.as_bytes())
			}

			(FieldType::Date, Value::Date(v)) => {
				if !text::renderable(v.year()) {
					return Err(out_of_range(field, value));
				}
				model.set_date(index, *v)
			}

			(FieldType::Timestamp, Value::DateTime(v)) => {
				if !text::renderable(v.date().year()) {
					return Err(out_of_range(field, value));
				}
				model.set_datetime(index, *v)
			}

			(expected, actual) => Err(EncodeError::TypeMismatch {
				column: field.name.clone(),
				declared: field.declared.clone(),
				expected,
				actual: actual.kind(),
			}
			.into()),
		}
	}

	fn fit<'v>(&self, field: &Field, width: usize, value: &'v str) -> Result<&'v str> {
		if value.len() <= width {
			return Ok(value);
		}
		if !self.truncate_strings {
			return Err(EncodeError::StringTooLong {
				column: field.name.clone(),
				declared: field.declared.clone(),
				width,
				length: value.len(),
			}
			.into());
		}
		Ok(text::truncate_utf8(value, width))
	}
}

fn out_of_range(field: &Field, value: &Value) -> recarray_type::Error {
	EncodeError::TemporalOutOfRange {
		column: field.name.clone(),
		declared: field.declared.clone(),
		value: value.to_string(),
	}
	.into()
}
