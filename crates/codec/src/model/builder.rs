// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_type::{Date, DateTime, Result, Value, return_internal_error};
use tracing::trace;

use super::{ModelRow, Slot};
use crate::{ColumnSchema, FieldType, RecordLayout, text};

/// Builds the model row of a schema from a representative non-null row.
///
/// Text columns take their width from the sample: a space-filled string of
/// the configured width, today's date and the current timestamp. Numeric
/// columns have an intrinsic width.
pub struct ModelRowBuilder<'a> {
	schema: &'a ColumnSchema,
	types: &'a [FieldType],
}

impl<'a> ModelRowBuilder<'a> {
	pub fn new(schema: &'a ColumnSchema, types: &'a [FieldType]) -> Self {
		Self {
			schema,
			types,
		}
	}

	/// One representative non-null value per column.
	pub fn sample(&self) -> Vec<Value> {
		let today = Date::today();
		let now = DateTime::now();

		self.types
			.iter()
			.map(|ty| match ty {
				FieldType::Boolean => Value::Boolean(false),
				FieldType::Int8 => Value::Int1(0),
				FieldType::Int16 => Value::Int2(0),
				FieldType::Int32 => Value::Int4(0),
				FieldType::Int64 => Value::Int8(0),
				FieldType::Float32 => Value::Float4(0.0),
				FieldType::Float64 => Value::Float8(0.0),
				FieldType::FixedString {
					width,
				} => Value::Utf8(" ".repeat(*width)),
				FieldType::Date => Value::Date(today),
				FieldType::Timestamp => Value::DateTime(now),
			})
			.collect()
	}

	/// Builds the model from a fresh sample and returns both.
	pub fn build(&self) -> Result<(ModelRow, Vec<Value>)> {
		let sample = self.sample();
		let model = self.build_from(&sample)?;
		Ok((model, sample))
	}

	/// Builds the model from the given sample row. Every sample value must
	/// be non-null and render to exactly the width of its field.
	pub fn build_from(&self, sample: &[Value]) -> Result<ModelRow> {
		if sample.len() != self.types.len() || self.schema.len() != self.types.len() {
			return_internal_error!(
				"sample of {} values for {} columns and {} fields",
				sample.len(),
				self.schema.len(),
				self.types.len()
			);
		}

		let layout = RecordLayout::new(self.schema, self.types);
		let mut slots = Vec::with_capacity(self.types.len());

		for (field, value) in layout.fields.iter().zip(sample) {
			let slot = Self::slot(field.r#type, value)?;
			if slot.width() != field.size {
				return_internal_error!(
					"sample for column `{}` is {} bytes wide, field {} needs {}",
					field.name,
					slot.width(),
					field.r#type,
					field.size
				);
			}
			slots.push(slot);
		}

		trace!(columns = slots.len(), record_size = layout.record_size(), "model row built");
		Ok(ModelRow::new(layout, slots))
	}

	fn slot(ty: FieldType, value: &Value) -> Result<Slot> {
		Ok(match (ty, value) {
			(FieldType::Boolean, Value::Boolean(v)) => Slot::Logical(if *v {
				b'T'
			} else {
				b'F'
			}),
			(FieldType::Int8, Value::Int1(v)) => Slot::Int1(*v),
			(FieldType::Int16, Value::Int2(v)) => Slot::Int2(*v),
			(FieldType::Int32, Value::Int4(v)) => Slot::Int4(*v),
			(FieldType::Int64, Value::Int8(v)) => Slot::Int8(*v),
			(FieldType::Float32, Value::Float4(v)) => Slot::Float4(*v),
			(FieldType::Float64, Value::Float8(v)) => Slot::Float8(*v),
			(FieldType::FixedString { .. }, Value::Utf8(v)) => Slot::Text(Box::from(v.as_bytes())),
			(FieldType::Date, Value::Date(v)) if text::renderable(v.year()) => {
				let mut bytes = vec![0u8; FieldType::DATE_WIDTH];
				text::write_date(&mut bytes, *v);
				Slot::Text(bytes.into_boxed_slice())
			}
			(FieldType::Timestamp, Value::DateTime(v)) if text::renderable(v.date().year()) => {
				let mut bytes = vec![0u8; FieldType::TIMESTAMP_WIDTH];
				text::write_timestamp(&mut bytes, *v);
				Slot::Text(bytes.into_boxed_slice())
			}
			(ty, value) => {
				return_internal_error!("sample value {} ({}) cannot seed a {} field", value, value.kind(), ty)
			}
		})
	}
}
