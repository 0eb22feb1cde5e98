// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use recarray_type::Type;

use crate::{ColumnSchema, FieldType};

/// Byte positions of every field in a record. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RecordLayout(Arc<RecordLayoutInner>);

impl Deref for RecordLayout {
	type Target = RecordLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl RecordLayout {
	pub fn new(schema: &ColumnSchema, types: &[FieldType]) -> Self {
		Self(Arc::new(RecordLayoutInner::new(schema, types)))
	}
}

#[derive(Debug)]
pub struct RecordLayoutInner {
	pub fields: Vec<Field>,
	/// size of one record in bytes
	pub record_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	pub name: String,
	pub declared: Type,
	pub r#type: FieldType,
	pub offset: usize,
	pub size: usize,
}

impl RecordLayoutInner {
	fn new(schema: &ColumnSchema, types: &[FieldType]) -> Self {
		debug_assert_eq!(schema.len(), types.len());

		let mut offset = 0;
		let mut fields = Vec::with_capacity(types.len());

		for (column, &r#type) in schema.iter().zip(types) {
			let size = r#type.width();
			fields.push(Field {
				name: column.name.clone(),
				declared: column.r#type.clone(),
				r#type,
				offset,
				size,
			});
			offset += size;
		}

		RecordLayoutInner {
			fields,
			record_size: offset,
		}
	}

	pub const fn record_size(&self) -> usize {
		self.record_size
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn field(&self, index: usize) -> Option<&Field> {
		self.fields.get(index)
	}

	/// The `TFORMn` codes of all fields in record order.
	pub fn tforms(&self) -> Vec<String> {
		self.fields.iter().map(|f| f.r#type.tform()).collect()
	}

	/// The bytes of field `index` inside a full record, or `None` when the
	/// index is out of range or the record is too short to hold the field.
	pub fn field_slice<'a>(&self, record: &'a [u8], index: usize) -> Option<&'a [u8]> {
		let field = self.fields.get(index)?;
		record.get(field.offset..field.offset + field.size)
	}
}
