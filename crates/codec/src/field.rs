// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use recarray_type::Type;
use serde::{Deserialize, Serialize};

use crate::{ColumnSchema, error::SchemaError};

/// The fixed-width binary shape of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
	Boolean,
	Int8,
	Int16,
	Int32,
	Int64,
	Float32,
	Float64,
	FixedString {
		width: usize,
	},
	Date,
	Timestamp,
}

impl FieldType {
	pub const STRING_WIDTH: usize = 255;
	/// Widest `string_width` a codec accepts.
	pub const MAX_STRING_WIDTH: usize = 1 << 16;
	/// `yyyy-MM-dd`
	pub const DATE_WIDTH: usize = 10;
	/// `yyyy-MM-ddTHH:mm:ss.SSS`
	pub const TIMESTAMP_WIDTH: usize = 23;

	/// Bytes the field occupies in every record.
	pub const fn width(&self) -> usize {
		match self {
			FieldType::Boolean | FieldType::Int8 => 1,
			FieldType::Int16 => 2,
			FieldType::Int32 | FieldType::Float32 => 4,
			FieldType::Int64 | FieldType::Float64 => 8,
			FieldType::FixedString {
				width,
			} => *width,
			FieldType::Date => Self::DATE_WIDTH,
			FieldType::Timestamp => Self::TIMESTAMP_WIDTH,
		}
	}

	/// The FITS binary table `TFORMn` code of the field.
	pub fn tform(&self) -> String {
		match self {
			FieldType::Boolean => "L".to_string(),
			FieldType::Int8 => "B".to_string(),
			FieldType::Int16 => "I".to_string(),
			FieldType::Int32 => "J".to_string(),
			FieldType::Int64 => "K".to_string(),
			FieldType::Float32 => "E".to_string(),
			FieldType::Float64 => "D".to_string(),
			FieldType::FixedString {
				width,
			} => format!("{}A", width),
			FieldType::Date => format!("{}A", Self::DATE_WIDTH),
			FieldType::Timestamp => format!("{}A", Self::TIMESTAMP_WIDTH),
		}
	}

	/// Whether the field is stored as NUL-padded ASCII/UTF-8 text.
	pub fn is_text(&self) -> bool {
		matches!(self, FieldType::FixedString { .. } | FieldType::Date | FieldType::Timestamp)
	}
}

impl Display for FieldType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldType::Boolean => f.write_str("boolean"),
			FieldType::Int8 => f.write_str("int8"),
			FieldType::Int16 => f.write_str("int16"),
			FieldType::Int32 => f.write_str("int32"),
			FieldType::Int64 => f.write_str("int64"),
			FieldType::Float32 => f.write_str("float32"),
			FieldType::Float64 => f.write_str("float64"),
			FieldType::FixedString {
				width,
			} => write!(f, "string({})", width),
			FieldType::Date => f.write_str("date"),
			FieldType::Timestamp => f.write_str("timestamp"),
		}
	}
}

/// Maps declared column types onto record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapper {
	string_width: usize,
}

impl Default for TypeMapper {
	fn default() -> Self {
		Self::new(FieldType::STRING_WIDTH)
	}
}

impl TypeMapper {
	pub fn new(string_width: usize) -> Self {
		Self {
			string_width,
		}
	}

	pub fn string_width(&self) -> usize {
		self.string_width
	}

	/// Maps the type of one column. The length of `char(n)` and
	/// `varchar(n)` does not change the width of the field.
	pub fn map(&self, column: &str, ty: &Type) -> Result<FieldType, SchemaError> {
		Ok(match ty {
			Type::Boolean => FieldType::Boolean,
			Type::Int1 => FieldType::Int8,
			Type::Int2 => FieldType::Int16,
			Type::Int4 => FieldType::Int32,
			Type::Int8 => FieldType::Int64,
			Type::Float4 => FieldType::Float32,
			Type::Float8 => FieldType::Float64,
			Type::Char(_) | Type::Varchar(_) | Type::Utf8 => FieldType::FixedString {
				width: self.string_width,
			},
			Type::Date => FieldType::Date,
			Type::Timestamp => FieldType::Timestamp,
			Type::Decimal { .. }
			| Type::Binary
			| Type::Array(_)
			| Type::Map(_, _)
			| Type::Struct(_)
			| Type::Union(_)
			| Type::Void => {
				return Err(SchemaError::UnsupportedType {
					column: column.to_string(),
					ty: ty.clone(),
				});
			}
		})
	}

	/// Maps every column of the schema. Fails on the first unsupported
	/// column, so a bad schema never yields a partial field list.
	pub fn map_all(&self, schema: &ColumnSchema) -> Result<Vec<FieldType>, SchemaError> {
		schema.iter().map(|column| self.map(&column.name, &column.r#type)).collect()
	}
}
