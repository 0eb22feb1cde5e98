// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod parse;

/// Abstract column type descriptor, as declared by a table schema.
///
/// Besides the primitive types a record can hold, the descriptor also
/// covers the nested and arbitrary-precision categories a schema may
/// declare, so that they can be recognised and rejected explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// Fixed length character data with a declared length
	Char(u32),
	/// Variable length character data with a declared maximum length
	Varchar(u32),
	/// Unbounded UTF-8 text
	Utf8,
	/// A calendar date
	Date,
	/// A date and time without time zone
	Timestamp,
	/// Arbitrary precision decimal
	Decimal {
		precision: u8,
		scale: u8,
	},
	/// Raw bytes
	Binary,
	Array(Box<Type>),
	Map(Box<Type>, Box<Type>),
	Struct(Vec<(String, Type)>),
	Union(Vec<Type>),
	Void,
}

impl Type {
	pub fn is_text(&self) -> bool {
		matches!(self, Type::Char(_) | Type::Varchar(_) | Type::Utf8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("boolean"),
			Type::Int1 => f.write_str("int8"),
			Type::Int2 => f.write_str("int16"),
			Type::Int4 => f.write_str("int32"),
			Type::Int8 => f.write_str("int64"),
			Type::Float4 => f.write_str("float32"),
			Type::Float8 => f.write_str("float64"),
			Type::Char(len) => write!(f, "char({})", len),
			Type::Varchar(len) => write!(f, "varchar({})", len),
			Type::Utf8 => f.write_str("string"),
			Type::Date => f.write_str("date"),
			Type::Timestamp => f.write_str("timestamp"),
			Type::Decimal {
				precision,
				scale,
			} => write!(f, "decimal({},{})", precision, scale),
			Type::Binary => f.write_str("binary"),
			Type::Array(inner) => write!(f, "array<{}>", inner),
			Type::Map(key, value) => write!(f, "map<{},{}>", key, value),
			Type::Struct(fields) => {
				f.write_str("struct<")?;
				for (idx, (name, ty)) in fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}:{}", name, ty)?;
				}
				f.write_str(">")
			}
			Type::Union(members) => {
				f.write_str("uniontype<")?;
				for (idx, ty) in members.iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}", ty)?;
				}
				f.write_str(">")
			}
			Type::Void => f.write_str("void"),
		}
	}
}
