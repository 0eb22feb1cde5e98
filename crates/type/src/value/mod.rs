// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod date;
mod datetime;
mod parse;
mod r#type;

pub use date::Date;
pub use datetime::DateTime;
pub use parse::parse_bool;
pub use r#type::Type;

/// A single column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// A calendar date
	Date(Date),
	/// A date and time value with nanosecond precision
	DateTime(DateTime),
}

impl Value {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// Short name of the variant, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Undefined => "undefined",
			Value::Boolean(_) => "boolean",
			Value::Int1(_) => "int8",
			Value::Int2(_) => "int16",
			Value::Int4(_) => "int32",
			Value::Int8(_) => "int64",
			Value::Float4(_) => "float32",
			Value::Float8(_) => "float64",
			Value::Utf8(_) => "string",
			Value::Date(_) => "date",
			Value::DateTime(_) => "timestamp",
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => Display::fmt(v, f),
			Value::Date(v) => Display::fmt(v, f),
			Value::DateTime(v) => Display::fmt(v, f),
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::$variant(value)
				}
			}
		)*
	};
}

impl_from! {
	bool => Boolean,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	f32 => Float4,
	f64 => Float8,
	String => Utf8,
	Date => Date,
	DateTime => DateTime,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => Value::Undefined,
		}
	}
}
