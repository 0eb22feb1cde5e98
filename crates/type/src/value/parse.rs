// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{num::IntErrorKind, str::FromStr};

use super::{Date, DateTime, Type, Value};
use crate::error::TypeError;

impl Value {
	/// Parses a text cell as a value of the given column type.
	///
	/// For non-text types an empty cell or `null` (any case) is the
	/// undefined value. Text types take the cell verbatim.
	pub fn parse(ty: &Type, text: &str) -> Result<Value, TypeError> {
		if ty.is_text() {
			return Ok(Value::Utf8(text.to_string()));
		}

		let trimmed = text.trim();
		if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
			return Ok(Value::Undefined);
		}

		match ty {
			Type::Boolean => parse_bool(trimmed).map(Value::Boolean),
			Type::Int1 => parse_int::<i8>(trimmed, ty).map(Value::Int1),
			Type::Int2 => parse_int::<i16>(trimmed, ty).map(Value::Int2),
			Type::Int4 => parse_int::<i32>(trimmed, ty).map(Value::Int4),
			Type::Int8 => parse_int::<i64>(trimmed, ty).map(Value::Int8),
			Type::Float4 => parse_float::<f32>(trimmed, ty).map(Value::Float4),
			Type::Float8 => parse_float::<f64>(trimmed, ty).map(Value::Float8),
			Type::Date => Date::parse(trimmed).map(Value::Date),
			Type::Timestamp => DateTime::parse(trimmed).map(Value::DateTime),
			_ => Err(TypeError::UnsupportedValueType {
				ty: ty.clone(),
			}),
		}
	}
}

pub fn parse_bool(text: &str) -> Result<bool, TypeError> {
	match text.trim().to_ascii_lowercase().as_str() {
		"true" | "t" | "1" => Ok(true),
		"false" | "f" | "0" => Ok(false),
		_ => Err(TypeError::InvalidBoolean {
			text: text.to_string(),
		}),
	}
}

fn parse_int<T>(text: &str, ty: &Type) -> Result<T, TypeError>
where
	T: FromStr<Err = std::num::ParseIntError>,
{
	text.parse::<T>().map_err(|err| match err.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => TypeError::NumberOutOfRange {
			text: text.to_string(),
			ty: ty.clone(),
		},
		_ => TypeError::InvalidNumber {
			text: text.to_string(),
			ty: ty.clone(),
		},
	})
}

fn parse_float<T>(text: &str, ty: &Type) -> Result<T, TypeError>
where
	T: FromStr<Err = std::num::ParseFloatError>,
{
	text.parse::<T>().map_err(|_| TypeError::InvalidNumber {
		text: text.to_string(),
		ty: ty.clone(),
	})
}
