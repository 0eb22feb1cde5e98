// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use super::Type;
use crate::error::TypeError;

const MAX_DECIMAL_PRECISION: u32 = 38;
const DEFAULT_DECIMAL_PRECISION: u8 = 10;
/// Deepest `array`/`map`/`struct`/`uniontype` nesting a token may use.
const MAX_TYPE_NESTING: usize = 64;

impl FromStr for Type {
	type Err = TypeError;

	/// Parses a single type token, e.g. `int`, `varchar(20)` or
	/// `map<string,array<int>>`. Keywords are case-insensitive.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut parser = Parser {
			input: s,
			pos: 0,
			depth: 0,
		};
		let ty = parser.parse_type()?;
		parser.skip_whitespace();
		if parser.pos != s.len() {
			return Err(parser.error(format!("unexpected trailing input '{}'", &s[parser.pos..])));
		}
		Ok(ty)
	}
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
	depth: usize,
}

impl<'a> Parser<'a> {
	fn error(&self, reason: impl Into<String>) -> TypeError {
		TypeError::InvalidTypeToken {
			token: self.input.to_string(),
			reason: reason.into(),
		}
	}

	fn skip_whitespace(&mut self) {
		let rest = &self.input[self.pos..];
		self.pos += rest.len() - rest.trim_start().len();
	}

	fn peek(&mut self) -> Option<char> {
		self.skip_whitespace();
		self.input[self.pos..].chars().next()
	}

	fn consume(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.pos += expected.len_utf8();
			true
		} else {
			false
		}
	}

	fn expect(&mut self, expected: char) -> Result<(), TypeError> {
		if self.consume(expected) {
			Ok(())
		} else {
			Err(self.error(format!("expected '{}' at offset {}", expected, self.pos)))
		}
	}

	fn identifier(&mut self) -> Result<&'a str, TypeError> {
		self.skip_whitespace();
		let input = self.input;
		let rest = &input[self.pos..];
		let len = rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')).unwrap_or(rest.len());
		if len == 0 || rest.starts_with(|c: char| c.is_ascii_digit()) {
			return Err(self.error(format!("expected identifier at offset {}", self.pos)));
		}
		self.pos += len;
		Ok(&rest[..len])
	}

	fn number(&mut self) -> Result<u32, TypeError> {
		self.skip_whitespace();
		let rest = &self.input[self.pos..];
		let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
		let value = rest[..len]
			.parse::<u32>()
			.map_err(|_| self.error(format!("expected number at offset {}", self.pos)))?;
		self.pos += len;
		Ok(value)
	}

	/// Parses an optional `(n[,m])` parameter list.
	fn parameters(&mut self) -> Result<Vec<u32>, TypeError> {
		let mut params = Vec::new();
		if self.consume('(') {
			loop {
				params.push(self.number()?);
				if !self.consume(',') {
					break;
				}
			}
			self.expect(')')?;
		}
		Ok(params)
	}

	fn no_parameters(&mut self, ty: Type) -> Result<Type, TypeError> {
		if self.parameters()?.is_empty() {
			Ok(ty)
		} else {
			Err(self.error(format!("{} takes no parameters", ty)))
		}
	}

	fn length(&mut self, name: &str) -> Result<u32, TypeError> {
		match self.parameters()?.as_slice() {
			[len] if *len > 0 => Ok(*len),
			[_] => Err(self.error(format!("{} length must be positive", name))),
			_ => Err(self.error(format!("{} requires exactly one length parameter", name))),
		}
	}

	fn decimal(&mut self) -> Result<Type, TypeError> {
		let (precision, scale) = match self.parameters()?.as_slice() {
			[] => (DEFAULT_DECIMAL_PRECISION as u32, 0),
			[precision] => (*precision, 0),
			[precision, scale] => (*precision, *scale),
			_ => return Err(self.error("decimal takes at most precision and scale")),
		};
		if precision == 0 || precision > MAX_DECIMAL_PRECISION {
			return Err(self.error(format!("decimal precision must be between 1 and {}", MAX_DECIMAL_PRECISION)));
		}
		if scale > precision {
			return Err(self.error("decimal scale cannot exceed precision"));
		}
		Ok(Type::Decimal {
			precision: precision as u8,
			scale: scale as u8,
		})
	}

	fn parse_type(&mut self) -> Result<Type, TypeError> {
		if self.depth > MAX_TYPE_NESTING {
			return Err(self.error(format!("nesting exceeds {} levels at offset {}", MAX_TYPE_NESTING, self.pos)));
		}
		self.depth += 1;
		let result = self.named_type();
		self.depth -= 1;
		result
	}

	fn named_type(&mut self) -> Result<Type, TypeError> {
		let name = self.identifier()?;
		match name.to_ascii_lowercase().as_str() {
			"boolean" | "bool" => self.no_parameters(Type::Boolean),
			"int8" | "tinyint" => self.no_parameters(Type::Int1),
			"int16" | "smallint" => self.no_parameters(Type::Int2),
			"int32" | "int" | "integer" => self.no_parameters(Type::Int4),
			"int64" | "bigint" => self.no_parameters(Type::Int8),
			"float32" | "float" => self.no_parameters(Type::Float4),
			"float64" | "double" => self.no_parameters(Type::Float8),
			"char" => Ok(Type::Char(self.length("char")?)),
			"varchar" => Ok(Type::Varchar(self.length("varchar")?)),
			"string" => self.no_parameters(Type::Utf8),
			"date" => self.no_parameters(Type::Date),
			"timestamp" => self.no_parameters(Type::Timestamp),
			"decimal" => self.decimal(),
			"binary" => self.no_parameters(Type::Binary),
			"void" => self.no_parameters(Type::Void),
			"array" => {
				self.expect('<')?;
				let inner = self.parse_type()?;
				self.expect('>')?;
				Ok(Type::Array(Box::new(inner)))
			}
			"map" => {
				self.expect('<')?;
				let key = self.parse_type()?;
				self.expect(',')?;
				let value = self.parse_type()?;
				self.expect('>')?;
				Ok(Type::Map(Box::new(key), Box::new(value)))
			}
			"struct" => {
				self.expect('<')?;
				let mut fields = Vec::new();
				loop {
					let field = self.identifier()?.to_string();
					self.expect(':')?;
					fields.push((field, self.parse_type()?));
					if !self.consume(',') {
						break;
					}
				}
				self.expect('>')?;
				Ok(Type::Struct(fields))
			}
			"uniontype" => {
				self.expect('<')?;
				let mut members = Vec::new();
				loop {
					members.push(self.parse_type()?);
					if !self.consume(',') {
						break;
					}
				}
				self.expect('>')?;
				Ok(Type::Union(members))
			}
			_ => Err(self.error(format!("unknown type '{}'", name))),
		}
	}
}
