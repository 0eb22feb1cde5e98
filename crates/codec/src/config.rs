// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{FieldType, error::SchemaError};

/// Configuration for a bound [`Codec`](crate::Codec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
	/// Byte width of `char`, `varchar` and `string` fields.
	pub string_width: usize,
	/// Byte written for an undefined boolean. FITS uses `0x00`.
	pub boolean_null: u8,
	/// Cut strings wider than `string_width` at a character boundary.
	/// When disabled such a string fails the row instead.
	pub truncate_strings: bool,
}

impl Default for CodecConfig {
	fn default() -> Self {
		Self {
			string_width: FieldType::STRING_WIDTH,
			boolean_null: 0x00,
			truncate_strings: true,
		}
	}
}

impl CodecConfig {
	pub fn with_string_width(mut self, width: usize) -> Self {
		self.string_width = width;
		self
	}

	pub fn with_boolean_null(mut self, byte: u8) -> Self {
		self.boolean_null = byte;
		self
	}

	pub fn with_truncate_strings(mut self, truncate: bool) -> Self {
		self.truncate_strings = truncate;
		self
	}

	pub fn validate(&self) -> Result<(), SchemaError> {
		if self.string_width == 0 {
			return Err(SchemaError::InvalidConfig {
				reason: "string_width must be at least 1".to_string(),
			});
		}
		if self.string_width > FieldType::MAX_STRING_WIDTH {
			return Err(SchemaError::InvalidConfig {
				reason: format!(
					"string_width {} exceeds the maximum of {}",
					self.string_width,
					FieldType::MAX_STRING_WIDTH
				),
			});
		}
		if self.boolean_null == b'T' || self.boolean_null == b'F' {
			return Err(SchemaError::InvalidConfig {
				reason: format!("boolean_null '{}' collides with a boolean value", self.boolean_null as char),
			});
		}
		Ok(())
	}
}
