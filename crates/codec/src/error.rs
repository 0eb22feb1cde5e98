// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_type::{
	Type,
	error::{Diagnostic, Error, IntoDiagnostic, TypeError},
};

use crate::FieldType;

/// Errors raised while binding a schema. Fatal for the codec being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
	#[error("column `{column}` has unsupported type {ty}")]
	UnsupportedType {
		column: String,
		ty: Type,
	},

	#[error("{names} column names but {types} column types")]
	CountMismatch {
		names: usize,
		types: usize,
	},

	#[error("duplicate column `{column}`")]
	DuplicateColumn {
		column: String,
	},

	#[error("column `{column}` has invalid type '{token}'")]
	InvalidTypeToken {
		column: String,
		token: String,
		cause: TypeError,
	},

	#[error("invalid codec configuration: {reason}")]
	InvalidConfig {
		reason: String,
	},
}

impl IntoDiagnostic for SchemaError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SchemaError::UnsupportedType {
				column,
				ty,
			} => Diagnostic {
				code: "SCHEMA_001".to_string(),
				message: format!("column `{}` has unsupported type {}", column, ty),
				column: None,
				label: Some("type has no fixed-width record field".to_string()),
				help: Some(
					"use boolean, int8, int16, int32, int64, float32, float64, char, varchar, string, date or timestamp"
						.to_string(),
				),
				notes: vec![
					"decimal, binary, array, map, struct, uniontype and void columns cannot be packed"
						.to_string(),
				],
				cause: None,
			}
			.with_column(column, ty),

			SchemaError::CountMismatch {
				names,
				types,
			} => Diagnostic {
				code: "SCHEMA_002".to_string(),
				message: format!("{} column names but {} column types", names, types),
				column: None,
				label: Some("column names and types must pair up".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			SchemaError::DuplicateColumn {
				column,
			} => Diagnostic {
				code: "SCHEMA_003".to_string(),
				message: format!("duplicate column `{}`", column),
				column: None,
				label: Some("column names must be unique".to_string()),
				help: Some("rename one of the columns".to_string()),
				notes: vec![],
				cause: None,
			},

			SchemaError::InvalidTypeToken {
				column,
				token,
				cause,
			} => Diagnostic {
				code: "SCHEMA_004".to_string(),
				message: format!("column `{}` has invalid type '{}'", column, token),
				column: None,
				label: Some("type token could not be read".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			}
			.with_cause(cause.into_diagnostic()),

			SchemaError::InvalidConfig {
				reason,
			} => Diagnostic {
				code: "SCHEMA_005".to_string(),
				message: format!("invalid codec configuration: {}", reason),
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SchemaError> for Error {
	fn from(err: SchemaError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Errors raised while encoding one row. Only that row is lost.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
	#[error("column `{column}` expects {expected}, got {actual}")]
	TypeMismatch {
		column: String,
		declared: Type,
		expected: FieldType,
		actual: &'static str,
	},

	#[error("row has {actual} values, schema has {expected} columns")]
	ArityMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("column `{column}` value {value} lies outside years 0000..=9999")]
	TemporalOutOfRange {
		column: String,
		declared: Type,
		value: String,
	},

	#[error("column `{column}` string of {length} bytes exceeds width {width}")]
	StringTooLong {
		column: String,
		declared: Type,
		width: usize,
		length: usize,
	},
}

impl IntoDiagnostic for EncodeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			EncodeError::TypeMismatch {
				column,
				declared,
				expected,
				actual,
			} => Diagnostic {
				code: "ENCODE_001".to_string(),
				message: format!("column `{}` expects {}, got {}", column, expected, actual),
				column: None,
				label: Some("value does not match the column type".to_string()),
				help: Some(format!("supply a {} value or undefined", expected)),
				notes: vec![],
				cause: None,
			}
			.with_column(column, declared),

			EncodeError::ArityMismatch {
				expected,
				actual,
			} => Diagnostic {
				code: "ENCODE_002".to_string(),
				message: format!("row has {} values, schema has {} columns", actual, expected),
				column: None,
				label: Some("row width does not match the schema".to_string()),
				help: Some("supply exactly one value per column, undefined for null".to_string()),
				notes: vec![],
				cause: None,
			},

			EncodeError::TemporalOutOfRange {
				column,
				declared,
				value,
			} => Diagnostic {
				code: "ENCODE_003".to_string(),
				message: format!("column `{}` value {} lies outside years 0000..=9999", column, value),
				column: None,
				label: Some("year does not fit the fixed-width text field".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			}
			.with_column(column, declared),

			EncodeError::StringTooLong {
				column,
				declared,
				width,
				length,
			} => Diagnostic {
				code: "ENCODE_004".to_string(),
				message: format!("column `{}` string of {} bytes exceeds width {}", column, length, width),
				column: None,
				label: Some("string does not fit the field".to_string()),
				help: Some("enable truncate_strings or raise string_width".to_string()),
				notes: vec![],
				cause: None,
			}
			.with_column(column, declared),
		}
	}
}

impl From<EncodeError> for Error {
	fn from(err: EncodeError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Errors raised while reading a record back into values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
	#[error("record has {actual} bytes, layout expects {expected}")]
	LengthMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("column `{column}` holds invalid boolean byte 0x{byte:02x}")]
	InvalidBoolean {
		column: String,
		declared: Type,
		byte: u8,
	},

	#[error("column `{column}` holds invalid {ty} text: {reason}")]
	InvalidText {
		column: String,
		declared: Type,
		ty: FieldType,
		reason: String,
	},
}

impl IntoDiagnostic for DecodeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			DecodeError::LengthMismatch {
				expected,
				actual,
			} => Diagnostic {
				code: "DECODE_001".to_string(),
				message: format!("record has {} bytes, layout expects {}", actual, expected),
				column: None,
				label: Some("record length does not match the layout".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			DecodeError::InvalidBoolean {
				column,
				declared,
				byte,
			} => Diagnostic {
				code: "DECODE_002".to_string(),
				message: format!("column `{}` holds invalid boolean byte 0x{:02x}", column, byte),
				column: None,
				label: Some("expected 'T', 'F' or the null byte".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			}
			.with_column(column, declared),

			DecodeError::InvalidText {
				column,
				declared,
				ty,
				reason,
			} => Diagnostic {
				code: "DECODE_003".to_string(),
				message: format!("column `{}` holds invalid {} text: {}", column, ty, reason),
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			}
			.with_column(column, declared),
		}
	}
}

impl From<DecodeError> for Error {
	fn from(err: DecodeError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Failure while handing a finished record to an output sink.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IoError {
	#[error("failed to write {size} byte record: {reason}")]
	Flush {
		size: usize,
		reason: String,
	},
}

impl IntoDiagnostic for IoError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			IoError::Flush {
				size,
				reason,
			} => Diagnostic {
				code: "IO_001".to_string(),
				message: format!("failed to write {} byte record: {}", size, reason),
				column: None,
				label: None,
				help: None,
				notes: vec!["the record was dropped, later records are unaffected".to_string()],
				cause: None,
			},
		}
	}
}

impl From<IoError> for Error {
	fn from(err: IoError) -> Self {
		Error(err.into_diagnostic())
	}
}
