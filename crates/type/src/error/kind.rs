// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic};
use crate::value::Type;

/// Errors raised while reading type tokens and value text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("invalid type token '{token}': {reason}")]
	InvalidTypeToken {
		token: String,
		reason: String,
	},

	#[error("invalid boolean '{text}'")]
	InvalidBoolean {
		text: String,
	},

	#[error("invalid {ty} number '{text}'")]
	InvalidNumber {
		text: String,
		ty: Type,
	},

	#[error("number '{text}' is out of range for {ty}")]
	NumberOutOfRange {
		text: String,
		ty: Type,
	},

	#[error("invalid date '{text}': {reason}")]
	InvalidDate {
		text: String,
		reason: String,
	},

	#[error("invalid timestamp '{text}': {reason}")]
	InvalidTimestamp {
		text: String,
		reason: String,
	},

	#[error("values of type {ty} cannot be parsed")]
	UnsupportedValueType {
		ty: Type,
	},
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::InvalidTypeToken {
				token,
				reason,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message: format!("invalid type token '{}': {}", token, reason),
				column: None,
				label: Some("unrecognised column type".to_string()),
				help: Some("use one of boolean, int8, int16, int32, int64, float32, float64, char(n), varchar(n), string, date or timestamp".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidBoolean {
				text,
			} => Diagnostic {
				code: "VALUE_001".to_string(),
				message: format!("invalid boolean '{}'", text),
				column: None,
				label: Some("expected a boolean".to_string()),
				help: Some("use true/false, t/f or 1/0".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidNumber {
				text,
				ty,
			} => Diagnostic {
				code: "VALUE_002".to_string(),
				message: format!("invalid {} number '{}'", ty, text),
				column: None,
				label: Some("not a number".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::NumberOutOfRange {
				text,
				ty,
			} => Diagnostic {
				code: "VALUE_003".to_string(),
				message: format!("number '{}' is out of range for {}", text, ty),
				column: None,
				label: Some("value exceeds type bounds".to_string()),
				help: Some("use a wider integer type for this column".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidDate {
				text,
				reason,
			} => Diagnostic {
				code: "VALUE_004".to_string(),
				message: format!("invalid date '{}': {}", text, reason),
				column: None,
				label: Some("expected yyyy-MM-dd".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::InvalidTimestamp {
				text,
				reason,
			} => Diagnostic {
				code: "VALUE_005".to_string(),
				message: format!("invalid timestamp '{}': {}", text, reason),
				column: None,
				label: Some("expected yyyy-MM-ddTHH:mm:ss[.SSS]".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			TypeError::UnsupportedValueType {
				ty,
			} => Diagnostic {
				code: "VALUE_006".to_string(),
				message: format!("values of type {} cannot be parsed", ty),
				column: None,
				label: None,
				help: Some("only primitive column types carry values".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}
