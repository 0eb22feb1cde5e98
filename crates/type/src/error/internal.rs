// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// Creates an internal error diagnostic with source location and context
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let location = format!("{}:{}:{}", file, line, column);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error: {}", reason),
		column: None,
		label: Some(format!("Internal invariant violated at {}", location)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Version: {}\nModule: {}",
			env!("CARGO_PKG_VERSION"),
			module_path
		)),
		notes: vec![format!("Error occurred in function: {}", function)],
		cause: None,
	}
}

/// Creates an internal error diagnostic capturing the call site
#[macro_export]
macro_rules! internal_error {
    ($reason:expr) => {
        $crate::error::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::internal_error!(format!($fmt, $($arg)*))
    };
}

/// Returns early with an internal error capturing the call site
#[macro_export]
macro_rules! return_internal_error {
    ($($arg:tt)*) => {
        return Err($crate::error::Error($crate::internal_error!($($arg)*)))
    };
}
