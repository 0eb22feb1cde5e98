// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub mod error;
pub mod value;

pub use error::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic, TypeError};
pub use value::{Date, DateTime, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
