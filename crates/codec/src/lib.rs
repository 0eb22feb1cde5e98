// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Packs rows of typed column values into fixed-width binary records laid out
//! the way a FITS `BINTABLE` (or a NumPy record array) expects them, and reads
//! such records back.
//!
//! A [`Codec`] is bound to one [`ColumnSchema`]. Binding maps every column to a
//! [`FieldType`], builds the reusable [`ModelRow`] and derives the
//! [`RecordLayout`]. Each call to [`Codec::encode`] overwrites the model in
//! place and flattens it into one big-endian record.

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

mod codec;
mod config;
mod decode;
mod encode;
pub mod error;
mod field;
mod layout;
mod model;
mod schema;
mod text;
mod writer;

pub use codec::Codec;
pub use config::CodecConfig;
pub use decode::RecordDecoder;
pub use encode::RowEncoder;
pub use field::{FieldType, TypeMapper};
pub use layout::{Field, RecordLayout, RecordLayoutInner};
pub use model::{ModelRow, ModelRowBuilder, Slot};
pub use recarray_type::{Date, DateTime, Error, Result, Type, Value};
pub use schema::{Column, ColumnSchema};
pub use writer::RecordWriter;
