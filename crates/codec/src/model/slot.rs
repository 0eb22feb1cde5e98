// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// One typed, single-element cell of the model row.
///
/// The variant and, for text, the byte length are fixed when the model is
/// built; encoding only overwrites the contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
	/// `'T'`, `'F'` or the configured null byte
	Logical(u8),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Float4(f32),
	Float8(f64),
	/// NUL-padded fixed-width text
	Text(Box<[u8]>),
}

impl Slot {
	pub fn width(&self) -> usize {
		match self {
			Slot::Logical(_) | Slot::Int1(_) => 1,
			Slot::Int2(_) => 2,
			Slot::Int4(_) | Slot::Float4(_) => 4,
			Slot::Int8(_) | Slot::Float8(_) => 8,
			Slot::Text(bytes) => bytes.len(),
		}
	}

	/// Appends the big-endian representation of the slot.
	pub fn write_be(&self, out: &mut Vec<u8>) {
		match self {
			Slot::Logical(byte) => out.push(*byte),
			Slot::Int1(v) => out.extend_from_slice(&v.to_be_bytes()),
			Slot::Int2(v) => out.extend_from_slice(&v.to_be_bytes()),
			Slot::Int4(v) => out.extend_from_slice(&v.to_be_bytes()),
			Slot::Int8(v) => out.extend_from_slice(&v.to_be_bytes()),
			Slot::Float4(v) => out.extend_from_slice(&v.to_be_bytes()),
			Slot::Float8(v) => out.extend_from_slice(&v.to_be_bytes()),
			Slot::Text(bytes) => out.extend_from_slice(bytes),
		}
	}

	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Slot::Logical(_) => "logical",
			Slot::Int1(_) => "int8",
			Slot::Int2(_) => "int16",
			Slot::Int4(_) => "int32",
			Slot::Int8(_) => "int64",
			Slot::Float4(_) => "float32",
			Slot::Float8(_) => "float64",
			Slot::Text(_) => "text",
		}
	}
}
