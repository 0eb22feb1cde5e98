// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use recarray_type::{Date, DateTime, Error, Result, internal_error, return_internal_error};

use crate::{RecordLayout, text};

mod builder;
mod slot;

pub use builder::ModelRowBuilder;
pub use slot::Slot;

/// The reusable in-memory record of a bound schema: one typed slot per
/// column, overwritten in place for every encoded row.
#[derive(Debug, Clone)]
pub struct ModelRow {
	layout: RecordLayout,
	slots: Vec<Slot>,
}

macro_rules! impl_set {
	($($name:ident($ty:ty) => $variant:ident),* $(,)?) => {
		$(
			pub fn $name(&mut self, index: usize, value: $ty) -> Result<()> {
				match self.slot_mut(index)? {
					Slot::$variant(slot) => {
						*slot = value;
						Ok(())
					}
					other => Err(mismatch(index, stringify!($variant), other)),
				}
			}
		)*
	};
}

impl ModelRow {
	pub(crate) fn new(layout: RecordLayout, slots: Vec<Slot>) -> Self {
		debug_assert_eq!(layout.len(), slots.len());
		Self {
			layout,
			slots,
		}
	}

	pub fn layout(&self) -> &RecordLayout {
		&self.layout
	}

	pub fn slots(&self) -> &[Slot] {
		&self.slots
	}

	pub fn slot(&self, index: usize) -> Option<&Slot> {
		self.slots.get(index)
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Sum of all slot widths.
	pub fn record_size(&self) -> usize {
		self.layout.record_size()
	}

	fn slot_mut(&mut self, index: usize) -> Result<&mut Slot> {
		let len = self.slots.len();
		match self.slots.get_mut(index) {
			Some(slot) => Ok(slot),
			None => return_internal_error!("slot {} out of range for {} slots", index, len),
		}
	}

	impl_set! {
		set_i8(i8) => Int1,
		set_i16(i16) => Int2,
		set_i32(i32) => Int4,
		set_i64(i64) => Int8,
		set_f32(f32) => Float4,
		set_f64(f64) => Float8,
	}

	pub fn set_bool(&mut self, index: usize, value: bool) -> Result<()> {
		match self.slot_mut(index)? {
			Slot::Logical(slot) => {
				*slot = if value {
					b'T'
				} else {
					b'F'
				};
				Ok(())
			}
			other => Err(mismatch(index, "Logical", other)),
		}
	}

	/// Copies `bytes` into a text slot and NUL-pads the remainder. The
	/// bytes must already fit the slot.
	pub fn set_text(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
		let slot = self.text_mut(index)?;
		if bytes.len() > slot.len() {
			return_internal_error!("{} bytes do not fit text slot {} of width {}", bytes.len(), index, slot.len());
		}
		text::fill(slot, bytes);
		Ok(())
	}

	pub fn set_date(&mut self, index: usize, value: Date) -> Result<()> {
		text::write_date(self.text_mut(index)?, value);
		Ok(())
	}

	pub fn set_datetime(&mut self, index: usize, value: DateTime) -> Result<()> {
		text::write_timestamp(self.text_mut(index)?, value);
		Ok(())
	}

	/// Writes the null encoding of the slot: the minimum value for
	/// integers, NaN for floats, all NUL for text and `boolean_null` for
	/// booleans.
	pub fn set_undefined(&mut self, index: usize, boolean_null: u8) -> Result<()> {
		match self.slot_mut(index)? {
			Slot::Logical(slot) => *slot = boolean_null,
			Slot::Int1(slot) => *slot = i8::MIN,
			Slot::Int2(slot) => *slot = i16::MIN,
			Slot::Int4(slot) => *slot = i32::MIN,
			Slot::Int8(slot) => *slot = i64::MIN,
			Slot::Float4(slot) => *slot = f32::NAN,
			Slot::Float8(slot) => *slot = f64::NAN,
			Slot::Text(bytes) => bytes.fill(0),
		}
		Ok(())
	}

	fn text_mut(&mut self, index: usize) -> Result<&mut [u8]> {
		let Some(width) = self.layout.field(index).map(|field| field.size) else {
			return_internal_error!("field {} out of range", index);
		};
		match self.slot_mut(index)? {
			Slot::Text(bytes) => {
				if bytes.len() != width {
					return_internal_error!(
						"text slot {} has width {}, layout expects {}",
						index,
						bytes.len(),
						width
					);
				}
				Ok(&mut bytes[..])
			}
			other => Err(mismatch(index, "Text", other)),
		}
	}
}

fn mismatch(index: usize, expected: &str, slot: &Slot) -> Error {
	Error(internal_error!("slot {} holds {}, not {}", index, slot.kind(), expected))
}
