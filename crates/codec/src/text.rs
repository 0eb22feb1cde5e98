// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fixed-width text fields: NUL padding and the ISO-8601 renderings of
//! dates and timestamps.

use recarray_type::{Date, DateTime};

use crate::FieldType;

/// Whether a year fits the four digit year of a date field.
pub(crate) fn renderable(year: i32) -> bool {
	(0..=9999).contains(&year)
}

/// Longest prefix of `text` that fits `width` bytes without splitting a
/// character.
pub(crate) fn truncate_utf8(text: &str, width: usize) -> &str {
	if text.len() <= width {
		return text;
	}
	let mut end = width;
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	&text[..end]
}

/// Copies `src` to the front of `dst` and NUL-fills the rest.
pub(crate) fn fill(dst: &mut [u8], src: &[u8]) {
	debug_assert!(src.len() <= dst.len());
	let (head, tail) = dst.split_at_mut(src.len());
	head.copy_from_slice(src);
	tail.fill(0);
}

fn put_digits(dst: &mut [u8], mut value: u32) {
	for byte in dst.iter_mut().rev() {
		*byte = b'0' + (value % 10) as u8;
		value /= 10;
	}
}

/// Writes `yyyy-MM-dd`.
pub(crate) fn write_date(dst: &mut [u8], date: Date) {
	debug_assert_eq!(dst.len(), FieldType::DATE_WIDTH);
	let (year, month, day) = date.ymd();
	put_digits(&mut dst[0..4], year.unsigned_abs());
	dst[4] = b'-';
	put_digits(&mut dst[5..7], month);
	dst[7] = b'-';
	put_digits(&mut dst[8..10], day);
}

/// Writes `yyyy-MM-ddTHH:mm:ss.SSS`. Sub-millisecond digits are dropped.
pub(crate) fn write_timestamp(dst: &mut [u8], value: DateTime) {
	debug_assert_eq!(dst.len(), FieldType::TIMESTAMP_WIDTH);
	write_date(&mut dst[0..10], value.date());
	dst[10] = b'T';
	put_digits(&mut dst[11..13], value.hour());
	dst[13] = b':';
	put_digits(&mut dst[14..16], value.minute());
	dst[16] = b':';
	put_digits(&mut dst[17..19], value.second());
	dst[19] = b'.';
	put_digits(&mut dst[20..23], value.millisecond());
}

/// `bytes` without its trailing NUL padding.
pub(crate) fn trim_padding(bytes: &[u8]) -> &[u8] {
	let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
	&bytes[..end]
}

pub(crate) fn is_null(bytes: &[u8]) -> bool {
	bytes.iter().all(|&b| b == 0)
}
