// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
	time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::date::{Date, SECONDS_PER_DAY, digits};
use crate::error::TypeError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
/// Seconds range whose day number fits a [`Date`].
const MIN_SECONDS: i64 = i32::MIN as i64 * SECONDS_PER_DAY;
const MAX_SECONDS: i64 = (i32::MAX as i64 + 1) * SECONDS_PER_DAY - 1;

/// A date and time value with nanosecond precision, without time zone.
///
/// Stored as whole seconds since the Unix epoch plus the nanosecond
/// fraction of that second. The day of every value is a valid [`Date`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	seconds: i64,
	nanos: u32,
}

impl DateTime {
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, nanos: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || nanos >= NANOS_PER_SECOND {
			return None;
		}
		let date = Date::new(year, month, day)?;
		let seconds = date.to_days_since_epoch() as i64 * SECONDS_PER_DAY
			+ hour as i64 * 3600
			+ minute as i64 * 60
			+ second as i64;
		Some(Self {
			seconds,
			nanos,
		})
	}

	/// Returns `None` when the day lies outside the range of [`Date`].
	pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
		let seconds = millis.div_euclid(1000);
		if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
			return None;
		}
		Some(Self {
			seconds,
			nanos: millis.rem_euclid(1000) as u32 * NANOS_PER_MILLI,
		})
	}

	/// The current instant in UTC.
	pub fn now() -> Self {
		match SystemTime::now().duration_since(UNIX_EPOCH) {
			Ok(elapsed) => Self {
				seconds: (elapsed.as_secs() as i64).min(MAX_SECONDS),
				nanos: elapsed.subsec_nanos(),
			},
			Err(err) => {
				let before = err.duration();
				let mut seconds = -(before.as_secs() as i64);
				let mut nanos = before.subsec_nanos();
				if nanos > 0 {
					seconds -= 1;
					nanos = NANOS_PER_SECOND - nanos;
				}
				Self {
					seconds: seconds.max(MIN_SECONDS),
					nanos,
				}
			}
		}
	}

	pub fn to_parts(&self) -> (i64, u32) {
		(self.seconds, self.nanos)
	}

	pub fn timestamp_millis(&self) -> i64 {
		self.seconds * 1000 + (self.nanos / NANOS_PER_MILLI) as i64
	}

	pub fn date(&self) -> Date {
		let days = self.seconds.div_euclid(SECONDS_PER_DAY);
		debug_assert!(i32::try_from(days).is_ok());
		Date::from_days_since_epoch(i32::try_from(days).unwrap_or(if days < 0 {
			i32::MIN
		} else {
			i32::MAX
		}))
	}

	fn second_of_day(&self) -> u32 {
		self.seconds.rem_euclid(SECONDS_PER_DAY) as u32
	}

	pub fn hour(&self) -> u32 {
		self.second_of_day() / 3600
	}

	pub fn minute(&self) -> u32 {
		self.second_of_day() % 3600 / 60
	}

	pub fn second(&self) -> u32 {
		self.second_of_day() % 60
	}

	pub fn nanosecond(&self) -> u32 {
		self.nanos
	}

	pub fn millisecond(&self) -> u32 {
		self.nanos / NANOS_PER_MILLI
	}

	/// Parses `yyyy-MM-dd[T| ]HH:mm:ss[.fraction]`, where the fraction has
	/// one to nine digits.
	pub fn parse(text: &str) -> Result<Self, TypeError> {
		let invalid = |reason: &str| TypeError::InvalidTimestamp {
			text: text.to_string(),
			reason: reason.to_string(),
		};

		if text.len() < 19 || !text.is_char_boundary(10) {
			return Err(invalid("expected yyyy-MM-ddTHH:mm:ss"));
		}

		let date = Date::parse(&text[..10]).map_err(|err| match err {
			TypeError::InvalidDate {
				reason,
				..
			} => invalid(&reason),
			other => other,
		})?;

		let bytes = text.as_bytes();
		if !matches!(bytes[10], b'T' | b' ') || bytes[13] != b':' || bytes[16] != b':' {
			return Err(invalid("expected yyyy-MM-ddTHH:mm:ss"));
		}

		let hour = digits(&bytes[11..13]).ok_or_else(|| invalid("hour is not numeric"))?;
		let minute = digits(&bytes[14..16]).ok_or_else(|| invalid("minute is not numeric"))?;
		let second = digits(&bytes[17..19]).ok_or_else(|| invalid("second is not numeric"))?;

		let nanos = match &bytes[19..] {
			[] => 0,
			[b'.', fraction @ ..] if (1..=9).contains(&fraction.len()) => {
				let value = digits(fraction).ok_or_else(|| invalid("fraction is not numeric"))?;
				value * 10u32.pow(9 - fraction.len() as u32)
			}
			_ => return Err(invalid("fraction must be '.' followed by 1 to 9 digits")),
		};

		let (year, month, day) = date.ymd();
		Self::new(year, month, day, hour, minute, second, nanos).ok_or_else(|| invalid("time of day out of range"))
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}T{:02}:{:02}:{:02}.{:09}",
			self.date(),
			self.hour(),
			self.minute(),
			self.second(),
			self.nanos
		)
	}
}

impl FromStr for DateTime {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		DateTime::parse(s)
	}
}

impl Serialize for DateTime {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		DateTime::parse(&text).map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_components() {
		let dt = DateTime::new(2024, 12, 25, 12, 34, 56, 123_456_789).unwrap();
		assert_eq!(dt.date(), Date::new(2024, 12, 25).unwrap());
		assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 34, 56));
		assert_eq!(dt.nanosecond(), 123_456_789);
		assert_eq!(dt.millisecond(), 123);
	}

	#[test]
	fn test_before_epoch() {
		let dt = DateTime::new(1969, 12, 31, 23, 59, 59, 500_000_000).unwrap();
		assert_eq!(dt.to_parts(), (-1, 500_000_000));
		assert_eq!(dt.date(), Date::new(1969, 12, 31).unwrap());
		assert_eq!(dt.hour(), 23);
		assert_eq!(dt.timestamp_millis(), -500);
	}

	#[test]
	fn test_invalid_time_of_day() {
		assert!(DateTime::new(2024, 1, 1, 24, 0, 0, 0).is_none());
		assert!(DateTime::new(2024, 1, 1, 0, 60, 0, 0).is_none());
		assert!(DateTime::new(2024, 1, 1, 0, 0, 60, 0).is_none());
		assert!(DateTime::new(2024, 1, 1, 0, 0, 0, 1_000_000_000).is_none());
	}

	#[test]
	fn test_from_timestamp_millis() {
		let dt = DateTime::from_timestamp_millis(-1).unwrap();
		assert_eq!(dt.to_parts(), (-1, 999_000_000));
		assert_eq!(dt.timestamp_millis(), -1);

		let dt = DateTime::from_timestamp_millis(1_704_412_800_123).unwrap();
		assert_eq!(dt.to_string(), "2024-01-05T00:00:00.123000000");
	}

	#[test]
	fn test_from_timestamp_millis_outside_date_range() {
		let last_day = i32::MAX as i64 * 86_400_000;
		let dt = DateTime::from_timestamp_millis(last_day + 86_399_999).unwrap();
		assert_eq!(dt.date(), Date::from_days_since_epoch(i32::MAX));

		assert!(DateTime::from_timestamp_millis(last_day + 86_400_000).is_none());
		assert!(DateTime::from_timestamp_millis(((1i64 << 32) + 19_727) * 86_400_000).is_none());
		assert!(DateTime::from_timestamp_millis(i32::MIN as i64 * 86_400_000 - 1).is_none());
	}

	mod parse {
		use super::*;

		#[test]
		fn test_without_fraction() {
			let dt = DateTime::parse("2024-01-05T10:20:30").unwrap();
			assert_eq!(dt, DateTime::new(2024, 1, 5, 10, 20, 30, 0).unwrap());
		}

		#[test]
		fn test_space_separator() {
			let dt = DateTime::parse("2024-01-05 10:20:30.5").unwrap();
			assert_eq!(dt.nanosecond(), 500_000_000);
		}

		#[test]
		fn test_millis() {
			let dt = DateTime::parse("2024-01-05T10:20:30.007").unwrap();
			assert_eq!(dt.millisecond(), 7);
		}

		#[test]
		fn test_nanos() {
			let dt = DateTime::parse("2024-01-05T10:20:30.000000001").unwrap();
			assert_eq!(dt.nanosecond(), 1);
		}

		#[test]
		fn test_invalid() {
			assert!(DateTime::parse("2024-01-05").is_err());
			assert!(DateTime::parse("2024-01-05X10:20:30").is_err());
			assert!(DateTime::parse("2024-01-05T25:20:30").is_err());
			assert!(DateTime::parse("2024-01-05T10:20:30.").is_err());
			assert!(DateTime::parse("2024-01-05T10:20:30.1234567890").is_err());
			assert!(DateTime::parse("2024-02-30T10:20:30").is_err());
		}

		#[test]
		fn test_error_kind() {
			let err = DateTime::parse("2024-02-30T10:20:30").unwrap_err();
			assert!(matches!(err, TypeError::InvalidTimestamp { .. }));
		}
	}

	#[test]
	fn test_display_roundtrip() {
		let dt = DateTime::new(2001, 2, 3, 4, 5, 6, 7).unwrap();
		assert_eq!(dt.to_string(), "2001-02-03T04:05:06.000000007");
		assert_eq!(DateTime::parse(&dt.to_string()).unwrap(), dt);
	}
}
