// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
	time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::TypeError;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar date (year, month, day) without time information.
///
/// Internally stored as days since the Unix epoch (1970-01-01); negative
/// values are dates before 1970.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	days_since_epoch: i32,
}

impl Date {
	#[inline]
	pub(crate) fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	// Howard Hinnant's days_from_civil, with March as the first month of the year
	fn ymd_to_days(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let y = if month <= 2 {
			year as i64 - 1
		} else {
			year as i64
		};
		let m = if month <= 2 {
			month as i64 + 9
		} else {
			month as i64 - 3
		};

		let era = y.div_euclid(400);
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i64 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
		i32::try_from(era * 146_097 + doe - 719_468).ok()
	}

	// civil_from_days
	fn days_to_ymd(days: i32) -> (i32, u32, u32) {
		let z = days as i64 + 719_468;
		let era = z.div_euclid(146_097);
		let doe = z - era * 146_097;
		let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
		let month = (if mp < 10 {
			mp + 3
		} else {
			mp - 9
		}) as u32;
		let year = yoe + era * 400 + i64::from(month <= 2);
		let year = year as i32;

		(year, month, day)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	/// Today's date in UTC.
	pub fn today() -> Self {
		let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
			Ok(elapsed) => elapsed.as_secs() as i64,
			Err(err) => -(err.duration().as_secs() as i64),
		};
		Self {
			days_since_epoch: seconds.div_euclid(SECONDS_PER_DAY) as i32,
		}
	}

	pub fn from_days_since_epoch(days: i32) -> Self {
		Self {
			days_since_epoch: days,
		}
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn ymd(&self) -> (i32, u32, u32) {
		Self::days_to_ymd(self.days_since_epoch)
	}

	pub fn year(&self) -> i32 {
		self.ymd().0
	}

	pub fn month(&self) -> u32 {
		self.ymd().1
	}

	pub fn day(&self) -> u32 {
		self.ymd().2
	}

	/// Parses the ISO-8601 calendar form `yyyy-MM-dd`.
	pub fn parse(text: &str) -> Result<Self, TypeError> {
		let invalid = |reason: &str| TypeError::InvalidDate {
			text: text.to_string(),
			reason: reason.to_string(),
		};

		let bytes = text.as_bytes();
		if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
			return Err(invalid("expected yyyy-MM-dd"));
		}

		let year = digits(&bytes[0..4]).ok_or_else(|| invalid("year is not numeric"))?;
		let month = digits(&bytes[5..7]).ok_or_else(|| invalid("month is not numeric"))?;
		let day = digits(&bytes[8..10]).ok_or_else(|| invalid("day is not numeric"))?;

		Self::new(year as i32, month, day).ok_or_else(|| invalid("no such calendar day"))
	}
}

/// Reads a run of ASCII digits as an unsigned number.
pub(crate) fn digits(bytes: &[u8]) -> Option<u32> {
	if bytes.is_empty() {
		return None;
	}
	bytes.iter().try_fold(0u32, |acc, &b| {
		if b.is_ascii_digit() {
			acc.checked_mul(10)?.checked_add((b - b'0') as u32)
		} else {
			None
		}
	})
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = self.ymd();
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl FromStr for Date {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Date::parse(s)
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		Date::parse(&text).map_err(de::Error::custom)
	}
}
