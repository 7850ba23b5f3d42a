//! Fixed-format date and time-of-day handling.
//!
//! Dates are `YYYY-MM-DD` and times are 24-hour, zero-padded `HH:MM`. A value is
//! accepted only if it formats back to exactly the same string, so `25:00`,
//! `9:00` and `2025-2-15` are rejected instead of being wrapped or padded.

use crate::error::{Result, ScheduleError};
use chrono::{NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `ScheduleError::MalformedDate` if the string is not a valid date in
/// exactly that format.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == raw)
        .ok_or_else(|| ScheduleError::MalformedDate(raw.to_string()))
}

/// Parse an `HH:MM` time of day.
///
/// # Errors
/// Returns `ScheduleError::MalformedTime` if the string is not a valid 24-hour
/// time in exactly that format.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .ok()
        .filter(|time| format_time(*time) == raw)
        .ok_or_else(|| ScheduleError::MalformedTime(raw.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Serde adapter for `YYYY-MM-DD` dates.
pub mod ymd {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `HH:MM` times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(de::Error::custom)
    }
}
