//! Availability checks and first-fit search over a calendar snapshot.

use chrono::{NaiveDate, NaiveTime};

use crate::calendar::Calendar;
use crate::error::{Result, ScheduleError};
use crate::model::{Interval, Slot};

/// Whether `[start, end)` on `date` fits entirely inside one free interval.
///
/// Returns `false` rather than an error when `start >= end`, when `date` has no
/// day, or when the request reaches outside the day's window. Containment is
/// inclusive at both ends, so a request equal to a free interval is available,
/// but a request spanning two free intervals is not, even if the busy interval
/// between them has zero length.
pub fn is_available(calendar: &Calendar, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
    if start >= end {
        return false;
    }

    let Some(day) = calendar.find_day(date) else {
        return false;
    };

    let requested = Interval::new(start, end);
    if !day.window().contains(&requested) {
        return false;
    }

    calendar
        .free_intervals_of(day)
        .iter()
        .any(|free| free.contains(&requested))
}

/// Find the earliest block of `duration_minutes` across all days.
///
/// Days are visited in ascending date order and free intervals in ascending
/// start order. The returned slot starts where the first long-enough free
/// interval starts and lasts exactly `duration_minutes`.
///
/// # Errors
/// Returns `ScheduleError::InvalidArgument` if `duration_minutes <= 0`.
pub fn find_slot(calendar: &Calendar, duration_minutes: i64) -> Result<Option<Slot>> {
    if duration_minutes <= 0 {
        return Err(ScheduleError::InvalidArgument(format!(
            "duration must be positive, got {duration_minutes} minutes"
        )));
    }

    for day in calendar.days_by_date() {
        let found = calendar
            .free_intervals_of(day)
            .into_iter()
            .find(|free| free.duration_minutes() >= duration_minutes);

        if let Some(free) = found {
            return Ok(Some(Slot::left_aligned(day.date, &free, duration_minutes)));
        }
    }

    Ok(None)
}
