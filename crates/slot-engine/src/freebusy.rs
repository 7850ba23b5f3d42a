//! Compute busy and free intervals for a single day.
//!
//! Busy intervals are the day's timeslots sorted by start. Free intervals are
//! the gaps left in the day's window after a single left-to-right sweep over
//! the busy list.

use chrono::NaiveDateTime;

use crate::model::{Day, Interval, Timeslot};

/// Collect the timeslots that belong to `day`, sorted by start time.
///
/// Overlapping timeslots and timeslots reaching outside the day's window are
/// returned as-is; [`free_intervals`] deals with them.
pub fn busy_intervals(day: &Day, timeslots: &[Timeslot]) -> Vec<Interval> {
    let mut busy: Vec<Interval> = timeslots
        .iter()
        .filter(|slot| slot.day_id == day.id)
        .map(Timeslot::interval)
        .collect();

    // Stable, so equal starts keep their source order.
    busy.sort_by_key(|interval| interval.start);
    busy
}

/// Compute the free intervals of `day` given its busy intervals sorted by start.
///
/// The cursor only ever moves forward (`max(cursor, busy.end)`), so overlapping
/// and nested busy intervals merge instead of opening spurious gaps. A busy
/// interval starting exactly at the cursor opens no gap. Busy bounds are
/// clamped to the day window, so the result never leaves `[day.start, day.end]`.
pub fn free_intervals(day: &Day, busy: &[Interval]) -> Vec<Interval> {
    if busy.is_empty() {
        return vec![day.window()];
    }

    let day_start = day.at(day.start);
    let day_end = day.at(day.end);

    let mut gaps: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::new();
    let mut cursor = day_start;

    for interval in busy {
        let busy_start = day.at(interval.start).max(day_start).min(day_end);
        let busy_end = day.at(interval.end).max(day_start).min(day_end);

        if busy_start > cursor {
            gaps.push((cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy interval.
    if cursor < day_end {
        gaps.push((cursor, day_end));
    }

    gaps.into_iter()
        .map(|(start, end)| Interval::new(start.time(), end.time()))
        .collect()
}
