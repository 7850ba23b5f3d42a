//! An immutable snapshot of the Days and Timeslots collections.
//!
//! Every query recomputes from the snapshot; nothing is cached between calls.

use chrono::{NaiveDate, NaiveTime};

use crate::availability;
use crate::error::Result;
use crate::freebusy;
use crate::model::{Day, Interval, Slot, Timeslot};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calendar {
    days: Vec<Day>,
    timeslots: Vec<Timeslot>,
}

impl Calendar {
    pub fn new(days: Vec<Day>, timeslots: Vec<Timeslot>) -> Self {
        Self { days, timeslots }
    }

    /// Decode and validate a `{"days": [...], "timeslots": [...]}` payload.
    ///
    /// See [`crate::source::parse_payload`].
    pub fn from_json(body: &str) -> Result<Self> {
        crate::source::parse_payload(body)
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    /// True when the calendar has no days, whatever its timeslots.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending date order.
    pub fn days_by_date(&self) -> Vec<&Day> {
        let mut days: Vec<&Day> = self.days.iter().collect();
        days.sort_by_key(|day| day.date);
        days
    }

    /// Find the day for `date`. With duplicate dates the first one wins.
    pub fn find_day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Busy intervals for `date`, sorted by start. Empty for an unknown date.
    pub fn busy_intervals(&self, date: NaiveDate) -> Vec<Interval> {
        match self.find_day(date) {
            Some(day) => freebusy::busy_intervals(day, &self.timeslots),
            None => Vec::new(),
        }
    }

    /// Free intervals for `date`, sorted and disjoint. Empty for an unknown date.
    pub fn free_intervals(&self, date: NaiveDate) -> Vec<Interval> {
        match self.find_day(date) {
            Some(day) => self.free_intervals_of(day),
            None => Vec::new(),
        }
    }

    pub(crate) fn free_intervals_of(&self, day: &Day) -> Vec<Interval> {
        let busy = freebusy::busy_intervals(day, &self.timeslots);
        freebusy::free_intervals(day, &busy)
    }

    /// See [`availability::is_available`].
    pub fn is_available(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
        availability::is_available(self, date, start, end)
    }

    /// See [`availability::find_slot`].
    pub fn find_slot(&self, duration_minutes: i64) -> Result<Option<Slot>> {
        availability::find_slot(self, duration_minutes)
    }
}
