//! The calendar store: one source, one current snapshot, all-or-nothing refresh.
//!
//! The snapshot lives behind an `Arc`. A refresh fetches a complete new
//! calendar first and then replaces the `Arc` in a single assignment, so a
//! reader holding [`Scheduler::snapshot`] never sees Days from one load mixed
//! with Timeslots from another. A failed refresh leaves the prior snapshot in
//! place.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::calendar::Calendar;
use crate::error::{Result, ScheduleError};
use crate::model::{Day, Interval, Slot};
use crate::source::CalendarSource;

#[derive(Debug)]
pub struct Scheduler<S> {
    source: S,
    calendar: Arc<Calendar>,
    generation: u64,
}

impl<S: CalendarSource> Scheduler<S> {
    /// Fetch the calendar once from `source`.
    ///
    /// # Errors
    /// Propagates `DataUnavailable` or `InvalidFormat` from the source.
    pub fn load(source: S) -> Result<Self> {
        let calendar = source.fetch()?;
        info!(
            source = %source.describe(),
            days = calendar.days().len(),
            timeslots = calendar.timeslots().len(),
            "calendar loaded"
        );
        if calendar.is_empty() {
            warn!(source = %source.describe(), "calendar has no days, every query will come back empty");
        }
        Ok(Self {
            source,
            calendar: Arc::new(calendar),
            generation: 1,
        })
    }

    /// Re-fetch from the source and swap in the new calendar.
    ///
    /// # Errors
    /// Returns `ScheduleError::RefreshFailed` wrapping the source error; the
    /// previously loaded calendar is kept.
    pub fn refresh(&mut self) -> Result<()> {
        match self.source.fetch() {
            Ok(calendar) => {
                info!(
                    source = %self.source.describe(),
                    days = calendar.days().len(),
                    timeslots = calendar.timeslots().len(),
                    "calendar refreshed"
                );
                self.calendar = Arc::new(calendar);
                self.generation += 1;
                Ok(())
            }
            Err(err) => {
                warn!(source = %self.source.describe(), error = %err, "refresh failed, keeping previous calendar");
                Err(ScheduleError::RefreshFailed(Box::new(err)))
            }
        }
    }

    pub fn snapshot(&self) -> Arc<Calendar> {
        Arc::clone(&self.calendar)
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Number of successful loads, counting the initial one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The source this scheduler loads and refreshes from.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn find_day(&self, date: NaiveDate) -> Option<&Day> {
        self.calendar.find_day(date)
    }

    pub fn busy_intervals(&self, date: NaiveDate) -> Vec<Interval> {
        self.calendar.busy_intervals(date)
    }

    pub fn free_intervals(&self, date: NaiveDate) -> Vec<Interval> {
        self.calendar.free_intervals(date)
    }

    pub fn is_available(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
        self.calendar.is_available(date, start, end)
    }

    pub fn find_slot(&self, duration_minutes: i64) -> Result<Option<Slot>> {
        self.calendar.find_slot(duration_minutes)
    }
}
