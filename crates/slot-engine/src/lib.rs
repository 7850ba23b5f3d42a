//! # slot-engine
//!
//! Busy/free interval computation over a calendar of fixed daily working
//! windows and reserved timeslots.
//!
//! Given Days (a date plus a working window) and Timeslots (reserved intervals
//! tied to a Day), the engine answers which intervals on a date are busy,
//! which are free, whether a requested interval fits, and where the first
//! block of a given duration can go.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{parse_date, parse_time, Calendar};
//!
//! let calendar = Calendar::from_json(r#"{
//!     "days": [{"id": 1, "date": "2025-02-15", "start": "09:00", "end": "21:00"}],
//!     "timeslots": [
//!         {"id": 1, "day_id": 1, "start": "09:00", "end": "12:00"},
//!         {"id": 2, "day_id": 1, "start": "17:30", "end": "20:00"}
//!     ]
//! }"#).unwrap();
//!
//! let date = parse_date("2025-02-15").unwrap();
//! let free: Vec<String> = calendar.free_intervals(date).iter().map(|i| i.to_string()).collect();
//! assert_eq!(free, ["12:00-17:30", "20:00-21:00"]);
//!
//! assert!(calendar.is_available(date, parse_time("12:00").unwrap(), parse_time("13:00").unwrap()));
//! assert_eq!(calendar.find_slot(60).unwrap().unwrap().to_string(), "2025-02-15 12:00-13:00");
//! ```
//!
//! ## Modules
//!
//! - [`time`] — strict `YYYY-MM-DD` / `HH:MM` parsing and formatting
//! - [`model`] — `Day`, `Timeslot`, `Interval`, `Slot`
//! - [`freebusy`] — busy extraction and the free-interval sweep for one day
//! - [`availability`] — availability check and first-fit duration search
//! - [`calendar`] — immutable snapshot answering the queries
//! - [`source`] — HTTP/file sources and payload validation
//! - [`store`] — `Scheduler`: snapshot holder with atomic refresh
//! - [`error`] — Error types

pub mod availability;
pub mod calendar;
pub mod error;
pub mod freebusy;
pub mod model;
pub mod source;
pub mod store;
pub mod time;

pub use calendar::Calendar;
pub use error::ScheduleError;
pub use model::{Day, Interval, RecordId, Slot, Timeslot};
pub use source::{parse_payload, CalendarSource, FileSource, HttpSource};
pub use store::Scheduler;
pub use time::{parse_date, parse_time};
