//! Error types for slot-engine operations.
//!
//! "Not found" is never an error here: an unknown date yields empty results or
//! `false`. Only malformed input and source failures are reported.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The calendar source could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// The payload decoded, but `days`/`timeslots` are missing or misshapen.
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// A refresh failed; the previously loaded calendar is still in place.
    #[error("Failed to refresh data: {0}")]
    RefreshFailed(#[source] Box<ScheduleError>),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed time '{0}': expected HH:MM")]
    MalformedTime(String),

    #[error("Malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
