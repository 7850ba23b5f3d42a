//! Where calendars come from.
//!
//! A [`CalendarSource`] produces a fully validated [`Calendar`]. Transport
//! problems surface as `DataUnavailable`; anything wrong with the payload
//! surfaces as `InvalidFormat` before a single record reaches the engine.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::calendar::Calendar;
use crate::error::{Result, ScheduleError};
use crate::model::{Day, Timeslot};
use crate::time::format_date;

/// Upper bound on a single fetch when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce a calendar snapshot on demand.
pub trait CalendarSource {
    fn fetch(&self) -> Result<Calendar>;

    /// Human-readable origin, used in log output.
    fn describe(&self) -> String {
        "custom source".to_string()
    }
}

impl<F> CalendarSource for F
where
    F: Fn() -> Result<Calendar>,
{
    fn fetch(&self) -> Result<Calendar> {
        self()
    }
}

/// Fetches the payload with a blocking HTTP GET.
#[derive(Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// `timeout` bounds the whole request: connect, send and read.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSource")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CalendarSource for HttpSource {
    fn fetch(&self) -> Result<Calendar> {
        debug!(url = %self.url, timeout = ?self.timeout, "fetching calendar");

        let response = self.agent.get(&self.url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ScheduleError::DataUnavailable(format!(
                "{} responded with status {code}",
                self.url
            )),
            ureq::Error::Transport(transport) => {
                ScheduleError::DataUnavailable(format!("failed to reach {}: {transport}", self.url))
            }
        })?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ScheduleError::DataUnavailable(format!(
                "{} responded with status {status}",
                self.url
            )));
        }

        let body = response.into_string().map_err(|err| {
            ScheduleError::DataUnavailable(format!("failed to read response from {}: {err}", self.url))
        })?;

        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the payload from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CalendarSource for FileSource {
    fn fetch(&self) -> Result<Calendar> {
        debug!(path = %self.path.display(), "reading calendar");
        let body = std::fs::read_to_string(&self.path).map_err(|err| {
            ScheduleError::DataUnavailable(format!("failed to read {}: {err}", self.path.display()))
        })?;
        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decode a `{"days": [...], "timeslots": [...]}` payload into a calendar.
///
/// # Errors
/// Returns `ScheduleError::InvalidFormat` if the body is not JSON, if either
/// field is missing or not a list, or if a record is incomplete, carries a
/// malformed date/time, or has `start >= end`.
pub fn parse_payload(body: &str) -> Result<Calendar> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| ScheduleError::InvalidFormat(format!("payload is not valid JSON: {err}")))?;

    let (Some(Value::Array(raw_days)), Some(Value::Array(raw_slots))) =
        (value.get("days"), value.get("timeslots"))
    else {
        return Err(ScheduleError::InvalidFormat(
            "'days' and 'timeslots' must be lists".to_string(),
        ));
    };

    let days: Vec<Day> = decode_records(raw_days, "day")?;
    let timeslots: Vec<Timeslot> = decode_records(raw_slots, "timeslot")?;

    if let Some(day) = days.iter().find(|day| day.start >= day.end) {
        return Err(ScheduleError::InvalidFormat(format!(
            "day {} ({}) must start before it ends",
            day.id,
            format_date(day.date)
        )));
    }
    if let Some(slot) = timeslots.iter().find(|slot| slot.start >= slot.end) {
        return Err(ScheduleError::InvalidFormat(format!(
            "timeslot {} must start before it ends",
            slot.id
        )));
    }

    Ok(Calendar::new(days, timeslots))
}

fn decode_records<T: DeserializeOwned>(raw: &[Value], kind: &str) -> Result<Vec<T>> {
    raw.iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record.clone()).map_err(|err| {
                ScheduleError::InvalidFormat(format!("{kind} at index {index}: {err}"))
            })
        })
        .collect()
}
