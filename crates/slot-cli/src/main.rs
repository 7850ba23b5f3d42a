//! `slots` CLI — query a working calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Busy and free intervals for a date, calendar fetched over HTTP
//! slots --url https://calendar.example/api/ busy 2025-02-15
//! SCHEDULER_URL=https://calendar.example/api/ slots free 2025-02-15
//!
//! # Calendar read from a local JSON file
//! slots --file calendar.json available 2025-02-15 12:00 13:30
//!
//! # First block of 60 minutes, as JSON
//! slots --file calendar.json --json find 60
//!
//! # Every day with its busy and free intervals
//! slots --file calendar.json summary
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde_json::json;
use slot_engine::time::{format_date, format_time};
use slot_engine::{CalendarSource, FileSource, HttpSource, Interval, Scheduler};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Busy/free queries over a daily working calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Calendar endpoint returning {"days": [...], "timeslots": [...]}
    #[arg(long, env = "SCHEDULER_URL")]
    url: Option<String>,

    /// Read the calendar from a local JSON file instead of --url
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Upper bound on the HTTP fetch, in seconds
    #[arg(long, env = "SCHEDULER_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List busy intervals for a date (YYYY-MM-DD)
    Busy {
        #[arg(value_parser = slot_engine::parse_date)]
        date: NaiveDate,
    },
    /// List free intervals for a date (YYYY-MM-DD)
    Free {
        #[arg(value_parser = slot_engine::parse_date)]
        date: NaiveDate,
    },
    /// Check whether START-END (HH:MM) on a date is free
    Available {
        #[arg(value_parser = slot_engine::parse_date)]
        date: NaiveDate,
        #[arg(value_parser = slot_engine::parse_time)]
        start: NaiveTime,
        #[arg(value_parser = slot_engine::parse_time)]
        end: NaiveTime,
    },
    /// Find the earliest free block of the given length in minutes
    Find {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Show every day with its busy and free intervals
    Summary,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match (&cli.file, &cli.url) {
        (Some(path), None) => run(&cli, FileSource::new(path)),
        (None, Some(url)) => run(
            &cli,
            HttpSource::with_timeout(url.as_str(), Duration::from_secs(cli.timeout_secs)),
        ),
        (None, None) => {
            bail!("No calendar source: pass --file or --url (or set SCHEDULER_URL)")
        }
        (Some(_), Some(_)) => bail!("--file and --url are mutually exclusive"),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run<S: CalendarSource>(cli: &Cli, source: S) -> Result<()> {
    let origin = source.describe();
    let scheduler =
        Scheduler::load(source).with_context(|| format!("Failed to load calendar from {origin}"))?;

    match &cli.command {
        Commands::Busy { date } => print_intervals(&scheduler.busy_intervals(*date), cli.json)?,
        Commands::Free { date } => print_intervals(&scheduler.free_intervals(*date), cli.json)?,
        Commands::Available { date, start, end } => {
            let available = scheduler.is_available(*date, *start, *end);
            if cli.json {
                let value = json!({
                    "date": format_date(*date),
                    "start": format_time(*start),
                    "end": format_time(*end),
                    "available": available,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{available}");
            }
        }
        Commands::Find { minutes } => {
            let slot = scheduler
                .find_slot(*minutes)
                .context("Failed to search for a free slot")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&slot)?);
            } else {
                match slot {
                    Some(slot) => println!("{slot}"),
                    None => println!("none"),
                }
            }
        }
        Commands::Summary => print_summary(&scheduler, cli.json)?,
    }

    Ok(())
}

fn print_intervals(intervals: &[Interval], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(intervals)?);
    } else {
        for interval in intervals {
            println!("{interval}");
        }
    }
    Ok(())
}

fn print_summary<S: CalendarSource>(scheduler: &Scheduler<S>, as_json: bool) -> Result<()> {
    let calendar = scheduler.calendar();
    let days = calendar.days_by_date();

    if as_json {
        let entries: Vec<serde_json::Value> = days
            .iter()
            .map(|day| {
                json!({
                    "date": format_date(day.date),
                    "window": day.window(),
                    "busy": calendar.busy_intervals(day.date),
                    "free": calendar.free_intervals(day.date),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for day in days {
        println!("{} {}", format_date(day.date), day.window());
        println!("  busy: {}", join(&calendar.busy_intervals(day.date)));
        println!("  free: {}", join(&calendar.free_intervals(day.date)));
    }
    Ok(())
}

fn join(intervals: &[Interval]) -> String {
    if intervals.is_empty() {
        return "-".to_string();
    }
    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
