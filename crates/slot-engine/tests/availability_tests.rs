//! Tests for the availability check and the first-fit duration search.

use chrono::{NaiveDate, NaiveTime};
use slot_engine::{Calendar, ScheduleError, Slot};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(raw: &str) -> NaiveDate {
    slot_engine::parse_date(raw).unwrap()
}

fn t(raw: &str) -> NaiveTime {
    slot_engine::parse_time(raw).unwrap()
}

const PAYLOAD: &str = r#"{
    "days": [
        {"id": 1, "date": "2025-02-15", "start": "09:00", "end": "21:00"},
        {"id": 2, "date": "2025-02-16", "start": "08:00", "end": "22:00"}
    ],
    "timeslots": [
        {"id": 1, "day_id": 1, "start": "17:30", "end": "20:00"},
        {"id": 2, "day_id": 1, "start": "09:00", "end": "12:00"},
        {"id": 3, "day_id": 2, "start": "14:30", "end": "18:00"},
        {"id": 4, "day_id": 2, "start": "09:30", "end": "11:00"}
    ]
}"#;

fn calendar() -> Calendar {
    Calendar::from_json(PAYLOAD).unwrap()
}

fn available(cal: &Calendar, on: &str, start: &str, end: &str) -> bool {
    cal.is_available(date(on), t(start), t(end))
}

fn slot(on: &str, start: &str, end: &str) -> Slot {
    Slot {
        date: date(on),
        start: t(start),
        end: t(end),
    }
}

// ── is_available ────────────────────────────────────────────────────────────

#[test]
fn inside_free_interval_is_available() {
    let cal = calendar();
    assert!(available(&cal, "2025-02-15", "12:30", "13:00"));
    assert!(available(&cal, "2025-02-15", "12:00", "13:00"));
}

#[test]
fn inside_busy_interval_is_not_available() {
    assert!(!available(&calendar(), "2025-02-15", "17:30", "18:00"));
}

#[test]
fn outside_day_window_is_not_available() {
    let cal = calendar();
    assert!(!available(&cal, "2025-02-15", "08:00", "08:30"));
    assert!(!available(&cal, "2025-02-15", "21:00", "21:30"));
    assert!(!available(&cal, "2025-02-15", "20:30", "21:30"));
}

#[test]
fn unknown_date_is_not_available() {
    assert!(!available(&calendar(), "2025-02-17", "10:00", "10:30"));
}

#[test]
fn reversed_or_empty_request_is_not_available() {
    let cal = calendar();
    assert!(!available(&cal, "2025-02-15", "13:00", "12:30"));
    assert!(!available(&cal, "2025-02-15", "13:00", "13:00"));
}

#[test]
fn overlapping_busy_by_one_minute_is_not_available() {
    let cal = calendar();
    // Busy 09:00-12:00 and 17:30-20:00.
    assert!(!available(&cal, "2025-02-15", "11:59", "13:00"));
    assert!(!available(&cal, "2025-02-15", "16:30", "17:31"));
    assert!(!available(&cal, "2025-02-15", "11:30", "12:30"));
}

#[test]
fn exact_free_interval_bounds_are_available() {
    let cal = calendar();
    assert!(available(&cal, "2025-02-15", "12:00", "17:30"));
    assert!(available(&cal, "2025-02-15", "20:00", "21:00"));
}

#[test]
fn request_spanning_adjacent_free_intervals_is_rejected() {
    // Busy 09:00-12:00 and 17:30-20:00: the request covers busy time in between.
    assert!(!available(&calendar(), "2025-02-15", "12:00", "21:00"));
}

// ── find_slot ───────────────────────────────────────────────────────────────

#[test]
fn find_slot_sixty_minutes() {
    assert_eq!(
        calendar().find_slot(60).unwrap(),
        Some(slot("2025-02-15", "12:00", "13:00"))
    );
}

#[test]
fn find_slot_is_left_aligned_with_exact_duration() {
    assert_eq!(
        calendar().find_slot(90).unwrap(),
        Some(slot("2025-02-15", "12:00", "13:30"))
    );
}

#[test]
fn find_slot_duration_equal_to_longest_gap() {
    // Longest gap anywhere is 12:00-17:30 on the 15th (330 minutes).
    let cal = calendar();
    assert_eq!(cal.find_slot(331).unwrap(), None);
    assert_eq!(
        cal.find_slot(330).unwrap(),
        Some(slot("2025-02-15", "12:00", "17:30"))
    );
}

#[test]
fn find_slot_visits_days_in_date_order() {
    let cal = Calendar::from_json(
        r#"{
            "days": [
                {"id": 7, "date": "2025-03-02", "start": "08:00", "end": "10:00"},
                {"id": 3, "date": "2025-03-01", "start": "09:00", "end": "17:00"}
            ],
            "timeslots": [
                {"id": 1, "day_id": 3, "start": "09:00", "end": "16:30"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(
        cal.find_slot(30).unwrap(),
        Some(slot("2025-03-01", "16:30", "17:00"))
    );
    assert_eq!(
        cal.find_slot(45).unwrap(),
        Some(slot("2025-03-02", "08:00", "08:45"))
    );
}

#[test]
fn find_slot_too_long_is_none() {
    assert_eq!(calendar().find_slot(600).unwrap(), None);
}

#[test]
fn find_slot_empty_calendar_is_none() {
    assert_eq!(Calendar::default().find_slot(60).unwrap(), None);
}

#[test]
fn find_slot_rejects_non_positive_duration() {
    let cal = calendar();
    for duration in [0, -10] {
        let err = cal.find_slot(duration).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument(_)));
        assert!(err.to_string().contains("must be positive"));
    }
}

#[test]
fn slot_displays_date_and_range() {
    assert_eq!(
        slot("2025-02-15", "12:00", "13:00").to_string(),
        "2025-02-15 12:00-13:00"
    );
}
