use super::*;
use time::macros::date;

const TODAY: Date = date!(2025 - 06 - 10);

#[test]
fn missing_next_run_is_unscheduled() {
    assert_eq!(due_status(None, TODAY), DueStatus::Unscheduled);
    assert_eq!(due_status(Some("pronto"), TODAY), DueStatus::Unscheduled);
}

#[test]
fn past_dates_are_overdue() {
    assert_eq!(due_status(Some("2025-06-09"), TODAY), DueStatus::Overdue);
}

#[test]
fn today_and_the_next_week_are_due_soon() {
    assert_eq!(due_status(Some("2025-06-10"), TODAY), DueStatus::DueSoon);
    assert_eq!(due_status(Some("2025-06-17"), TODAY), DueStatus::DueSoon);
}

#[test]
fn later_dates_are_scheduled() {
    assert_eq!(due_status(Some("2025-06-18"), TODAY), DueStatus::Scheduled);
}

#[test]
fn parse_date_accepts_datetimes() {
    assert_eq!(parse_date("2025-06-18T08:00:00"), Some(date!(2025 - 06 - 18)));
    assert_eq!(parse_date("2025-13-01"), None);
}

#[test]
fn today_iso_is_zero_padded() {
    let iso = today_iso();
    assert_eq!(iso.len(), 10);
    assert_eq!(parse_date(&iso), Some(today()));
}
