//! Due-date classification for preventive plans.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use time::Date;
use time::macros::format_description;

/// Plans due within this many days are flagged as due soon.
pub const DUE_SOON_DAYS: i64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    /// No next run date (or one that cannot be parsed).
    Unscheduled,
    Overdue,
    DueSoon,
    Scheduled,
}

impl DueStatus {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Unscheduled => "badge badge--gray",
            Self::Overdue => "badge badge--red",
            Self::DueSoon => "badge badge--yellow",
            Self::Scheduled => "badge badge--green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unscheduled => "Sin programar",
            Self::Overdue => "Vencido",
            Self::DueSoon => "Próximo",
            Self::Scheduled => "Programado",
        }
    }
}

/// Parse the calendar part of an ISO date or datetime.
pub fn parse_date(raw: &str) -> Option<Date> {
    let date = raw.get(..10)?;
    Date::parse(date, format_description!("[year]-[month]-[day]")).ok()
}

/// Classify a plan's `next_run` relative to `today`.
pub fn due_status(next_run: Option<&str>, today: Date) -> DueStatus {
    let Some(next) = next_run.and_then(parse_date) else {
        return DueStatus::Unscheduled;
    };
    let days = (next - today).whole_days();
    if days < 0 {
        DueStatus::Overdue
    } else if days <= DUE_SOON_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Scheduled
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN),
            _ => Date::MIN,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Today as `YYYY-MM-DD`, the default for new purchase orders.
pub fn today_iso() -> String {
    let today = today();
    format!("{:04}-{:02}-{:02}", today.year(), u8::from(today.month()), today.day())
}
