//! Date formatting utilities for user-friendly display and export.
//!
//! Dates and timestamps are kept as `chrono` values everywhere inside the
//! application. This module is the boundary where they become text, and where
//! text typed by the user becomes a date again.
//!
//! ## Format Specifications
//!
//! - Due dates: `YYYY-MM-DD` (e.g. `2025-01-15`)
//! - Timestamps: `YYYY-MM-DD HH:MM` (e.g. `2025-01-15 09:30`)
//!
//! ## Due-Date Status
//!
//! [`due_status`] classifies a due date relative to a reference day:
//!
//! | Days until due | Status |
//! |---|---|
//! | no due date | `NoDueDate` → "No due date" |
//! | < 0 | `Overdue(n)` → "Overdue (n days)" |
//! | 0 | `DueToday` → "Due Today" |
//! | 1..=3 | `DueSoon(n)` → "n days left" |
//! | > 3 | `Scheduled(date)` → the date itself |
//!
//! ## Examples
//!
//! ```rust
//! use tasklist::libs::formatter::{due_status, parse_date, DueStatus};
//!
//! let today = parse_date("2025-01-15", None).unwrap();
//! let due = parse_date("2025-01-17", None).unwrap();
//! assert_eq!(due_status(Some(due), today), DueStatus::DueSoon(2));
//! assert_eq!(due_status(Some(due), today).to_string(), "2 days left");
//! ```

use super::error::ValidationError;
use super::task::{DATE_FORMAT, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Days before the due date from which a task counts as "due soon".
pub const DUE_SOON_DAYS: i64 = 3;

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD`, or the keyword `today` when a reference date is given.
pub fn parse_date(input: &str, today: Option<NaiveDate>) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if let Some(today) = today {
        if input.eq_ignore_ascii_case("today") {
            return Ok(today);
        }
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Parses an optional due date; blank input means "no due date".
pub fn parse_due_date(input: &str, today: NaiveDate) -> Result<Option<NaiveDate>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_date(input, Some(today)).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    NoDueDate,
    Overdue(i64),
    DueToday,
    DueSoon(i64),
    Scheduled(NaiveDate),
}

pub fn due_status(due_date: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    let Some(due) = due_date else {
        return DueStatus::NoDueDate;
    };

    let days_left = (due - today).num_days();
    match days_left {
        d if d < 0 => DueStatus::Overdue(-d),
        0 => DueStatus::DueToday,
        d if d <= DUE_SOON_DAYS => DueStatus::DueSoon(d),
        _ => DueStatus::Scheduled(due),
    }
}

impl DueStatus {
    pub fn marker(&self) -> &'static str {
        match self {
            DueStatus::Overdue(_) => "🔴",
            DueStatus::DueToday => "⚠️",
            DueStatus::DueSoon(_) => "🟡",
            DueStatus::Scheduled(_) | DueStatus::NoDueDate => "📅",
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::NoDueDate => write!(f, "No due date"),
            DueStatus::Overdue(days) => write!(f, "Overdue ({} days)", days),
            DueStatus::DueToday => write!(f, "Due Today"),
            DueStatus::DueSoon(days) => write!(f, "{} days left", days),
            DueStatus::Scheduled(date) => write!(f, "{}", format_date(date)),
        }
    }
}
