//! Anchor validation: can a schedule start on a given date?
//!
//! Recurrences that restrict *which* days or months are eligible (`Weekdays`,
//! `DayOfWeekList`, `EveryByDayOfWeek`, `MonthList`, `EveryByMonth`) only
//! accept a start date that is itself eligible. Every other recurrence accepts
//! any date, because the date becomes the anchor of the series.
//!
//! For the restricting variants a date is accepted exactly when it is the first
//! element of [`crate::schedule_iter`] from that date.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::recurrence::{day_name, month_name, DaySet, MonthSet, Recurrence, YEAR};

/// A start date that does not fit its recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorMismatch {
    /// Caller-supplied name of the checked field (e.g. `"start_date"`).
    pub label: String,
    /// Human-readable description of the mismatch.
    pub message: String,
}

impl fmt::Display for AnchorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.message)
    }
}

impl std::error::Error for AnchorMismatch {}

/// Check whether `date` can start a schedule of `recurrence`.
///
/// Returns `None` when the date is admissible, or an [`AnchorMismatch`]
/// carrying `label` otherwise.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use recurrence_engine::{check_schedule_from, Recurrence};
///
/// let saturday = NaiveDate::from_ymd_opt(2023, 11, 11).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2023, 11, 13).unwrap();
/// assert!(check_schedule_from(Recurrence::WEEKDAYS, saturday, "start").is_some());
/// assert!(check_schedule_from(Recurrence::WEEKDAYS, monday, "start").is_none());
/// ```
pub fn check_schedule_from(
    recurrence: Recurrence,
    date: NaiveDate,
    label: &str,
) -> Option<AnchorMismatch> {
    let message = match recurrence {
        Recurrence::Everyday
        | Recurrence::Weekly
        | Recurrence::Monthly
        | Recurrence::Yearly
        | Recurrence::Every(_) => None,
        Recurrence::Weekdays => day_mismatch(date, DaySet::WEEKDAYS),
        Recurrence::DayOfWeekList(list) => day_mismatch(date, list.days()),
        Recurrence::EveryByDayOfWeek(every) => day_mismatch(date, DaySet::single(every.day())),
        Recurrence::MonthList(list) => month_mismatch(date, list.months()),
        Recurrence::EveryByMonth(every) => month_mismatch(date, MonthSet::single(every.month())),
    }?;

    Some(AnchorMismatch {
        label: label.to_string(),
        message,
    })
}

fn day_mismatch(date: NaiveDate, allowed: DaySet) -> Option<String> {
    let day = date.weekday();
    if allowed.contains(day) {
        return None;
    }
    Some(format!(
        "{date} falls on a {}, expected {}",
        day_name(day),
        expected(allowed.len(), allowed)
    ))
}

fn month_mismatch(date: NaiveDate, allowed: MonthSet) -> Option<String> {
    if allowed.contains_number(date.month()) {
        return None;
    }
    let month = YEAR[date.month0() as usize];
    Some(format!(
        "{date} falls in {}, expected {}",
        month_name(month),
        expected(allowed.len(), allowed)
    ))
}

fn expected(len: usize, names: impl fmt::Display) -> String {
    if len == 1 {
        names.to_string()
    } else {
        format!("one of {names}")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
