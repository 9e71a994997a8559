//! Schedule expansion: a [`Recurrence`] plus a start date → ascending dates.
//!
//! [`schedule_iter`] returns a lazy [`ScheduleIter`]. The sequence is strictly
//! ascending and unbounded; it only ends if the next date would fall past
//! [`NaiveDate::MAX`]. Calling [`schedule_iter`] again with the same inputs
//! reproduces the same sequence.
//!
//! # Anchoring
//!
//! The day-of-month of `start` is the *anchor day*. Variants that step by
//! whole months or years fall into two groups:
//!
//! - `Monthly`, `Yearly`, `MonthList`, `EveryByMonth` re-apply the original
//!   anchor day to every target month, clamped to its length. A 31st anchor
//!   yields Jan 31, Feb 28, Mar 31, Apr 30.
//! - `Every` adds `n` units to the *previous* date. Clamping compounds: every
//!   11 months from Jan 31 yields Dec 31, Nov 30, Oct 30.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::trace;

use crate::recurrence::{CalendarField, MonthSet, Recurrence};

/// Lazy cursor over the dates of a recurrence.
///
/// Holds the next date to emit plus the anchor day-of-month. Each step is
/// O(1) and allocation-free.
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    recurrence: Recurrence,
    next: Option<NaiveDate>,
    anchor_day: u32,
}

/// Expand `recurrence` from `start`.
///
/// The first element is the earliest date on or after `start` that matches the
/// recurrence (for anchor-free variants, `start` itself).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use recurrence_engine::{schedule_iter, Recurrence};
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
/// let dates: Vec<String> = schedule_iter(Recurrence::MONTHLY, start)
///     .take(4)
///     .map(|d| d.to_string())
///     .collect();
/// assert_eq!(dates, ["2023-01-31", "2023-02-28", "2023-03-31", "2023-04-30"]);
/// ```
pub fn schedule_iter(recurrence: Recurrence, start: NaiveDate) -> ScheduleIter {
    let anchor_day = start.day();
    let next = first_match(recurrence, start, anchor_day);
    trace!(%recurrence, %start, first = ?next, "starting schedule");
    ScheduleIter {
        recurrence,
        next,
        anchor_day,
    }
}

/// Collect every date of `recurrence` from `start` up to and including `until`.
///
/// Returns an empty vector if the first match falls after `until`.
pub fn occurrences_between(
    recurrence: Recurrence,
    start: NaiveDate,
    until: NaiveDate,
) -> Vec<NaiveDate> {
    schedule_iter(recurrence, start)
        .take_while(|date| *date <= until)
        .collect()
}

impl Recurrence {
    /// Shorthand for [`schedule_iter`].
    pub fn schedule_from(self, start: NaiveDate) -> ScheduleIter {
        schedule_iter(self, start)
    }
}

impl Iterator for ScheduleIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = step(self.recurrence, current, self.anchor_day);
        Some(current)
    }
}

impl FusedIterator for ScheduleIter {}

// ── Stepping ────────────────────────────────────────────────────────────────

/// The first date on or after `start` that belongs to the schedule.
fn first_match(recurrence: Recurrence, start: NaiveDate, anchor_day: u32) -> Option<NaiveDate> {
    match recurrence {
        Recurrence::Everyday
        | Recurrence::Weekly
        | Recurrence::Monthly
        | Recurrence::Yearly
        | Recurrence::Every(_) => Some(start),
        Recurrence::Weekdays => scan_from(start, is_weekday),
        Recurrence::DayOfWeekList(list) => {
            scan_from(start, |date| list.days().contains(date.weekday()))
        }
        Recurrence::EveryByDayOfWeek(every) => scan_from(start, |date| date.weekday() == every.day()),
        Recurrence::MonthList(list) => {
            listed_month_from(start.year(), start.month(), list.months(), anchor_day)
        }
        Recurrence::EveryByMonth(every) => {
            let target = every.month().number_from_month();
            let year = if target >= start.month() {
                start.year()
            } else {
                start.year().checked_add(1)?
            };
            clamped_date(year, target, anchor_day)
        }
    }
}

/// The date following `current` in the schedule.
fn step(recurrence: Recurrence, current: NaiveDate, anchor_day: u32) -> Option<NaiveDate> {
    match recurrence {
        Recurrence::Everyday => current.succ_opt(),
        Recurrence::Weekdays => scan_from(current.succ_opt()?, is_weekday),
        Recurrence::DayOfWeekList(list) => {
            scan_from(current.succ_opt()?, |date| list.days().contains(date.weekday()))
        }
        Recurrence::Weekly => current.checked_add_days(Days::new(7)),
        Recurrence::Monthly => {
            let (year, month) = following_month(current.year(), current.month())?;
            clamped_date(year, month, anchor_day)
        }
        // Clamping never changes the month, so `current` carries the anchor month.
        Recurrence::Yearly => clamped_date(current.year().checked_add(1)?, current.month(), anchor_day),
        Recurrence::MonthList(list) => {
            let (year, month) = following_month(current.year(), current.month())?;
            listed_month_from(year, month, list.months(), anchor_day)
        }
        Recurrence::Every(every) => add_field(current, every.increment(), every.field()),
        Recurrence::EveryByDayOfWeek(every) => {
            current.checked_add_days(Days::new(7 * u64::from(every.increment())))
        }
        Recurrence::EveryByMonth(every) => {
            let years = i32::try_from(every.increment()).ok()?;
            clamped_date(current.year().checked_add(years)?, current.month(), anchor_day)
        }
    }
}

/// Calendar field-wise addition. Month and year steps clamp an overflowing
/// day-of-month to the last day of the target month.
fn add_field(date: NaiveDate, increment: u32, field: CalendarField) -> Option<NaiveDate> {
    match field {
        CalendarField::DayOfMonth => date.checked_add_days(Days::new(u64::from(increment))),
        CalendarField::WeekOfYear => date.checked_add_days(Days::new(7 * u64::from(increment))),
        CalendarField::Month => date.checked_add_months(Months::new(increment)),
        CalendarField::Year => date.checked_add_months(Months::new(increment.checked_mul(12)?)),
    }
}

// ── Calendar helpers ────────────────────────────────────────────────────────

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First date on or after `date` satisfying `matches`.
///
/// Callers pass a predicate over a non-empty weekday set, so this looks at
/// no more than seven dates.
fn scan_from(mut date: NaiveDate, matches: impl Fn(NaiveDate) -> bool) -> Option<NaiveDate> {
    while !matches(date) {
        date = date.succ_opt()?;
    }
    Some(date)
}

/// First month in `months` on or after (`year`, `month`), on the clamped anchor day.
fn listed_month_from(
    mut year: i32,
    mut month: u32,
    months: MonthSet,
    anchor_day: u32,
) -> Option<NaiveDate> {
    while !months.contains_number(month) {
        (year, month) = following_month(year, month)?;
    }
    clamped_date(year, month, anchor_day)
}

fn following_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month == 12 {
        Some((year.checked_add(1)?, 1))
    } else {
        Some((year, month + 1))
    }
}

/// `anchor_day` in (`year`, `month`), reduced to the month's last day if needed.
fn clamped_date(year: i32, month: u32, anchor_day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, anchor_day.min(days_in_month(year, month)))
}

/// Number of days in a month of the proleptic Gregorian calendar.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
