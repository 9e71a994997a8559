//! # recurrence-engine
//!
//! Deterministic recurrence scheduling over calendar dates.
//!
//! The engine turns a human-readable phrase ("every other day", "on Mondays,
//! Fridays", "every 12 months") into a closed [`Recurrence`] descriptor,
//! expands a descriptor into a lazy ascending sequence of dates, and checks
//! whether a date can start such a sequence. Everything is date-granular and
//! pure: no clock access, no time zones, no I/O.
//!
//! ## Modules
//!
//! - [`recurrence`]: the `Recurrence` variant set, weekday/month sets, canonicalization
//! - [`parser`]: recurrence phrase → `Recurrence`
//! - [`schedule`]: `Recurrence` + start date → lazy sequence of dates
//! - [`anchor`]: start-date admissibility check
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use recurrence_engine::{check_schedule_from, parse_recurrence, schedule_iter};
//!
//! let weekdays = parse_recurrence("on Mon, Tue, Wed, Thu, Fri").unwrap();
//! let saturday = NaiveDate::from_ymd_opt(2023, 11, 11).unwrap();
//!
//! assert!(check_schedule_from(weekdays, saturday, "start").is_some());
//! let next: Vec<_> = schedule_iter(weekdays, saturday).take(2).collect();
//! assert_eq!(next[0].to_string(), "2023-11-13");
//! assert_eq!(next[1].to_string(), "2023-11-14");
//! ```

pub mod anchor;
pub mod error;
pub mod parser;
pub mod recurrence;
pub mod schedule;

pub use anchor::{check_schedule_from, AnchorMismatch};
pub use error::RecurrenceError;
pub use parser::{parse, parse_recurrence};
pub use recurrence::{
    CalendarField, DayOfWeekList, DaySet, Every, EveryByDayOfWeek, EveryByMonth, MonthList,
    MonthSet, Recurrence,
};
pub use schedule::{days_in_month, occurrences_between, schedule_iter, ScheduleIter};
