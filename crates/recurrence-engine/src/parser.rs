//! Recurrence phrase parser.
//!
//! Turns a human-readable phrase into a [`Recurrence`]. Parsing is
//! case-insensitive and ignores surrounding whitespace. The parser never
//! guesses: a phrase that does not match the grammar is an error.
//!
//! # Grammar
//!
//! ```text
//! phrase  := "everyday" | "weekdays" | "weekly" | "monthly" | "yearly"
//!          | "on" day ("," day)*
//!          | "in" month ("," month)*
//!          | "every" amount unit
//! amount  := digits | "other" | "second" | "third" | ... | "twelfth"
//! unit    := "day" | "week" | "month" | "year" | day | month
//! day     := full weekday name or three-letter abbreviation
//! month   := full month name
//! ```
//!
//! Day, month and unit names may carry a trailing plural `s`.

use std::str::FromStr;

use chrono::{Month, Weekday};
use tracing::{debug, trace};

use crate::error::{RecurrenceError, Result};
use crate::recurrence::{CalendarField, DaySet, MonthSet, Recurrence};

/// Parse an optional recurrence phrase.
///
/// `None` is not an error: it means "no recurrence" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidFormat`] carrying the phrase if it does
/// not match the grammar.
///
/// # Examples
///
/// ```
/// use recurrence_engine::{parse, Recurrence};
///
/// assert_eq!(parse(None).unwrap(), None);
/// assert_eq!(parse(Some("every twelfth month")).unwrap(), Some(Recurrence::YEARLY));
/// assert!(parse(Some("every blue moon")).is_err());
/// ```
pub fn parse(text: Option<&str>) -> Result<Option<Recurrence>> {
    text.map(parse_recurrence).transpose()
}

/// Parse a recurrence phrase.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidFormat`] carrying the phrase if it does
/// not match the grammar.
pub fn parse_recurrence(text: &str) -> Result<Recurrence> {
    let normalized = normalize_phrase(text);
    let invalid = |reason: String| RecurrenceError::InvalidFormat {
        phrase: text.trim().to_string(),
        reason,
    };

    let (keyword, rest) = match normalized.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest),
        None => (normalized.as_str(), ""),
    };

    let recurrence = match (keyword, rest) {
        ("", _) => return Err(invalid("empty phrase".to_string())),
        ("everyday", "") => Recurrence::EVERYDAY,
        ("weekdays", "") => Recurrence::WEEKDAYS,
        ("weekly", "") => Recurrence::WEEKLY,
        ("monthly", "") => Recurrence::MONTHLY,
        ("yearly", "") => Recurrence::YEARLY,
        ("on", list) => {
            let days = parse_list(list, parse_day).map_err(invalid)?;
            trace!(?days, "canonicalizing day-of-week list");
            Recurrence::on_days(days.into_iter().collect::<DaySet>())
                .map_err(|e| invalid(e.to_string()))?
        }
        ("in", list) => {
            let months = parse_list(list, parse_month).map_err(invalid)?;
            trace!(?months, "canonicalizing month list");
            Recurrence::in_months(months.into_iter().collect::<MonthSet>())
                .map_err(|e| invalid(e.to_string()))?
        }
        ("every", rest) => parse_every(rest).map_err(invalid)?,
        (other, _) => return Err(invalid(format!("unrecognized keyword '{other}'"))),
    };

    debug!(phrase = %text.trim(), %recurrence, "parsed recurrence");
    Ok(recurrence)
}

impl FromStr for Recurrence {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self> {
        parse_recurrence(s)
    }
}

// ── Phrase parsers ──────────────────────────────────────────────────────────

/// Unit of an `every` phrase after name lookup.
#[derive(Debug, Clone, Copy)]
enum Unit {
    Field(CalendarField),
    Day(Weekday),
    Month(Month),
}

/// Parse the `<amount> <unit>` tail of an `every` phrase.
fn parse_every(rest: &str) -> std::result::Result<Recurrence, String> {
    let mut tokens = rest.split_whitespace();
    let amount = tokens
        .next()
        .ok_or_else(|| "missing amount after 'every'".to_string())?;
    let unit = tokens
        .next()
        .ok_or_else(|| format!("missing unit after '{amount}'"))?;
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected '{extra}' after unit"));
    }

    let amount = parse_amount(amount)?;
    let unit = parse_unit(unit)?;

    let built = match unit {
        Unit::Field(field) => Recurrence::every(amount, field),
        Unit::Day(day) => Recurrence::every_day_of_week(amount, day),
        Unit::Month(month) => Recurrence::every_month(amount, month),
    };
    built.map_err(|e| e.to_string())
}

/// Parse a comma-separated list of names with `lookup`.
fn parse_list<T>(
    list: &str,
    lookup: fn(&str) -> Option<T>,
) -> std::result::Result<Vec<T>, String> {
    if list.trim().is_empty() {
        return Err("empty list".to_string());
    }
    list.split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return Err("empty list item".to_string());
            }
            lookup(item).ok_or_else(|| format!("unrecognized name '{item}'"))
        })
        .collect()
}

/// Parse a repeat amount: a decimal integer or an ordinal word.
fn parse_amount(token: &str) -> std::result::Result<u32, String> {
    if token.chars().all(|c| c.is_ascii_digit()) {
        let amount: u32 = token
            .parse()
            .map_err(|_| format!("amount '{token}' is out of range"))?;
        if amount == 0 {
            return Err("amount must be at least 1".to_string());
        }
        return Ok(amount);
    }
    parse_ordinal(token).ok_or_else(|| format!("unrecognized amount '{token}'"))
}

/// Parse the unit of an `every` phrase.
fn parse_unit(token: &str) -> std::result::Result<Unit, String> {
    let field = match strip_plural(token) {
        "day" => Some(CalendarField::DayOfMonth),
        "week" => Some(CalendarField::WeekOfYear),
        "month" => Some(CalendarField::Month),
        "year" => Some(CalendarField::Year),
        _ => None,
    };
    field
        .map(Unit::Field)
        .or_else(|| parse_day(token).map(Unit::Day))
        .or_else(|| parse_month(token).map(Unit::Month))
        .ok_or_else(|| format!("unrecognized unit '{token}'"))
}

// ── Parsing helpers ─────────────────────────────────────────────────────────

/// Normalize phrase: trim, lowercase, collapse runs of whitespace.
fn normalize_phrase(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Strip one trailing plural `s`.
fn strip_plural(s: &str) -> &str {
    s.strip_suffix('s').unwrap_or(s)
}

/// Parse a weekday name (full or three-letter abbreviation, optionally plural).
fn parse_day(s: &str) -> Option<Weekday> {
    match strip_plural(s) {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a full month name, optionally plural.
fn parse_month(s: &str) -> Option<Month> {
    match strip_plural(s) {
        "january" => Some(Month::January),
        "february" => Some(Month::February),
        "march" => Some(Month::March),
        "april" => Some(Month::April),
        "may" => Some(Month::May),
        "june" => Some(Month::June),
        "july" => Some(Month::July),
        "august" => Some(Month::August),
        "september" => Some(Month::September),
        "october" => Some(Month::October),
        "november" => Some(Month::November),
        "december" => Some(Month::December),
        _ => None,
    }
}

/// Parse an ordinal amount: "other"→2, "second"→2, ..., "twelfth"→12.
fn parse_ordinal(s: &str) -> Option<u32> {
    match s {
        "other" | "second" => Some(2),
        "third" => Some(3),
        "fourth" => Some(4),
        "fifth" => Some(5),
        "sixth" => Some(6),
        "seventh" => Some(7),
        "eighth" => Some(8),
        "ninth" => Some(9),
        "tenth" => Some(10),
        "eleventh" => Some(11),
        "twelfth" => Some(12),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
