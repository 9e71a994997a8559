//! Subcommand implementations. Each returns its output instead of printing so
//! `main` owns stdout, stderr and the exit code.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use recurrence_engine::{check_schedule_from, parse_recurrence, schedule_iter, Recurrence};
use serde::Serialize;
use tracing::debug;

use crate::cli::Command;

/// Result of a subcommand that ran to completion.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print to stdout, exit 0.
    Accepted(String),
    /// Print to stderr, exit 1.
    Rejected(String),
}

/// How many dates `expand` prints.
#[derive(Debug, Clone, Copy)]
pub struct ExpandOptions {
    pub count: usize,
    pub until: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ParsedJson {
    phrase: String,
    recurrence: Recurrence,
}

pub fn run(command: Command) -> Result<Outcome> {
    match command {
        Command::Parse { phrase, json } => parse(&phrase, json),
        Command::Expand {
            phrase,
            from,
            count,
            until,
            json,
        } => expand(&phrase, from, ExpandOptions { count, until }, json),
        Command::Check {
            phrase,
            date,
            label,
        } => check(&phrase, date, &label),
    }
}

fn load(phrase: &str) -> Result<Recurrence> {
    parse_recurrence(phrase).with_context(|| format!("failed to parse recurrence '{phrase}'"))
}

pub fn parse(phrase: &str, json: bool) -> Result<Outcome> {
    let recurrence = load(phrase)?;
    if !json {
        return Ok(Outcome::Accepted(recurrence.to_string()));
    }
    let body = ParsedJson {
        phrase: recurrence.to_string(),
        recurrence,
    };
    let rendered = serde_json::to_string_pretty(&body).context("failed to serialize recurrence")?;
    Ok(Outcome::Accepted(rendered))
}

pub fn expand(
    phrase: &str,
    from: NaiveDate,
    options: ExpandOptions,
    json: bool,
) -> Result<Outcome> {
    let recurrence = load(phrase)?;
    let iter = schedule_iter(recurrence, from);
    let dates: Vec<NaiveDate> = match options.until {
        Some(until) => iter.take_while(|date| *date <= until).collect(),
        None => iter.take(options.count).collect(),
    };
    debug!(%recurrence, %from, emitted = dates.len(), "expanded schedule");

    if json {
        let rendered = serde_json::to_string(&dates).context("failed to serialize dates")?;
        return Ok(Outcome::Accepted(rendered));
    }
    let lines: Vec<String> = dates.iter().map(NaiveDate::to_string).collect();
    Ok(Outcome::Accepted(lines.join("\n")))
}

pub fn check(phrase: &str, date: NaiveDate, label: &str) -> Result<Outcome> {
    let recurrence = load(phrase)?;
    match check_schedule_from(recurrence, date, label) {
        None => Ok(Outcome::Accepted("ok".to_string())),
        Some(mismatch) => Ok(Outcome::Rejected(mismatch.to_string())),
    }
}
