use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Parse recurrence phrases and expand them into calendar dates.
///
/// Dates are ISO 8601 calendar dates (YYYY-MM-DD). Set RECUR_LOG (e.g.
/// `RECUR_LOG=debug`) to see parser and scheduler traces on stderr.
#[derive(Parser, Debug)]
#[command(name = "recur", version, about = "Recurrence phrase parser and date expander")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a phrase and print its canonical form
    Parse {
        /// Recurrence phrase, e.g. "every other day" or "on mon, fri"
        phrase: String,

        /// Print the structured recurrence as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the dates of a recurrence starting from a date
    Expand {
        /// Recurrence phrase
        phrase: String,

        /// First date of the schedule (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Number of dates to print (ignored when --until is given)
        #[arg(long, env = "RECUR_COUNT", default_value_t = 10)]
        count: usize,

        /// Print every date up to and including this one (YYYY-MM-DD)
        #[arg(long)]
        until: Option<NaiveDate>,

        /// Print a JSON array instead of one date per line
        #[arg(long)]
        json: bool,
    },

    /// Check whether a date can start a schedule of the recurrence
    Check {
        /// Recurrence phrase
        phrase: String,

        /// Candidate start date (YYYY-MM-DD)
        date: NaiveDate,

        /// Name reported in the diagnostic
        #[arg(long, default_value = "from")]
        label: String,
    },
}
