//! The closed set of recurrence descriptors.
//!
//! A [`Recurrence`] describes a repeating pattern of calendar dates. It is an
//! immutable `Copy` value; the five anchor-free patterns ([`Recurrence::EVERYDAY`],
//! [`Recurrence::WEEKDAYS`], [`Recurrence::WEEKLY`], [`Recurrence::MONTHLY`],
//! [`Recurrence::YEARLY`]) are unit variants.
//!
//! # Canonicalization
//!
//! Every construction path goes through the constructors on [`Recurrence`]
//! ([`on_days`](Recurrence::on_days), [`in_months`](Recurrence::in_months),
//! [`every`](Recurrence::every), [`every_day_of_week`](Recurrence::every_day_of_week),
//! [`every_month`](Recurrence::every_month)). They collapse degenerate
//! descriptors into the equivalent singleton:
//!
//! | Input | Result |
//! |---|---|
//! | all seven days | `Everyday` |
//! | Monday through Friday | `Weekdays` |
//! | all twelve months | `Monthly` |
//! | every 1 day / week / month / year | `Everyday` / `Weekly` / `Monthly` / `Yearly` |
//! | every 12 months | `Yearly` |
//! | every 1 Monday | `DayOfWeekList({Monday})` |
//! | every 1 March | `MonthList({March})` |
//!
//! The payload types of the data-carrying variants have private fields, so a
//! non-canonical value cannot be built outside this module.

use std::fmt;

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{RecurrenceError, Result};

// ── Name tables ─────────────────────────────────────────────────────────────

pub(crate) const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) const YEAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Lowercase English name of a weekday, as used in canonical phrases.
pub(crate) fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Lowercase English name of a month, as used in canonical phrases.
pub(crate) fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "january",
        Month::February => "february",
        Month::March => "march",
        Month::April => "april",
        Month::May => "may",
        Month::June => "june",
        Month::July => "july",
        Month::August => "august",
        Month::September => "september",
        Month::October => "october",
        Month::November => "november",
        Month::December => "december",
    }
}

// ── DaySet ──────────────────────────────────────────────────────────────────

/// A set of [`Weekday`]s stored as a bitmask (bit 0 = Monday, bit 6 = Sunday).
///
/// Serializes as an ordered list of weekdays.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Vec<Weekday>", from = "Vec<Weekday>")]
pub struct DaySet(u8); // Invariant: bit 7 is always 0.

impl DaySet {
    pub const EMPTY: Self = Self(0);
    /// Monday through Sunday.
    pub const ALL: Self = Self(0b111_1111);
    /// Monday through Friday.
    pub const WEEKDAYS: Self = Self(0b001_1111);

    /// A set holding exactly `day`.
    pub fn single(day: Weekday) -> Self {
        Self(1 << day.num_days_from_monday())
    }

    /// Adds a day. Returns `true` if the day was new to the set.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let was_new = !self.contains(day);
        self.0 |= Self::single(day).0;
        was_new
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::single(day).0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the days in the set, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<Vec<Weekday>> for DaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<DaySet> for Vec<Weekday> {
    fn from(set: DaySet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma-separated lowercase names, e.g. `monday, friday`.
impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, self.iter().map(day_name))
    }
}

// ── MonthSet ────────────────────────────────────────────────────────────────

/// A set of [`Month`]s stored as a bitmask (bit 0 = January, bit 11 = December).
///
/// Serializes as an ordered list of months.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Vec<Month>", from = "Vec<Month>")]
pub struct MonthSet(u16); // Invariant: bits 12..16 are always 0.

impl MonthSet {
    pub const EMPTY: Self = Self(0);
    /// January through December.
    pub const ALL: Self = Self(0b1111_1111_1111);

    /// A set holding exactly `month`.
    pub fn single(month: Month) -> Self {
        Self(1 << (month.number_from_month() - 1))
    }

    /// Adds a month. Returns `true` if the month was new to the set.
    pub fn insert(&mut self, month: Month) -> bool {
        let was_new = !self.contains(month);
        self.0 |= Self::single(month).0;
        was_new
    }

    pub fn contains(self, month: Month) -> bool {
        self.0 & Self::single(month).0 != 0
    }

    /// Membership test by month number (1 = January).
    pub fn contains_number(self, month: u32) -> bool {
        (1..=12).contains(&month) && self.0 & (1 << (month - 1)) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the months in the set, January first.
    pub fn iter(self) -> impl Iterator<Item = Month> {
        YEAR.into_iter().filter(move |month| self.contains(*month))
    }
}

impl FromIterator<Month> for MonthSet {
    fn from_iter<I: IntoIterator<Item = Month>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for month in iter {
            set.insert(month);
        }
        set
    }
}

impl From<Vec<Month>> for MonthSet {
    fn from(months: Vec<Month>) -> Self {
        months.into_iter().collect()
    }
}

impl From<MonthSet> for Vec<Month> {
    fn from(set: MonthSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma-separated lowercase names, e.g. `january, march`.
impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, self.iter().map(month_name))
    }
}

fn write_names<'a>(
    f: &mut fmt::Formatter<'_>,
    names: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (i, name) in names.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(name)?;
    }
    Ok(())
}

// ── CalendarField ───────────────────────────────────────────────────────────

/// The calendar unit stepped by [`Recurrence::Every`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    /// Steps of `n` days.
    DayOfMonth,
    /// Steps of `7 * n` days.
    WeekOfYear,
    /// Steps of `n` calendar months, clamping the day-of-month.
    Month,
    /// Steps of `n` calendar years, clamping February 29.
    Year,
}

impl CalendarField {
    fn unit_name(self) -> &'static str {
        match self {
            CalendarField::DayOfMonth => "day",
            CalendarField::WeekOfYear => "week",
            CalendarField::Month => "month",
            CalendarField::Year => "year",
        }
    }
}

// ── Variant payloads ────────────────────────────────────────────────────────

/// Payload of [`Recurrence::DayOfWeekList`]: neither empty, all seven days,
/// nor exactly Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfWeekList {
    days: DaySet,
}

impl DayOfWeekList {
    pub fn days(&self) -> DaySet {
        self.days
    }
}

/// Payload of [`Recurrence::MonthList`]: neither empty nor all twelve months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthList {
    months: MonthSet,
}

impl MonthList {
    pub fn months(&self) -> MonthSet {
        self.months
    }
}

/// Payload of [`Recurrence::Every`]: increment of at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Every {
    increment: u32,
    field: CalendarField,
}

impl Every {
    pub fn increment(&self) -> u32 {
        self.increment
    }

    pub fn field(&self) -> CalendarField {
        self.field
    }
}

/// Payload of [`Recurrence::EveryByDayOfWeek`]: increment of at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EveryByDayOfWeek {
    increment: u32,
    day: Weekday,
}

impl EveryByDayOfWeek {
    pub fn increment(&self) -> u32 {
        self.increment
    }

    pub fn day(&self) -> Weekday {
        self.day
    }
}

/// Payload of [`Recurrence::EveryByMonth`]: increment of at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EveryByMonth {
    increment: u32,
    month: Month,
}

impl EveryByMonth {
    pub fn increment(&self) -> u32 {
        self.increment
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

// ── Recurrence ──────────────────────────────────────────────────────────────

/// A repeating pattern of calendar dates.
///
/// Build one with [`crate::parse_recurrence`] or with the canonicalizing
/// constructors below; expand it with [`crate::schedule_iter`] and check a
/// start date with [`crate::check_schedule_from`].
///
/// `Display` renders the canonical phrase, which parses back to an equal value.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use recurrence_engine::{DaySet, Recurrence};
///
/// let days: DaySet = [Weekday::Fri, Weekday::Mon, Weekday::Wed, Weekday::Thu, Weekday::Tue]
///     .into_iter()
///     .collect();
/// assert_eq!(Recurrence::on_days(days).unwrap(), Recurrence::WEEKDAYS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecurrenceRepr", into = "RecurrenceRepr")]
pub enum Recurrence {
    /// Every calendar day.
    Everyday,
    /// Monday through Friday.
    Weekdays,
    /// Every 7 days from the anchor.
    Weekly,
    /// Every calendar month on the anchor's day-of-month (clamped).
    Monthly,
    /// Every calendar year on the anchor's month and day (clamped).
    Yearly,
    /// Every day whose weekday is in the set.
    DayOfWeekList(DayOfWeekList),
    /// The anchor's day-of-month (clamped) in every month of the set.
    MonthList(MonthList),
    /// Every `n` days, weeks, months or years, stepping from the previous date.
    Every(Every),
    /// Every `n`-th occurrence of one weekday.
    EveryByDayOfWeek(EveryByDayOfWeek),
    /// One month, every `n` years.
    EveryByMonth(EveryByMonth),
}

impl Recurrence {
    pub const EVERYDAY: Recurrence = Recurrence::Everyday;
    pub const WEEKDAYS: Recurrence = Recurrence::Weekdays;
    pub const WEEKLY: Recurrence = Recurrence::Weekly;
    pub const MONTHLY: Recurrence = Recurrence::Monthly;
    pub const YEARLY: Recurrence = Recurrence::Yearly;

    /// Recurrence on a set of weekdays.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidRecurrence`] if `days` is empty.
    pub fn on_days(days: DaySet) -> Result<Recurrence> {
        if days.is_empty() {
            return Err(RecurrenceError::InvalidRecurrence(
                "day-of-week list is empty".to_string(),
            ));
        }
        let recurrence = match days {
            DaySet::ALL => Recurrence::Everyday,
            DaySet::WEEKDAYS => Recurrence::Weekdays,
            _ => Recurrence::DayOfWeekList(DayOfWeekList { days }),
        };
        Ok(recurrence)
    }

    /// Recurrence in a set of months.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidRecurrence`] if `months` is empty.
    pub fn in_months(months: MonthSet) -> Result<Recurrence> {
        if months.is_empty() {
            return Err(RecurrenceError::InvalidRecurrence(
                "month list is empty".to_string(),
            ));
        }
        let recurrence = match months {
            MonthSet::ALL => Recurrence::Monthly,
            _ => Recurrence::MonthList(MonthList { months }),
        };
        Ok(recurrence)
    }

    /// Recurrence every `increment` units of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidRecurrence`] if `increment` is 0.
    pub fn every(increment: u32, field: CalendarField) -> Result<Recurrence> {
        check_increment(increment)?;
        let recurrence = match (increment, field) {
            (1, CalendarField::DayOfMonth) => Recurrence::Everyday,
            (1, CalendarField::WeekOfYear) => Recurrence::Weekly,
            (1, CalendarField::Month) => Recurrence::Monthly,
            (12, CalendarField::Month) => Recurrence::Yearly,
            (1, CalendarField::Year) => Recurrence::Yearly,
            _ => Recurrence::Every(Every { increment, field }),
        };
        Ok(recurrence)
    }

    /// Recurrence on every `increment`-th `day`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidRecurrence`] if `increment` is 0.
    pub fn every_day_of_week(increment: u32, day: Weekday) -> Result<Recurrence> {
        check_increment(increment)?;
        if increment == 1 {
            return Recurrence::on_days(DaySet::single(day));
        }
        Ok(Recurrence::EveryByDayOfWeek(EveryByDayOfWeek { increment, day }))
    }

    /// Recurrence in `month` every `increment` years.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidRecurrence`] if `increment` is 0.
    pub fn every_month(increment: u32, month: Month) -> Result<Recurrence> {
        check_increment(increment)?;
        if increment == 1 {
            return Recurrence::in_months(MonthSet::single(month));
        }
        Ok(Recurrence::EveryByMonth(EveryByMonth { increment, month }))
    }

    /// Whether this is one of the five unit patterns.
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            Recurrence::Everyday
                | Recurrence::Weekdays
                | Recurrence::Weekly
                | Recurrence::Monthly
                | Recurrence::Yearly
        )
    }
}

fn check_increment(increment: u32) -> Result<()> {
    if increment == 0 {
        return Err(RecurrenceError::InvalidRecurrence(
            "increment must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Everyday => f.write_str("everyday"),
            Recurrence::Weekdays => f.write_str("weekdays"),
            Recurrence::Weekly => f.write_str("weekly"),
            Recurrence::Monthly => f.write_str("monthly"),
            Recurrence::Yearly => f.write_str("yearly"),
            Recurrence::DayOfWeekList(list) => write!(f, "on {}", list.days),
            Recurrence::MonthList(list) => write!(f, "in {}", list.months),
            Recurrence::Every(every) => {
                write!(f, "every {} {}s", every.increment, every.field.unit_name())
            }
            Recurrence::EveryByDayOfWeek(every) => {
                write!(f, "every {} {}s", every.increment, day_name(every.day))
            }
            Recurrence::EveryByMonth(every) => {
                write!(f, "every {} {}s", every.increment, month_name(every.month))
            }
        }
    }
}

// ── Serde representation ────────────────────────────────────────────────────

/// Stored form of a [`Recurrence`]. Converting back runs the canonicalizing
/// constructors, so hand-written or legacy records are normalized on load.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RecurrenceRepr {
    Everyday,
    Weekdays,
    Weekly,
    Monthly,
    Yearly,
    DayOfWeekList { days: DaySet },
    MonthList { months: MonthSet },
    Every { increment: u32, field: CalendarField },
    EveryByDayOfWeek { increment: u32, day: Weekday },
    EveryByMonth { increment: u32, month: Month },
}

impl TryFrom<RecurrenceRepr> for Recurrence {
    type Error = RecurrenceError;

    fn try_from(repr: RecurrenceRepr) -> Result<Self> {
        match repr {
            RecurrenceRepr::Everyday => Ok(Recurrence::Everyday),
            RecurrenceRepr::Weekdays => Ok(Recurrence::Weekdays),
            RecurrenceRepr::Weekly => Ok(Recurrence::Weekly),
            RecurrenceRepr::Monthly => Ok(Recurrence::Monthly),
            RecurrenceRepr::Yearly => Ok(Recurrence::Yearly),
            RecurrenceRepr::DayOfWeekList { days } => Recurrence::on_days(days),
            RecurrenceRepr::MonthList { months } => Recurrence::in_months(months),
            RecurrenceRepr::Every { increment, field } => Recurrence::every(increment, field),
            RecurrenceRepr::EveryByDayOfWeek { increment, day } => {
                Recurrence::every_day_of_week(increment, day)
            }
            RecurrenceRepr::EveryByMonth { increment, month } => {
                Recurrence::every_month(increment, month)
            }
        }
    }
}

impl From<Recurrence> for RecurrenceRepr {
    fn from(recurrence: Recurrence) -> Self {
        match recurrence {
            Recurrence::Everyday => RecurrenceRepr::Everyday,
            Recurrence::Weekdays => RecurrenceRepr::Weekdays,
            Recurrence::Weekly => RecurrenceRepr::Weekly,
            Recurrence::Monthly => RecurrenceRepr::Monthly,
            Recurrence::Yearly => RecurrenceRepr::Yearly,
            Recurrence::DayOfWeekList(list) => RecurrenceRepr::DayOfWeekList { days: list.days },
            Recurrence::MonthList(list) => RecurrenceRepr::MonthList {
                months: list.months,
            },
            Recurrence::Every(every) => RecurrenceRepr::Every {
                increment: every.increment,
                field: every.field,
            },
            Recurrence::EveryByDayOfWeek(every) => RecurrenceRepr::EveryByDayOfWeek {
                increment: every.increment,
                day: every.day,
            },
            Recurrence::EveryByMonth(every) => RecurrenceRepr::EveryByMonth {
                increment: every.increment,
                month: every.month,
            },
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday::*;

    fn days(list: &[Weekday]) -> DaySet {
        list.iter().copied().collect()
    }

    // ── set tests ───────────────────────────────────────────────────────

    #[test]
    fn test_day_set_constants() {
        assert_eq!(days(&[Mon, Tue, Wed, Thu, Fri, Sat, Sun]), DaySet::ALL);
        assert_eq!(days(&[Fri, Thu, Wed, Tue, Mon]), DaySet::WEEKDAYS);
        assert_eq!(DaySet::ALL.len(), 7);
        assert!(DaySet::EMPTY.is_empty());
    }

    #[test]
    fn test_day_set_insert_reports_new() {
        let mut set = DaySet::single(Mon);
        assert!(set.insert(Sat));
        assert!(!set.insert(Sat));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Mon, Sat]);
    }

    #[test]
    fn test_month_set_all_and_membership() {
        let all: MonthSet = YEAR.into_iter().collect();
        assert_eq!(all, MonthSet::ALL);
        let set = MonthSet::single(Month::March);
        assert!(set.contains(Month::March));
        assert!(set.contains_number(3));
        assert!(!set.contains_number(4));
        assert!(!set.contains_number(0));
        assert!(!set.contains_number(13));
    }

    #[test]
    fn test_set_display_is_ordered() {
        assert_eq!(days(&[Sun, Mon]).to_string(), "monday, sunday");
        let months: MonthSet = [Month::December, Month::January].into_iter().collect();
        assert_eq!(months.to_string(), "january, december");
    }

    // ── canonicalization tests ──────────────────────────────────────────

    #[test]
    fn test_on_all_days_is_everyday() {
        assert_eq!(Recurrence::on_days(DaySet::ALL).unwrap(), Recurrence::EVERYDAY);
    }

    #[test]
    fn test_on_mon_to_fri_is_weekdays() {
        let r = Recurrence::on_days(days(&[Wed, Mon, Fri, Tue, Thu])).unwrap();
        assert_eq!(r, Recurrence::WEEKDAYS);
        assert!(r.is_singleton());
    }

    #[test]
    fn test_on_partial_week_is_list() {
        let r = Recurrence::on_days(days(&[Mon, Fri])).unwrap();
        match r {
            Recurrence::DayOfWeekList(list) => assert_eq!(list.days(), days(&[Mon, Fri])),
            other => panic!("expected DayOfWeekList, got {other:?}"),
        }
        assert!(!r.is_singleton());
    }

    #[test]
    fn test_empty_sets_rejected() {
        assert!(Recurrence::on_days(DaySet::EMPTY).is_err());
        assert!(Recurrence::in_months(MonthSet::EMPTY).is_err());
    }

    #[test]
    fn test_all_months_is_monthly() {
        assert_eq!(Recurrence::in_months(MonthSet::ALL).unwrap(), Recurrence::MONTHLY);
    }

    #[test]
    fn test_every_one_collapses_to_singletons() {
        assert_eq!(
            Recurrence::every(1, CalendarField::DayOfMonth).unwrap(),
            Recurrence::EVERYDAY
        );
        assert_eq!(
            Recurrence::every(1, CalendarField::WeekOfYear).unwrap(),
            Recurrence::WEEKLY
        );
        assert_eq!(Recurrence::every(1, CalendarField::Month).unwrap(), Recurrence::MONTHLY);
        assert_eq!(Recurrence::every(1, CalendarField::Year).unwrap(), Recurrence::YEARLY);
    }

    #[test]
    fn test_every_twelve_months_is_yearly() {
        assert_eq!(Recurrence::every(12, CalendarField::Month).unwrap(), Recurrence::YEARLY);
        // Twelve of any other unit stays general.
        assert!(matches!(
            Recurrence::every(12, CalendarField::DayOfMonth).unwrap(),
            Recurrence::Every(_)
        ));
    }

    #[test]
    fn test_zero_increment_rejected() {
        let err = Recurrence::every(0, CalendarField::Month).unwrap_err();
        assert!(err.to_string().contains("increment"), "got: {err}");
        assert!(Recurrence::every_day_of_week(0, Mon).is_err());
        assert!(Recurrence::every_month(0, Month::May).is_err());
    }

    #[test]
    fn test_every_one_weekday_is_single_day_list() {
        let r = Recurrence::every_day_of_week(1, Tue).unwrap();
        assert_eq!(r, Recurrence::on_days(DaySet::single(Tue)).unwrap());
    }

    #[test]
    fn test_every_one_month_name_is_single_month_list() {
        let r = Recurrence::every_month(1, Month::June).unwrap();
        assert_eq!(r, Recurrence::in_months(MonthSet::single(Month::June)).unwrap());
    }

    // ── display tests ───────────────────────────────────────────────────

    #[test]
    fn test_display_canonical_phrases() {
        assert_eq!(Recurrence::EVERYDAY.to_string(), "everyday");
        assert_eq!(
            Recurrence::on_days(days(&[Fri, Mon])).unwrap().to_string(),
            "on monday, friday"
        );
        assert_eq!(
            Recurrence::every(3, CalendarField::DayOfMonth).unwrap().to_string(),
            "every 3 days"
        );
        assert_eq!(
            Recurrence::every(2, CalendarField::WeekOfYear).unwrap().to_string(),
            "every 2 weeks"
        );
        assert_eq!(
            Recurrence::every_day_of_week(2, Mon).unwrap().to_string(),
            "every 2 mondays"
        );
        assert_eq!(
            Recurrence::every_month(3, Month::February).unwrap().to_string(),
            "every 3 februarys"
        );
    }

    // ── serde tests ─────────────────────────────────────────────────────

    #[test]
    fn test_serde_tagged_shape() {
        let r = Recurrence::every(2, CalendarField::DayOfMonth).unwrap();
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "every", "increment": 2, "field": "day_of_month"})
        );
        let back: Recurrence = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_serde_singleton_shape() {
        let json = serde_json::to_string(&Recurrence::WEEKDAYS).unwrap();
        assert_eq!(json, r#"{"kind":"weekdays"}"#);
    }

    #[test]
    fn test_serde_canonicalizes_stored_lists() {
        let stored = r#"{"kind":"day_of_week_list","days":["Sun","Sat","Fri","Thu","Wed","Tue","Mon"]}"#;
        let r: Recurrence = serde_json::from_str(stored).unwrap();
        assert_eq!(r, Recurrence::EVERYDAY);
    }

    #[test]
    fn test_serde_rejects_invalid_records() {
        let empty = r#"{"kind":"month_list","months":[]}"#;
        assert!(serde_json::from_str::<Recurrence>(empty).is_err());
        let zero = r#"{"kind":"every","increment":0,"field":"year"}"#;
        assert!(serde_json::from_str::<Recurrence>(zero).is_err());
    }
}
