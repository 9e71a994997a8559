use chrono::{Datelike, Month, NaiveDate, Weekday};
use proptest::prelude::*;
use recurrence_engine::{
    check_schedule_from, days_in_month, parse_recurrence, schedule_iter, CalendarField, DaySet,
    MonthSet, Recurrence,
};

const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 .. ~2090
    (0i64..36500).prop_map(|days| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(days)
    })
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|i| Weekday::try_from(i).unwrap())
}

fn arb_month() -> impl Strategy<Value = Month> {
    (1u8..=12).prop_map(|i| Month::try_from(i).unwrap())
}

fn arb_field() -> impl Strategy<Value = CalendarField> {
    prop_oneof![
        Just(CalendarField::DayOfMonth),
        Just(CalendarField::WeekOfYear),
        Just(CalendarField::Month),
        Just(CalendarField::Year),
    ]
}

fn day_set(mask: u8) -> DaySet {
    (0u8..7)
        .filter(|i| mask & (1 << *i) != 0)
        .map(|i| Weekday::try_from(i).unwrap())
        .collect()
}

fn month_set(mask: u16) -> MonthSet {
    (0u8..12)
        .filter(|i| mask & (1 << *i) != 0)
        .map(|i| Month::try_from(i + 1).unwrap())
        .collect()
}

fn arb_recurrence() -> impl Strategy<Value = Recurrence> {
    prop_oneof![
        Just(Recurrence::EVERYDAY),
        Just(Recurrence::WEEKDAYS),
        Just(Recurrence::WEEKLY),
        Just(Recurrence::MONTHLY),
        Just(Recurrence::YEARLY),
        (1u8..128).prop_map(|mask| Recurrence::on_days(day_set(mask)).unwrap()),
        (1u16..4096).prop_map(|mask| Recurrence::in_months(month_set(mask)).unwrap()),
        (1u32..40, arb_field()).prop_map(|(n, field)| Recurrence::every(n, field).unwrap()),
        (1u32..10, arb_weekday())
            .prop_map(|(n, day)| Recurrence::every_day_of_week(n, day).unwrap()),
        (1u32..6, arb_month()).prop_map(|(n, month)| Recurrence::every_month(n, month).unwrap()),
    ]
}

proptest! {
    /// Every schedule is strictly ascending.
    #[test]
    fn schedule_strictly_ascends(r in arb_recurrence(), start in arb_date()) {
        let dates: Vec<NaiveDate> = schedule_iter(r, start).take(60).collect();
        prop_assert_eq!(dates.len(), 60);
        prop_assert!(dates[0] >= start, "{} starts before {}", r, start);
        for pair in dates.windows(2) {
            prop_assert!(pair[0] < pair[1], "{} not ascending: {} then {}", r, pair[0], pair[1]);
        }
    }

    /// Two iterators over the same inputs agree.
    #[test]
    fn schedule_is_restartable(r in arb_recurrence(), start in arb_date()) {
        let a: Vec<NaiveDate> = schedule_iter(r, start).take(40).collect();
        let b: Vec<NaiveDate> = schedule_iter(r, start).take(40).collect();
        prop_assert_eq!(a, b);
    }

    /// A date is an admissible anchor iff the schedule from it starts on it.
    #[test]
    fn validator_matches_first_element(r in arb_recurrence(), date in arb_date()) {
        let first = schedule_iter(r, date).next();
        prop_assert_eq!(
            check_schedule_from(r, date, "from").is_none(),
            first == Some(date),
            "{} from {}", r, date
        );
    }

    /// The canonical phrase parses back to the same value.
    #[test]
    fn display_reparses(r in arb_recurrence()) {
        let phrase = r.to_string();
        prop_assert_eq!(parse_recurrence(&phrase).unwrap(), r, "phrase {}", phrase);
    }

    /// Parsing never panics and is deterministic.
    #[test]
    fn parse_is_idempotent(text in "\\PC{0,40}") {
        prop_assert_eq!(parse_recurrence(&text), parse_recurrence(&text));
    }

    /// Any ordering and casing of the full week collapses to `Everyday`.
    #[test]
    fn full_week_canonicalizes(
        names in Just(DAY_NAMES.to_vec()).prop_shuffle(),
        upper in any::<bool>(),
    ) {
        let phrase = format!("on {}", names.join(", "));
        let phrase = if upper { phrase.to_uppercase() } else { phrase };
        prop_assert_eq!(parse_recurrence(&phrase).unwrap(), Recurrence::EVERYDAY);
    }

    /// Any ordering of Monday through Friday collapses to `Weekdays`.
    #[test]
    fn work_week_canonicalizes(names in Just(DAY_NAMES[..5].to_vec()).prop_shuffle()) {
        let phrase = format!("On {}", names.join(","));
        prop_assert_eq!(parse_recurrence(&phrase).unwrap(), Recurrence::WEEKDAYS);
    }

    /// Monthly re-applies the original anchor day, clamped, every month.
    #[test]
    fn monthly_reanchors(start in arb_date()) {
        for date in schedule_iter(Recurrence::MONTHLY, start).take(30) {
            let expected = start.day().min(days_in_month(date.year(), date.month()));
            prop_assert_eq!(date.day(), expected, "from {}", start);
        }
    }

    /// Month lists only ever land in listed months.
    #[test]
    fn month_list_stays_in_set(mask in 1u16..4095, start in arb_date()) {
        let months = month_set(mask);
        let r = Recurrence::in_months(months).unwrap();
        for date in schedule_iter(r, start).take(24) {
            prop_assert!(months.contains_number(date.month()), "{} outside {}", date, months);
        }
    }
}
