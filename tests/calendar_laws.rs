//! Property-based tests for the calendar and clock arithmetic laws.
//!
//! The interesting invariants here are the ones unit tables cannot
//! exhaust:
//!
//! ## Day Laws
//! - **Zero Identity**: `day.append(default) == day`
//! - **End-of-Month Preservation**: appending one month to the last
//!   day of a month yields the last day of the following month
//! - **Successor Consistency**: `append({days: 1})` advances the date
//!   by exactly one day and one weekday slot
//! - **Round Trip**: `Day::json_parse(day.to_json_string()) == day`
//! - **Trichotomy**: exactly one of before/same/after holds
//! - **Clamping**: `day_limit` always lands inside its bounds
//!
//! ## Month Laws
//! - **Append Inverse**: appending `k` months then `-k` months is the
//!   identity
//! - **Length Consistency**: `length_between(m, m.append(k)) == k`
//!
//! ## Time Laws
//! - **Cascade Equivalence**: shifting by milliseconds equals
//!   re-decomposing the wrapped absolute total
//! - **Shift Inverse**: shifting by an offset and back is the identity
//!   for times of day
//!
//! Using proptest, random values exercise these laws across the whole
//! supported range.

use kalends::calendar::{DateMode, Day, DayOffset, Month, MonthOffset, Year};
use kalends::clock::{MILLISECONDS_IN_DAY, Time, TimeOffset};
use proptest::prelude::*;

/// Any valid calendar day: the month range is picked first, the day
/// range follows from the month's length.
fn arb_day() -> impl Strategy<Value = Day> {
    (0..=9999i32, 0..12i32)
        .prop_flat_map(|(year, month)| {
            let count = Month::days_in_month(month, Year::is_leap_year(year));
            (Just(year), Just(month), 1..=count)
        })
        .prop_map(|(year, month, day)| Day::new(year, month, day))
}

/// Any valid month, kept away from the year bounds so bounded offsets
/// cannot push it out of range.
fn arb_inner_month() -> impl Strategy<Value = Month> {
    (1000..9000i32, 0..12i32).prop_map(|(year, month)| Month::new(year, month))
}

/// Any genuine time of day.
fn arb_time() -> impl Strategy<Value = Time> {
    (0..24u32, 0..60u32, 0..60u32, 0..1000u32)
        .prop_map(|(hours, minutes, seconds, ms)| Time::new(hours, minutes, seconds, ms))
}

// =============================================================================
// Day Laws
// =============================================================================

proptest! {
    // `prop_append_month_preserves_month_end` keeps only month-end days
    // (~3% of generated days), so the default global-reject budget of 1024
    // is exhausted before 256 cases accumulate. Raise it so the block runs.
    #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]

    /// Zero Identity: appending an empty offset changes nothing.
    #[test]
    fn prop_append_zero_is_identity(day in arb_day()) {
        prop_assert_eq!(day.append(DayOffset::default()), day);
    }

    /// End-of-Month Preservation: the last day of a month maps to the
    /// last day of the next month, whatever their lengths.
    #[test]
    fn prop_append_month_preserves_month_end(day in arb_day()) {
        prop_assume!(day.year() < 9999);
        prop_assume!(day.day() == day.as_month().day_count());

        let offset = DayOffset { months: 1, ..DayOffset::default() };
        let next = day.append(offset);

        prop_assert_eq!(Month::length_between(day.as_month(), next.as_month()), 1);
        prop_assert_eq!(next.day(), next.as_month().day_count());
    }

    /// Successor Consistency: one day forward is one day of distance,
    /// a strict ordering step, and the next weekday slot.
    #[test]
    fn prop_append_one_day_is_successor(day in arb_day()) {
        prop_assume!(day.year() < 9999 || day.month() < 11 || day.day() < 31);

        let next = day.append(DayOffset { days: 1, ..DayOffset::default() });

        prop_assert_eq!(Day::length_between(day, next), 1);
        prop_assert!(day.day_before(next));
        prop_assert_eq!(next.day_of_week(true), (day.day_of_week(true) + 1) % 7);
    }

    /// Round Trip: the canonical string parses back to the same day.
    #[test]
    fn prop_json_round_trip(day in arb_day()) {
        let parsed = Day::json_parse(&day.to_json_string()).unwrap();
        prop_assert!(parsed.day_same(day));
    }

    /// Permissive parsing of an already-valid string is lossless.
    #[test]
    fn prop_normalize_parse_is_lossless_on_valid_input(day in arb_day()) {
        let text = day.get_formatted_day(DateMode::DdMmYyyy, '/');
        let parsed = Day::normalize_parse(&text, DateMode::DdMmYyyy).unwrap();
        prop_assert_eq!(parsed, day);
    }

    /// Normalizing components of a valid day reproduces it.
    #[test]
    fn prop_normalize_of_fixes_valid_days(day in arb_day()) {
        prop_assert_eq!(Day::normalize_of(day.year(), day.month(), day.day()), day);
    }

    /// Trichotomy: exactly one of before/same/after holds.
    #[test]
    fn prop_day_comparison_trichotomy(left in arb_day(), right in arb_day()) {
        let relations = [
            left.day_before(right),
            left.day_same(right),
            left.day_after(right),
        ];
        prop_assert_eq!(relations.iter().filter(|held| **held).count(), 1);
        prop_assert_eq!(left.day_same_or_before(right), !left.day_after(right));
        prop_assert_eq!(left.day_same_or_after(right), !left.day_before(right));
    }

    /// Clamping: the result always lies inside the given bounds.
    #[test]
    fn prop_day_limit_lands_inside_bounds(day in arb_day(), a in arb_day(), b in arb_day()) {
        let (min, max) = if a.day_same_or_before(b) { (a, b) } else { (b, a) };
        let clamped = day.day_limit(Some(min), Some(max));

        prop_assert!(clamped.day_same_or_after(min));
        prop_assert!(clamped.day_same_or_before(max));
        prop_assert_eq!(day.day_limit(None, None), day);
    }

    /// Weekday indices stay in range in both numbering schemes.
    #[test]
    fn prop_day_of_week_is_an_index(day in arb_day()) {
        prop_assert!(day.day_of_week(true) < 7);
        prop_assert!(day.day_of_week(false) < 7);
    }
}

// =============================================================================
// Month Laws
// =============================================================================

proptest! {
    /// Append Inverse: `k` months forward then back is the identity.
    #[test]
    fn prop_month_append_inverse(month in arb_inner_month(), k in -600..600i32) {
        let there = month.append(MonthOffset { months: k, ..MonthOffset::default() });
        let back = there.append(MonthOffset { months: -k, ..MonthOffset::default() });
        prop_assert_eq!(back, month);
    }

    /// Length Consistency: the distance to an appended month is the
    /// offset that produced it.
    #[test]
    fn prop_month_length_matches_offset(month in arb_inner_month(), k in -600..600i32) {
        let there = month.append(MonthOffset { months: k, ..MonthOffset::default() });
        prop_assert_eq!(Month::length_between(month, there), k);
    }
}

// =============================================================================
// Time Laws
// =============================================================================

proptest! {
    /// Cascade Equivalence: a millisecond shift equals decomposing the
    /// wrapped absolute total, so per-unit overflow always carries.
    #[test]
    fn prop_shift_matches_absolute_arithmetic(
        time in arb_time(),
        offset in -200_000_000..200_000_000i64,
    ) {
        let shifted = time.shift(TimeOffset { ms: offset, ..TimeOffset::default() });

        let day_length = i64::from(MILLISECONDS_IN_DAY);
        let total = i64::try_from(time.to_absolute_milliseconds()).unwrap() + offset;
        let expected = Time::from_absolute_milliseconds(total.rem_euclid(day_length).unsigned_abs());

        prop_assert_eq!(shifted, expected);
    }

    /// Shift Inverse: any bounded offset and its negation cancel for
    /// genuine times of day.
    #[test]
    fn prop_shift_inverse(
        time in arb_time(),
        hours in -100..100i64,
        minutes in -1000..1000i64,
        seconds in -10_000..10_000i64,
        ms in -1_000_000..1_000_000i64,
    ) {
        let offset = TimeOffset { hours, minutes, seconds, ms };
        let inverse = TimeOffset {
            hours: -hours,
            minutes: -minutes,
            seconds: -seconds,
            ms: -ms,
        };
        prop_assert_eq!(time.shift(offset).shift(inverse), time);
    }

    /// Shifting never produces anything but a genuine time of day.
    #[test]
    fn prop_shift_stays_within_a_day(
        time in arb_time(),
        hours in -100..100i64,
        minutes in -1000..1000i64,
    ) {
        let shifted = time.shift(TimeOffset { hours, minutes, ..TimeOffset::default() });
        prop_assert!(shifted.is_valid_time_of_day());
    }

    /// Ordering agrees with the absolute-millisecond value.
    #[test]
    fn prop_time_order_matches_milliseconds(left in arb_time(), right in arb_time()) {
        prop_assert_eq!(
            left.cmp(&right),
            left.to_absolute_milliseconds().cmp(&right.to_absolute_milliseconds())
        );
    }
}
