//! Unit tests for the `Day` value type.
//!
//! Covers validity, the two parsing policies, day arithmetic with
//! carry and end-of-month preservation, weekday math, comparisons,
//! range clamping, and formatting.

use chrono::TimeZone;
use kalends::calendar::{DateMode, DateParseError, Day, DayOffset, Month, RawDateParts, Year};
use rstest::rstest;

fn months(count: i32) -> DayOffset {
    DayOffset {
        months: count,
        ..DayOffset::default()
    }
}

fn days(count: i32) -> DayOffset {
    DayOffset {
        days: count,
        ..DayOffset::default()
    }
}

// =============================================================================
// Validity
// =============================================================================

#[rstest]
#[case(2024, 1, 29)]
#[case(2000, 1, 29)]
#[case(2023, 0, 31)]
#[case(2023, 3, 30)]
#[case(0, 0, 1)]
#[case(9999, 11, 31)]
fn is_valid_day_accepts_real_dates(#[case] year: i32, #[case] month: i32, #[case] day: i32) {
    assert!(Day::is_valid_day(year, month, day));
}

#[rstest]
#[case(2023, 1, 29)]
#[case(2100, 1, 29)]
#[case(2024, 3, 31)]
#[case(2024, 0, 0)]
#[case(2024, 0, 32)]
#[case(2024, 12, 1)]
#[case(-1, 0, 1)]
fn is_valid_day_rejects_impossible_dates(#[case] year: i32, #[case] month: i32, #[case] day: i32) {
    assert!(!Day::is_valid_day(year, month, day));
}

#[rstest]
fn try_new_carries_the_rejected_triple() {
    let error = Day::try_new(2021, 1, 30).unwrap_err();
    assert_eq!((error.year, error.month, error.day), (2021, 1, 30));
}

// =============================================================================
// Raw Parsing
// =============================================================================

#[rstest]
#[case("31.12.2024", DateMode::DdMmYyyy, RawDateParts { day: 31, month: 11, year: 2024 })]
#[case("12/31/2024", DateMode::MmDdYyyy, RawDateParts { day: 31, month: 11, year: 2024 })]
#[case("2024-12-31", DateMode::YyyyMmDd, RawDateParts { day: 31, month: 11, year: 2024 })]
#[case("99/99/9999", DateMode::DdMmYyyy, RawDateParts { day: 99, month: 98, year: 9999 })]
fn parse_raw_date_string_extracts_unnormalized_parts(
    #[case] text: &str,
    #[case] mode: DateMode,
    #[case] expected: RawDateParts,
) {
    assert_eq!(Day::parse_raw_date_string(text, mode).unwrap(), expected);
}

#[rstest]
#[case("1.1.2024")]
#[case("")]
#[case("31.12.20244")]
fn parse_raw_date_string_rejects_wrong_length(#[case] text: &str) {
    assert_eq!(
        Day::parse_raw_date_string(text, DateMode::DdMmYyyy).unwrap_err(),
        DateParseError::Length { actual: text.len() }
    );
}

#[rstest]
fn parse_raw_date_string_rejects_non_digits() {
    assert_eq!(
        Day::parse_raw_date_string("3a.12.2024", DateMode::DdMmYyyy).unwrap_err(),
        DateParseError::Digits { field: "day" }
    );
    assert_eq!(
        Day::parse_raw_date_string("31.1x.2024", DateMode::DdMmYyyy).unwrap_err(),
        DateParseError::Digits { field: "month" }
    );
}

// =============================================================================
// Permissive Parsing
// =============================================================================

#[rstest]
#[case("31/12/2024", DateMode::DdMmYyyy, Day::new(2024, 11, 31))]
#[case("02/29/2024", DateMode::MmDdYyyy, Day::new(2024, 1, 29))]
#[case("2024/01/05", DateMode::YyyyMmDd, Day::new(2024, 0, 5))]
// Out-of-range parts clamp instead of failing.
#[case("99/99/9999", DateMode::DdMmYyyy, Day::new(9999, 11, 31))]
#[case("00/00/0000", DateMode::DdMmYyyy, Day::new(0, 0, 1))]
#[case("30/02/2021", DateMode::DdMmYyyy, Day::new(2021, 1, 28))]
fn normalize_parse_repairs_out_of_range_components(
    #[case] text: &str,
    #[case] mode: DateMode,
    #[case] expected: Day,
) {
    assert_eq!(Day::normalize_parse(text, mode).unwrap(), expected);
}

#[rstest]
fn normalize_of_clamps_each_component_in_turn() {
    assert_eq!(Day::normalize_of(2024, 0, 5), Day::new(2024, 0, 5));
    assert_eq!(Day::normalize_of(-5, 13, 40), Day::new(0, 11, 31));
    assert_eq!(Day::normalize_of(2021, 1, 30), Day::new(2021, 1, 28));
}

#[rstest]
#[case(0, 0, 2024, 1)]
#[case(29, 1, 2024, 29)]
#[case(30, 1, 2024, 29)]
#[case(32, 0, 2024, 31)]
#[case(15, 5, 2024, 15)]
fn normalize_day_part_clamps_into_month(
    #[case] day: i32,
    #[case] month: i32,
    #[case] year: i32,
    #[case] expected: i32,
) {
    assert_eq!(Day::normalize_day_part(day, month, year), expected);
}

// =============================================================================
// Strict Parsing
// =============================================================================

#[rstest]
fn json_parse_reads_the_canonical_form() {
    assert_eq!(Day::json_parse("2024-01-05").unwrap(), Day::new(2024, 0, 5));
    assert_eq!(Day::json_parse("2024/02/29").unwrap(), Day::new(2024, 1, 29));
}

#[rstest]
fn json_parse_rejects_impossible_dates_with_the_triple() {
    let error = Day::json_parse("2021-02-30").unwrap_err();
    match error {
        DateParseError::InvalidDay(inner) => {
            assert_eq!((inner.year, inner.month, inner.day), (2021, 1, 30));
        }
        other => panic!("expected InvalidDay, got {other:?}"),
    }
}

#[rstest]
#[case("2021-2-30")]
#[case("2021-02-3")]
fn json_parse_rejects_malformed_text(#[case] text: &str) {
    assert!(matches!(
        Day::json_parse(text).unwrap_err(),
        DateParseError::Length { .. }
    ));
}

#[rstest]
fn json_round_trip_preserves_the_day() {
    let day = Day::new(2024, 1, 29);
    let parsed = Day::json_parse(&day.to_json_string()).unwrap();
    assert!(parsed.day_same(day));
}

// =============================================================================
// Day Arithmetic
// =============================================================================

#[rstest]
fn append_zero_offset_is_identity() {
    let day = Day::new(2024, 1, 29);
    assert_eq!(day.append(DayOffset::default()), day);
}

#[rstest]
#[case(Day::new(2023, 0, 31), Day::new(2023, 1, 28))]
#[case(Day::new(2024, 0, 31), Day::new(2024, 1, 29))]
#[case(Day::new(2024, 3, 30), Day::new(2024, 4, 31))]
#[case(Day::new(2024, 0, 15), Day::new(2024, 1, 15))]
#[case(Day::new(2024, 11, 31), Day::new(2025, 0, 31))]
fn append_one_month_preserves_end_of_month(#[case] start: Day, #[case] expected: Day) {
    assert_eq!(start.append(months(1)), expected);
}

#[rstest]
fn append_keeps_distance_from_month_end() {
    // Jan 29 is two days before the end of January; the result is two
    // days before the end of February.
    assert_eq!(Day::new(2023, 0, 29).append(months(1)), Day::new(2023, 1, 26));
}

#[rstest]
fn append_negative_month_lands_on_short_month_end() {
    assert_eq!(Day::new(2024, 2, 31).append(months(-1)), Day::new(2024, 1, 29));
    assert_eq!(Day::new(2023, 2, 31).append(months(-1)), Day::new(2023, 1, 28));
}

#[rstest]
#[case(Day::new(2024, 0, 31), 1, Day::new(2024, 1, 1))]
#[case(Day::new(2024, 1, 28), 1, Day::new(2024, 1, 29))]
#[case(Day::new(2024, 1, 28), 2, Day::new(2024, 2, 1))]
#[case(Day::new(2024, 11, 31), 1, Day::new(2025, 0, 1))]
#[case(Day::new(2025, 0, 1), -1, Day::new(2024, 11, 31))]
#[case(Day::new(2024, 2, 1), -1, Day::new(2024, 1, 29))]
#[case(Day::new(2000, 0, 1), 366, Day::new(2001, 0, 1))]
#[case(Day::new(2001, 0, 1), 365, Day::new(2002, 0, 1))]
fn append_days_carries_across_boundaries(
    #[case] start: Day,
    #[case] offset: i32,
    #[case] expected: Day,
) {
    assert_eq!(start.append(days(offset)), expected);
}

#[rstest]
fn append_combines_all_three_offsets() {
    let start = Day::new(2020, 0, 1);
    let offset = DayOffset {
        years: 1,
        months: 1,
        days: 1,
    };
    assert_eq!(start.append(offset), Day::new(2021, 1, 2));
}

#[rstest]
#[case(Day::new(2024, 0, 5), Day::new(2024, 0, 5), 0)]
#[case(Day::new(2024, 0, 5), Day::new(2024, 0, 6), 1)]
#[case(Day::new(2024, 0, 6), Day::new(2024, 0, 5), -1)]
#[case(Day::new(2024, 0, 1), Day::new(2024, 11, 31), 365)]
#[case(Day::new(2023, 0, 1), Day::new(2023, 11, 31), 364)]
#[case(Day::new(2024, 1, 28), Day::new(2024, 2, 1), 2)]
fn length_between_counts_whole_days(#[case] from: Day, #[case] to: Day, #[case] expected: i64) {
    assert_eq!(Day::length_between(from, to), expected);
}

// =============================================================================
// Weekdays
// =============================================================================

#[rstest]
fn day_of_week_matches_known_dates() {
    // 2024-01-05 was a Friday, 2000-01-01 a Saturday.
    assert_eq!(Day::new(2024, 0, 5).day_of_week(false), 5);
    assert_eq!(Day::new(2024, 0, 5).day_of_week(true), 4);
    assert_eq!(Day::new(2000, 0, 1).day_of_week(false), 6);
    assert_eq!(Day::new(2000, 0, 1).day_of_week(true), 5);
}

#[rstest]
fn day_of_week_cycles_over_a_week() {
    let monday = Day::new(2024, 0, 1);
    let collected: Vec<u32> = (0..7)
        .map(|offset| monday.append(days(offset)).day_of_week(true))
        .collect();
    assert_eq!(collected, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[rstest]
#[case(Day::new(2024, 0, 5), false)]
#[case(Day::new(2024, 0, 6), true)]
#[case(Day::new(2024, 0, 7), true)]
#[case(Day::new(2024, 0, 8), false)]
fn is_weekend_flags_saturday_and_sunday(#[case] day: Day, #[case] expected: bool) {
    assert_eq!(day.is_weekend(), expected);
}

// =============================================================================
// Comparison and Clamping
// =============================================================================

#[rstest]
fn comparisons_order_month_first_day_second() {
    let early = Day::new(2024, 0, 31);
    let late = Day::new(2024, 1, 1);
    let late_again = Day::new(2024, 1, 1);

    assert!(early.day_before(late));
    assert!(early.day_same_or_before(late));
    assert!(late.day_same(late_again));
    assert!(late.day_same_or_after(early));
    assert!(late.day_after(early));
    assert!(!late.day_before(early));
    assert!(!early.day_same(late));
}

#[rstest]
fn day_limit_with_no_bounds_is_identity() {
    let day = Day::new(2024, 5, 15);
    assert_eq!(day.day_limit(None, None), day);
}

#[rstest]
fn day_limit_clamps_to_bounds() {
    let min = Day::new(2024, 0, 10);
    let max = Day::new(2024, 0, 20);

    assert_eq!(Day::new(2024, 0, 5).day_limit(Some(min), Some(max)), min);
    assert_eq!(Day::new(2024, 0, 25).day_limit(Some(min), Some(max)), max);
    assert_eq!(Day::new(2024, 0, 15).day_limit(Some(min), Some(max)), Day::new(2024, 0, 15));
    assert_eq!(Day::new(2024, 0, 5).day_limit(None, Some(max)), Day::new(2024, 0, 5));
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
#[case(DateMode::DdMmYyyy, '.', "05.01.2024")]
#[case(DateMode::YyyyMmDd, '-', "2024-01-05")]
#[case(DateMode::MmDdYyyy, '/', "01/05/2024")]
fn get_formatted_day_renders_each_layout(
    #[case] mode: DateMode,
    #[case] separator: char,
    #[case] expected: &str,
) {
    assert_eq!(Day::new(2024, 0, 5).get_formatted_day(mode, separator), expected);
}

#[rstest]
fn display_defaults_to_dotted_day_first() {
    assert_eq!(format!("{}", Day::new(2024, 0, 5)), "05.01.2024");
}

#[rstest]
fn json_string_is_always_year_first() {
    assert_eq!(Day::new(2024, 0, 5).to_json_string(), "2024-01-05");
    assert_eq!(Day::new(5, 8, 9).to_json_string(), "0005-09-09");
}

// =============================================================================
// Native Date Interop
// =============================================================================

#[rstest]
fn from_utc_native_date_extracts_utc_parts() {
    let timestamp = chrono::Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
    assert_eq!(Day::from_utc_native_date(timestamp), Day::new(2024, 0, 5));
}

#[rstest]
fn local_and_utc_calendars_stay_within_a_day() {
    // Near midnight UTC the local calendar may be on the neighboring
    // day, but never further away.
    let timestamp = chrono::Utc.with_ymd_and_hms(2024, 1, 5, 0, 30, 0).unwrap();
    let utc_day = Day::from_utc_native_date(timestamp);
    let local_day = Day::from_local_native_date(timestamp);
    assert!(Day::length_between(utc_day, local_day).abs() <= 1);
}

#[rstest]
fn to_naive_date_round_trips_through_chrono() {
    let day = Day::new(2024, 1, 29);
    let native = day.to_naive_date();
    let timestamp = native.and_hms_opt(12, 0, 0).unwrap().and_utc();
    assert_eq!(Day::from_utc_native_date(timestamp), day);
}

#[rstest]
fn current_utc_produces_a_plausible_date() {
    let today = Day::current_utc();
    assert!(today.as_year().year() >= 2024);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn day_converts_into_month_and_year() {
    let day = Day::new(2024, 6, 15);
    assert_eq!(Month::from(day), Month::new(2024, 6));
    assert_eq!(Year::from(day), Year::new(2024));
    assert_eq!(day.as_month().month(), 6);
}
