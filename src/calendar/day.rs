//! Calendar day: a full date with carry-correct arithmetic, parsing,
//! and formatting.
//!
//! [`Day`] embeds a [`Month`] (which embeds a [`Year`]) and adds a
//! one-based day of month. The interesting part is [`Day::append`]:
//! day arithmetic that carries across month and year boundaries and
//! preserves end-of-month semantics, so that appending whole months to
//! the last day of a month lands on the last day of the target month
//! instead of overflowing into the next one.
//!
//! Three fixed-width string layouts are supported for parsing and
//! formatting, selected by [`DateMode`]. Parsing comes in two
//! flavors with deliberately different error policies:
//!
//! - [`Day::normalize_parse`] repairs out-of-range components by
//!   clamping them into the nearest valid value;
//! - [`Day::json_parse`] rejects impossible dates with an
//!   [`InvalidDayError`] carrying the offending components.
//!
//! # Examples
//!
//! ```rust
//! use kalends::calendar::{DateMode, Day, DayOffset};
//!
//! let day = Day::new(2024, 0, 5);
//! assert_eq!(day.get_formatted_day(DateMode::DdMmYyyy, '.'), "05.01.2024");
//! assert_eq!(day.get_formatted_day(DateMode::YyyyMmDd, '-'), "2024-01-05");
//!
//! let tomorrow = day.append(DayOffset {
//!     days: 1,
//!     ..DayOffset::default()
//! });
//! assert!(tomorrow.day_after(day));
//! ```

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

use super::error::{DateParseError, InvalidDayError};
use super::month::{MONTHS_IN_YEAR, Month, MonthNumber, carry_months};
use super::year::{Year, is_leap_year_wide};

/// The smallest valid day-of-month number.
pub const MIN_DAY: i32 = 1;

/// Byte length of the fixed-width date strings accepted by the
/// parsing functions, e.g. `"31.12.2024"`.
pub const DATE_FILLER_LENGTH: usize = 10;

/// Cumulative day counts before each zero-based month in a non-leap
/// year; leap years add one from March onward.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Component order of a fixed-width date string.
///
/// The separator characters themselves are not inspected by the
/// parsers; only the digit positions matter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateMode {
    /// `dd/mm/yyyy` — day first. The default.
    #[default]
    DdMmYyyy,
    /// `mm/dd/yyyy` — month first.
    MmDdYyyy,
    /// `yyyy/mm/dd` — year first.
    YyyyMmDd,
}

impl DateMode {
    /// The mask-style name of the layout.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DdMmYyyy => "dd/mm/yyyy",
            Self::MmDdYyyy => "mm/dd/yyyy",
            Self::YyyyMmDd => "yyyy/mm/dd",
        }
    }
}

impl fmt::Display for DateMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Weekday indices in Sunday-first order, as produced by
/// [`Day::day_of_week`] with `start_from_monday = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    /// Index 0 in Sunday-first order.
    Sunday = 0,
    /// Index 1 in Sunday-first order.
    Monday,
    /// Index 2 in Sunday-first order.
    Tuesday,
    /// Index 3 in Sunday-first order.
    Wednesday,
    /// Index 4 in Sunday-first order.
    Thursday,
    /// Index 5 in Sunday-first order.
    Friday,
    /// Index 6 in Sunday-first order.
    Saturday,
}

/// Signed year, month, and day offsets for [`Day::append`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DayOffset {
    /// Whole years to add; may be negative.
    pub years: i32,
    /// Whole months to add; may be negative.
    pub months: i32,
    /// Whole days to add; may be negative.
    pub days: i32,
}

/// Raw, unnormalized components extracted from a date string.
///
/// The month is already converted to zero-based, but no range checking
/// has happened yet; [`Day::normalize_parse`] clamps these and
/// [`Day::json_parse`] validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDateParts {
    /// One-based day, as written in the string.
    pub day: i32,
    /// Zero-based month.
    pub month: i32,
    /// Year, as written in the string.
    pub year: i32,
}

/// An immutable calendar date: a valid [`Month`] plus a one-based day
/// that exists in that month, leap years accounted for.
///
/// Ordering compares the month first (year, then month) and the day as
/// final tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    month: Month,
    day: i32,
}

impl Day {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a day, asserting validity in debug builds only.
    ///
    /// Use [`Day::try_new`] for untrusted input.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        debug_assert!(Self::is_valid_day(year, month, day));
        Self {
            month: Month::new(year, month),
            day,
        }
    }

    /// Creates a day from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDayError`] carrying the attempted components if
    /// they do not form a real calendar date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::Day;
    ///
    /// assert!(Day::try_new(2024, 1, 29).is_ok());
    /// assert!(Day::try_new(2023, 1, 29).is_err());
    /// ```
    pub const fn try_new(year: i32, month: i32, day: i32) -> Result<Self, InvalidDayError> {
        if Self::is_valid_day(year, month, day) {
            Ok(Self {
                month: Month::new(year, month),
                day,
            })
        } else {
            Err(InvalidDayError { year, month, day })
        }
    }

    /// The calendar date of `timestamp` in the local timezone.
    ///
    /// Near a timezone boundary this differs from
    /// [`Day::from_utc_native_date`] for the same timestamp.
    pub fn from_local_native_date(timestamp: DateTime<Utc>) -> Self {
        let local = timestamp.with_timezone(&Local);

        Self::new(
            local.year(),
            local.month0().cast_signed(),
            local.day().cast_signed(),
        )
    }

    /// The calendar date of `timestamp` in UTC.
    pub fn from_utc_native_date(timestamp: DateTime<Utc>) -> Self {
        Self::new(
            timestamp.year(),
            timestamp.month0().cast_signed(),
            timestamp.day().cast_signed(),
        )
    }

    /// Today in the local timezone.
    pub fn current_local() -> Self {
        Self::from_local_native_date(Utc::now())
    }

    /// Today in UTC.
    pub fn current_utc() -> Self {
        Self::from_utc_native_date(Utc::now())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Returns `true` if the triple forms a real calendar date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::Day;
    ///
    /// assert!(Day::is_valid_day(2024, 1, 29));
    /// assert!(!Day::is_valid_day(2023, 1, 29));
    /// assert!(!Day::is_valid_day(2024, 3, 31));
    /// ```
    pub const fn is_valid_day(year: i32, month: i32, day: i32) -> bool {
        Month::is_valid_month(year, month)
            && day >= MIN_DAY
            && day <= Month::days_in_month(month, Year::is_leap_year(year))
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Extracts raw components from a fixed-width date string.
    ///
    /// The string must be exactly [`DATE_FILLER_LENGTH`] bytes and the
    /// component positions dictated by `mode` must hold decimal digits;
    /// the separator positions are ignored. No range checking happens
    /// here — the returned month is merely shifted to zero-based.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError::Length`] or [`DateParseError::Digits`]
    /// for malformed text.
    pub fn parse_raw_date_string(date: &str, mode: DateMode) -> Result<RawDateParts, DateParseError> {
        if date.len() != DATE_FILLER_LENGTH {
            return Err(DateParseError::Length { actual: date.len() });
        }

        match mode {
            DateMode::DdMmYyyy => Ok(RawDateParts {
                day: parse_date_field(date, 0, 2, "day")?,
                month: parse_date_field(date, 3, 5, "month")? - 1,
                year: parse_date_field(date, 6, 10, "year")?,
            }),
            DateMode::MmDdYyyy => Ok(RawDateParts {
                day: parse_date_field(date, 3, 5, "day")?,
                month: parse_date_field(date, 0, 2, "month")? - 1,
                year: parse_date_field(date, 6, 10, "year")?,
            }),
            DateMode::YyyyMmDd => Ok(RawDateParts {
                day: parse_date_field(date, 8, 10, "day")?,
                month: parse_date_field(date, 5, 7, "month")? - 1,
                year: parse_date_field(date, 0, 4, "year")?,
            }),
        }
    }

    /// Parses a date string permissively: components out of range are
    /// clamped into the nearest valid value, so any well-formed string
    /// yields a valid day.
    ///
    /// # Errors
    ///
    /// Only malformed text fails, with [`DateParseError::Length`] or
    /// [`DateParseError::Digits`]; out-of-range values never do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::{DateMode, Day};
    ///
    /// let repaired = Day::normalize_parse("99/99/9999", DateMode::DdMmYyyy).unwrap();
    /// assert_eq!(repaired, Day::new(9999, 11, 31));
    /// ```
    pub fn normalize_parse(date: &str, mode: DateMode) -> Result<Self, DateParseError> {
        let raw = Self::parse_raw_date_string(date, mode)?;

        Ok(Self::normalize_of(raw.year, raw.month, raw.day))
    }

    /// Parses a date string strictly in the `yyyy/mm/dd` layout and
    /// rejects impossible calendar dates.
    ///
    /// This is the inverse of [`Day::to_json_string`]; since separator
    /// positions are not inspected, both `2024-02-29` and `2024/02/29`
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError::InvalidDay`] carrying the attempted
    /// components when the triple is not a real date, or a
    /// `Length`/`Digits` error for malformed text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::{DateParseError, Day};
    ///
    /// assert_eq!(Day::json_parse("2024-02-29").unwrap(), Day::new(2024, 1, 29));
    ///
    /// let error = Day::json_parse("2021-02-30").unwrap_err();
    /// assert!(matches!(error, DateParseError::InvalidDay(inner)
    ///     if (inner.year, inner.month, inner.day) == (2021, 1, 30)));
    /// ```
    pub fn json_parse(date: &str) -> Result<Self, DateParseError> {
        let raw = Self::parse_raw_date_string(date, DateMode::YyyyMmDd)?;

        if Self::is_valid_day(raw.year, raw.month, raw.day) {
            Ok(Self::new(raw.year, raw.month, raw.day))
        } else {
            Err(InvalidDayError {
                year: raw.year,
                month: raw.month,
                day: raw.day,
            }
            .into())
        }
    }

    /// Builds a valid day from arbitrary components by clamping each
    /// one in turn: year, then month, then day within the resulting
    /// month. Never fails.
    pub const fn normalize_of(year: i32, month: i32, day: i32) -> Self {
        let year = Year::normalize_year_part(year);
        let month = Month::normalize_month_part(month);
        let day = Self::normalize_day_part(day, month, year);

        Self::new(year, month, day)
    }

    /// Clamps a day number into `1..=days_in_month` for the given
    /// month and year.
    pub const fn normalize_day_part(day: i32, month: i32, year: i32) -> i32 {
        debug_assert!(Month::is_valid_month(year, month));
        let count = Month::days_in_month(month, Year::is_leap_year(year));

        if day < MIN_DAY {
            MIN_DAY
        } else if day > count {
            count
        } else {
            day
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The numeric year value.
    #[inline]
    pub const fn year(self) -> i32 {
        self.month.year()
    }

    /// The zero-based month value.
    #[inline]
    pub const fn month(self) -> i32 {
        self.month.month()
    }

    /// The one-based day value.
    #[inline]
    pub const fn day(self) -> i32 {
        self.day
    }

    /// The embedded [`Month`] value.
    #[inline]
    pub const fn as_month(self) -> Month {
        self.month
    }

    /// The embedded [`Year`] value.
    #[inline]
    pub const fn as_year(self) -> Year {
        self.month.as_year()
    }

    // =========================================================================
    // Weekdays
    // =========================================================================

    /// The zero-based weekday index of this date.
    ///
    /// With `start_from_monday` the week runs Monday = 0 .. Sunday = 6;
    /// otherwise Sunday = 0 .. Saturday = 6 (the [`DayOfWeek`]
    /// indices).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_week(self, start_from_monday: bool) -> u32 {
        // 0000-01-01 is a Saturday in the proleptic Gregorian calendar.
        let native = (self.days_from_origin() + DayOfWeek::Saturday as i64).rem_euclid(7) as u32;

        if start_from_monday { (native + 6) % 7 } else { native }
    }

    /// Returns `true` if this date falls on Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        let day_of_week = self.day_of_week(false);

        day_of_week == DayOfWeek::Saturday as u32 || day_of_week == DayOfWeek::Sunday as u32
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Returns `true` if this day is strictly before `another`.
    pub fn day_before(self, another: Self) -> bool {
        self < another
    }

    /// Returns `true` if this day is before or equal to `another`.
    pub fn day_same_or_before(self, another: Self) -> bool {
        self <= another
    }

    /// Returns `true` if this day equals `another`.
    pub fn day_same(self, another: Self) -> bool {
        self == another
    }

    /// Returns `true` if this day is after or equal to `another`.
    pub fn day_same_or_after(self, another: Self) -> bool {
        self >= another
    }

    /// Returns `true` if this day is strictly after `another`.
    pub fn day_after(self, another: Self) -> bool {
        self > another
    }

    /// Clamps this day into `[min, max]`; `None` leaves that side
    /// unbounded.
    pub fn day_limit(self, min: Option<Self>, max: Option<Self>) -> Self {
        if let Some(min) = min
            && self.day_before(min)
        {
            return min;
        }

        if let Some(max) = max
            && self.day_after(max)
        {
            return max;
        }

        self
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Returns a new day shifted by the given offsets.
    ///
    /// Year and month offsets collapse into a total month count first,
    /// exactly as in [`Month::append`]. The day offset is then applied
    /// with end-of-month compensation: a day at or beyond the target
    /// month's length keeps its distance from the end of the month, so
    /// appending one month to January 31st yields the last day of
    /// February. Whatever day count remains is resolved by walking
    /// forward (or backward) a month at a time, carrying across year
    /// boundaries, until the day fits its month.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::{Day, DayOffset};
    ///
    /// let offset = DayOffset {
    ///     months: 1,
    ///     ..DayOffset::default()
    /// };
    /// assert_eq!(Day::new(2023, 0, 31).append(offset), Day::new(2023, 1, 28));
    /// assert_eq!(Day::new(2024, 0, 31).append(offset), Day::new(2024, 1, 29));
    /// // The short month stretches back out, too.
    /// assert_eq!(Day::new(2024, 3, 30).append(offset), Day::new(2024, 4, 31));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(self, offset: DayOffset) -> Self {
        let total_months = (i64::from(self.year()) + i64::from(offset.years))
            * i64::from(MONTHS_IN_YEAR)
            + i64::from(self.month())
            + i64::from(offset.months);
        let (years, months) = carry_months(total_months);

        let days = self.projected_day_count(i64::from(offset.days), years, months);
        let (days, years, months) = carry_days_forward(days, years, months);
        let (days, years, months) = borrow_days_backward(days, years, months);

        Self::new(years as i32, months, days as i32)
    }

    /// The provisional day count for [`Day::append`], compensating for
    /// this day's position relative to its month's end. Both month
    /// lengths are evaluated under the target year's leapness.
    fn projected_day_count(self, day_offset: i64, target_year: i64, target_month: i32) -> i64 {
        let leap = is_leap_year_wide(target_year);
        let target_count = i64::from(Month::days_in_month(target_month, leap));
        let current_count = i64::from(Month::days_in_month(self.month(), leap));
        let day = i64::from(self.day);

        if day >= target_count {
            // Keep the distance from month end when the target month is
            // no longer than the current one.
            return day_offset + day - (current_count - target_count);
        }

        if current_count < target_count && day == current_count {
            // Last day of a short month maps to the last day of the
            // longer target month.
            return day_offset + day + (target_count - current_count);
        }

        day_offset + day
    }

    /// The difference in whole days between two dates; positive when
    /// `to` is after `from`.
    pub fn length_between(from: Self, to: Self) -> i64 {
        to.days_from_origin() - from.days_from_origin()
    }

    /// Days elapsed since 0000-01-01 in the proleptic Gregorian
    /// calendar.
    #[allow(clippy::cast_sign_loss)]
    fn days_from_origin(self) -> i64 {
        let year = self.year();
        let mut days = i64::from(year) * 365 + i64::from(Year::absolute_leap_years(year));

        days += DAYS_BEFORE_MONTH[self.month() as usize];
        if self.as_year().is_leap() && self.month() >= MonthNumber::March as i32 {
            days += 1;
        }

        days + i64::from(self.day) - 1
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// The day as a two-digit zero-padded string.
    pub fn formatted_day_part(self) -> String {
        format!("{:02}", self.day)
    }

    /// Renders the date with the component order of `mode`, joined by
    /// `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::{DateMode, Day};
    ///
    /// let day = Day::new(2024, 0, 5);
    /// assert_eq!(day.get_formatted_day(DateMode::MmDdYyyy, '/'), "01/05/2024");
    /// ```
    pub fn get_formatted_day(self, mode: DateMode, separator: char) -> String {
        let dd = self.formatted_day_part();
        let mm = self.month.formatted_month_part();
        let yyyy = self.as_year().formatted_year();

        match mode {
            DateMode::MmDdYyyy => format!("{mm}{separator}{dd}{separator}{yyyy}"),
            DateMode::YyyyMmDd => format!("{yyyy}{separator}{mm}{separator}{dd}"),
            DateMode::DdMmYyyy => format!("{dd}{separator}{mm}{separator}{yyyy}"),
        }
    }

    /// The canonical `yyyy-mm-dd` serialization form, regardless of any
    /// display mode. [`Day::json_parse`] reads it back.
    pub fn to_json_string(self) -> String {
        format!("{}-{}", self.month.to_json_string(), self.formatted_day_part())
    }

    /// Converts into a [`chrono::NaiveDate`].
    ///
    /// # Panics
    ///
    /// Only if the value was built through the unchecked constructor
    /// with an invalid triple; days from [`Day::try_new`] and the
    /// parsing functions always convert.
    pub fn to_naive_date(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            self.year(),
            (self.month() + 1).unsigned_abs(),
            self.day.unsigned_abs(),
        )
        .expect("a valid calendar day always maps to a chrono date")
    }
}

impl fmt::Display for Day {
    /// Renders as `dd.mm.yyyy`, the default display layout.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.get_formatted_day(DateMode::DdMmYyyy, '.'))
    }
}

impl From<Day> for Month {
    fn from(day: Day) -> Self {
        day.as_month()
    }
}

impl From<Day> for Year {
    fn from(day: Day) -> Self {
        day.as_year()
    }
}

/// Parses the decimal digits at `date[start..end]`.
fn parse_date_field(
    date: &str,
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<i32, DateParseError> {
    date.get(start..end)
        .and_then(|text| text.parse::<i32>().ok())
        .ok_or(DateParseError::Digits { field })
}

/// Walks forward a month at a time while the day count overflows the
/// month it landed in, carrying December into January of the next year.
fn carry_days_forward(mut days: i64, mut years: i64, mut months: i32) -> (i64, i64, i32) {
    while days > i64::from(Month::days_in_month(months, is_leap_year_wide(years))) {
        days -= i64::from(Month::days_in_month(months, is_leap_year_wide(years)));

        if months == MonthNumber::December as i32 {
            years += 1;
            months = MonthNumber::January as i32;
        } else {
            months += 1;
        }
    }

    (days, years, months)
}

/// Walks backward a month at a time while the day count is below 1,
/// borrowing January from December of the previous year.
fn borrow_days_backward(mut days: i64, mut years: i64, mut months: i32) -> (i64, i64, i32) {
    while days < i64::from(MIN_DAY) {
        if months == MonthNumber::January as i32 {
            years -= 1;
            months = MonthNumber::December as i32;
        } else {
            months -= 1;
        }

        days += i64::from(Month::days_in_month(months, is_leap_year_wide(years)));
    }

    (days, years, months)
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_json_string())
    }
}

#[cfg(feature = "serde")]
struct DayVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for DayVisitor {
    type Value = Day;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a `yyyy-mm-dd` date string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Day, E>
    where
        E: serde::de::Error,
    {
        Day::json_parse(value).map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DayVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
