//! Calendar year with Gregorian leap-year arithmetic.
//!
//! [`Year`] is the innermost building block of the calendar types:
//! [`Month`](super::Month) embeds a `Year`, and [`Day`](super::Day)
//! embeds a `Month`. A year is valid in `0..=9999`, and leap years
//! follow the Gregorian rule: divisible by 4, except centuries that are
//! not divisible by 400.
//!
//! # Examples
//!
//! ```rust
//! use kalends::calendar::Year;
//!
//! assert!(Year::is_leap_year(2000));
//! assert!(!Year::is_leap_year(2100));
//!
//! let year = Year::new(2024);
//! assert_eq!(year.append_years(-25), Year::new(1999));
//! assert_eq!(format!("{year}"), "2024");
//! ```

use std::fmt;

use chrono::{Datelike, Local, Utc};

use super::error::InvalidYearError;

/// The smallest year a calendar value can hold.
pub const MIN_YEAR: i32 = 0;

/// The largest year a calendar value can hold.
pub const MAX_YEAR: i32 = 9999;

/// An immutable calendar year in `0..=9999`.
///
/// Ordering and equality follow the numeric year value.
///
/// # Examples
///
/// ```rust
/// use kalends::calendar::Year;
///
/// let year = Year::new(2000);
/// assert!(year.is_leap());
/// assert!(year.year_before(Year::new(2100)));
/// assert_eq!(year.formatted_year(), "2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year {
    year: i32,
}

impl Year {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a year, asserting validity in debug builds only.
    ///
    /// Use this fast path when the value is already known to be in
    /// range; use [`Year::try_new`] for untrusted input.
    pub const fn new(year: i32) -> Self {
        debug_assert!(Self::is_valid_year(year));
        Self { year }
    }

    /// Creates a year from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidYearError`] if `year` is outside `0..=9999`.
    pub const fn try_new(year: i32) -> Result<Self, InvalidYearError> {
        if Self::is_valid_year(year) {
            Ok(Self { year })
        } else {
            Err(InvalidYearError { year })
        }
    }

    /// The current year in the local timezone.
    pub fn current_local() -> Self {
        Self::new(Local::now().year())
    }

    /// The current year in UTC.
    pub fn current_utc() -> Self {
        Self::new(Utc::now().year())
    }

    // =========================================================================
    // Validation and Leap Years
    // =========================================================================

    /// Returns `true` if `year` lies within the supported range.
    #[inline]
    pub const fn is_valid_year(year: i32) -> bool {
        year >= MIN_YEAR && year <= MAX_YEAR
    }

    /// Returns `true` if `year` is a Gregorian leap year.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::Year;
    ///
    /// assert!(Year::is_leap_year(2020));
    /// assert!(Year::is_leap_year(2000));
    /// assert!(!Year::is_leap_year(2018));
    /// assert!(!Year::is_leap_year(2100));
    /// ```
    #[inline]
    pub const fn is_leap_year(year: i32) -> bool {
        is_leap_year_wide(year as i64)
    }

    /// Counts the leap years in `[0, year)`.
    ///
    /// Year 0 is itself a leap year and is counted for every
    /// `year >= 1`, so the count is
    /// `ceil(year / 4) - ceil(year / 100) + ceil(year / 400)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::Year;
    ///
    /// assert_eq!(Year::absolute_leap_years(5), 2); // years 0 and 4
    /// assert_eq!(Year::absolute_leap_years(2000), 485);
    /// assert_eq!(Year::absolute_leap_years(9999), 2425);
    /// ```
    pub const fn absolute_leap_years(year: i32) -> i32 {
        debug_assert!(Self::is_valid_year(year));
        (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400
    }

    /// Clamps an arbitrary integer into the valid year range.
    ///
    /// Values below 0 clamp to 0 and values above 9999 clamp to 9999;
    /// years never wrap around.
    pub const fn normalize_year_part(year: i32) -> i32 {
        if year < MIN_YEAR {
            MIN_YEAR
        } else if year > MAX_YEAR {
            MAX_YEAR
        } else {
            year
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The numeric year value.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns `true` if this year is a leap year.
    #[inline]
    pub const fn is_leap(self) -> bool {
        Self::is_leap_year(self.year)
    }

    /// Counts the leap years before this one, starting from year 0.
    #[inline]
    pub const fn leap_years_before(self) -> i32 {
        Self::absolute_leap_years(self.year)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Returns `true` if this year is strictly before `another`.
    pub fn year_before(self, another: Self) -> bool {
        self < another
    }

    /// Returns `true` if this year is before or equal to `another`.
    pub fn year_same_or_before(self, another: Self) -> bool {
        self <= another
    }

    /// Returns `true` if this year equals `another`.
    pub fn year_same(self, another: Self) -> bool {
        self == another
    }

    /// Returns `true` if this year is after or equal to `another`.
    pub fn year_same_or_after(self, another: Self) -> bool {
        self >= another
    }

    /// Returns `true` if this year is strictly after `another`.
    pub fn year_after(self, another: Self) -> bool {
        self > another
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Returns a new year shifted by `years`, which may be negative.
    ///
    /// The result is range-checked the same way direct construction is:
    /// a debug assertion, deferred to [`Year::try_new`] callers for
    /// untrusted offsets.
    pub const fn append_years(self, years: i32) -> Self {
        Self::new(self.year + years)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// The year as a four-digit zero-padded string.
    pub fn formatted_year(self) -> String {
        format!("{:04}", self.year)
    }

    /// The canonical `yyyy` serialization form, identical to
    /// [`Year::formatted_year`].
    pub fn to_json_string(self) -> String {
        self.formatted_year()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}", self.year)
    }
}

/// Gregorian leap-year rule over the wide integers used by day
/// arithmetic before its results are narrowed back into range.
pub(crate) const fn is_leap_year_wide(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Year {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.formatted_year())
    }
}

#[cfg(feature = "serde")]
struct YearVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for YearVisitor {
    type Value = Year;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a four-digit `yyyy` year string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Year, E>
    where
        E: serde::de::Error,
    {
        if value.len() != 4 {
            return Err(E::invalid_value(serde::de::Unexpected::Str(value), &self));
        }
        value
            .parse::<i32>()
            .ok()
            .and_then(|year| Year::try_new(year).ok())
            .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(YearVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_formatted_year() {
        let year = Year::new(7);
        assert_eq!(format!("{year}"), year.formatted_year());
        assert_eq!(format!("{year}"), "0007");
    }

    #[test]
    fn year_zero_is_leap() {
        assert!(Year::is_leap_year(0));
        assert_eq!(Year::absolute_leap_years(0), 0);
        assert_eq!(Year::absolute_leap_years(1), 1);
    }
}
