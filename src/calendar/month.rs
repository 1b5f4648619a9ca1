//! Calendar month: a `(year, month)` pair with month-level arithmetic.
//!
//! Months are zero-based (`0` = January, `11` = December). The
//! total-month carry used by [`Month::append`] is the canonical
//! normalization algorithm that [`Day::append`](super::Day::append)
//! builds on: year and month offsets collapse into a single month
//! count, which euclidean division splits back into a year and a month
//! in `0..=11`.
//!
//! # Examples
//!
//! ```rust
//! use kalends::calendar::{Month, MonthOffset};
//!
//! let december = Month::new(2024, 11);
//! let next = december.append(MonthOffset {
//!     months: 1,
//!     ..MonthOffset::default()
//! });
//! assert_eq!(next, Month::new(2025, 0));
//! assert_eq!(Month::length_between(december, next), 1);
//! ```

use std::fmt;

use chrono::{Datelike, Local, Utc};

use super::error::InvalidMonthError;
use super::year::Year;

/// Number of months in a calendar year.
pub const MONTHS_IN_YEAR: i32 = 12;

/// Zero-based month numbers.
///
/// The discriminants match the `month` component of [`Month`] and
/// [`Day`](super::Day) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthNumber {
    /// Month 0.
    January = 0,
    /// Month 1.
    February,
    /// Month 2.
    March,
    /// Month 3.
    April,
    /// Month 4.
    May,
    /// Month 5.
    June,
    /// Month 6.
    July,
    /// Month 7.
    August,
    /// Month 8.
    September,
    /// Month 9.
    October,
    /// Month 10.
    November,
    /// Month 11.
    December,
}

/// Signed year and month offsets for [`Month::append`].
///
/// Missing fields default to zero, so struct-update syntax expresses
/// partial offsets:
///
/// ```rust
/// use kalends::calendar::MonthOffset;
///
/// let offset = MonthOffset {
///     months: -3,
///     ..MonthOffset::default()
/// };
/// assert_eq!(offset.years, 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MonthOffset {
    /// Whole years to add; may be negative.
    pub years: i32,
    /// Whole months to add; may be negative.
    pub months: i32,
}

/// An immutable calendar month: a valid [`Year`] plus a zero-based
/// month in `0..=11`.
///
/// Ordering compares the year first and the month as tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: Year,
    month: i32,
}

impl Month {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a month, asserting validity in debug builds only.
    ///
    /// Use [`Month::try_new`] for untrusted input.
    pub const fn new(year: i32, month: i32) -> Self {
        debug_assert!(Self::is_valid_month(year, month));
        Self {
            year: Year::new(year),
            month,
        }
    }

    /// Creates a month from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMonthError`] if the year is out of range or the
    /// month is outside `0..=11`.
    pub const fn try_new(year: i32, month: i32) -> Result<Self, InvalidMonthError> {
        if Self::is_valid_month(year, month) {
            Ok(Self {
                year: Year::new(year),
                month,
            })
        } else {
            Err(InvalidMonthError { year, month })
        }
    }

    /// The current month in the local timezone.
    pub fn current_local() -> Self {
        let now = Local::now();
        Self::new(now.year(), now.month0().cast_signed())
    }

    /// The current month in UTC.
    pub fn current_utc() -> Self {
        let now = Utc::now();
        Self::new(now.year(), now.month0().cast_signed())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Returns `true` if the pair forms a real calendar month.
    #[inline]
    pub const fn is_valid_month(year: i32, month: i32) -> bool {
        Year::is_valid_year(year) && month >= 0 && month < MONTHS_IN_YEAR
    }

    /// The number of days in a zero-based `month`, with February
    /// resolved by `leap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::Month;
    ///
    /// assert_eq!(Month::days_in_month(1, true), 29);
    /// assert_eq!(Month::days_in_month(1, false), 28);
    /// assert_eq!(Month::days_in_month(3, false), 30);
    /// assert_eq!(Month::days_in_month(11, false), 31);
    /// ```
    pub const fn days_in_month(month: i32, leap: bool) -> i32 {
        debug_assert!(month >= 0 && month < MONTHS_IN_YEAR);
        match month {
            // February
            1 => {
                if leap {
                    29
                } else {
                    28
                }
            }
            // April, June, September, November
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Clamps an arbitrary integer into the zero-based month range
    /// `0..=11`. Carrying whole years out of a month count is the
    /// business of [`Month::append`], not of this clamp.
    pub const fn normalize_month_part(month: i32) -> i32 {
        if month < 0 {
            0
        } else if month >= MONTHS_IN_YEAR {
            MONTHS_IN_YEAR - 1
        } else {
            month
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The numeric year value.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year.year()
    }

    /// The zero-based month value.
    #[inline]
    pub const fn month(self) -> i32 {
        self.month
    }

    /// The embedded [`Year`] value.
    #[inline]
    pub const fn as_year(self) -> Year {
        self.year
    }

    /// The number of days in this month.
    #[inline]
    pub const fn day_count(self) -> i32 {
        Self::days_in_month(self.month, self.year.is_leap())
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Returns `true` if this month is strictly before `another`.
    pub fn month_before(self, another: Self) -> bool {
        self < another
    }

    /// Returns `true` if this month is before or equal to `another`.
    pub fn month_same_or_before(self, another: Self) -> bool {
        self <= another
    }

    /// Returns `true` if this month equals `another`.
    pub fn month_same(self, another: Self) -> bool {
        self == another
    }

    /// Returns `true` if this month is after or equal to `another`.
    pub fn month_same_or_after(self, another: Self) -> bool {
        self >= another
    }

    /// Returns `true` if this month is strictly after `another`.
    pub fn month_after(self, another: Self) -> bool {
        self > another
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Returns a new month shifted by the given offsets.
    ///
    /// Year and month offsets collapse into a total month count; month
    /// overflow carries into the year over the twelve-month cycle, in
    /// either direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::calendar::{Month, MonthOffset};
    ///
    /// let january = Month::new(2024, 0);
    /// let offset = MonthOffset {
    ///     months: -1,
    ///     ..MonthOffset::default()
    /// };
    /// assert_eq!(january.append(offset), Month::new(2023, 11));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(self, offset: MonthOffset) -> Self {
        let total = (i64::from(self.year()) + i64::from(offset.years))
            * i64::from(MONTHS_IN_YEAR)
            + i64::from(self.month)
            + i64::from(offset.months);
        let (years, month) = carry_months(total);

        Self::new(years as i32, month)
    }

    /// The difference in whole months between two months; positive when
    /// `to` is after `from`.
    pub fn length_between(from: Self, to: Self) -> i32 {
        (to.year() - from.year()) * MONTHS_IN_YEAR + (to.month - from.month)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// The one-based month as a two-digit zero-padded string.
    pub fn formatted_month_part(self) -> String {
        format!("{:02}", self.month + 1)
    }

    /// The canonical `yyyy-mm` serialization form.
    pub fn to_json_string(self) -> String {
        format!("{}-{}", self.year.to_json_string(), self.formatted_month_part())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}.{}",
            self.formatted_month_part(),
            self.year.formatted_year()
        )
    }
}

impl From<Month> for Year {
    fn from(month: Month) -> Self {
        month.as_year()
    }
}

/// Splits a total month count into `(years, month)` with the month in
/// `0..=11`, preserving `years * 12 + month == total` for any sign.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn carry_months(total: i64) -> (i64, i32) {
    (
        total.div_euclid(MONTHS_IN_YEAR as i64),
        total.rem_euclid(MONTHS_IN_YEAR as i64) as i32,
    )
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_json_string())
    }
}

#[cfg(feature = "serde")]
struct MonthVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for MonthVisitor {
    type Value = Month;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a `yyyy-mm` month string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Month, E>
    where
        E: serde::de::Error,
    {
        let year = value.get(0..4).and_then(|text| text.parse::<i32>().ok());
        let month = value.get(5..7).and_then(|text| text.parse::<i32>().ok());
        match (value.len(), year, month) {
            (7, Some(year), Some(month)) => {
                Month::try_new(year, month - 1).map_err(E::custom)
            }
            _ => Err(E::invalid_value(serde::de::Unexpected::Str(value), &self)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(MonthVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
