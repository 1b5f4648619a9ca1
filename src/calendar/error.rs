//! Error types for calendar values and date-string parsing.
//!
//! Construction from untrusted input goes through the `try_new`
//! constructors, which report these errors instead of asserting. The
//! parse errors carry enough of the offending input for callers to
//! surface a meaningful message.

use super::day::DATE_FILLER_LENGTH;

/// A year outside the supported `0..=9999` range.
///
/// # Examples
///
/// ```rust
/// use kalends::calendar::Year;
///
/// let error = Year::try_new(10_000).unwrap_err();
/// assert_eq!(error.year, 10_000);
/// assert_eq!(format!("{error}"), "invalid year: 10000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidYearError {
    /// The rejected year value.
    pub year: i32,
}

impl std::fmt::Display for InvalidYearError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "invalid year: {}", self.year)
    }
}

impl std::error::Error for InvalidYearError {}

/// A `(year, month)` pair that is not a real calendar month.
///
/// Either the year is out of range or the zero-based month is outside
/// `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMonthError {
    /// The rejected year value.
    pub year: i32,
    /// The rejected zero-based month value.
    pub month: i32,
}

impl std::fmt::Display for InvalidMonthError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "invalid month: {}-{}", self.year, self.month)
    }
}

impl std::error::Error for InvalidMonthError {}

/// A `(year, month, day)` triple that is not a real calendar date.
///
/// Carries the attempted components so callers can report exactly what
/// was rejected, e.g. February 30th.
///
/// # Examples
///
/// ```rust
/// use kalends::calendar::Day;
///
/// let error = Day::try_new(2021, 1, 30).unwrap_err();
/// assert_eq!((error.year, error.month, error.day), (2021, 1, 30));
/// assert_eq!(format!("{error}"), "invalid day: 2021-1-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDayError {
    /// The rejected year value.
    pub year: i32,
    /// The rejected zero-based month value.
    pub month: i32,
    /// The rejected one-based day value.
    pub day: i32,
}

impl std::fmt::Display for InvalidDayError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invalid day: {}-{}-{}",
            self.year, self.month, self.day
        )
    }
}

impl std::error::Error for InvalidDayError {}

/// Errors produced when parsing a fixed-width date string.
///
/// Permissive parsing ([`Day::normalize_parse`]) repairs out-of-range
/// *values*, so only malformed *text* surfaces the `Length` and `Digits`
/// variants. Strict parsing ([`Day::json_parse`]) additionally rejects
/// impossible calendar dates with `InvalidDay`.
///
/// [`Day::normalize_parse`]: super::Day::normalize_parse
/// [`Day::json_parse`]: super::Day::json_parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// The input does not have the fixed ten-character layout.
    Length {
        /// Length of the rejected input, in bytes.
        actual: usize,
    },
    /// A component field contains something other than decimal digits.
    Digits {
        /// Name of the component that failed to parse.
        field: &'static str,
    },
    /// The parsed components do not form a real calendar date.
    InvalidDay(InvalidDayError),
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { actual } => write!(
                formatter,
                "date string must be {DATE_FILLER_LENGTH} characters long, got {actual}"
            ),
            Self::Digits { field } => {
                write!(formatter, "date field `{field}` is not a number")
            }
            Self::InvalidDay(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for DateParseError {}

impl From<InvalidDayError> for DateParseError {
    fn from(error: InvalidDayError) -> Self {
        Self::InvalidDay(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_day_error_display() {
        let error = InvalidDayError {
            year: 2021,
            month: 1,
            day: 30,
        };
        assert_eq!(format!("{error}"), "invalid day: 2021-1-30");
    }

    #[test]
    fn test_date_parse_error_display() {
        assert_eq!(
            format!("{}", DateParseError::Length { actual: 8 }),
            "date string must be 10 characters long, got 8"
        );
        assert_eq!(
            format!("{}", DateParseError::Digits { field: "month" }),
            "date field `month` is not a number"
        );
    }

    #[test]
    fn test_invalid_day_error_converts_to_parse_error() {
        let error = InvalidDayError {
            year: 2021,
            month: 1,
            day: 30,
        };
        assert_eq!(DateParseError::from(error), DateParseError::InvalidDay(error));
    }
}
