//! Error types for time values and time-string parsing.

/// Time components that do not form a real time value.
///
/// Hours are unbounded above (durations beyond a day are legal), so
/// this error reports minutes, seconds, or milliseconds out of range.
///
/// # Examples
///
/// ```rust
/// use kalends::clock::Time;
///
/// let error = Time::try_new(12, 99, 0, 0).unwrap_err();
/// assert_eq!(error.minutes, 99);
/// assert_eq!(format!("{error}"), "time must be real, but got: 12:99:0.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTimeError {
    /// The attempted hours value.
    pub hours: u32,
    /// The attempted minutes value.
    pub minutes: u32,
    /// The attempted seconds value.
    pub seconds: u32,
    /// The attempted milliseconds value.
    pub ms: u32,
}

impl std::fmt::Display for InvalidTimeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "time must be real, but got: {}:{}:{}.{}",
            self.hours, self.minutes, self.seconds, self.ms
        )
    }
}

impl std::error::Error for InvalidTimeError {}

/// Errors produced when parsing a time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input is too short to hold even `HH:MM`.
    Length {
        /// Length of the rejected input, in bytes.
        actual: usize,
    },
    /// A component field contains something other than decimal digits.
    Digits {
        /// Name of the component that failed to parse.
        field: &'static str,
    },
    /// The fields parsed but are out of range, e.g. minute 99.
    Invalid(InvalidTimeError),
}

impl std::fmt::Display for TimeParseError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { actual } => write!(
                formatter,
                "time string must be at least 5 characters long, got {actual}"
            ),
            Self::Digits { field } => {
                write!(formatter, "time field `{field}` is not a number")
            }
            Self::Invalid(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for TimeParseError {}

impl From<InvalidTimeError> for TimeParseError {
    fn from(error: InvalidTimeError) -> Self {
        Self::Invalid(error)
    }
}
