//! Time of day built on absolute milliseconds.
//!
//! [`Time`] holds hours, minutes, seconds, and milliseconds. Minutes,
//! seconds, and milliseconds are always in range; hours are allowed to
//! exceed 23 so the type can carry elapsed, duration-like quantities
//! ("25:30"). [`Time::is_valid_time`] is the stricter predicate for
//! genuine time-of-day values.
//!
//! Arithmetic goes through one representation: the total number of
//! milliseconds since midnight. [`Time::shift`] adds signed offsets to
//! that total, re-derives unit totals by flooring division, and wraps
//! each final unit into its own cycle, which makes overflow cascade the
//! way clock arithmetic should:
//!
//! ```rust
//! use kalends::clock::{Time, TimeOffset};
//!
//! let late = Time::new(23, 50, 0, 0);
//! let offset = TimeOffset {
//!     minutes: 20,
//!     ..TimeOffset::default()
//! };
//! assert_eq!(late.shift(offset), Time::new(0, 10, 0, 0));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Timelike, Utc};

use super::error::{InvalidTimeError, TimeParseError};

/// Number of hours in a day.
pub const HOURS_IN_DAY: u32 = 24;

/// Number of minutes in an hour.
pub const MINUTES_IN_HOUR: u32 = 60;

/// Number of seconds in a minute.
pub const SECONDS_IN_MINUTE: u32 = 60;

/// Number of milliseconds in a second.
pub const MILLISECONDS_IN_SECOND: u32 = 1000;

/// Number of milliseconds in a minute.
pub const MILLISECONDS_IN_MINUTE: u32 = 60_000;

/// Number of milliseconds in an hour.
pub const MILLISECONDS_IN_HOUR: u32 = 3_600_000;

/// Number of milliseconds in a day.
pub const MILLISECONDS_IN_DAY: u32 = 86_400_000;

/// No-break space separating a rendered time from its meridiem marker.
const CHAR_NO_BREAK_SPACE: char = '\u{a0}';

/// Which components [`Time::format`] renders, and whether the hours use
/// the 12-hour clock with a meridiem marker (`AA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeMode {
    /// `HH:MM`
    HhMm,
    /// `HH:MM AA`
    HhMmAa,
    /// `HH:MM:SS`
    HhMmSs,
    /// `HH:MM:SS AA`
    HhMmSsAa,
    /// `HH:MM:SS.MSS`
    HhMmSsMss,
    /// `HH:MM:SS.MSS AA`
    HhMmSsMssAa,
}

impl TimeMode {
    /// Returns `true` if the mode renders a seconds component.
    pub const fn includes_seconds(self) -> bool {
        matches!(
            self,
            Self::HhMmSs | Self::HhMmSsAa | Self::HhMmSsMss | Self::HhMmSsMssAa
        )
    }

    /// Returns `true` if the mode renders a milliseconds component.
    pub const fn includes_ms(self) -> bool {
        matches!(self, Self::HhMmSsMss | Self::HhMmSsMssAa)
    }

    /// Returns `true` if the mode renders 12-hour time with a meridiem
    /// marker.
    pub const fn includes_meridiem(self) -> bool {
        matches!(self, Self::HhMmAa | Self::HhMmSsAa | Self::HhMmSsMssAa)
    }
}

/// Signed offsets for [`Time::shift`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeOffset {
    /// Hours to add; may be negative.
    pub hours: i64,
    /// Minutes to add; may be negative.
    pub minutes: i64,
    /// Seconds to add; may be negative.
    pub seconds: i64,
    /// Milliseconds to add; may be negative.
    pub ms: i64,
}

/// The AM/PM designator found in a 12-hour time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// An immutable time value: hours, minutes, seconds, milliseconds.
///
/// Ordering and equality follow the total millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    hours: u32,
    minutes: u32,
    seconds: u32,
    ms: u32,
}

impl Time {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a time, asserting validity in debug builds only.
    ///
    /// Hours beyond 23 are legal; use [`Time::try_new`] for untrusted
    /// input.
    pub const fn new(hours: u32, minutes: u32, seconds: u32, ms: u32) -> Self {
        debug_assert!(
            minutes < MINUTES_IN_HOUR && seconds < SECONDS_IN_MINUTE && ms < MILLISECONDS_IN_SECOND
        );
        Self {
            hours,
            minutes,
            seconds,
            ms,
        }
    }

    /// Creates a time from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeError`] if minutes, seconds, or
    /// milliseconds are out of range. Hours are unbounded above.
    pub const fn try_new(
        hours: u32,
        minutes: u32,
        seconds: u32,
        ms: u32,
    ) -> Result<Self, InvalidTimeError> {
        if minutes < MINUTES_IN_HOUR && seconds < SECONDS_IN_MINUTE && ms < MILLISECONDS_IN_SECOND {
            Ok(Self {
                hours,
                minutes,
                seconds,
                ms,
            })
        } else {
            Err(InvalidTimeError {
                hours,
                minutes,
                seconds,
                ms,
            })
        }
    }

    /// Decomposes a non-negative millisecond count strictly, with no
    /// day wraparound: counts spanning more than a day produce hours
    /// beyond 23.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::clock::Time;
    ///
    /// assert_eq!(
    ///     Time::from_absolute_milliseconds(3_661_001),
    ///     Time::new(1, 1, 1, 1)
    /// );
    /// assert_eq!(
    ///     Time::from_absolute_milliseconds(90_000_000),
    ///     Time::new(25, 0, 0, 0)
    /// );
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_absolute_milliseconds(milliseconds: u64) -> Self {
        let hours = milliseconds / MILLISECONDS_IN_HOUR as u64;
        let remaining = milliseconds % MILLISECONDS_IN_HOUR as u64;
        let minutes = remaining / MILLISECONDS_IN_MINUTE as u64;
        let remaining = remaining % MILLISECONDS_IN_MINUTE as u64;
        let seconds = remaining / MILLISECONDS_IN_SECOND as u64;
        let ms = remaining % MILLISECONDS_IN_SECOND as u64;

        Self::new(hours as u32, minutes as u32, seconds as u32, ms as u32)
    }

    /// The current UTC time of day, modulo one day.
    pub fn current() -> Self {
        let milliseconds = Utc::now()
            .timestamp_millis()
            .rem_euclid(i64::from(MILLISECONDS_IN_DAY));

        Self::from_absolute_milliseconds(milliseconds.unsigned_abs())
    }

    /// The current local wall-clock time of day.
    pub fn current_local() -> Self {
        Self::from_local_native_date(Utc::now())
    }

    /// The wall-clock fields of `timestamp` in the local timezone.
    pub fn from_local_native_date(timestamp: DateTime<Utc>) -> Self {
        let local = timestamp.with_timezone(&Local);

        // The nanosecond field can exceed a second during a leap second.
        Self::new(
            local.hour(),
            local.minute(),
            local.second(),
            (local.nanosecond() / 1_000_000).min(MILLISECONDS_IN_SECOND - 1),
        )
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Returns `true` if the components form a genuine time of day,
    /// hours included: unlike construction, this rejects `hours > 23`.
    #[inline]
    pub const fn is_valid_time(hours: u32, minutes: u32, seconds: u32, ms: u32) -> bool {
        hours < HOURS_IN_DAY
            && minutes < MINUTES_IN_HOUR
            && seconds < SECONDS_IN_MINUTE
            && ms < MILLISECONDS_IN_SECOND
    }

    /// Returns `true` if this value is a genuine time of day rather
    /// than a duration-like quantity with hours beyond 23.
    #[inline]
    pub const fn is_valid_time_of_day(self) -> bool {
        Self::is_valid_time(self.hours, self.minutes, self.seconds, self.ms)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The hours component.
    #[inline]
    pub const fn hours(self) -> u32 {
        self.hours
    }

    /// The minutes component.
    #[inline]
    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    /// The seconds component.
    #[inline]
    pub const fn seconds(self) -> u32 {
        self.seconds
    }

    /// The milliseconds component.
    #[inline]
    pub const fn ms(self) -> u32 {
        self.ms
    }

    /// Total milliseconds since midnight, the numeric form used for
    /// comparison and arithmetic.
    pub const fn to_absolute_milliseconds(self) -> u64 {
        self.hours as u64 * MILLISECONDS_IN_HOUR as u64
            + self.minutes as u64 * MILLISECONDS_IN_MINUTE as u64
            + self.seconds as u64 * MILLISECONDS_IN_SECOND as u64
            + self.ms as u64
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Returns a new time shifted by the given signed offsets.
    ///
    /// The offsets join the current absolute millisecond total; unit
    /// totals are then re-derived by flooring division and each final
    /// unit is wrapped into its own cycle. Overflow in a small unit
    /// therefore cascades into the larger ones before the hours wrap
    /// around the 24-hour day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::clock::{Time, TimeOffset};
    ///
    /// let offset = TimeOffset {
    ///     minutes: -20,
    ///     ..TimeOffset::default()
    /// };
    /// assert_eq!(Time::new(0, 10, 0, 0).shift(offset), Time::new(23, 50, 0, 0));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn shift(self, offset: TimeOffset) -> Self {
        let total_ms = self.to_absolute_milliseconds() as i64
            + offset.hours * i64::from(MILLISECONDS_IN_HOUR)
            + offset.minutes * i64::from(MILLISECONDS_IN_MINUTE)
            + offset.seconds * i64::from(MILLISECONDS_IN_SECOND)
            + offset.ms;

        let total_seconds = total_ms.div_euclid(i64::from(MILLISECONDS_IN_SECOND));
        let total_minutes = total_seconds.div_euclid(i64::from(SECONDS_IN_MINUTE));
        let total_hours = total_minutes.div_euclid(i64::from(MINUTES_IN_HOUR));

        Self::new(
            total_hours.rem_euclid(i64::from(HOURS_IN_DAY)) as u32,
            total_minutes.rem_euclid(i64::from(MINUTES_IN_HOUR)) as u32,
            total_seconds.rem_euclid(i64::from(SECONDS_IN_MINUTE)) as u32,
            total_ms.rem_euclid(i64::from(MILLISECONDS_IN_SECOND)) as u32,
        )
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Renders the time in an explicit [`TimeMode`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::clock::{Time, TimeMode};
    ///
    /// let time = Time::new(15, 5, 30, 7);
    /// assert_eq!(time.format(TimeMode::HhMm), "15:05");
    /// assert_eq!(time.format(TimeMode::HhMmSsMss), "15:05:30.007");
    /// assert_eq!(time.format(TimeMode::HhMmAa), "03:05\u{a0}PM");
    /// ```
    pub fn format(self, mode: TimeMode) -> String {
        self.render(
            mode.includes_seconds(),
            mode.includes_ms(),
            mode.includes_meridiem(),
        )
    }

    fn render(self, include_seconds: bool, include_ms: bool, include_meridiem: bool) -> String {
        let (hours, meridiem) = if include_meridiem {
            let (hours, marker) = to_twelve_hour(self.hours);
            (hours, Some(marker))
        } else {
            (self.hours, None)
        };

        let mut rendered = format!("{hours:02}:{:02}", self.minutes);
        if include_seconds {
            rendered.push_str(&format!(":{:02}", self.seconds));
        }
        if include_ms {
            rendered.push_str(&format!(".{:03}", self.ms));
        }
        if let Some(marker) = meridiem {
            rendered.push(CHAR_NO_BREAK_SPACE);
            rendered.push_str(marker);
        }

        rendered
    }
}

impl fmt::Display for Time {
    /// Renders `HH:MM`, extending with seconds and milliseconds only
    /// when those fields are nonzero.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let include_ms = self.ms > 0;
        let include_seconds = include_ms || self.seconds > 0;

        formatter.write_str(&self.render(include_seconds, include_ms, false))
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_absolute_milliseconds()
            .cmp(&other.to_absolute_milliseconds())
    }
}

impl FromStr for Time {
    type Err = TimeParseError;

    /// Parses `HH:MM[:SS[.mmm]]` with an optional AM/PM marker found
    /// anywhere in the string, case-insensitively.
    ///
    /// In 12-hour form, hour 12 maps to 0 (AM) or stays 12 (PM); any
    /// other PM hour gains 12.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kalends::clock::Time;
    ///
    /// let time: Time = "12:30 AM".parse().unwrap();
    /// assert_eq!(time, Time::new(0, 30, 0, 0));
    ///
    /// let time: Time = "01:30:15.250 pm".parse().unwrap();
    /// assert_eq!(time, Time::new(13, 30, 15, 250));
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() < 5 {
            return Err(TimeParseError::Length { actual: text.len() });
        }

        let raw_hours = parse_time_field(text, 0, 2, "hours")?;
        let minutes = parse_time_field(text, 3, 5, "minutes")?;

        let bytes = text.as_bytes();
        let has_seconds = bytes.get(5) == Some(&b':');
        let seconds = if has_seconds {
            parse_time_field(text, 6, 8, "seconds")?
        } else {
            0
        };
        let ms = if has_seconds && bytes.get(8) == Some(&b'.') {
            parse_time_field(text, 9, 12, "ms")?
        } else {
            0
        };

        let hours = match parse_meridiem(text) {
            None => raw_hours,
            Some(Meridiem::Am) => {
                if raw_hours == 12 {
                    0
                } else {
                    raw_hours
                }
            }
            Some(Meridiem::Pm) => {
                if raw_hours == 12 {
                    12
                } else {
                    raw_hours + 12
                }
            }
        };

        Self::try_new(hours, minutes, seconds, ms).map_err(Into::into)
    }
}

/// Parses the decimal digits at `text[start..end]`.
fn parse_time_field(
    text: &str,
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<u32, TimeParseError> {
    text.get(start..end)
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or(TimeParseError::Digits { field })
}

/// Finds the first AM/PM marker in the string, if any.
fn parse_meridiem(text: &str) -> Option<Meridiem> {
    let upper = text.to_uppercase();

    match (upper.find("AM"), upper.find("PM")) {
        (Some(am), Some(pm)) => Some(if am < pm { Meridiem::Am } else { Meridiem::Pm }),
        (Some(_), None) => Some(Meridiem::Am),
        (None, Some(_)) => Some(Meridiem::Pm),
        (None, None) => None,
    }
}

/// Maps a 24-hour value onto the 12-hour clock with its meridiem
/// marker; midnight and noon both render as 12.
const fn to_twelve_hour(hours: u32) -> (u32, &'static str) {
    let meridiem = if hours >= 12 { "PM" } else { "AM" };

    if hours == 0 || hours == 12 {
        (12, meridiem)
    } else {
        (hours % 12, meridiem)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Time", 4)?;
        state.serialize_field("hours", &self.hours)?;
        state.serialize_field("minutes", &self.minutes)?;
        state.serialize_field("seconds", &self.seconds)?;
        state.serialize_field("ms", &self.ms)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Parts {
            hours: u32,
            minutes: u32,
            #[serde(default)]
            seconds: u32,
            #[serde(default)]
            ms: u32,
        }

        let parts = Parts::deserialize(deserializer)?;

        Self::try_new(parts.hours, parts.minutes, parts.seconds, parts.ms)
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
