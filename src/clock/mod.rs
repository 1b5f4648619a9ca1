//! Immutable time-of-day values.
//!
//! This module provides [`Time`], a value type for hours, minutes,
//! seconds, and milliseconds, with parsing from 12- and 24-hour
//! strings, mode-driven formatting, and wraparound arithmetic over the
//! absolute-millisecond representation.
//!
//! # Examples
//!
//! ```rust
//! use kalends::clock::{Time, TimeMode};
//!
//! let time: Time = "09:05 PM".parse().unwrap();
//! assert_eq!(time, Time::new(21, 5, 0, 0));
//! assert_eq!(time.format(TimeMode::HhMmAa), "09:05\u{a0}PM");
//! assert_eq!(format!("{time}"), "21:05");
//! ```

mod error;
mod time;

pub use error::{InvalidTimeError, TimeParseError};
pub use time::{
    HOURS_IN_DAY, MILLISECONDS_IN_DAY, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE,
    MILLISECONDS_IN_SECOND, MINUTES_IN_HOUR, SECONDS_IN_MINUTE, Time, TimeMode, TimeOffset,
};
