//! # kalends
//!
//! Immutable Gregorian calendar and time-of-day primitives.
//!
//! ## Overview
//!
//! This library provides four small value types and the calendrical
//! arithmetic around them:
//!
//! - [`calendar::Year`]: a calendar year with leap-year logic
//! - [`calendar::Month`]: a `(year, month)` pair with month arithmetic
//! - [`calendar::Day`]: a full calendar date with carry-correct day
//!   arithmetic, multi-layout parsing, and formatting
//! - [`clock::Time`]: a time of day built on absolute milliseconds
//!
//! Every type is an immutable `Copy` value: operations never mutate,
//! they return new values. Equality is structural and ordering is the
//! natural chronological order.
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support. Dates use canonical strings
//!   (`yyyy-mm-dd` for [`calendar::Day`]), times serialize field-wise.
//!
//! ## Example
//!
//! ```rust
//! use kalends::prelude::*;
//!
//! // Appending whole months to an end-of-month date sticks to the
//! // end of the target month instead of overflowing into the next.
//! let day = Day::new(2024, 0, 31);
//! let next = day.append(DayOffset {
//!     months: 1,
//!     ..DayOffset::default()
//! });
//! assert_eq!(next, Day::new(2024, 1, 29));
//! assert_eq!(next.to_json_string(), "2024-02-29");
//!
//! // Time arithmetic wraps around the day boundary.
//! let time = Time::new(23, 50, 0, 0);
//! let shifted = time.shift(TimeOffset {
//!     minutes: 20,
//!     ..TimeOffset::default()
//! });
//! assert_eq!(shifted, Time::new(0, 10, 0, 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the calendar and clock types.
///
/// # Usage
///
/// ```rust
/// use kalends::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calendar::*;
    pub use crate::clock::*;
}

pub mod calendar;
pub mod clock;
