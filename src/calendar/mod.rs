//! Immutable Gregorian calendar values.
//!
//! This module provides the date side of the library, three value
//! types that build on each other by composition:
//!
//! - [`Year`]: leap-year logic and the valid `0..=9999` range
//! - [`Month`]: a `(year, month)` pair with month-carry arithmetic
//! - [`Day`]: a full date with carry-correct day arithmetic, weekday
//!   math, multi-layout parsing, and formatting
//!
//! Every "mutating" operation returns a new value; nothing is ever
//! modified in place.
//!
//! # Examples
//!
//! ## Day arithmetic across boundaries
//!
//! ```rust
//! use kalends::calendar::{Day, DayOffset};
//!
//! let new_years_eve = Day::new(2024, 11, 31);
//! let offset = DayOffset {
//!     days: 1,
//!     ..DayOffset::default()
//! };
//! assert_eq!(new_years_eve.append(offset), Day::new(2025, 0, 1));
//! ```
//!
//! ## Strict versus permissive parsing
//!
//! ```rust
//! use kalends::calendar::{DateMode, Day};
//!
//! // Permissive parsing clamps the impossible day…
//! let repaired = Day::normalize_parse("2021/02/30", DateMode::YyyyMmDd).unwrap();
//! assert_eq!(repaired, Day::new(2021, 1, 28));
//!
//! // …strict parsing rejects it.
//! assert!(Day::json_parse("2021/02/30").is_err());
//! ```

mod day;
mod error;
mod month;
mod year;

pub use day::{DATE_FILLER_LENGTH, DateMode, Day, DayOfWeek, DayOffset, MIN_DAY, RawDateParts};
pub use error::{DateParseError, InvalidDayError, InvalidMonthError, InvalidYearError};
pub use month::{MONTHS_IN_YEAR, Month, MonthNumber, MonthOffset};
pub use year::{MAX_YEAR, MIN_YEAR, Year};
