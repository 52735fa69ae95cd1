//! Error types for Bikram Samwat conversion, formatting and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::table::{FIRST_BS_YEAR, LAST_BS_YEAR};

/// Errors from table lookup, date conversion, formatting or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// BS year is not covered by the month table.
    YearOutOfRange { year: i32 },
    /// AD date whose BS equivalent falls outside the month table.
    AdDateOutOfRange { date: NaiveDate },
    /// Day delta too large for calendar arithmetic.
    DeltaOutOfRange { days: i64 },
    /// Month outside 1..=12.
    InvalidMonth { month: u32 },
    /// Day is zero or exceeds the table length of the month.
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },
    /// AD triple that is not a Gregorian date.
    InvalidAdDate { year: i32, month: u32, day: u32 },
    /// Format pattern contains a token this crate does not render.
    UnknownFormatCode(String),
    /// Parse pattern is malformed or does not name year, month and day once each.
    InvalidPattern(String),
    /// Input text does not match the parse pattern.
    Parse(String),
}

impl CalendarError {
    /// True for the variants raised when a date falls outside the table.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::YearOutOfRange { .. }
                | Self::AdDateOutOfRange { .. }
                | Self::DeltaOutOfRange { .. }
        )
    }

    /// True for an in-range year with an impossible month or day.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth { .. } | Self::InvalidDay { .. } | Self::InvalidAdDate { .. }
        )
    }
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange { year } => write!(
                f,
                "BS year {year} out of range (supported {FIRST_BS_YEAR}-{LAST_BS_YEAR})"
            ),
            Self::AdDateOutOfRange { date } => {
                write!(f, "AD date {date} is outside the supported BS range")
            }
            Self::DeltaOutOfRange { days } => write!(f, "day delta {days} out of range"),
            Self::InvalidMonth { month } => {
                write!(f, "invalid month: {month} (must be 1..=12)")
            }
            Self::InvalidDay {
                year,
                month,
                day,
                max,
            } => write!(f, "invalid day: {day} for {year}-{month:02} (max {max})"),
            Self::InvalidAdDate { year, month, day } => {
                write!(f, "invalid AD date: {year:04}-{month:02}-{day:02}")
            }
            Self::UnknownFormatCode(code) => write!(f, "unknown format code: {code}"),
            Self::InvalidPattern(msg) => write!(f, "invalid pattern: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for CalendarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_out_of_range_message() {
        let err = CalendarError::YearOutOfRange { year: 1999 };
        assert_eq!(
            err.to_string(),
            "BS year 1999 out of range (supported 2000-2090)"
        );
    }

    #[test]
    fn invalid_day_message() {
        let err = CalendarError::InvalidDay {
            year: 2000,
            month: 1,
            day: 32,
            max: 30,
        };
        assert_eq!(err.to_string(), "invalid day: 32 for 2000-01 (max 30)");
    }

    #[test]
    fn kinds_are_disjoint() {
        let range = CalendarError::YearOutOfRange { year: 3001 };
        assert!(range.is_out_of_range());
        assert!(!range.is_invalid_date());

        let month = CalendarError::InvalidMonth { month: 13 };
        assert!(month.is_invalid_date());
        assert!(!month.is_out_of_range());

        let parse = CalendarError::Parse("x".into());
        assert!(!parse.is_invalid_date());
        assert!(!parse.is_out_of_range());
    }

    #[test]
    fn error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<CalendarError>();
    }
}
