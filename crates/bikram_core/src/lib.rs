//! Bikram Samwat (BS) <-> Gregorian (AD) date conversion.
//!
//! This crate provides:
//! - The BS month-length table for BS 2000..=2090 and its lookup functions
//! - Day-counting conversion in both directions from a fixed anchor date
//! - [`BsDate`], a validated BS date with day arithmetic and comparison
//!   against both BS and AD dates
//! - `%`-code formatting and parsing with Latin and Devanagari output
//!
//! Gregorian arithmetic is delegated to `chrono`. Dates outside the table
//! are rejected with [`CalendarError`]; nothing is extrapolated.
//!
//! # Example
//!
//! ```
//! use bikram_core::BsDate;
//! use chrono::NaiveDate;
//!
//! let ad = NaiveDate::from_ymd_opt(2016, 11, 13).unwrap();
//! let bs = BsDate::from_ad(ad).unwrap();
//!
//! assert_eq!((2073, 7, 28), bs.as_tuple());
//! assert_eq!("28 Kartik 2073", bs.format("%d %B %Y").unwrap());
//! assert_eq!(ad, bs.ad());
//! ```

pub mod convert;
pub mod date;
pub mod digits;
pub mod error;
mod format;
pub mod month;
mod parse;
mod pattern;
pub mod table;
pub mod weekday;

pub use convert::{ad_to_bs, ad_ymd_to_bs, bs_to_ad};
pub use date::BsDate;
pub use error::CalendarError;
pub use month::{ALL_MONTHS, Month};
pub use table::{
    ANCHOR, Anchor, FIRST_BS_YEAR, LAST_BS_YEAR, days_in_month, days_in_year, month_lengths,
    year_range,
};
pub use weekday::{ALL_WEEKDAYS, Weekday};
