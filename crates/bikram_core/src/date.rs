//! Bikram Samwat date value.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Sub;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

use crate::convert;
use crate::error::CalendarError;
use crate::month::Month;
use crate::table;
use crate::weekday::Weekday;

/// A validated date in the Bikram Samwat calendar.
///
/// The year is always covered by the month table and the day never exceeds
/// the table length of its month, so the AD equivalent always exists.
/// Ordering follows the calendar, which is also AD order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BsDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BsDate {
    /// Creates a `BsDate` from BS year, month (1..=12) and day.
    ///
    /// # Errors
    ///
    /// [`CalendarError::YearOutOfRange`] if the table has no data for `year`;
    /// [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`] for an
    /// impossible month or day.
    ///
    /// # Example
    ///
    /// ```
    /// use bikram_core::BsDate;
    ///
    /// let date = BsDate::new(2074, 11, 30).unwrap();
    /// assert_eq!("2018-03-14", date.ad().to_string());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        convert::validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    pub(crate) const fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// BS equivalent of an AD date.
    pub fn from_ad(date: NaiveDate) -> Result<Self, CalendarError> {
        convert::ad_to_bs(date)
    }

    /// Today's BS date in the local time zone.
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_ad(Local::now().date_naive())
    }

    /// AD equivalent, recomputed on each call.
    pub fn ad(&self) -> NaiveDate {
        convert::bs_to_ad(self.year, self.month, self.day)
            .expect("BsDate holds a date inside the month table")
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month_name(&self) -> Month {
        Month::from_number(self.month).expect("BsDate holds a month in 1..=12")
    }

    pub fn weekday(&self) -> Weekday {
        self.ad().weekday().into()
    }

    /// `(year, month, day)`.
    pub fn as_tuple(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Length of this date's month.
    pub fn days_in_month(&self) -> u32 {
        table::days_in_month(self.year, self.month).expect("BsDate year is in the table")
    }

    /// 1-based day of the BS year (Baisakh 1 = 1).
    pub fn ordinal(&self) -> u32 {
        convert::ordinal(self.year, self.month, self.day).expect("BsDate year is in the table")
    }

    /// Same date in another year, validated.
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        Self::new(year, self.month, self.day)
    }

    /// Same date in another month, validated.
    pub fn with_month(&self, month: u32) -> Result<Self, CalendarError> {
        Self::new(self.year, month, self.day)
    }

    /// Another day of the same month, validated.
    pub fn with_day(&self, day: u32) -> Result<Self, CalendarError> {
        Self::new(self.year, self.month, day)
    }

    /// Date `days` later (earlier if negative).
    ///
    /// Equivalent to shifting [`ad`](Self::ad) with chrono and converting
    /// back, so `d.add_days(n)?.ad() == d.ad() + n days`.
    ///
    /// # Example
    ///
    /// ```
    /// use bikram_core::BsDate;
    ///
    /// let date = BsDate::new(2052, 6, 1).unwrap();
    /// assert_eq!(BsDate::new(2052, 6, 6).unwrap(), date.add_days(5).unwrap());
    /// ```
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        let ad = convert::shift(self.ad(), days)?;
        Self::from_ad(ad)
    }

    /// Date `days` earlier (later if negative).
    pub fn sub_days(&self, days: i64) -> Result<Self, CalendarError> {
        let negated = days
            .checked_neg()
            .ok_or(CalendarError::DeltaOutOfRange { days })?;
        self.add_days(negated)
    }

    /// Shift by a chrono delta; only whole days are applied.
    pub fn checked_add_signed(&self, delta: TimeDelta) -> Result<Self, CalendarError> {
        self.add_days(delta.num_days())
    }

    /// Shift back by a chrono delta; only whole days are applied.
    pub fn checked_sub_signed(&self, delta: TimeDelta) -> Result<Self, CalendarError> {
        self.sub_days(delta.num_days())
    }

    /// Signed number of days from `other` to `self`.
    pub fn signed_days_since(&self, other: NaiveDate) -> i64 {
        self.ad().signed_duration_since(other).num_days()
    }
}

impl Sub<BsDate> for BsDate {
    type Output = i64;

    fn sub(self, rhs: BsDate) -> Self::Output {
        self.signed_days_since(rhs.ad())
    }
}

impl Sub<NaiveDate> for BsDate {
    type Output = i64;

    fn sub(self, rhs: NaiveDate) -> Self::Output {
        self.signed_days_since(rhs)
    }
}

impl PartialEq<NaiveDate> for BsDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.ad() == *other
    }
}

impl PartialOrd<NaiveDate> for BsDate {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        Some(self.ad().cmp(other))
    }
}

impl Sub<BsDate> for NaiveDate {
    type Output = i64;

    fn sub(self, rhs: BsDate) -> Self::Output {
        self.signed_duration_since(rhs.ad()).num_days()
    }
}

impl PartialEq<BsDate> for NaiveDate {
    fn eq(&self, other: &BsDate) -> bool {
        *self == other.ad()
    }
}

impl PartialOrd<BsDate> for NaiveDate {
    fn partial_cmp(&self, other: &BsDate) -> Option<Ordering> {
        Some(self.cmp(&other.ad()))
    }
}

impl From<BsDate> for NaiveDate {
    fn from(date: BsDate) -> Self {
        date.ad()
    }
}

impl TryFrom<NaiveDate> for BsDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_ad(date)
    }
}

impl Display for BsDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BsDate {
    type Err = CalendarError;

    /// Parses `YYYY-M-D`; month and day may be one or two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, "%Y-%-m-%-d")
    }
}
