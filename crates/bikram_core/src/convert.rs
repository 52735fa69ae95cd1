//! BS <-> AD conversion by counting days from the anchor.
//!
//! Both directions reduce a date to a signed day offset from [`ANCHOR`] and
//! walk the month table year by year, then month by month. Gregorian
//! arithmetic is delegated to chrono.

use chrono::{NaiveDate, TimeDelta};

use crate::date::BsDate;
use crate::error::CalendarError;
use crate::table::{self, ANCHOR};

/// Convert a BS date to its AD equivalent.
///
/// Fails with [`CalendarError::YearOutOfRange`] for a year outside the
/// table, and with [`CalendarError::InvalidMonth`] /
/// [`CalendarError::InvalidDay`] for an impossible month or day.
pub fn bs_to_ad(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    validate(year, month, day)?;
    let offset = offset_from_anchor(year, month, day)?;
    shift(ANCHOR.ad, offset)
}

/// Convert an AD date to its BS equivalent.
///
/// Fails with [`CalendarError::AdDateOutOfRange`] when the walk leaves the
/// table before reaching `date`.
pub fn ad_to_bs(date: NaiveDate) -> Result<BsDate, CalendarError> {
    let out_of_range = |_| CalendarError::AdDateOutOfRange { date };

    let diff = date.signed_duration_since(ANCHOR.ad).num_days();
    let mut year = ANCHOR.bs_year;
    // 1-based day of `year`; may start outside 1..=len and is walked into it.
    let mut ordinal = i64::from(ordinal(ANCHOR.bs_year, ANCHOR.bs_month, ANCHOR.bs_day)?) + diff;

    while ordinal < 1 {
        year -= 1;
        ordinal += i64::from(table::days_in_year(year).map_err(out_of_range)?);
    }
    loop {
        let len = i64::from(table::days_in_year(year).map_err(out_of_range)?);
        if ordinal <= len {
            break;
        }
        ordinal -= len;
        year += 1;
    }

    let mut month = 1;
    for len in table::month_lengths(year)? {
        let len = i64::from(len);
        if ordinal <= len {
            break;
        }
        ordinal -= len;
        month += 1;
    }
    Ok(BsDate::from_parts(year, month, ordinal as u32))
}

/// Convert an AD `(year, month, day)` triple to its BS equivalent.
pub fn ad_ymd_to_bs(year: i32, month: u32, day: u32) -> Result<BsDate, CalendarError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidAdDate { year, month, day })?;
    ad_to_bs(date)
}

/// Check that `(year, month, day)` names a day in the table.
pub(crate) fn validate(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    let max = table::days_in_month(year, month)?;
    if day == 0 || day > max {
        return Err(CalendarError::InvalidDay {
            year,
            month,
            day,
            max,
        });
    }
    Ok(())
}

/// 1-based day of the BS year. Month and day must be validated.
pub(crate) fn ordinal(year: i32, month: u32, day: u32) -> Result<u32, CalendarError> {
    Ok(table::days_before_month(year, month)? + day)
}

/// Signed days from the anchor BS date to a validated BS date.
fn offset_from_anchor(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    let target = i64::from(ordinal(year, month, day)?);
    let start = i64::from(ordinal(ANCHOR.bs_year, ANCHOR.bs_month, ANCHOR.bs_day)?);
    let mut offset = target - start;
    if year >= ANCHOR.bs_year {
        for y in ANCHOR.bs_year..year {
            offset += i64::from(table::days_in_year(y)?);
        }
    } else {
        for y in year..ANCHOR.bs_year {
            offset -= i64::from(table::days_in_year(y)?);
        }
    }
    Ok(offset)
}

/// `date + days`, failing instead of panicking on chrono overflow.
pub(crate) fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(CalendarError::DeltaOutOfRange { days })
}
