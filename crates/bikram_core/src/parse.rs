//! Pattern-driven parsing of BS date strings.

use crate::date::BsDate;
use crate::digits::is_devanagari_digit;
use crate::error::CalendarError;
use crate::month::Month;
use crate::pattern::{self, Code, Field, Item, Pad, Script};

impl BsDate {
    /// Parse `text` against a `%`-code pattern.
    ///
    /// Recognised codes: `%d %-d %m %-m %y %Y %B %b`, each with an optional
    /// `ne` suffix for Devanagari digits (`%Bne` and `%B` both accept Latin,
    /// abbreviated or Devanagari month names; the shared abbreviation `Ash` is
    /// rejected as ambiguous). `%y` means `20yy`. Literal
    /// pattern text must match exactly and the whole input must be consumed.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidPattern`] unless the pattern names year, month
    /// and day exactly once; [`CalendarError::Parse`] when `text` does not
    /// match; validation errors from [`BsDate::new`] otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use bikram_core::BsDate;
    ///
    /// let date = BsDate::parse("2073,Kartik,28", "%Y,%B,%d").unwrap();
    /// assert_eq!((2073, 7, 28), date.as_tuple());
    /// ```
    pub fn parse(text: &str, pattern: &str) -> Result<Self, CalendarError> {
        let items = pattern::lex(pattern)?;
        check_fields(&items)?;

        let mismatch =
            || CalendarError::Parse(format!("could not match {pattern:?} with {text:?}"));

        let (mut year, mut month, mut day) = (0, 0, 0);
        let mut rest = text;
        for item in &items {
            match item {
                Item::Literal(lit) => {
                    rest = rest.strip_prefix(*lit).ok_or_else(mismatch)?;
                }
                Item::Code(code) => {
                    let (value, len) = read_field(rest, *code).ok_or_else(mismatch)?;
                    match code.field {
                        Field::Year => year = value as i32,
                        Field::ShortYear => year = 2000 + value as i32,
                        Field::Month | Field::MonthName | Field::MonthAbbr => month = value,
                        Field::Day => day = value,
                        Field::ShahmukhiMonth | Field::Weekday => {}
                    }
                    rest = &rest[len..];
                }
            }
        }
        if !rest.is_empty() {
            return Err(mismatch());
        }

        Self::new(year, month, day)
    }

    /// Parse an ISO-style `YYYY-MM-DD` BS date.
    pub fn from_iso(text: &str) -> Result<Self, CalendarError> {
        Self::parse(text, "%Y-%m-%d")
    }
}

/// Require exactly one year, one month and one day code.
fn check_fields(items: &[Item<'_>]) -> Result<(), CalendarError> {
    let (mut years, mut months, mut days) = (0, 0, 0);
    for item in items {
        let Item::Code(code) = item else { continue };
        match code.field {
            Field::Year | Field::ShortYear => years += 1,
            Field::Month | Field::MonthName | Field::MonthAbbr => months += 1,
            Field::Day => days += 1,
            Field::ShahmukhiMonth | Field::Weekday => {
                return Err(CalendarError::InvalidPattern(
                    "%S and %A cannot be parsed".to_string(),
                ));
            }
        }
    }
    if (years, months, days) != (1, 1, 1) {
        return Err(CalendarError::InvalidPattern(
            "pattern must contain one year, one month and one day code".to_string(),
        ));
    }
    Ok(())
}

/// Read one field at the start of `text`; returns the value and bytes consumed.
fn read_field(text: &str, code: Code) -> Option<(u32, usize)> {
    let (min, max) = match (code.field, code.pad) {
        (Field::Year, _) => (4, 4),
        (Field::MonthName | Field::MonthAbbr, _) => {
            let (month, len) = Month::match_prefix(text)?;
            return Some((month.number(), len));
        }
        (_, Pad::Zero) => (2, 2),
        (_, Pad::Space) => (1, 2),
    };

    // space-padded codes accept the leading blank they are formatted with
    let skip = match code.pad {
        Pad::Space if text.starts_with(' ') => 1,
        _ => 0,
    };
    let (value, len) = read_digits(&text[skip..], min, max, code.script)?;
    Some((value, skip + len))
}

/// Read `min..=max` digits of `script`; returns the value and bytes consumed.
fn read_digits(text: &str, min: usize, max: usize, script: Script) -> Option<(u32, usize)> {
    let mut value = 0u32;
    let mut count = 0;
    let mut len = 0;
    for c in text.chars().take(max) {
        let digit = match script {
            Script::Latin if c.is_ascii_digit() => c.to_digit(10)?,
            Script::Devanagari if is_devanagari_digit(c) => c as u32 - '०' as u32,
            _ => break,
        };
        value = value * 10 + digit;
        count += 1;
        len += c.len_utf8();
    }
    (count >= min).then_some((value, len))
}
