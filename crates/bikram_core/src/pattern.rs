//! Lexer for `%`-style date patterns shared by formatting and parsing.

use crate::error::CalendarError;

/// Date field a code refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Day,
    Month,
    ShortYear,
    Year,
    MonthName,
    MonthAbbr,
    ShahmukhiMonth,
    Weekday,
}

/// Padding requested by the optional `-` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pad {
    Zero,
    Space,
}

/// Script selected by the optional `ne` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Script {
    Latin,
    Devanagari,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Code {
    pub field: Field,
    pub pad: Pad,
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Item<'a> {
    Literal(&'a str),
    Code(Code),
}

/// Split `pattern` into literals and codes.
///
/// A code is `%`, an optional `-`, one of `d m y Y B b S A`, and an optional
/// `ne` suffix selecting Devanagari. `%%` is a literal percent sign.
pub(crate) fn lex(pattern: &str) -> Result<Vec<Item<'_>>, CalendarError> {
    let mut items = Vec::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        let Some(pos) = rest.find('%') else {
            items.push(Item::Literal(rest));
            break;
        };
        if pos > 0 {
            items.push(Item::Literal(&rest[..pos]));
        }
        rest = &rest[pos + 1..];

        if let Some(tail) = rest.strip_prefix('%') {
            items.push(Item::Literal("%"));
            rest = tail;
            continue;
        }

        let (pad, body) = match rest.strip_prefix('-') {
            Some(body) => (Pad::Space, body),
            None => (Pad::Zero, rest),
        };
        let mut chars = body.chars();
        let letter = chars.next();
        let after = chars.as_str();
        let (script, after) = match after.strip_prefix("ne") {
            Some(tail) if matches!(letter, Some('d' | 'm' | 'y' | 'Y' | 'B' | 'A')) => {
                (Script::Devanagari, tail)
            }
            _ => (Script::Latin, after),
        };

        let field = match letter {
            Some('d') => Field::Day,
            Some('m') => Field::Month,
            Some('y') => Field::ShortYear,
            Some('Y') => Field::Year,
            Some('B') => Field::MonthName,
            Some('b') => Field::MonthAbbr,
            Some('S') => Field::ShahmukhiMonth,
            Some('A') => Field::Weekday,
            _ => return Err(unknown(pattern, rest, after)),
        };
        if pad == Pad::Space && !matches!(field, Field::Day | Field::Month) {
            return Err(unknown(pattern, rest, after));
        }

        items.push(Item::Code(Code { field, pad, script }));
        rest = after;
    }
    Ok(items)
}

/// Error naming the offending code: the text between `%` and `after`.
fn unknown(pattern: &str, code_start: &str, after: &str) -> CalendarError {
    let start = pattern.len() - code_start.len() - 1;
    let end = pattern.len() - after.len();
    CalendarError::UnknownFormatCode(pattern[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(field: Field, pad: Pad, script: Script) -> Item<'static> {
        Item::Code(Code { field, pad, script })
    }

    #[test]
    fn literals_and_codes() {
        let items = lex("%Y-%m-%d").unwrap();
        assert_eq!(
            items,
            vec![
                code(Field::Year, Pad::Zero, Script::Latin),
                Item::Literal("-"),
                code(Field::Month, Pad::Zero, Script::Latin),
                Item::Literal("-"),
                code(Field::Day, Pad::Zero, Script::Latin),
            ]
        );
    }

    #[test]
    fn flags_and_suffixes() {
        let items = lex("%Yne/%-mne %-d%Bne").unwrap();
        assert_eq!(
            items,
            vec![
                code(Field::Year, Pad::Zero, Script::Devanagari),
                Item::Literal("/"),
                code(Field::Month, Pad::Space, Script::Devanagari),
                Item::Literal(" "),
                code(Field::Day, Pad::Space, Script::Latin),
                code(Field::MonthName, Pad::Zero, Script::Devanagari),
            ]
        );
    }

    #[test]
    fn percent_escape() {
        assert_eq!(
            lex("100%% %d").unwrap(),
            vec![
                Item::Literal("100"),
                Item::Literal("%"),
                Item::Literal(" "),
                code(Field::Day, Pad::Zero, Script::Latin),
            ]
        );
    }

    #[test]
    fn ne_only_binds_to_supported_letters() {
        // %S has no Devanagari form, so "ne" stays literal text
        assert_eq!(
            lex("%Sne").unwrap(),
            vec![
                code(Field::ShahmukhiMonth, Pad::Zero, Script::Latin),
                Item::Literal("ne"),
            ]
        );
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(
            lex("%Y-%Q"),
            Err(CalendarError::UnknownFormatCode("%Q".into()))
        );
        assert_eq!(
            lex("%-Y"),
            Err(CalendarError::UnknownFormatCode("%-Y".into()))
        );
        assert_eq!(lex("%d%"), Err(CalendarError::UnknownFormatCode("%".into())));
    }
}
