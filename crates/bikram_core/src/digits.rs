//! Latin <-> Devanagari digit transliteration.

const DEVANAGARI_ZERO: u32 = 0x0966;

/// Whether `c` is one of `०`..=`९`.
pub fn is_devanagari_digit(c: char) -> bool {
    ('०'..='९').contains(&c)
}

/// Replace ASCII digits with Devanagari digits; other characters pass through.
pub fn to_devanagari(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => {
                char::from_u32(DEVANAGARI_ZERO + d).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Replace Devanagari digits with ASCII digits.
///
/// Returns `None` if `text` contains anything other than Devanagari digits.
pub fn from_devanagari(text: &str) -> Option<String> {
    text.chars()
        .map(|c| {
            if is_devanagari_digit(c) {
                char::from_digit(c as u32 - DEVANAGARI_ZERO, 10)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_to_devanagari() {
        assert_eq!(to_devanagari("2076"), "२०७६");
        assert_eq!(to_devanagari(" 4"), " ४");
        assert_eq!(to_devanagari("07-28"), "०७-२८");
    }

    #[test]
    fn devanagari_to_latin() {
        assert_eq!(from_devanagari("२०७३").as_deref(), Some("2073"));
        assert_eq!(from_devanagari("०७").as_deref(), Some("07"));
        assert_eq!(from_devanagari("२०x"), None);
    }

    #[test]
    fn digit_class() {
        assert!(is_devanagari_digit('०'));
        assert!(is_devanagari_digit('९'));
        assert!(!is_devanagari_digit('9'));
    }
}
