//! The twelve Bikram Samwat months and their names.
//!
//! Names are given in Latin transliteration (the spelling used on Nepali
//! government calendars), as three-letter abbreviations, in Devanagari and in
//! Shahmukhi script.

/// BS months, Baisakh (1) through Chaitra (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Baisakh,
    Jestha,
    Ashadh,
    Shrawan,
    Bhadra,
    Ashwin,
    Kartik,
    Mangsir,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

/// All 12 months in calendar order (index 0 = Baisakh).
pub const ALL_MONTHS: [Month; 12] = [
    Month::Baisakh,
    Month::Jestha,
    Month::Ashadh,
    Month::Shrawan,
    Month::Bhadra,
    Month::Ashwin,
    Month::Kartik,
    Month::Mangsir,
    Month::Poush,
    Month::Magh,
    Month::Falgun,
    Month::Chaitra,
];

const LATIN_NAMES: [&str; 12] = [
    "Baisakh",
    "Jestha",
    "Ashadh",
    "Shrawan",
    "Bhadra",
    "Ashwin",
    "Kartik",
    "Mangsir",
    "Poush",
    "Magh",
    "Falgun",
    "Chaitra",
];

const DEVANAGARI_NAMES: [&str; 12] = [
    "वैशाख",
    "जेष्ठ",
    "आषाढ़",
    "श्रावण",
    "भाद्र",
    "आश्विन",
    "कार्तिक",
    "मंसिर",
    "पौष",
    "माघ",
    "फाल्गुन",
    "चैत्र",
];

const SHAHMUKHI_NAMES: [&str; 12] = [
    "بیساکھ",
    "جیٹھ",
    "ہاڑ",
    "ساون",
    "بھادوں",
    "اسو",
    "کتا",
    "مگھر",
    "پوہ",
    "ماگھ",
    "پھگن",
    "چیت",
];

impl Month {
    /// 1-based month number (Baisakh = 1).
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Month for a 1-based number, `None` outside 1..=12.
    pub fn from_number(number: u32) -> Option<Self> {
        let idx = usize::try_from(number.checked_sub(1)?).ok()?;
        ALL_MONTHS.get(idx).copied()
    }

    /// Latin-script name, e.g. `"Baisakh"`.
    pub fn name(self) -> &'static str {
        LATIN_NAMES[self as usize]
    }

    /// First three letters of the Latin name, e.g. `"Bai"`.
    ///
    /// Ashadh and Ashwin share the abbreviation `"Ash"`, which
    /// [`from_name`](Self::from_name) therefore rejects.
    pub fn abbreviation(self) -> &'static str {
        &LATIN_NAMES[self as usize][..3]
    }

    /// Devanagari name, e.g. `"वैशाख"`.
    pub fn devanagari(self) -> &'static str {
        DEVANAGARI_NAMES[self as usize]
    }

    /// Shahmukhi (Punjabi) name, e.g. `"بیساکھ"`.
    pub fn shahmukhi(self) -> &'static str {
        SHAHMUKHI_NAMES[self as usize]
    }

    /// Look up a month by Latin name, abbreviation or Devanagari name.
    ///
    /// Latin names and abbreviations match case-insensitively. An ambiguous
    /// abbreviation (`"Ash"`) yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match Self::match_prefix(name) {
            Some((month, len)) if len == name.len() => Some(month),
            _ => None,
        }
    }

    /// Longest month name at the start of `text`, with its byte length.
    pub(crate) fn match_prefix(text: &str) -> Option<(Self, usize)> {
        for month in ALL_MONTHS {
            let latin = month.name();
            if prefix_eq_ignore_case(text, latin) {
                return Some((month, latin.len()));
            }
            if text.starts_with(month.devanagari()) {
                return Some((month, month.devanagari().len()));
            }
        }

        let mut found = ALL_MONTHS
            .into_iter()
            .filter(|m| prefix_eq_ignore_case(text, m.abbreviation()));
        match (found.next(), found.next()) {
            (Some(month), None) => Some((month, 3)),
            _ => None,
        }
    }
}

fn prefix_eq_ignore_case(text: &str, name: &str) -> bool {
    text.get(..name.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(name))
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
