//! Nepali weekday names.

/// Day of the week, Sunday first as on Nepali calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Aaitabar,
    Sombar,
    Mangalbar,
    Budhabar,
    Bihibar,
    Shukrabar,
    Shanibar,
}

/// All 7 weekdays, index 0 = Aaitabar (Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Aaitabar,
    Weekday::Sombar,
    Weekday::Mangalbar,
    Weekday::Budhabar,
    Weekday::Bihibar,
    Weekday::Shukrabar,
    Weekday::Shanibar,
];

impl Weekday {
    /// Latin-script Nepali name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aaitabar => "Aaitabar",
            Self::Sombar => "Sombar",
            Self::Mangalbar => "Mangalbar",
            Self::Budhabar => "Budhabar",
            Self::Bihibar => "Bihibar",
            Self::Shukrabar => "Shukrabar",
            Self::Shanibar => "Shanibar",
        }
    }

    /// Devanagari name.
    pub const fn devanagari(self) -> &'static str {
        match self {
            Self::Aaitabar => "आइतबार",
            Self::Sombar => "सोमबार",
            Self::Mangalbar => "मंगलबार",
            Self::Budhabar => "बुधबार",
            Self::Bihibar => "बिहीबार",
            Self::Shukrabar => "शुक्रबार",
            Self::Shanibar => "शनिबार",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        ALL_WEEKDAYS[day.num_days_from_sunday() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
