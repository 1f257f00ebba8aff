//! Saint Petersburg administrative districts.

use std::fmt;

/// An administrative district a report line may refer to.
///
/// Declaration order matters: it decides which district wins when a line
/// names several of them, and the order in which region files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Adm,
    Vas,
    Vyb,
    Kal,
    Kir,
    Kol,
    Krag,
    Krasn,
    Kronsh,
    Kur,
    Mos,
    Nev,
    Petrogv,
    Petrdv,
    Pri,
    Push,
    Fr,
    Chentr,

    /// Catch-all for marked lines that name no known district.
    Other,
}

impl Region {
    /// Districts eligible for display-name matching, in priority order.
    pub const KNOWN: [Region; 18] = [
        Self::Adm,
        Self::Vas,
        Self::Vyb,
        Self::Kal,
        Self::Kir,
        Self::Kol,
        Self::Krag,
        Self::Krasn,
        Self::Kronsh,
        Self::Kur,
        Self::Mos,
        Self::Nev,
        Self::Petrogv,
        Self::Petrdv,
        Self::Pri,
        Self::Push,
        Self::Fr,
        Self::Chentr,
    ];

    /// Every region, catch-all last. This is the output order.
    pub const ALL: [Region; 19] = [
        Self::Adm,
        Self::Vas,
        Self::Vyb,
        Self::Kal,
        Self::Kir,
        Self::Kol,
        Self::Krag,
        Self::Krasn,
        Self::Kronsh,
        Self::Kur,
        Self::Mos,
        Self::Nev,
        Self::Petrogv,
        Self::Petrdv,
        Self::Pri,
        Self::Push,
        Self::Fr,
        Self::Chentr,
        Self::Other,
    ];

    /// Short identifier, used as the output file suffix.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Adm => "adm",
            Self::Vas => "vas",
            Self::Vyb => "vyb",
            Self::Kal => "kal",
            Self::Kir => "kir",
            Self::Kol => "kol",
            Self::Krag => "krag",
            Self::Krasn => "krasn",
            Self::Kronsh => "kronsh",
            Self::Kur => "kur",
            Self::Mos => "mos",
            Self::Nev => "nev",
            Self::Petrogv => "petrogv",
            Self::Petrdv => "petrdv",
            Self::Pri => "pri",
            Self::Push => "push",
            Self::Fr => "fr",
            Self::Chentr => "chentr",
            Self::Other => "other",
        }
    }

    /// District name as it appears in the reports.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Adm => "Адмиралтейский",
            Self::Vas => "Василеостровский",
            Self::Vyb => "Выборгский",
            Self::Kal => "Калининский",
            Self::Kir => "Кировский",
            Self::Kol => "Колпинский",
            Self::Krag => "Красногвардейский",
            Self::Krasn => "Красносельский",
            Self::Kronsh => "Кронштадтский",
            Self::Kur => "Курортный",
            Self::Mos => "Московский",
            Self::Nev => "Невский",
            Self::Petrogv => "Петроградский",
            Self::Petrdv => "Петродворцовый",
            Self::Pri => "Приморский",
            Self::Push => "Пушкинский",
            Self::Fr => "Фрунзенский",
            Self::Chentr => "Центральный",
            Self::Other => "--------------------",
        }
    }

    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::Other)
    }

    /// Look up a region by its code (case-sensitive).
    ///
    /// # Examples
    /// ```
    /// use district_splitter::registry::Region;
    ///
    /// assert_eq!(Region::from_code("nev"), Some(Region::Nev));
    /// assert_eq!(Region::from_code("NEV"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// First known district whose display name occurs in `text`.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .find(|r| text.contains(r.display_name()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
