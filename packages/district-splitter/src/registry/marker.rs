//! Line prefix markers.

/// Prefix that makes a line eligible for district classification.
///
/// The token written in the report is a backslash followed by the name,
/// e.g. `\six`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePrefix {
    Six,
    Ml,
    St,
    Euler,
}

impl LinePrefix {
    pub const ALL: [LinePrefix; 4] = [Self::Six, Self::Ml, Self::St, Self::Euler];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Six => "six",
            Self::Ml => "ml",
            Self::St => "st",
            Self::Euler => "euler",
        }
    }

    /// Marker token as it appears at the start of a line.
    #[must_use]
    pub fn token(&self) -> String {
        format!("\\{}", self.name())
    }

    /// Whether `line` starts with this marker.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        line.strip_prefix('\\')
            .is_some_and(|rest| rest.starts_with(self.name()))
    }

    /// Whether `line` starts with any marker.
    ///
    /// # Examples
    /// ```
    /// use district_splitter::registry::LinePrefix;
    ///
    /// assert!(LinePrefix::is_marked(r"\euler report"));
    /// assert!(!LinePrefix::is_marked(r" \euler report"));
    /// ```
    #[must_use]
    pub fn is_marked(line: &str) -> bool {
        Self::ALL.iter().any(|prefix| prefix.matches(line))
    }
}
