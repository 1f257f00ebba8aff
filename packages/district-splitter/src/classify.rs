//! Line classification.

use crate::registry::{LinePrefix, Region};

/// A report line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// No marker prefix: copied into every region file.
    Unclassified { text: String },

    /// Marker prefix present: belongs to exactly one region file.
    RegionTagged { text: String, region: Region },
}

impl ClassifiedLine {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Unclassified { text } | Self::RegionTagged { text, .. } => text,
        }
    }

    #[must_use]
    pub fn region(&self) -> Option<Region> {
        match self {
            Self::Unclassified { .. } => None,
            Self::RegionTagged { region, .. } => Some(*region),
        }
    }

    /// Whether this line goes into the file for `region`.
    #[must_use]
    pub fn belongs_to(&self, region: Region) -> bool {
        match self {
            Self::Unclassified { .. } => true,
            Self::RegionTagged { region: own, .. } => *own == region,
        }
    }
}

/// Classify a single raw line.
///
/// Lines without a marker are unclassified. Marked lines get the first
/// district (in registry order) whose name occurs in the line, or the
/// catch-all region.
///
/// # Examples
/// ```
/// use district_splitter::classify::{classify, ClassifiedLine};
/// use district_splitter::registry::Region;
///
/// assert_eq!(
///     classify(r"\six Outage in Адмиралтейский district").region(),
///     Some(Region::Adm)
/// );
/// assert_eq!(classify(r"\ml unknown area").region(), Some(Region::Other));
/// assert!(matches!(
///     classify("General announcement"),
///     ClassifiedLine::Unclassified { .. }
/// ));
/// ```
#[must_use]
pub fn classify(raw_line: &str) -> ClassifiedLine {
    let text = raw_line.to_string();
    if !LinePrefix::is_marked(raw_line) {
        return ClassifiedLine::Unclassified { text };
    }
    let region = Region::find_in(raw_line).unwrap_or(Region::Other);
    ClassifiedLine::RegionTagged { text, region }
}

/// Classify every line of a document, preserving order.
pub fn classify_all<I, S>(lines: I) -> Vec<ClassifiedLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|l| classify(l.as_ref())).collect()
}
