//! Sort modes offered by the sort dropdown.

use std::fmt;

/// Ordering applied to the filtered company list.
///
/// Each mode has a stable string identifier (used in configuration) and a
/// human-readable label (shown in the dropdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMethod {
    /// Founding year, oldest first.
    #[default]
    YearOldest,
    /// Founding year, newest first.
    YearNewest,
    /// Total score, highest first.
    ScoreHigh,
    /// Total score, lowest first.
    ScoreLow,
    /// Name, A to Z.
    NameAZ,
    /// Name, Z to A.
    NameZA,
}

impl SortMethod {
    /// All modes in dropdown order.
    pub const ALL: [Self; 6] = [
        Self::YearOldest,
        Self::YearNewest,
        Self::ScoreHigh,
        Self::ScoreLow,
        Self::NameAZ,
        Self::NameZA,
    ];

    /// Returns the mode identifier, e.g. `"yearOldest"`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::YearOldest => "yearOldest",
            Self::YearNewest => "yearNewest",
            Self::ScoreHigh => "scoreHigh",
            Self::ScoreLow => "scoreLow",
            Self::NameAZ => "nameAZ",
            Self::NameZA => "nameZA",
        }
    }

    /// Returns the dropdown label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::YearOldest => "Year Founded (Oldest First)",
            Self::YearNewest => "Year Founded (Newest First)",
            Self::ScoreHigh => "Highest Score",
            Self::ScoreLow => "Lowest Score",
            Self::NameAZ => "Name (A-Z)",
            Self::NameZA => "Name (Z-A)",
        }
    }

    /// Looks up a mode by identifier. Unknown identifiers return `None`.
    ///
    /// ```rust
    /// use warranty_ratings::domain::SortMethod;
    ///
    /// assert_eq!(SortMethod::from_id("scoreHigh"), Some(SortMethod::ScoreHigh));
    /// assert_eq!(SortMethod::from_id("bogus"), None);
    /// ```
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.id() == id)
    }

    /// Position of this mode in [`SortMethod::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|method| *method == self)
            .unwrap_or(0)
    }

    /// The next mode in dropdown order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous mode in dropdown order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_year_oldest() {
        assert_eq!(SortMethod::default(), SortMethod::YearOldest);
    }

    #[test]
    fn ids_round_trip() {
        for method in SortMethod::ALL {
            assert_eq!(SortMethod::from_id(method.id()), Some(method));
        }
    }

    #[test]
    fn ids_are_case_sensitive() {
        assert_eq!(SortMethod::from_id("NAMEAZ"), None);
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(SortMethod::NameZA.next(), SortMethod::YearOldest);
        assert_eq!(SortMethod::YearOldest.previous(), SortMethod::NameZA);
        assert_eq!(SortMethod::ScoreHigh.next(), SortMethod::ScoreLow);
    }

    #[test]
    fn labels_match_dropdown_text() {
        let labels: Vec<&str> = SortMethod::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Year Founded (Oldest First)",
                "Year Founded (Newest First)",
                "Highest Score",
                "Lowest Score",
                "Name (A-Z)",
                "Name (Z-A)",
            ]
        );
    }
}
