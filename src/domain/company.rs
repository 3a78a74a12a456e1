//! Company domain model.
//!
//! A [`Company`] is an immutable record of one manufacturer's lifetime warranty
//! rating. Records are built once when the catalog loads and never mutated.

use super::score::{ScoreDimension, ScoreDisplay};
use serde::{Deserialize, Serialize};

/// A rated company.
///
/// Field names serialize in camelCase so external datasets use the same keys
/// as the rating sheets they are exported from (`totalScore`, `yearFounded`, ...).
///
/// The sub-scores are expected to add up to `total_score`, but nothing checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique name within the dataset.
    pub name: String,
    /// Overall rating, 0 to 20.
    pub total_score: u8,
    /// Free-form price label such as `"$$ - $$$"`.
    pub price_range: String,
    /// Clarity sub-score, 0 to 3.
    pub clarity_total: u8,
    /// Coverage sub-score, 0 to 10.
    pub coverage_total: u8,
    /// Claim process sub-score, 0 to 7.
    pub process_total: u8,
    /// Calendar year the company was founded.
    pub year_founded: i32,
    /// Ordered category names. Never empty.
    pub categories: Vec<String>,
}

impl Company {
    /// Returns the raw score for a dimension.
    #[must_use]
    pub const fn score(&self, dimension: ScoreDimension) -> u8 {
        match dimension {
            ScoreDimension::Total => self.total_score,
            ScoreDimension::Clarity => self.clarity_total,
            ScoreDimension::Coverage => self.coverage_total,
            ScoreDimension::Process => self.process_total,
        }
    }

    /// Returns the score for a dimension paired with that dimension's ceiling.
    ///
    /// # Example
    ///
    /// ```rust
    /// use warranty_ratings::catalog::Catalog;
    /// use warranty_ratings::domain::ScoreDimension;
    ///
    /// let catalog = Catalog::bundled();
    /// let osprey = &catalog.companies()[1];
    /// assert_eq!(osprey.score_display(ScoreDimension::Coverage).label(), "10/10");
    /// ```
    #[must_use]
    pub const fn score_display(&self, dimension: ScoreDimension) -> ScoreDisplay {
        ScoreDisplay::new(self.score(dimension), dimension.max())
    }

    /// Returns `true` if `category` is one of this company's categories.
    ///
    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns the "Est. YYYY" line shown under the company name.
    #[must_use]
    pub fn established_label(&self) -> String {
        format!("Est. {}", self.year_founded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydroflask() -> Company {
        Company {
            name: "Hydroflask".to_string(),
            total_score: 8,
            price_range: "$ - $$".to_string(),
            clarity_total: 1,
            coverage_total: 4,
            process_total: 3,
            year_founded: 2009,
            categories: vec!["Outdoors".to_string(), "Other".to_string()],
        }
    }

    #[test]
    fn category_membership_is_exact() {
        let company = hydroflask();
        assert!(company.has_category("Outdoors"));
        assert!(!company.has_category("outdoors"));
        assert!(!company.has_category("Out"));
    }

    #[test]
    fn score_display_uses_dimension_ceiling() {
        let company = hydroflask();
        assert_eq!(company.score_display(ScoreDimension::Total).label(), "8/20");
        assert_eq!(company.score_display(ScoreDimension::Process).label(), "3/7");
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "name": "Hydroflask",
            "totalScore": 8,
            "priceRange": "$ - $$",
            "clarityTotal": 1,
            "coverageTotal": 4,
            "processTotal": 3,
            "yearFounded": 2009,
            "categories": ["Outdoors", "Other"]
        }"#;
        let parsed: Company = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, hydroflask());
    }

    #[test]
    fn established_label() {
        assert_eq!(hydroflask().established_label(), "Est. 2009");
    }
}
