//! JSON file data source.
//!
//! Reads a top-level JSON array of company records, for example:
//!
//! ```json
//! [
//!   {
//!     "name": "Osprey",
//!     "totalScore": 18,
//!     "priceRange": "$$ - $$$",
//!     "clarityTotal": 2,
//!     "coverageTotal": 10,
//!     "processTotal": 6,
//!     "yearFounded": 1974,
//!     "categories": ["Outdoors", "Luggage"]
//!   }
//! ]
//! ```
//!
//! Unlike the bundled records, file contents are range-checked before use.
//! The sub-score sum is not compared to the total.

use super::source::CompanySource;
use crate::domain::error::{Result, WarrantyRatingsError};
use crate::domain::{Company, ScoreDimension};
use chrono::Datelike;
use std::collections::HashSet;
use std::path::PathBuf;

/// Source reading records from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl CompanySource for JsonFileSource {
    fn load(&self) -> Result<Vec<Company>> {
        let _span = tracing::debug_span!("json_source_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let companies = parse_companies(&contents)?;

        tracing::debug!(company_count = companies.len(), "loaded dataset file");
        Ok(companies)
    }

    fn describe(&self) -> String {
        format!("dataset file {}", self.file_path.display())
    }
}

/// Parses and validates a JSON array of company records.
///
/// # Errors
///
/// Returns [`WarrantyRatingsError::Dataset`] if the JSON is malformed or any
/// record fails validation.
pub fn parse_companies(contents: &str) -> Result<Vec<Company>> {
    let companies: Vec<Company> = serde_json::from_str(contents)
        .map_err(|e| WarrantyRatingsError::Dataset(format!("failed to parse JSON: {e}")))?;

    validate(&companies, chrono::Utc::now().year())?;
    Ok(companies)
}

/// Checks ranges, required fields, and name uniqueness.
fn validate(companies: &[Company], current_year: i32) -> Result<()> {
    let mut seen = HashSet::new();

    for company in companies {
        if company.name.trim().is_empty() {
            return Err(WarrantyRatingsError::Dataset(
                "company with empty name".to_string(),
            ));
        }
        if !seen.insert(company.name.as_str()) {
            return Err(WarrantyRatingsError::Dataset(format!(
                "duplicate company name: {}",
                company.name
            )));
        }
        if company.categories.is_empty() {
            return Err(WarrantyRatingsError::Dataset(format!(
                "{} has no categories",
                company.name
            )));
        }

        let dimensions = std::iter::once(ScoreDimension::Total).chain(ScoreDimension::BREAKDOWN);
        for dimension in dimensions {
            let score = company.score(dimension);
            if score > dimension.max() {
                return Err(WarrantyRatingsError::Dataset(format!(
                    "{}: {} score {score} exceeds {}",
                    company.name,
                    dimension.label().to_lowercase(),
                    dimension.max()
                )));
            }
        }

        if company.year_founded > current_year {
            return Err(WarrantyRatingsError::Dataset(format!(
                "{}: founding year {} is in the future",
                company.name, company.year_founded
            )));
        }
    }

    Ok(())
}
