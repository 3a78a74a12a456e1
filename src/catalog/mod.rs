//! The company catalog: the immutable, ordered data source of the view.
//!
//! A [`Catalog`] is built once from a [`CompanySource`] and never changes
//! afterwards. It is injected into the application state at construction time,
//! so nothing in the view needs synchronization.
//!
//! # Modules
//!
//! - `source`: The [`CompanySource`] trait
//! - `bundled`: Records compiled into the plugin
//! - `json`: Records read from a JSON file, with range checks

pub mod bundled;
pub mod json;
pub mod source;

pub use bundled::{bundled_companies, BundledSource};
pub use json::JsonFileSource;
pub use source::CompanySource;

use crate::domain::error::Result;
use crate::domain::Company;
use std::collections::BTreeSet;

/// Immutable ordered sequence of companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    companies: Vec<Company>,
}

impl Catalog {
    /// Wraps an already loaded sequence.
    #[must_use]
    pub const fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// Returns the catalog of bundled records.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(bundled_companies())
    }

    /// Loads a catalog from any source.
    ///
    /// # Errors
    ///
    /// Propagates the source's load error.
    pub fn load(source: &dyn CompanySource) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_load", source = %source.describe()).entered();
        let companies = source.load()?;
        tracing::debug!(company_count = companies.len(), "catalog loaded");
        Ok(Self::new(companies))
    }

    /// All companies in source order.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Every distinct category across all companies, sorted lexicographically.
    ///
    /// ```rust
    /// use warranty_ratings::catalog::Catalog;
    ///
    /// let categories = Catalog::bundled().categories();
    /// assert_eq!(categories, vec!["Clothing", "Luggage", "Other", "Outdoors"]);
    /// ```
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.companies
            .iter()
            .flat_map(|company| company.categories.iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
