//! Data source abstraction.
//!
//! The [`CompanySource`] trait separates where company records come from from
//! how they are filtered and sorted. The filter and sort stages only ever see
//! a slice of [`Company`], so a different loader can be swapped in without
//! touching them.

use crate::domain::error::Result;
use crate::domain::Company;

/// A provider of company records.
///
/// # Implementations
///
/// - [`BundledSource`](super::BundledSource): records compiled into the plugin (default)
/// - [`JsonFileSource`](super::JsonFileSource): records read from a JSON file
///
/// # Examples
///
/// ```rust
/// use warranty_ratings::catalog::{BundledSource, CompanySource};
///
/// let companies = BundledSource.load()?;
/// assert_eq!(companies.len(), 3);
/// # Ok::<(), warranty_ratings::WarrantyRatingsError>(())
/// ```
pub trait CompanySource {
    /// Loads every record in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or fail validation.
    fn load(&self) -> Result<Vec<Company>>;

    /// Short description used in log output.
    fn describe(&self) -> String;
}
