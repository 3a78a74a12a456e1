//! The derived view pipeline: filter, then sort.
//!
//! ```text
//! Catalog ──► filter_companies ──► sort_companies ──► ordered cards
//!               ▲                    ▲
//!               │ search term        │ sort mode
//!               │ selected category  │
//!               └──── InteractionState
//! ```
//!
//! Both stages are total, synchronous, and never modify their input. The
//! pipeline is recomputed from scratch after every interaction.

pub mod filter;
pub mod sort;

pub use filter::{filter_companies, matches_category, matches_search};
pub use sort::{collate, sort_by_id, sort_companies};

use crate::domain::{Company, InteractionState};

/// Runs the filter stage, then the sort stage.
///
/// # Example
///
/// ```rust
/// use warranty_ratings::catalog::Catalog;
/// use warranty_ratings::domain::{InteractionState, SortMethod};
/// use warranty_ratings::pipeline::derive_view;
///
/// let catalog = Catalog::bundled();
/// let state = InteractionState::default()
///     .toggled_category("Luggage")
///     .with_sort_method(SortMethod::NameAZ);
/// let names: Vec<String> = derive_view(catalog.companies(), &state)
///     .into_iter()
///     .map(|c| c.name)
///     .collect();
/// assert_eq!(names, vec!["Osprey", "Patagonia"]);
/// ```
#[must_use]
pub fn derive_view(companies: &[Company], state: &InteractionState) -> Vec<Company> {
    let filtered = filter_companies(companies, state);
    sort_companies(&filtered, state.sort_method)
}
