//! Filter stage: text search and category membership.
//!
//! A company passes when both hold:
//!
//! 1. **Text match**: the lower-cased search term is a substring of the
//!    lower-cased name, or of at least one lower-cased category.
//! 2. **Category match**: no category is selected, or the company's
//!    categories contain the selected one exactly.
//!
//! An empty search term matches everything. A selected category absent from
//! the dataset simply yields an empty result.

use crate::domain::{Company, InteractionState};

/// Returns `true` if `term` occurs in the name or any category, ignoring case.
#[must_use]
pub fn matches_search(company: &Company, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    company.name.to_lowercase().contains(&needle)
        || company
            .categories
            .iter()
            .any(|category| category.to_lowercase().contains(&needle))
}

/// Returns `true` if no category is selected or the company has it.
#[must_use]
pub fn matches_category(company: &Company, selected: Option<&str>) -> bool {
    selected.map_or(true, |category| company.has_category(category))
}

/// Returns the companies passing both tests, in input order.
///
/// The input is never modified; the result is a fresh sequence.
///
/// # Example
///
/// ```rust
/// use warranty_ratings::catalog::Catalog;
/// use warranty_ratings::domain::InteractionState;
/// use warranty_ratings::pipeline::filter_companies;
///
/// let catalog = Catalog::bundled();
/// let state = InteractionState::default().with_search_term("OSP");
/// let result = filter_companies(catalog.companies(), &state);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].name, "Osprey");
/// ```
#[must_use]
pub fn filter_companies(companies: &[Company], state: &InteractionState) -> Vec<Company> {
    let _span = tracing::debug_span!(
        "filter_companies",
        total = companies.len(),
        term_len = state.search_term.len(),
        category = ?state.selected_category
    )
    .entered();

    let selected = state.selected_category.as_deref();
    let filtered: Vec<Company> = companies
        .iter()
        .filter(|company| {
            matches_search(company, &state.search_term) && matches_category(company, selected)
        })
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter stage applied");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_companies;

    fn names(companies: &[Company]) -> Vec<&str> {
        companies.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn empty_term_matches_everything() {
        let companies = bundled_companies();
        let result = filter_companies(&companies, &InteractionState::default());
        assert_eq!(result, companies);
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let companies = bundled_companies();
        let state = InteractionState::default().with_search_term("oSPrEy");
        assert_eq!(names(&filter_companies(&companies, &state)), vec!["Osprey"]);
    }

    #[test]
    fn search_matches_category_substring() {
        let companies = bundled_companies();
        let state = InteractionState::default().with_search_term("lugg");
        assert_eq!(
            names(&filter_companies(&companies, &state)),
            vec!["Patagonia", "Osprey"]
        );
    }

    #[test]
    fn search_matches_name_or_category() {
        let companies = bundled_companies();
        // "oth" hits Patagonia's "Clothing" and Hydroflask's "Other".
        let state = InteractionState::default().with_search_term("oth");
        assert_eq!(
            names(&filter_companies(&companies, &state)),
            vec!["Patagonia", "Hydroflask"]
        );
    }

    #[test]
    fn category_filter_is_exact() {
        let companies = bundled_companies();
        let state = InteractionState::default().toggled_category("luggage");
        assert!(filter_companies(&companies, &state).is_empty());

        let state = InteractionState::default().toggled_category("Lugg");
        assert!(filter_companies(&companies, &state).is_empty());
    }

    #[test]
    fn search_and_category_combine_with_and() {
        let companies = bundled_companies();
        let state = InteractionState::default()
            .with_search_term("a")
            .toggled_category("Other");
        // Only Hydroflask is in "Other", and its name contains "a".
        assert_eq!(names(&filter_companies(&companies, &state)), vec!["Hydroflask"]);

        let state = state.with_search_term("patagonia");
        assert!(filter_companies(&companies, &state).is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let companies = bundled_companies();
        let state = InteractionState::default().toggled_category("Kitchen");
        assert!(filter_companies(&companies, &state).is_empty());
    }

    #[test]
    fn every_result_contains_the_term() {
        let companies = bundled_companies();
        for term in ["", "a", "o", "door", "FLASK", "$", "zz"] {
            let state = InteractionState::default().with_search_term(term);
            let result = filter_companies(&companies, &state);
            let needle = term.to_lowercase();
            for company in &result {
                assert!(companies.contains(company));
                assert!(
                    company.name.to_lowercase().contains(&needle)
                        || company
                            .categories
                            .iter()
                            .any(|c| c.to_lowercase().contains(&needle))
                );
            }
        }
    }

    #[test]
    fn clearing_category_restores_unfiltered_result() {
        let companies = bundled_companies();
        let base = InteractionState::default().with_search_term("o");
        let selected = base.toggled_category("Luggage");
        let cleared = selected.toggled_category("Luggage");

        for company in filter_companies(&companies, &selected) {
            assert!(company.has_category("Luggage"));
        }
        assert_eq!(
            filter_companies(&companies, &cleared),
            filter_companies(&companies, &base)
        );
    }
}
