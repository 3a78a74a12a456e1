//! The user-controlled inputs of the derived view.
//!
//! [`InteractionState`] holds exactly three independent fields: the search
//! term, the selected category, and the sort mode. Transitions never mutate in
//! place; each returns a new state so handlers can be tested without a host.

use super::sort_method::SortMethod;

/// Search term, category filter, and sort mode driving the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Free-text search. Empty matches every company.
    pub search_term: String,
    /// Category filter. `None` means no filter.
    pub selected_category: Option<String>,
    /// Ordering applied after filtering.
    pub sort_method: SortMethod,
}

impl InteractionState {
    /// Creates the initial state with a given sort mode.
    #[must_use]
    pub const fn with_initial_sort(sort_method: SortMethod) -> Self {
        Self {
            search_term: String::new(),
            selected_category: None,
            sort_method,
        }
    }

    /// Returns a copy with the search term replaced.
    #[must_use]
    pub fn with_search_term(&self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with `category` toggled.
    ///
    /// Activating the already-selected category clears the filter; activating
    /// any other category replaces it.
    ///
    /// ```rust
    /// use warranty_ratings::domain::InteractionState;
    ///
    /// let state = InteractionState::default().toggled_category("Luggage");
    /// assert_eq!(state.selected_category.as_deref(), Some("Luggage"));
    ///
    /// let cleared = state.toggled_category("Luggage");
    /// assert_eq!(cleared.selected_category, None);
    /// ```
    #[must_use]
    pub fn toggled_category(&self, category: &str) -> Self {
        let selected_category = if self.selected_category.as_deref() == Some(category) {
            None
        } else {
            Some(category.to_string())
        };
        Self {
            selected_category,
            ..self.clone()
        }
    }

    /// Returns a copy with the sort mode replaced.
    #[must_use]
    pub fn with_sort_method(&self, sort_method: SortMethod) -> Self {
        Self {
            sort_method,
            ..self.clone()
        }
    }

    /// Returns `true` if `category` is the active filter.
    #[must_use]
    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_category.as_deref() == Some(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = InteractionState::default();
        assert!(state.search_term.is_empty());
        assert_eq!(state.selected_category, None);
        assert_eq!(state.sort_method, SortMethod::YearOldest);
    }

    #[test]
    fn selecting_another_category_replaces_filter() {
        let state = InteractionState::default()
            .toggled_category("Luggage")
            .toggled_category("Outdoors");
        assert_eq!(state.selected_category.as_deref(), Some("Outdoors"));
    }

    #[test]
    fn transitions_leave_other_fields_alone() {
        let state = InteractionState::default()
            .with_search_term("os")
            .with_sort_method(SortMethod::NameZA)
            .toggled_category("Luggage");
        assert_eq!(state.search_term, "os");
        assert_eq!(state.sort_method, SortMethod::NameZA);
        assert!(state.is_selected("Luggage"));
        assert!(!state.is_selected("Outdoors"));
    }

    #[test]
    fn transitions_do_not_touch_the_original() {
        let original = InteractionState::default();
        let _changed = original.with_search_term("patagonia");
        assert!(original.search_term.is_empty());
    }
}
