//! Application state management.
//!
//! [`AppState`] owns the catalog, the three interaction fields, and the
//! derived company list. The derived list is never edited directly: every
//! interaction produces a new [`InteractionState`] and [`AppState::refresh`]
//! reruns the filter and sort stages from scratch.
//!
//! # State Components
//!
//! - **Catalog**: immutable company records, fixed after load
//! - **Interaction**: search term, selected category, sort mode
//! - **Visible**: the pipeline output, in display order
//! - **Selection**: card cursor within `visible`
//! - **Input Mode**: keyboard focus and keybinding interpretation
//!
//! # Example
//!
//! ```rust
//! use warranty_ratings::app::AppState;
//! use warranty_ratings::catalog::Catalog;
//! use warranty_ratings::domain::InteractionState;
//!
//! let mut state = AppState::with_defaults(Catalog::bundled(), InteractionState::default());
//! state.set_search_term("osprey");
//! assert_eq!(state.visible().len(), 1);
//! ```

use super::modes::InputMode;
use crate::catalog::Catalog;
use crate::domain::{Company, InteractionState, SortMethod};
use crate::pipeline::derive_view;
use crate::ui::styles::CategoryPalette;
use crate::ui::theme::Theme;

/// Pane size used before the host reports one.
const DEFAULT_VIEWPORT: (usize, usize) = (24, 80);

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    interaction: InteractionState,

    /// Pipeline output for the current interaction state.
    visible: Vec<Company>,

    /// Distinct categories across the whole catalog, sorted.
    categories: Vec<String>,

    /// Zero-based card cursor within `visible`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub theme: Theme,

    pub palette: CategoryPalette,

    /// Last pane size passed to the renderer, as `(rows, cols)`.
    ///
    /// Mouse events carry pane coordinates, so hit-testing rebuilds the
    /// layout for the same size the user is looking at.
    viewport: (usize, usize),
}

impl AppState {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        interaction: InteractionState,
        theme: Theme,
        palette: CategoryPalette,
    ) -> Self {
        let categories = catalog.categories();
        let mut state = Self {
            catalog,
            interaction,
            visible: Vec::new(),
            categories,
            selected_index: 0,
            input_mode: InputMode::Browse,
            theme,
            palette,
            viewport: DEFAULT_VIEWPORT,
        };
        state.refresh();
        state
    }

    /// Creates state with the default theme and category palette.
    #[must_use]
    pub fn with_defaults(catalog: Catalog, interaction: InteractionState) -> Self {
        Self::new(catalog, interaction, Theme::default(), CategoryPalette::default())
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Companies after filtering and sorting, in display order.
    #[must_use]
    pub fn visible(&self) -> &[Company] {
        &self.visible
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn selected_company(&self) -> Option<&Company> {
        self.visible.get(self.selected_index)
    }

    #[must_use]
    pub const fn viewport(&self) -> (usize, usize) {
        self.viewport
    }

    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    /// Replaces the interaction state and recomputes the derived list.
    pub fn apply(&mut self, interaction: InteractionState) {
        self.interaction = interaction;
        self.refresh();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let next = self.interaction.with_search_term(term);
        self.apply(next);
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.interaction.search_term.clone();
        term.push(c);
        self.set_search_term(term);
    }

    /// Removes the last search character. Returns false if the term was empty.
    pub fn pop_search_char(&mut self) -> bool {
        let mut term = self.interaction.search_term.clone();
        if term.pop().is_none() {
            return false;
        }
        self.set_search_term(term);
        true
    }

    /// Selects `category`, or clears the filter if it is already selected.
    pub fn toggle_category(&mut self, category: &str) {
        let next = self.interaction.toggled_category(category);
        tracing::debug!(
            category = %category,
            selected = ?next.selected_category,
            "category toggled"
        );
        self.apply(next);
    }

    pub fn set_sort_method(&mut self, sort_method: SortMethod) {
        let next = self.interaction.with_sort_method(sort_method);
        self.apply(next);
    }

    /// Moves the card cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the card cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the cursor to `index` if it refers to a visible card.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.visible.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Reruns the filter and sort stages.
    ///
    /// The cursor stays on the previously selected company when it survives
    /// the new filter, otherwise it is clamped to the new bounds.
    pub fn refresh(&mut self) {
        let _span = tracing::debug_span!("refresh",
            total = self.catalog.len(),
            search_len = self.interaction.search_term.len(),
            category = ?self.interaction.selected_category,
            sort = %self.interaction.sort_method
        )
        .entered();

        let previous = self.selected_company().map(|c| c.name.clone());
        self.visible = derive_view(self.catalog.companies(), &self.interaction);

        let kept = previous.and_then(|name| self.visible.iter().position(|c| c.name == name));
        self.selected_index = match kept {
            Some(index) => index,
            None if self.visible.is_empty() => 0,
            None => self.selected_index.min(self.visible.len() - 1),
        };

        tracing::debug!(
            visible = self.visible.len(),
            selected_index = self.selected_index,
            "derived view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &AppState) -> Vec<&str> {
        state.visible().iter().map(|c| c.name.as_str()).collect()
    }

    fn bundled() -> AppState {
        AppState::with_defaults(Catalog::bundled(), InteractionState::default())
    }

    #[test]
    fn starts_with_full_dataset_oldest_first() {
        let state = bundled();
        assert_eq!(names(&state), vec!["Patagonia", "Osprey", "Hydroflask"]);
        assert_eq!(state.categories(), ["Clothing", "Luggage", "Other", "Outdoors"]);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn initial_sort_is_applied() {
        let state = AppState::with_defaults(
            Catalog::bundled(),
            InteractionState::with_initial_sort(SortMethod::NameZA),
        );
        assert_eq!(names(&state), vec!["Patagonia", "Osprey", "Hydroflask"]);
        let state = AppState::with_defaults(
            Catalog::bundled(),
            InteractionState::with_initial_sort(SortMethod::NameAZ),
        );
        assert_eq!(names(&state), vec!["Hydroflask", "Osprey", "Patagonia"]);
    }

    #[test]
    fn typing_and_backspace_edit_the_term() {
        let mut state = bundled();
        for c in "osp".chars() {
            state.push_search_char(c);
        }
        assert_eq!(names(&state), vec!["Osprey"]);
        assert!(state.pop_search_char());
        assert!(state.pop_search_char());
        assert!(state.pop_search_char());
        assert!(!state.pop_search_char());
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn selection_follows_company_across_resort() {
        let mut state = bundled();
        state.move_selection_down();
        assert_eq!(state.selected_company().map(|c| c.name.as_str()), Some("Osprey"));

        state.set_sort_method(SortMethod::ScoreHigh);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_company().map(|c| c.name.as_str()), Some("Osprey"));
    }

    #[test]
    fn selection_is_clamped_when_company_is_filtered_out() {
        let mut state = bundled();
        state.move_selection_up();
        assert_eq!(state.selected_company().map(|c| c.name.as_str()), Some("Hydroflask"));

        state.toggle_category("Luggage");
        assert_eq!(names(&state), vec!["Patagonia", "Osprey"]);
        assert_eq!(state.selected_index, 1);

        state.set_search_term("zzz");
        assert!(state.visible().is_empty());
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_company().is_none());
    }

    #[test]
    fn navigation_wraps() {
        let mut state = bundled();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut state = bundled();
        state.set_search_term("zzz");
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut state = bundled();
        assert!(state.select(2));
        assert!(!state.select(3));
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn toggling_same_category_twice_restores_list() {
        let mut state = bundled();
        state.toggle_category("Outdoors");
        state.toggle_category("Outdoors");
        assert!(state.interaction().selected_category.is_none());
        assert_eq!(state.visible().len(), 3);
    }
}
