//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` for a given pane size and carry
//! everything the components need, including screen positions. The same
//! positions populate the [`HitMap`](crate::ui::hitmap::HitMap), so what is
//! drawn and what is clickable always agree.

use crate::domain::{ScoreTier, SortMethod};
use crate::ui::hitmap::HitMap;
use crate::ui::styles::TagStyle;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub sort_dropdown: SortDropdownInfo,
    /// One chip per distinct category, sorted.
    pub tag_bar: TagBarInfo,
    /// Cards inside the visible window, in pipeline order.
    pub cards: Vec<CardItem>,
    /// Present when the pipeline produced no companies.
    pub empty_state: Option<EmptyState>,
    /// Present while the sort dropdown is open.
    pub sort_menu: Option<SortMenuInfo>,
    pub footer: FooterInfo,
    pub hit_map: HitMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// e.g. `"2 of 3"`.
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
    pub is_focused: bool,
    pub col: usize,
    pub width: usize,
}

/// Closed sort dropdown, drawn beside the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDropdownInfo {
    pub label: String,
    pub is_open: bool,
    pub col: usize,
    pub width: usize,
}

/// Open sort dropdown listing all modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMenuInfo {
    pub options: Vec<SortOptionItem>,
    pub row: usize,
    pub col: usize,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionItem {
    pub method: SortMethod,
    pub label: String,
    /// The mode currently applied.
    pub is_current: bool,
    /// The mode under the keyboard cursor.
    pub is_highlighted: bool,
}

/// The row of toggleable category filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBarInfo {
    pub row: usize,
    pub chips: Vec<TagChip>,
}

/// A clickable category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub style: TagStyle,
    /// This category is the active filter.
    pub is_active: bool,
    /// Keyboard focus is on this chip.
    pub is_focused: bool,
    pub col: usize,
}

/// Width of a chip for `label`: one cell of padding or bracket per side.
#[must_use]
pub fn chip_width(label: &str) -> usize {
    label.chars().count() + 2
}

/// A score badge: `"score/max"` coloured by tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBadge {
    pub caption: Option<String>,
    pub text: String,
    pub tier: ScoreTier,
}

/// One company card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub row: usize,
    pub name: String,
    /// Char ranges of the search term inside `name`.
    pub highlight_ranges: Vec<(usize, usize)>,
    pub established: String,
    pub tags: Vec<TagChip>,
    pub total: ScoreBadge,
    pub price_range: String,
    /// Clarity, coverage, and process badges.
    pub breakdown: Vec<ScoreBadge>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub row: usize,
    pub message: String,
    pub subtitle: String,
}
