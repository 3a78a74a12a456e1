//! View model computation.
//!
//! Turns an [`AppState`] snapshot and a pane size into a [`UIViewModel`].
//! Positions are computed once here and shared by the renderer and the hit
//! map.

use super::modes::InputMode;
use super::state::AppState;
use crate::domain::{Company, ScoreDimension, ScoreDisplay, SortMethod};
use crate::ui::helpers::{match_ranges, text_width, truncate};
use crate::ui::hitmap::{ClickTarget, HitMap};
use crate::ui::layout::{
    card_capacity, Toolbar, BOX_HEIGHT, CARD_HEIGHT, CARD_LINES, CONTENT_COL, FIRST_CARD_ROW,
    TAG_BAR_COL, TAG_BAR_ROW, TAG_GAP, TOOLBAR_ROW,
};
use crate::ui::viewmodel::{
    chip_width, CardItem, EmptyState, FooterInfo, HeaderInfo, ScoreBadge, SearchBarInfo,
    SortDropdownInfo, SortMenuInfo, SortOptionItem, TagBarInfo, TagChip, UIViewModel,
};

pub const TITLE: &str = "Lifetime Warranty Ratings";
pub const SEARCH_PLACEHOLDER: &str = "Search companies...";
pub const EMPTY_MESSAGE: &str = "No companies match";
const EMPTY_SUBTITLE: &str = "Clear the search or category filter to see every company";

impl AppState {
    /// Computes the renderable view model for a pane of `rows` by `cols`.
    ///
    /// # Windowing
    ///
    /// The window is centred on the card cursor, but never starts later than
    /// needed to show the last card, so a list that fits is shown whole.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows, cols).entered();

        let mut hit_map = HitMap::default();
        let toolbar = Toolbar::for_width(cols);

        let search_bar = SearchBarInfo {
            query: self.interaction().search_term.clone(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            is_focused: self.input_mode == InputMode::Search,
            col: toolbar.search_col,
            width: toolbar.search_width,
        };
        hit_map.push(
            TOOLBAR_ROW..=TOOLBAR_ROW + BOX_HEIGHT - 1,
            toolbar.search_col..=toolbar.search_col + toolbar.search_width.saturating_sub(1),
            ClickTarget::SearchBar,
        );

        let sort_dropdown = SortDropdownInfo {
            label: self.interaction().sort_method.label().to_string(),
            is_open: self.input_mode.is_sort_menu_open(),
            col: toolbar.sort_col,
            width: toolbar.sort_width,
        };
        hit_map.push(
            TOOLBAR_ROW..=TOOLBAR_ROW + BOX_HEIGHT - 1,
            toolbar.sort_col..=toolbar.sort_col + toolbar.sort_width.saturating_sub(1),
            ClickTarget::SortDropdown,
        );

        let tag_bar = self.compute_tag_bar(cols, &mut hit_map);

        let (cards, empty_state) = if self.visible().is_empty() {
            let empty = EmptyState {
                row: FIRST_CARD_ROW + 1,
                message: EMPTY_MESSAGE.to_string(),
                subtitle: EMPTY_SUBTITLE.to_string(),
            };
            (Vec::new(), Some(empty))
        } else {
            (self.compute_cards(rows, cols, &mut hit_map), None)
        };

        // Registered last so the open menu shadows the cards beneath it.
        let sort_menu = self.compute_sort_menu(&toolbar, &mut hit_map);

        UIViewModel {
            header: self.compute_header(),
            search_bar,
            sort_dropdown,
            tag_bar,
            cards,
            empty_state,
            sort_menu,
            footer: self.compute_footer(),
            hit_map,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: TITLE.to_string(),
            count_label: format!("{} of {}", self.visible().len(), self.catalog().len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: move  /: search  t: tags  o: sort  s/S: cycle sort  1-9: card tag  q: quit"
            }
            InputMode::Search => "Type to filter  Backspace: delete  Enter/Esc: done",
            InputMode::Tags(_) => "h/l: move  Enter: toggle  Esc: back",
            InputMode::SortMenu(_) => "j/k: move  Enter: apply  Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Lays out one chip per catalog category; chips past the right edge are dropped.
    fn compute_tag_bar(&self, cols: usize, hit_map: &mut HitMap) -> TagBarInfo {
        let mut chips = Vec::new();
        let mut col = TAG_BAR_COL;

        for (index, category) in self.categories().iter().enumerate() {
            let width = chip_width(category);
            if col + width - 1 > cols {
                break;
            }
            chips.push(TagChip {
                label: category.clone(),
                style: self.palette.style_for(category),
                is_active: self.interaction().is_selected(category),
                is_focused: self.input_mode == InputMode::Tags(index),
                col,
            });
            hit_map.push(
                TAG_BAR_ROW..=TAG_BAR_ROW,
                col..=col + width - 1,
                ClickTarget::Category(category.clone()),
            );
            col += width + TAG_GAP;
        }

        TagBarInfo {
            row: TAG_BAR_ROW,
            chips,
        }
    }

    fn compute_cards(&self, rows: usize, cols: usize, hit_map: &mut HitMap) -> Vec<CardItem> {
        let visible = self.visible();
        let capacity = card_capacity(rows);

        let visible_start = self
            .selected_index
            .saturating_sub(capacity / 2)
            .min(visible.len().saturating_sub(capacity));
        let visible_end = (visible_start + capacity).min(visible.len());

        visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(slot, company)| {
                let index = visible_start + slot;
                let row = FIRST_CARD_ROW + slot * CARD_HEIGHT;
                self.compute_card(company, index, row, cols, hit_map)
            })
            .collect()
    }

    fn compute_card(
        &self,
        company: &Company,
        index: usize,
        row: usize,
        cols: usize,
        hit_map: &mut HitMap,
    ) -> CardItem {
        let total = badge(company.score_display(ScoreDimension::Total), None);
        let breakdown = ScoreDimension::BREAKDOWN
            .iter()
            .map(|&dimension| badge(company.score_display(dimension), Some(dimension.label())))
            .collect();

        let name_width = cols.saturating_sub(CONTENT_COL + text_width(&total.text) + 2);
        let name = truncate(&company.name, name_width);
        let highlight_ranges = match_ranges(&name, &self.interaction().search_term);

        hit_map.push(
            row..=row + CARD_LINES - 1,
            1..=cols,
            ClickTarget::Card(index),
        );

        let established = company.established_label();
        let tag_limit = cols.saturating_sub(text_width(&company.price_range) + 2);
        let mut col = CONTENT_COL + text_width(&established) + 2;
        let mut tags = Vec::new();
        for category in &company.categories {
            let width = chip_width(category);
            if col + width - 1 > tag_limit {
                break;
            }
            tags.push(TagChip {
                label: category.clone(),
                style: self.palette.style_for(category),
                is_active: self.interaction().is_selected(category),
                is_focused: false,
                col,
            });
            hit_map.push(
                row + 1..=row + 1,
                col..=col + width - 1,
                ClickTarget::Category(category.clone()),
            );
            col += width + TAG_GAP;
        }

        CardItem {
            row,
            name,
            highlight_ranges,
            established,
            tags,
            total,
            price_range: company.price_range.clone(),
            breakdown,
            is_selected: index == self.selected_index,
        }
    }

    fn compute_sort_menu(&self, toolbar: &Toolbar, hit_map: &mut HitMap) -> Option<SortMenuInfo> {
        let InputMode::SortMenu(highlight) = self.input_mode else {
            return None;
        };

        let row = TOOLBAR_ROW + BOX_HEIGHT;
        let current = self.interaction().sort_method;
        let options = SortMethod::ALL
            .iter()
            .enumerate()
            .map(|(i, &method)| {
                hit_map.push(
                    row + i..=row + i,
                    toolbar.sort_col..=toolbar.sort_col + toolbar.sort_width.saturating_sub(1),
                    ClickTarget::SortOption(method),
                );
                SortOptionItem {
                    method,
                    label: method.label().to_string(),
                    is_current: method == current,
                    is_highlighted: i == highlight,
                }
            })
            .collect();

        Some(SortMenuInfo {
            options,
            row,
            col: toolbar.sort_col,
            width: toolbar.sort_width,
        })
    }
}

fn badge(display: ScoreDisplay, caption: Option<&str>) -> ScoreBadge {
    ScoreBadge {
        caption: caption.map(str::to_string),
        text: display.label(),
        tier: display.tier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{InteractionState, ScoreTier};

    fn state() -> AppState {
        AppState::with_defaults(Catalog::bundled(), InteractionState::default())
    }

    #[test]
    fn header_counts_visible_companies() {
        let mut state = state();
        state.toggle_category("Luggage");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, TITLE);
        assert_eq!(vm.header.count_label, "2 of 3");
    }

    #[test]
    fn cards_follow_pipeline_order() {
        let mut state = state();
        state.set_sort_method(SortMethod::ScoreHigh);
        let vm = state.compute_viewmodel(40, 80);
        let names: Vec<&str> = vm.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Osprey", "Patagonia", "Hydroflask"]);
        assert_eq!(vm.cards[0].row, FIRST_CARD_ROW);
        assert_eq!(vm.cards[1].row, FIRST_CARD_ROW + CARD_HEIGHT);
        // The cursor stays on Patagonia across the re-sort.
        assert!(!vm.cards[0].is_selected);
        assert!(vm.cards[1].is_selected);
    }

    #[test]
    fn card_shows_scores_with_tiers() {
        let vm = state().compute_viewmodel(40, 80);
        let patagonia = &vm.cards[0];
        assert_eq!(patagonia.established, "Est. 1973");
        assert_eq!(patagonia.price_range, "$$ - $$$");
        assert_eq!(patagonia.total.text, "14/20");
        assert_eq!(patagonia.total.tier, ScoreTier::Medium);

        let breakdown: Vec<(&str, &str, ScoreTier)> = patagonia
            .breakdown
            .iter()
            .map(|b| (b.caption.as_deref().unwrap_or(""), b.text.as_str(), b.tier))
            .collect();
        assert_eq!(
            breakdown,
            vec![
                ("Clarity", "1/3", ScoreTier::Low),
                ("Coverage", "8/10", ScoreTier::High),
                ("Process", "5/7", ScoreTier::Medium),
            ]
        );
    }

    #[test]
    fn tag_bar_lists_every_category_sorted() {
        let mut state = state();
        state.toggle_category("Other");
        let vm = state.compute_viewmodel(24, 80);
        let labels: Vec<&str> = vm.tag_bar.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Clothing", "Luggage", "Other", "Outdoors"]);
        let active: Vec<&str> = vm
            .tag_bar
            .chips
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(active, vec!["Other"]);
    }

    #[test]
    fn empty_result_shows_empty_state() {
        let mut state = state();
        state.set_search_term("no such company");
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert_eq!(vm.empty_state.map(|e| e.message), Some(EMPTY_MESSAGE.to_string()));
        assert_eq!(vm.header.count_label, "0 of 3");
    }

    #[test]
    fn search_term_is_highlighted_in_names() {
        let mut state = state();
        state.set_search_term("pre");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards[0].name, "Osprey");
        assert_eq!(vm.cards[0].highlight_ranges, vec![(2, 5)]);
    }

    #[test]
    fn window_follows_selection() {
        let mut state = state();
        state.move_selection_up();
        // Room for a single card.
        let vm = state.compute_viewmodel(13, 80);
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].name, "Hydroflask");
        assert!(vm.cards[0].is_selected);
    }

    #[test]
    fn short_list_stays_fully_visible_with_cursor_on_last_card() {
        let companies = ["A", "B", "C", "D"]
            .iter()
            .zip(2000..)
            .map(|(name, year)| Company {
                name: (*name).to_string(),
                total_score: 10,
                price_range: "$".to_string(),
                clarity_total: 1,
                coverage_total: 5,
                process_total: 4,
                year_founded: year,
                categories: vec!["Other".to_string()],
            })
            .collect();
        let mut state = AppState::with_defaults(Catalog::new(companies), InteractionState::default());
        assert!(state.select(3));

        // Room for five cards.
        assert_eq!(card_capacity(29), 5);
        let vm = state.compute_viewmodel(29, 80);
        let names: Vec<&str> = vm.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert!(vm.cards[3].is_selected);
        assert_eq!(vm.cards[0].row, FIRST_CARD_ROW);
    }

    #[test]
    fn long_list_keeps_last_page_full() {
        let mut state = state();
        state.move_selection_up();
        // Room for two cards; the cursor is on the third.
        assert_eq!(card_capacity(17), 2);
        let vm = state.compute_viewmodel(17, 80);
        let names: Vec<&str> = vm.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Osprey", "Hydroflask"]);
    }

    #[test]
    fn card_tag_click_targets_category_not_card() {
        let vm = state().compute_viewmodel(40, 80);
        let card = &vm.cards[0];
        let tag = &card.tags[0];
        assert_eq!(
            vm.hit_map.hit(card.row + 1, tag.col),
            Some(&ClickTarget::Category("Clothing".to_string()))
        );
        assert_eq!(vm.hit_map.hit(card.row + 1, 1), Some(&ClickTarget::Card(0)));
        assert_eq!(vm.hit_map.hit(card.row, 40), Some(&ClickTarget::Card(0)));
    }

    #[test]
    fn sort_menu_overlays_everything_below_dropdown() {
        let mut state = state();
        state.input_mode = InputMode::SortMenu(2);
        let vm = state.compute_viewmodel(40, 80);
        let menu = vm.sort_menu.as_ref().unwrap();
        assert_eq!(menu.options.len(), 6);
        assert!(menu.options[0].is_current);
        assert!(menu.options[2].is_highlighted);
        assert!(vm.sort_dropdown.is_open);

        // The third option row lies over the first card.
        let row = menu.row + 2;
        assert_eq!(row, FIRST_CARD_ROW);
        assert_eq!(
            vm.hit_map.hit(row, menu.col + 1),
            Some(&ClickTarget::SortOption(SortMethod::ScoreHigh))
        );
        assert_eq!(vm.hit_map.hit(row, 1), Some(&ClickTarget::Card(0)));
    }

    #[test]
    fn toolbar_regions() {
        let vm = state().compute_viewmodel(24, 80);
        assert_eq!(vm.hit_map.hit(TOOLBAR_ROW + 1, 5), Some(&ClickTarget::SearchBar));
        assert_eq!(vm.hit_map.hit(TOOLBAR_ROW + 1, 70), Some(&ClickTarget::SortDropdown));
        assert_eq!(vm.search_bar.placeholder, SEARCH_PLACEHOLDER);
        assert_eq!(vm.sort_dropdown.label, "Year Founded (Oldest First)");
    }
}
