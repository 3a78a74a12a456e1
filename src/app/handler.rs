//! Event handling and state transition logic.
//!
//! The plugin shim translates host input into [`Event`]s and passes them to
//! [`handle_event`], which mutates [`AppState`] and returns whether a redraw
//! is needed together with any side effects.
//!
//! # Event Types
//!
//! - **Navigation**: `MoveDown`, `MoveUp`, `MoveLeft`, `MoveRight`, `ScrollDown`, `ScrollUp`
//! - **Input**: `Char`, `Backspace`, `Activate`, `Back`
//! - **Focus**: `FocusSearch`, `FocusTags`, `OpenSortMenu`
//! - **Filtering**: `CycleSort`, `ToggleCardCategory`
//! - **Mouse**: `Click`
//!
//! # Example
//!
//! ```rust
//! use warranty_ratings::app::{handle_event, AppState, Event};
//! use warranty_ratings::catalog::Catalog;
//! use warranty_ratings::domain::InteractionState;
//!
//! let mut state = AppState::with_defaults(Catalog::bundled(), InteractionState::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), warranty_ratings::WarrantyRatingsError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SortMethod;
use crate::ui::hitmap::ClickTarget;

/// Events produced by keyboard and mouse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Next card, or next sort option while the menu is open.
    MoveDown,
    /// Previous card, or previous sort option while the menu is open.
    MoveUp,
    /// Previous tag chip or sort option.
    MoveLeft,
    /// Next tag chip or sort option.
    MoveRight,
    /// Confirms the focused element.
    Activate,
    /// Leaves the current focus. In browse mode, clears active filters.
    Back,
    /// Appends a character to the search term while typing.
    Char(char),
    /// Removes the last search character while typing.
    Backspace,
    FocusSearch,
    FocusTags,
    /// Opens the sort dropdown, or closes it if already open.
    OpenSortMenu,
    /// Switches to the adjacent sort mode without opening the dropdown.
    CycleSort {
        forward: bool,
    },
    /// Toggles the nth category (zero-based) of the selected card.
    ToggleCardCategory(usize),
    /// Left click at a 1-indexed pane position.
    Click {
        row: usize,
        col: usize,
    },
    ScrollDown,
    ScrollUp,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Currently every transition is infallible; the `Result` matches the host
/// shim's contract so fallible events can be added without changing it.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.input_mode).entered();

    let option_count = SortMethod::ALL.len();

    let should_render = match event {
        Event::MoveDown | Event::ScrollDown => match state.input_mode {
            InputMode::SortMenu(i) => {
                state.input_mode = InputMode::SortMenu((i + 1) % option_count);
                true
            }
            InputMode::Tags(_) => {
                state.input_mode = InputMode::Browse;
                state.move_selection_down();
                true
            }
            InputMode::Browse | InputMode::Search => {
                state.move_selection_down();
                true
            }
        },
        Event::MoveUp | Event::ScrollUp => match state.input_mode {
            InputMode::SortMenu(i) => {
                state.input_mode = InputMode::SortMenu((i + option_count - 1) % option_count);
                true
            }
            InputMode::Tags(_) => false,
            InputMode::Browse | InputMode::Search => {
                state.move_selection_up();
                true
            }
        },
        Event::MoveLeft => match state.input_mode {
            InputMode::Tags(i) => {
                let count = state.categories().len();
                state.input_mode = InputMode::Tags((i + count - 1) % count);
                true
            }
            InputMode::SortMenu(i) => {
                state.input_mode = InputMode::SortMenu((i + option_count - 1) % option_count);
                true
            }
            InputMode::Browse | InputMode::Search => false,
        },
        Event::MoveRight => match state.input_mode {
            InputMode::Tags(i) => {
                state.input_mode = InputMode::Tags((i + 1) % state.categories().len());
                true
            }
            InputMode::SortMenu(i) => {
                state.input_mode = InputMode::SortMenu((i + 1) % option_count);
                true
            }
            InputMode::Browse | InputMode::Search => false,
        },
        Event::Activate => match state.input_mode {
            InputMode::Search => {
                state.input_mode = InputMode::Browse;
                true
            }
            InputMode::Tags(i) => {
                if let Some(category) = state.categories().get(i).cloned() {
                    state.toggle_category(&category);
                }
                true
            }
            InputMode::SortMenu(i) => {
                let method = SortMethod::ALL[i % option_count];
                tracing::debug!(sort = %method, "sort mode chosen from menu");
                state.set_sort_method(method);
                state.input_mode = InputMode::Browse;
                true
            }
            InputMode::Browse => false,
        },
        Event::Back => match state.input_mode {
            InputMode::Search | InputMode::Tags(_) | InputMode::SortMenu(_) => {
                state.input_mode = InputMode::Browse;
                true
            }
            InputMode::Browse => clear_filters(state),
        },
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            state.push_search_char(*c);
            tracing::trace!(term = %state.interaction().search_term, char = %c, "search term updated");
            true
        }
        Event::Backspace => state.input_mode.is_typing() && state.pop_search_char(),
        Event::FocusSearch => {
            state.input_mode = InputMode::Search;
            true
        }
        Event::FocusTags => {
            if state.categories().is_empty() {
                return Ok((false, vec![]));
            }
            let focus = state
                .interaction()
                .selected_category
                .as_ref()
                .and_then(|selected| state.categories().iter().position(|c| c == selected))
                .unwrap_or(0);
            state.input_mode = InputMode::Tags(focus);
            true
        }
        Event::OpenSortMenu => {
            state.input_mode = if state.input_mode.is_sort_menu_open() {
                InputMode::Browse
            } else {
                InputMode::SortMenu(state.interaction().sort_method.index())
            };
            true
        }
        Event::CycleSort { forward } => {
            let current = state.interaction().sort_method;
            let next = if *forward { current.next() } else { current.previous() };
            state.set_sort_method(next);
            true
        }
        Event::ToggleCardCategory(n) => {
            let Some(category) = state
                .selected_company()
                .and_then(|company| company.categories.get(*n))
                .cloned()
            else {
                tracing::debug!(position = n, "no category at position on selected card");
                return Ok((false, vec![]));
            };
            state.toggle_category(&category);
            true
        }
        Event::Click { row, col } => handle_click(state, *row, *col),
        Event::CloseFocus => return Ok((false, vec![Action::CloseFocus])),
    };

    Ok((should_render, vec![]))
}

/// Clears the search term and category filter. Returns false if neither was set.
fn clear_filters(state: &mut AppState) -> bool {
    let current = state.interaction();
    if current.search_term.is_empty() && current.selected_category.is_none() {
        return false;
    }
    let mut next = current.with_search_term("");
    next.selected_category = None;
    state.apply(next);
    true
}

/// Resolves a click through the hit map of the current frame.
///
/// Only the innermost region under the cursor receives the click. While the
/// sort menu is open, a click anywhere outside its options closes it and is
/// not delivered to what lies underneath.
fn handle_click(state: &mut AppState, row: usize, col: usize) -> bool {
    let (rows, cols) = state.viewport();
    let target = state.compute_viewmodel(rows, cols).hit_map.hit(row, col).cloned();
    tracing::debug!(row, col, target = ?target, "click resolved");

    if state.input_mode.is_sort_menu_open() {
        if let Some(ClickTarget::SortOption(method)) = target {
            state.set_sort_method(method);
        }
        state.input_mode = InputMode::Browse;
        return true;
    }

    match target {
        Some(ClickTarget::SearchBar) => {
            state.input_mode = InputMode::Search;
        }
        Some(ClickTarget::SortDropdown) => {
            state.input_mode = InputMode::SortMenu(state.interaction().sort_method.index());
        }
        Some(ClickTarget::SortOption(method)) => {
            state.set_sort_method(method);
        }
        Some(ClickTarget::Category(category)) => {
            state.toggle_category(&category);
        }
        Some(ClickTarget::Card(index)) => {
            state.select(index);
            state.input_mode = InputMode::Browse;
        }
        None => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::InteractionState;

    fn state() -> AppState {
        let mut state = AppState::with_defaults(Catalog::bundled(), InteractionState::default());
        state.set_viewport(40, 80);
        state
    }

    fn send(state: &mut AppState, event: Event) -> bool {
        handle_event(state, &event).unwrap().0
    }

    fn names(state: &AppState) -> Vec<&str> {
        state.visible().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn chars_only_edit_term_while_searching() {
        let mut state = state();
        assert!(!send(&mut state, Event::Char('o')));
        assert_eq!(state.interaction().search_term, "");

        send(&mut state, Event::FocusSearch);
        for c in "OSPREY".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(names(&state), vec!["Osprey"]);

        assert!(send(&mut state, Event::Backspace));
        assert_eq!(state.interaction().search_term, "OSPRE");
    }

    #[test]
    fn backspace_on_empty_term_does_not_render() {
        let mut state = state();
        send(&mut state, Event::FocusSearch);
        assert!(!send(&mut state, Event::Backspace));
    }

    #[test]
    fn leaving_search_keeps_term() {
        let mut state = state();
        send(&mut state, Event::FocusSearch);
        send(&mut state, Event::Char('h'));
        send(&mut state, Event::Back);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.interaction().search_term, "h");
    }

    #[test]
    fn back_in_browse_clears_filters() {
        let mut state = state();
        state.set_search_term("o");
        state.toggle_category("Luggage");
        assert!(send(&mut state, Event::Back));
        assert_eq!(state.interaction().search_term, "");
        assert!(state.interaction().selected_category.is_none());
        assert!(!send(&mut state, Event::Back));
    }

    #[test]
    fn tag_bar_keyboard_toggle() {
        let mut state = state();
        send(&mut state, Event::FocusTags);
        assert_eq!(state.input_mode, InputMode::Tags(0));
        send(&mut state, Event::MoveRight);
        send(&mut state, Event::Activate);
        assert_eq!(state.interaction().selected_category.as_deref(), Some("Luggage"));
        assert_eq!(names(&state), vec!["Patagonia", "Osprey"]);

        send(&mut state, Event::Activate);
        assert!(state.interaction().selected_category.is_none());
    }

    #[test]
    fn tag_focus_wraps_and_starts_at_selection() {
        let mut state = state();
        state.toggle_category("Other");
        send(&mut state, Event::FocusTags);
        assert_eq!(state.input_mode, InputMode::Tags(2));
        send(&mut state, Event::MoveRight);
        send(&mut state, Event::MoveRight);
        assert_eq!(state.input_mode, InputMode::Tags(0));
        send(&mut state, Event::MoveLeft);
        assert_eq!(state.input_mode, InputMode::Tags(3));
    }

    #[test]
    fn sort_menu_keyboard_flow() {
        let mut state = state();
        send(&mut state, Event::OpenSortMenu);
        assert_eq!(state.input_mode, InputMode::SortMenu(0));
        send(&mut state, Event::MoveDown);
        send(&mut state, Event::MoveDown);
        send(&mut state, Event::Activate);
        assert_eq!(state.interaction().sort_method, SortMethod::ScoreHigh);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(names(&state), vec!["Osprey", "Patagonia", "Hydroflask"]);
    }

    #[test]
    fn sort_menu_escape_keeps_sort() {
        let mut state = state();
        send(&mut state, Event::OpenSortMenu);
        send(&mut state, Event::MoveUp);
        assert_eq!(state.input_mode, InputMode::SortMenu(5));
        send(&mut state, Event::Back);
        assert_eq!(state.interaction().sort_method, SortMethod::YearOldest);
    }

    #[test]
    fn cycle_sort_wraps() {
        let mut state = state();
        send(&mut state, Event::CycleSort { forward: false });
        assert_eq!(state.interaction().sort_method, SortMethod::NameZA);
        send(&mut state, Event::CycleSort { forward: true });
        assert_eq!(state.interaction().sort_method, SortMethod::YearOldest);
    }

    #[test]
    fn toggle_card_category_uses_selected_card() {
        let mut state = state();
        state.move_selection_down();
        send(&mut state, Event::ToggleCardCategory(1));
        assert_eq!(state.interaction().selected_category.as_deref(), Some("Luggage"));
        assert!(!send(&mut state, Event::ToggleCardCategory(7)));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn click_on_card_tag_toggles_without_selecting_card() {
        let mut state = state();
        let vm = state.compute_viewmodel(40, 80);
        // Second card is Osprey; its first tag is Outdoors.
        let card = &vm.cards[1];
        let (row, col) = (card.row + 1, card.tags[0].col);

        assert!(send(&mut state, Event::Click { row, col }));
        assert_eq!(state.interaction().selected_category.as_deref(), Some("Outdoors"));
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn click_on_card_body_selects_it() {
        let mut state = state();
        let vm = state.compute_viewmodel(40, 80);
        let row = vm.cards[2].row;
        assert!(send(&mut state, Event::Click { row, col: 30 }));
        assert_eq!(state.selected_company().map(|c| c.name.as_str()), Some("Hydroflask"));
        assert!(state.interaction().selected_category.is_none());
    }

    #[test]
    fn click_on_tag_bar_toggles_filter() {
        let mut state = state();
        let vm = state.compute_viewmodel(40, 80);
        let chip = &vm.tag_bar.chips[1];
        let (row, col) = (vm.tag_bar.row, chip.col);

        send(&mut state, Event::Click { row, col });
        assert_eq!(state.interaction().selected_category.as_deref(), Some("Luggage"));
        send(&mut state, Event::Click { row, col });
        assert!(state.interaction().selected_category.is_none());
    }

    #[test]
    fn click_dropdown_then_option() {
        let mut state = state();
        let vm = state.compute_viewmodel(40, 80);
        let col = vm.sort_dropdown.col + 2;
        send(&mut state, Event::Click { row: 5, col });
        assert!(state.input_mode.is_sort_menu_open());

        let vm = state.compute_viewmodel(40, 80);
        let menu = vm.sort_menu.unwrap();
        // "Name (A-Z)" is the fifth option and sits over the card list.
        send(&mut state, Event::Click { row: menu.row + 4, col: menu.col + 3 });
        assert_eq!(state.interaction().sort_method, SortMethod::NameAZ);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(names(&state), vec!["Hydroflask", "Osprey", "Patagonia"]);
        assert_eq!(state.selected_company().map(|c| c.name.as_str()), Some("Patagonia"));
    }

    #[test]
    fn click_outside_open_menu_only_closes_it() {
        let mut state = state();
        send(&mut state, Event::OpenSortMenu);
        let vm = state.compute_viewmodel(40, 80);
        let chip = &vm.tag_bar.chips[0];

        assert!(send(&mut state, Event::Click { row: vm.tag_bar.row, col: chip.col }));
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.interaction().selected_category.is_none());
    }

    #[test]
    fn click_on_search_box_focuses_it() {
        let mut state = state();
        send(&mut state, Event::Click { row: 5, col: 3 });
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn click_on_nothing_is_ignored() {
        let mut state = state();
        assert!(!send(&mut state, Event::Click { row: 1, col: 1 }));
    }
}
