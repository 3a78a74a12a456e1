//! Composable UI component renderers.
//!
//! Each component draws one part of the frame at the positions carried by the
//! view model.
//!
//! # Components
//!
//! - [`header`]: Title and result count
//! - [`search`]: Search input box and closed sort dropdown
//! - [`tags`]: Category chips for the tag bar and cards
//! - [`card`]: Company cards with score badges
//! - [`sort_menu`]: Open sort dropdown overlay
//! - [`empty`]: Message shown when nothing matches
//! - [`footer`]: Keybinding hints

mod card;
mod empty;
mod footer;
mod header;
mod search;
mod sort_menu;
mod tags;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{HEADER_ROW, LIST_BORDER_ROW, TOOLBAR_ROW, TOP_BORDER_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use card::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::{render_search_bar, render_sort_dropdown};
use sort_menu::render_sort_menu;
use tags::render_tag_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws a three-line box outline of `width` cells with its top-left at
/// (`row`, `col`). The middle line gets only its side bars.
///
/// # Returns
///
/// The row below the box.
fn render_box_frame(row: usize, col: usize, width: usize, color: &str) -> usize {
    let inner_width = width.saturating_sub(2);

    position_cursor(row, col);
    print!("{}", Theme::fg(color));
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(row + 1, col);
    print!("│");
    position_cursor(row + 1, col + inner_width + 1);
    print!("│");

    position_cursor(row + 2, col);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders a full frame.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search box | Sort dropdown - 3 lines]
/// [Tag bar]
/// [Border]
/// [Cards or empty state]
/// [Border]
/// [Footer]
/// ```
///
/// The open sort menu is drawn last so it covers the tag bar and cards.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    render_header(HEADER_ROW, &vm.header, theme, cols);
    render_border(TOP_BORDER_ROW, &theme.colors.border, cols);

    render_search_bar(TOOLBAR_ROW, &vm.search_bar, theme);
    render_sort_dropdown(TOOLBAR_ROW, &vm.sort_dropdown, theme);
    render_tag_bar(&vm.tag_bar, theme);
    render_border(LIST_BORDER_ROW, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    } else {
        render_cards(&vm.cards, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if border_row > LIST_BORDER_ROW {
        render_border(border_row, &theme.colors.border, cols);
        render_footer(footer_row, &vm.footer, theme, cols);
    }

    if let Some(menu) = &vm.sort_menu {
        render_sort_menu(menu, theme);
    }
}
