//! Toolbar renderer: the search input box and the closed sort dropdown.
//!
//! Both are three-line bordered boxes drawn side by side:
//!
//! ```text
//! ┌──────────────────────────┐ ┌───────────────────────────────┐
//! │ Search companies...      │ │ Year Founded (Oldest First) ▾ │
//! └──────────────────────────┘ └───────────────────────────────┘
//! ```

use super::render_box_frame;
use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, SortDropdownInfo};

/// Renders the search box starting at `row`.
///
/// An empty, unfocused box shows the placeholder. A focused box uses the
/// focused border colour and draws a block cursor after the query.
///
/// # Returns
///
/// The row below the box.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme) -> usize {
    let border = if search.is_focused {
        &theme.colors.search_border_focused
    } else {
        &theme.colors.search_border
    };
    let next_row = render_box_frame(row, search.col, search.width, border);

    // Leading space plus room for the cursor.
    let text_width_max = search.width.saturating_sub(4);

    position_cursor(row + 1, search.col + 1);
    print!(" ");
    if search.query.is_empty() && !search.is_focused {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&search.placeholder, text_width_max));
    } else {
        // Keep the tail of a long query visible, where the user is typing.
        let chars: Vec<char> = search.query.chars().collect();
        let skip = chars.len().saturating_sub(text_width_max);
        let visible: String = chars[skip..].iter().collect();
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{visible}");
        if search.is_focused {
            print!("{}", Theme::fg(&theme.colors.search_border_focused));
            print!("█");
        }
    }
    print!("{}", Theme::reset());

    next_row
}

/// Renders the closed sort dropdown showing the current mode label.
pub fn render_sort_dropdown(row: usize, dropdown: &SortDropdownInfo, theme: &Theme) -> usize {
    let border = if dropdown.is_open {
        &theme.colors.search_border_focused
    } else {
        &theme.colors.search_border
    };
    let next_row = render_box_frame(row, dropdown.col, dropdown.width, border);

    let inner_width = dropdown.width.saturating_sub(2);
    let label = truncate(&dropdown.label, inner_width.saturating_sub(4));
    let arrow = if dropdown.is_open { "▴" } else { "▾" };

    position_cursor(row + 1, dropdown.col + 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" {label}");
    print!("{}", " ".repeat(inner_width.saturating_sub(text_width(&label) + 3)));
    print!("{}", Theme::fg(&theme.colors.search_border_focused));
    print!("{arrow} ");
    print!("{}", Theme::reset());

    next_row
}
