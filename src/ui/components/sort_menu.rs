//! Open sort dropdown, drawn over whatever lies below the toolbar.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SortMenuInfo;

/// Renders one option per row from `menu.row`, then the closing border.
///
/// The current mode is marked with a check. The keyboard-highlighted option
/// uses the selection colours.
pub fn render_sort_menu(menu: &SortMenuInfo, theme: &Theme) {
    let inner_width = menu.width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_border_focused);

    for (i, option) in menu.options.iter().enumerate() {
        let mark = if option.is_current { '✓' } else { ' ' };
        let label = truncate(&option.label, inner_width.saturating_sub(4));
        let padding = inner_width.saturating_sub(text_width(&label) + 3);

        position_cursor(menu.row + i, menu.col);
        print!("{border}│");
        if option.is_highlighted {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        if option.is_current {
            print!("{}", Theme::bold());
        }
        print!(" {mark} {label}{}", " ".repeat(padding));
        print!("{}", Theme::reset());
        print!("{border}│{}", Theme::reset());
    }

    position_cursor(menu.row + menu.options.len(), menu.col);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}
