//! Category tag chips.
//!
//! A chip is the category name on a coloured background. The background comes
//! from the theme's tag colour for the chip's style. The active filter is
//! drawn bracketed and bold, and the keyboard-focused chip is underlined.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TagBarInfo, TagChip};

/// Renders a single chip at `row`, starting at `chip.col`.
pub fn render_chip(row: usize, chip: &TagChip, theme: &Theme) {
    position_cursor(row, chip.col);
    print!("{}", Theme::bg(theme.colors.tags.color(chip.style)));
    print!("{}", Theme::fg(&theme.colors.tag_fg));
    if chip.is_focused {
        print!("{}", Theme::underline());
    }
    if chip.is_active {
        print!("{}", Theme::bold());
        print!("[{}]", chip.label);
    } else {
        print!(" {} ", chip.label);
    }
    print!("{}", Theme::reset());
}

pub fn render_tag_bar(bar: &TagBarInfo, theme: &Theme) -> usize {
    for chip in &bar.chips {
        render_chip(bar.row, chip, theme);
    }
    bar.row + 1
}
