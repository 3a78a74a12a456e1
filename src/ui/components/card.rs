//! Company card renderer.
//!
//! Each card takes three lines:
//!
//! ```text
//! ▌ Patagonia                                            14/20
//! ▌ Est. 1973  Clothing   Outdoors   Luggage       $$ - $$$
//! ▌ Clarity 1/3   Coverage 8/10   Process 5/7
//! ```
//!
//! The gutter bar only appears on the selected card. Score badges are coloured
//! by tier.

use super::tags::render_chip;
use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::layout::{CARD_LINES, CONTENT_COL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, ScoreBadge};

const BADGE_GAP: &str = "   ";

pub fn render_cards(cards: &[CardItem], theme: &Theme, cols: usize) {
    for card in cards {
        render_card(card, theme, cols);
    }
}

fn render_card(card: &CardItem, theme: &Theme, cols: usize) {
    if card.is_selected {
        for line in 0..CARD_LINES {
            position_cursor(card.row + line, 1);
            print!("{}▌{}", Theme::fg(&theme.colors.card_accent), Theme::reset());
        }
    }

    // Line 1: name and total score.
    let base = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    position_cursor(card.row, CONTENT_COL);
    print!("{base}");
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, &base);
    print!("{}", Theme::reset());

    position_cursor(card.row, cols.saturating_sub(text_width(&card.total.text)).max(1));
    render_badge(&card.total, theme);

    // Line 2: founding year, tags, price.
    position_cursor(card.row + 1, CONTENT_COL);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", card.established);
    print!("{}", Theme::reset());

    for chip in &card.tags {
        render_chip(card.row + 1, chip, theme);
    }

    position_cursor(card.row + 1, cols.saturating_sub(text_width(&card.price_range)).max(1));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", card.price_range);
    print!("{}", Theme::reset());

    // Line 3: breakdown.
    position_cursor(card.row + 2, CONTENT_COL);
    for (i, score) in card.breakdown.iter().enumerate() {
        if i > 0 {
            print!("{BADGE_GAP}");
        }
        render_badge(score, theme);
    }
}

/// Prints `[caption ]score/max` at the cursor, the score in its tier colour.
fn render_badge(score: &ScoreBadge, theme: &Theme) {
    if let Some(caption) = &score.caption {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{caption} ");
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.colors.tier(score.tier)));
    print!("{}", score.text);
    print!("{}", Theme::reset());
}
