//! Fixed screen geometry.
//!
//! ```text
//!  1  (blank)
//!  2  Lifetime Warranty Ratings                         2 of 3
//!  3  ──────────────────────────────────────────────────────────
//!  4  ┌ search ───────────────────────┐ ┌ sort ────────────────┐
//!  5  │ Search companies...           │ │ Year Founded (Old… ▾ │
//!  6  └───────────────────────────────┘ └──────────────────────┘
//!  7   Clothing   Luggage   Other   Outdoors
//!  8  ──────────────────────────────────────────────────────────
//!  9  ▌ Patagonia                                         14/20
//! 10  ▌ Est. 1973   Clothing   Outdoors            $$ - $$$
//! 11  ▌ Clarity 1/3   Coverage 8/10   Process 5/7
//! 12
//! ..  (more cards, four rows each)
//! -1  ──────────────────────────────────────────────────────────
//! -0  footer
//! ```
//!
//! Rows and columns are 1-indexed like the terminal cursor.

pub const HEADER_ROW: usize = 2;
pub const TOP_BORDER_ROW: usize = 3;
pub const TOOLBAR_ROW: usize = 4;
/// Height of the bordered search and sort boxes.
pub const BOX_HEIGHT: usize = 3;
pub const TAG_BAR_ROW: usize = TOOLBAR_ROW + BOX_HEIGHT;
pub const LIST_BORDER_ROW: usize = TAG_BAR_ROW + 1;
pub const FIRST_CARD_ROW: usize = LIST_BORDER_ROW + 1;

/// Text lines per card.
pub const CARD_LINES: usize = 3;
/// Rows per card including the blank spacer.
pub const CARD_HEIGHT: usize = CARD_LINES + 1;
/// Column where card text starts, right of the selection gutter.
pub const CONTENT_COL: usize = 3;

pub const TAG_BAR_COL: usize = 2;
/// Cells between adjacent tag chips.
pub const TAG_GAP: usize = 1;

/// Fits the longest sort label plus border, padding, and arrow.
pub const SORT_BOX_WIDTH: usize = 33;

/// Number of whole cards that fit between the list border and the footer.
///
/// The last card may drop its spacer row.
///
/// ```rust
/// use warranty_ratings::ui::layout::card_capacity;
///
/// assert_eq!(card_capacity(24), 3);
/// assert_eq!(card_capacity(12), 0);
/// ```
#[must_use]
pub const fn card_capacity(rows: usize) -> usize {
    let last_card_row = rows.saturating_sub(2);
    if last_card_row < FIRST_CARD_ROW {
        return 0;
    }
    (last_card_row - FIRST_CARD_ROW + 2) / CARD_HEIGHT
}

/// Horizontal placement of the search and sort boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolbar {
    pub search_col: usize,
    pub search_width: usize,
    pub sort_col: usize,
    pub sort_width: usize,
}

impl Toolbar {
    /// Search box fills the width left over by the sort box, one cell apart.
    #[must_use]
    pub fn for_width(cols: usize) -> Self {
        let sort_width = SORT_BOX_WIDTH.min(cols / 2);
        let search_width = cols.saturating_sub(sort_width + 1);
        Self {
            search_col: 1,
            search_width,
            sort_col: search_width + 2,
            sort_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_counts_card_rows() {
        // Rows 9..=11 hold one card with no spacer.
        assert_eq!(card_capacity(13), 1);
        // Rows 9..=14: one card and part of a second.
        assert_eq!(card_capacity(16), 1);
        // Rows 9..=15: two cards.
        assert_eq!(card_capacity(17), 2);
        assert_eq!(card_capacity(0), 0);
    }

    #[test]
    fn toolbar_fills_width() {
        let toolbar = Toolbar::for_width(80);
        assert_eq!(toolbar.sort_width, SORT_BOX_WIDTH);
        assert_eq!(toolbar.search_width, 46);
        assert_eq!(toolbar.sort_col, 48);
        assert_eq!(toolbar.sort_col + toolbar.sort_width - 1, 80);
    }

    #[test]
    fn narrow_toolbar_splits_evenly() {
        let toolbar = Toolbar::for_width(40);
        assert_eq!(toolbar.sort_width, 20);
        assert_eq!(toolbar.search_width, 19);
    }
}
