//! Shared rendering utilities.
//!
//! Everything here works on character indices, not byte indices, so company
//! names with non-ASCII characters highlight and truncate correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells a string occupies, counting one per char.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` chars, ending in `…` when cut.
///
/// ```rust
/// use warranty_ratings::ui::helpers::truncate;
///
/// assert_eq!(truncate("Patagonia", 20), "Patagonia");
/// assert_eq!(truncate("Patagonia", 5), "Pata…");
/// assert_eq!(truncate("Patagonia", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Finds case-insensitive occurrences of `term` in `text`.
///
/// Returns non-overlapping `(start, end)` char ranges with an exclusive end.
/// An empty term has no occurrences.
///
/// ```rust
/// use warranty_ratings::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Hydroflask", "FLASK"), vec![(5, 10)]);
/// assert_eq!(match_ranges("Osprey", ""), vec![]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = term.chars().map(fold).collect();

    let mut ranges = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return ranges;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Prints `text` with the given char ranges highlighted.
///
/// After each highlighted section the `base` sequence is re-emitted so the
/// rest of the line keeps its styling.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{base}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
