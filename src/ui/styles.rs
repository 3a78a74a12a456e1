//! Category tag styling.
//!
//! Tags are coloured through two lookups: a [`CategoryPalette`] maps a category
//! name to a [`TagStyle`] identifier, and the active theme maps that identifier
//! to a hex colour. Unrecognized categories use the palette's fallback style.
//!
//! The palette is plain data and can be extended from configuration:
//!
//! ```text
//! category_styles "Kitchen=sky,Footwear=violet"
//! ```

use std::collections::BTreeMap;

/// Style identifier for a category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagStyle {
    Emerald,
    Violet,
    Sky,
    Amber,
    Gray,
}

impl TagStyle {
    pub const ALL: [Self; 5] = [Self::Emerald, Self::Violet, Self::Sky, Self::Amber, Self::Gray];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Emerald => "emerald",
            Self::Violet => "violet",
            Self::Sky => "sky",
            Self::Amber => "amber",
            Self::Gray => "gray",
        }
    }

    /// Parses a style identifier, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.id().eq_ignore_ascii_case(id))
    }
}

/// Finite mapping from category name to tag style, with a fallback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    entries: BTreeMap<String, TagStyle>,
    fallback: TagStyle,
}

impl Default for CategoryPalette {
    /// Outdoors, Luggage, Clothing, and Other have dedicated styles; everything
    /// else is gray.
    fn default() -> Self {
        let entries = [
            ("Outdoors", TagStyle::Emerald),
            ("Luggage", TagStyle::Violet),
            ("Clothing", TagStyle::Sky),
            ("Other", TagStyle::Amber),
        ]
        .into_iter()
        .map(|(category, style)| (category.to_string(), style))
        .collect();

        Self {
            entries,
            fallback: TagStyle::Gray,
        }
    }
}

impl CategoryPalette {
    /// Returns the style for a category, or the fallback.
    ///
    /// ```rust
    /// use warranty_ratings::ui::styles::{CategoryPalette, TagStyle};
    ///
    /// let palette = CategoryPalette::default();
    /// assert_eq!(palette.style_for("Luggage"), TagStyle::Violet);
    /// assert_eq!(palette.style_for("Kitchen"), TagStyle::Gray);
    /// ```
    #[must_use]
    pub fn style_for(&self, category: &str) -> TagStyle {
        self.entries.get(category).copied().unwrap_or(self.fallback)
    }

    /// Applies comma-separated `Category=style` overrides.
    ///
    /// Malformed pairs and unknown style identifiers are skipped. The key
    /// `*` replaces the fallback style.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &str) -> Self {
        for pair in overrides.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((category, style_id)) = pair.split_once('=') else {
                tracing::debug!(pair = %pair, "ignoring malformed category style");
                continue;
            };
            let category = category.trim();
            let Some(style) = TagStyle::from_id(style_id) else {
                tracing::debug!(style = %style_id, "ignoring unknown tag style");
                continue;
            };
            if category == "*" {
                self.fallback = style;
            } else if !category.is_empty() {
                self.entries.insert(category.to_string(), style);
            }
        }
        self
    }
}
