//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are embedded TOML files; custom themes are loaded from a
//! TOML file at runtime.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_border = "#45475a"
//! search_border_focused = "#f5c2e7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! card_accent = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! tier_high = "#a6e3a1"
//! tier_medium = "#f9e2af"
//! tier_low = "#f38ba8"
//! tag_fg = "#1e1e2e"
//!
//! [colors.tags]
//! emerald = "#a6e3a1"
//! violet = "#cba6f7"
//! sky = "#89dceb"
//! amber = "#fab387"
//! gray = "#7f849c"
//! ```

use crate::domain::error::{Result, WarrantyRatingsError};
use crate::domain::ScoreTier;
use crate::ui::styles::TagStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, all as hex strings such as `"#cdd6f4"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer, placeholders, secondary card lines.
    pub text_dim: String,
    pub border: String,

    pub search_border: String,
    pub search_border_focused: String,

    /// Highlighted sort menu option.
    pub selection_fg: String,
    pub selection_bg: String,
    /// Gutter of the selected card.
    pub card_accent: String,

    /// Search term occurrences inside company names.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub tier_high: String,
    pub tier_medium: String,
    pub tier_low: String,

    /// Text drawn on top of tag backgrounds.
    pub tag_fg: String,
    pub tags: TagColors,
}

/// Background color per tag style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagColors {
    pub emerald: String,
    pub violet: String,
    pub sky: String,
    pub amber: String,
    pub gray: String,
}

impl TagColors {
    #[must_use]
    pub fn color(&self, style: TagStyle) -> &str {
        match style {
            TagStyle::Emerald => &self.emerald,
            TagStyle::Violet => &self.violet,
            TagStyle::Sky => &self.sky,
            TagStyle::Amber => &self.amber,
            TagStyle::Gray => &self.gray,
        }
    }
}

impl ThemeColors {
    /// Returns the badge color for a score tier.
    #[must_use]
    pub fn tier(&self, tier: ScoreTier) -> &str {
        match tier {
            ScoreTier::High => &self.tier_high,
            ScoreTier::Medium => &self.tier_medium,
            ScoreTier::Low => &self.tier_low,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// ```rust
    /// use warranty_ratings::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WarrantyRatingsError::Io`] if the file cannot be read, or
    /// [`WarrantyRatingsError::Theme`] if the TOML is invalid or incomplete.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| WarrantyRatingsError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the test suite rules out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
