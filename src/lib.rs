//! Warranty Ratings: a Zellij plugin for browsing lifetime-warranty scores.
//!
//! The plugin shows a fixed catalog of companies with their warranty
//! ratings, and lets the user narrow and reorder it:
//! - Case-insensitive substring search over company names and categories
//! - A single category filter, toggled from the tag bar or any card
//! - Six sort modes chosen from a dropdown
//! - Score badges coloured by high, medium, and low tier
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, input modes                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Pipeline      │   │ Catalog       │
//! │ (ui/)         │   │ (pipeline/)   │   │ (catalog/)    │
//! │ - Rendering   │   │ - Filter      │   │ - Bundled     │
//! │ - Hit map     │   │ - Sort        │   │ - JSON file   │
//! │ - Theming     │   │               │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Company, scores, sort modes, interaction state   │
//! │  - Error types, sandbox paths                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to an OTLP/JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Company data sources and the immutable catalog
//! - [`domain`]: Core domain types and errors
//! - [`infrastructure`]: Sandbox path handling
//! - [`pipeline`]: Filter and sort stages of the derived view
//! - [`ui`]: Terminal rendering, hit-testing, and themes
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/warranty-ratings.wasm" {
//!         theme "catppuccin-latte"
//!         default_sort "scoreHigh"
//!         dataset_file "~/.config/warranty-ratings/companies.json"
//!         category_styles "Kitchen=sky,Footwear=violet"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use warranty_ratings::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::FocusSearch)?;
//! for c in "osprey".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.visible().len(), 1);
//! # Ok::<(), warranty_ratings::WarrantyRatingsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod pipeline;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use catalog::Catalog;
pub use domain::{Company, InteractionState, Result, SortMethod, WarrantyRatingsError};
pub use ui::{CategoryPalette, Theme};

use catalog::{BundledSource, CompanySource, JsonFileSource};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Path to a JSON array of companies replacing the bundled records.
    pub dataset_file: Option<String>,

    /// Comma-separated `Category=style` pairs layered over the default palette.
    pub category_styles: Option<String>,

    /// Sort mode identifier used when the view opens. Default: `yearOldest`
    pub default_sort: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as absent.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use warranty_ratings::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("default_sort".to_string(), "nameAZ".to_string());
    /// map.insert("dataset_file".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.default_sort.as_deref(), Some("nameAZ"));
    /// assert_eq!(config.dataset_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            dataset_file: get("dataset_file"),
            category_styles: get("category_styles"),
            default_sort: get("default_sort"),
        }
    }

    /// Resolves `default_sort` to a sort mode.
    ///
    /// # Errors
    ///
    /// Returns [`WarrantyRatingsError::Config`] for an unknown identifier.
    pub fn initial_sort(&self) -> Result<SortMethod> {
        self.default_sort.as_deref().map_or(Ok(SortMethod::default()), |id| {
            SortMethod::from_id(id)
                .ok_or_else(|| WarrantyRatingsError::Config(format!("unknown sort mode '{id}'")))
        })
    }

    /// Builds the company source: the configured file, or the bundled records.
    #[must_use]
    pub fn company_source(&self) -> Box<dyn CompanySource> {
        match self.dataset_file.as_deref().and_then(infrastructure::resolve_config_path) {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(BundledSource),
        }
    }

    /// Loads the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(path) = self.theme_file.as_deref().and_then(infrastructure::resolve_config_path) {
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path.display(), error = %e, "failed to load theme file, using default");
                }
            }
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }

    /// Builds the category palette with any configured overrides applied.
    #[must_use]
    pub fn palette(&self) -> CategoryPalette {
        let palette = CategoryPalette::default();
        match &self.category_styles {
            Some(overrides) => palette.with_overrides(overrides),
            None => palette,
        }
    }
}

/// Initializes the application state from configuration.
///
/// Every configuration failure degrades to a default and is logged: a
/// dataset file that cannot be loaded falls back to the bundled records, a
/// bad theme to Catppuccin Mocha, an unknown sort mode to `yearOldest`.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing warranty ratings plugin");

    let source = config.company_source();
    let catalog = Catalog::load(source.as_ref()).unwrap_or_else(|e| {
        tracing::warn!(source = %source.describe(), error = %e, "failed to load dataset, using bundled records");
        Catalog::bundled()
    });

    let sort_method = config.initial_sort().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "using default sort mode");
        SortMethod::default()
    });

    AppState::new(
        catalog,
        InteractionState::with_initial_sort(sort_method),
        config.theme(),
        config.palette(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_is_default() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn initial_sort_parses_identifier() {
        let config = Config::from_zellij(&map(&[("default_sort", "scoreLow")]));
        assert_eq!(config.initial_sort().unwrap(), SortMethod::ScoreLow);
        assert_eq!(Config::default().initial_sort().unwrap(), SortMethod::YearOldest);
    }

    #[test]
    fn unknown_sort_is_config_error() {
        let config = Config::from_zellij(&map(&[("default_sort", "random")]));
        assert!(matches!(config.initial_sort(), Err(WarrantyRatingsError::Config(_))));
    }

    #[test]
    fn initialize_defaults_to_bundled_oldest_first() {
        let state = initialize(&Config::default());
        let names: Vec<&str> = state.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Patagonia", "Osprey", "Hydroflask"]);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_falls_back_on_bad_values() {
        let config = Config::from_zellij(&map(&[
            ("default_sort", "random"),
            ("theme", "solarized"),
            ("theme_file", "/nonexistent/theme.toml"),
            ("dataset_file", "/nonexistent/companies.json"),
        ]));
        let state = initialize(&config);
        assert_eq!(state.interaction().sort_method, SortMethod::YearOldest);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.catalog().len(), 3);
    }

    #[test]
    fn initialize_loads_dataset_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Darn Tough","totalScore":19,"priceRange":"$$","clarityTotal":3,
                "coverageTotal":10,"processTotal":6,"yearFounded":2004,"categories":["Clothing"]}}]"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = Config::from_zellij(&map(&[
            ("dataset_file", path.as_str()),
            ("default_sort", "nameZA"),
            ("theme", "catppuccin-latte"),
            ("category_styles", "Clothing=amber"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.catalog().len(), 1);
        assert_eq!(state.visible()[0].name, "Darn Tough");
        assert_eq!(state.interaction().sort_method, SortMethod::NameZA);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.palette.style_for("Clothing"), ui::TagStyle::Amber);
    }
}
