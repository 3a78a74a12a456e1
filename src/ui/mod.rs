//! User interface rendering layer with component-based architecture.
//!
//! The UI follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel ─┬→ render → ANSI Output
//!                                             └→ HitMap → click targets
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`hitmap`]: Clickable regions and innermost-target lookup
//! - [`layout`]: Fixed screen geometry
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`styles`]: Category to tag style mapping
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod hitmap;
pub mod layout;
pub mod renderer;
pub mod styles;
pub mod theme;
pub mod viewmodel;

pub use hitmap::{ClickTarget, HitMap};
pub use renderer::render;
pub use styles::{CategoryPalette, TagStyle};
pub use theme::Theme;
pub use viewmodel::{CardItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
