//! Domain layer for the warranty ratings plugin.
//!
//! Core types independent of Zellij APIs, rendering, or data loading.
//!
//! # Organization
//!
//! - [`company`]: The rated company record
//! - [`error`]: Error types and result aliases
//! - [`interaction`]: Search term, category filter, and sort mode
//! - [`score`]: Score dimensions, ceilings, and tier classification
//! - [`sort_method`]: The six sort modes with identifiers and labels

pub mod company;
pub mod error;
pub mod interaction;
pub mod score;
pub mod sort_method;

pub use company::Company;
pub use error::{Result, WarrantyRatingsError};
pub use interaction::InteractionState;
pub use score::{ScoreDimension, ScoreDisplay, ScoreTier};
pub use sort_method::SortMethod;
