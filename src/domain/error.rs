//! Error types for the warranty ratings plugin.
//!
//! The derived-view pipeline (filter, sort, render) is total and never fails.
//! Errors only arise at the edges of the plugin: reading an external dataset,
//! loading a theme file, or interpreting configuration.

use thiserror::Error;

/// The main error type for warranty ratings operations.
///
/// # Examples
///
/// ```
/// use warranty_ratings::domain::WarrantyRatingsError;
///
/// fn check_dataset(count: usize) -> Result<(), WarrantyRatingsError> {
///     if count == 0 {
///         return Err(WarrantyRatingsError::Dataset("dataset is empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_dataset(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum WarrantyRatingsError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An externally supplied dataset could not be parsed or failed range checks.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for warranty ratings operations.
pub type Result<T> = std::result::Result<T, WarrantyRatingsError>;
