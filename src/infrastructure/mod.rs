//! Infrastructure layer for sandbox filesystem conventions.

pub mod paths;

pub use paths::{data_dir, expand_tilde, resolve_config_path};
