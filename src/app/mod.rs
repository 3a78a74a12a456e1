//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key / Mouse → Event → handle_event → InteractionState transition
//!                                          │
//!                                          ▼
//!                               filter → sort (refresh)
//!                                          │
//!                                          ▼
//!                        compute_viewmodel → render, hit map
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine
//! - [`state`]: Central application state container
//! - `view`: View model computation for [`AppState`]

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
pub use view::{EMPTY_MESSAGE, SEARCH_PLACEHOLDER, TITLE};
