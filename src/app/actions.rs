//! Side effects requested by the event handler.
//!
//! Everything the view does is local state, so the only effect that leaves the
//! library is asking the host to hide the plugin pane.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,
}
