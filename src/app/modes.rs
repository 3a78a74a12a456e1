//! Input mode state machine.
//!
//! The mode decides how a key is interpreted and which element owns keyboard
//! focus. Mouse clicks work in every mode.
//!
//! ```text
//!            /                 t / Tab
//!   Search ◄──── Browse ────────────────► Tags(i)
//!      │  Esc      ▲ ▲  Esc                 │
//!      └───────────┘ └──────────────────────┘
//!                    ▲
//!                 o  │  Esc / Enter
//!                    ▼
//!               SortMenu(i)
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Card cursor navigation. Single-letter keybindings are active.
    #[default]
    Browse,

    /// Keystrokes edit the search term.
    Search,

    /// Keyboard focus is on the tag bar. Holds the focused chip index.
    Tags(usize),

    /// The sort dropdown is open. Holds the highlighted option index.
    SortMenu(usize),
}

impl InputMode {
    /// True when printable characters should be appended to the search term.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search)
    }

    #[must_use]
    pub const fn is_sort_menu_open(self) -> bool {
        matches!(self, Self::SortMenu(_))
    }
}
