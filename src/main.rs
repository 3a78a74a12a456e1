//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the `warranty_ratings` library
//! and the Zellij plugin system. It implements `ZellijPlugin`, maps host key
//! and mouse events onto library events, and executes returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Register for `Key` and `Mouse` events
//! 3. **Update**: Map events, delegate to `handle_event`
//! 4. **Render**: Record the pane size, then call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! While typing in the search box:
//! - Characters: Edit the search term
//! - `Enter` / `Esc`: Return to the card list
//! - `Tab`: Jump to the tag bar
//!
//! Otherwise:
//! - `j`/`k` or arrows: Move
//! - `h`/`l`: Move within tag bar or sort menu
//! - `Enter` / `Space`: Activate
//! - `Esc`: Back (clears filters from the card list)
//! - `/`: Search
//! - `t` / `Tab`: Tag bar
//! - `o`: Sort menu
//! - `s` / `S`: Next / previous sort mode
//! - `1`-`9`: Toggle the selected card's nth category
//! - `q`: Close plugin
//!
//! Mouse: left click on any search box, dropdown, option, tag, or card;
//! scroll wheel moves the card cursor.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("warranty-ratings is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use warranty_ratings::{handle_event, Action, Config, Event, InputMode};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: warranty_ratings::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: warranty_ratings::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, initializes tracing and state, and subscribes
        /// to input events. No permissions are needed: the plugin only reads
        /// its own input and, optionally, files under the sandbox mount.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            warranty_ratings::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = warranty_ratings::initialize(&config);
            tracing::debug!(companies = self.app.catalog().len(), "app state initialized");

            subscribe(&[EventType::Key, EventType::Mouse]);
        }

        /// Returns `true` if the plugin UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
                zellij_tile::prelude::Event::Mouse(mouse) => Self::map_mouse_event(mouse),
                _ => None,
            };
            let Some(our_event) = our_event else {
                return false;
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    for action in actions {
                        Self::execute_action(&action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.app.set_viewport(rows, cols);
            warranty_ratings::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Maps keyboard events to application events.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::MoveDown),
                    BareKey::Char('p') => Some(Event::MoveUp),
                    _ => None,
                };
            }

            if self.app.input_mode.is_typing() {
                return Some(match key.bare_key {
                    BareKey::Down => Event::MoveDown,
                    BareKey::Up => Event::MoveUp,
                    BareKey::Enter | BareKey::Esc => Event::Back,
                    BareKey::Tab => Event::FocusTags,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                });
            }

            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::MoveDown,
                BareKey::Up | BareKey::Char('k') => Event::MoveUp,
                BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
                BareKey::Right | BareKey::Char('l') => Event::MoveRight,
                BareKey::Enter | BareKey::Char(' ') => Event::Activate,
                BareKey::Esc => Event::Back,
                BareKey::Tab | BareKey::Char('t') => match self.app.input_mode {
                    InputMode::Tags(_) => Event::Back,
                    _ => Event::FocusTags,
                },
                BareKey::Char('/') => Event::FocusSearch,
                BareKey::Char('o') => Event::OpenSortMenu,
                BareKey::Char('s') => Event::CycleSort { forward: true },
                BareKey::Char('S') => Event::CycleSort { forward: false },
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Char(c @ '1'..='9') => {
                    let position = c.to_digit(10).map_or(0, |d| d as usize - 1);
                    Event::ToggleCardCategory(position)
                }
                _ => return None,
            })
        }

        /// Maps mouse events to application events. Host coordinates are
        /// 0-indexed; the layout is 1-indexed.
        fn map_mouse_event(mouse: Mouse) -> Option<Event> {
            match mouse {
                Mouse::LeftClick(line, col) => {
                    let row = usize::try_from(line).ok()? + 1;
                    Some(Event::Click { row, col: col + 1 })
                }
                Mouse::ScrollDown(_) => Some(Event::ScrollDown),
                Mouse::ScrollUp(_) => Some(Event::ScrollUp),
                _ => None,
            }
        }

        /// Translates library actions to Zellij API calls.
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
            }
        }
    }
}
