//! Readline-style command history for interactive consoles.
//!
//! The heart of the crate is [`HistoryStore`]: an append-only log of
//! accepted lines with a browsing cursor and a sparse overlay of unsaved
//! edits, so scrolling through history never destroys what the user typed.
//! [`HistoryNavigator`] layers the host-side prefix-search policy on top,
//! and the `input`/`ui` modules provide a ready-made single-line widget and
//! demo console around them.

// Module definitions
pub mod core;
pub mod history;
pub mod input;
pub mod output;
pub mod ui;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::history::{HistoryMatch, HistoryNavigator, HistoryStore, InputBuffer};
pub use crate::input::{InputSignal, InputState};
pub use crate::ui::screen::ScreenManager;

/// Main entry point for the demo console.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<()> {
    let mut screen = ScreenManager::new(config)?;
    screen.run()
}
