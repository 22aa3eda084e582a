pub mod config;
pub mod keyboard;
pub mod navigator;
pub mod store;

pub use config::HistoryConfig;
pub use keyboard::{HistoryAction, HistoryKeyboardHandler};
pub use navigator::{HistoryNavigator, InputBuffer};
pub use store::{HistoryMatch, HistoryStore};
