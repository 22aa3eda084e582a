pub mod buffer;
pub mod keyboard;
pub mod state;

pub use buffer::LineBuffer;
pub use keyboard::{KeyAction, KeyboardManager};
pub use state::{InputSignal, InputState};
