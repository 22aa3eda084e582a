pub mod cursor;
pub mod screen;
pub mod terminal;
pub mod widget;

pub use cursor::CursorBlink;
pub use screen::ScreenManager;
pub use terminal::TerminalManager;
pub use widget::{AnimatedWidget, CursorWidget, Widget};
