use crate::core::constants::DOUBLE_ESC_THRESHOLD;
use crate::core::prelude::*;
use crossterm::event::KeyModifiers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    InsertChar(char),
    Backspace,
    Delete,
    Submit,
    ClearLine,
    Quit,
    NoAction,
}

/// Maps raw key events to editing actions. Quitting takes a double Esc
/// press within the configured threshold, so a stray Esc is harmless.
pub struct KeyboardManager {
    double_press_threshold: Duration,
    last_esc_press: Option<Instant>,
}

impl KeyboardManager {
    pub fn new() -> Self {
        Self {
            double_press_threshold: Duration::from_millis(DOUBLE_ESC_THRESHOLD),
            last_esc_press: None,
        }
    }

    pub fn get_action(&mut self, key: &KeyEvent) -> KeyAction {
        if key.code == KeyCode::Esc {
            return self.handle_escape();
        }

        match (key.code, key.modifiers) {
            (KeyCode::Left, KeyModifiers::NONE) => KeyAction::MoveLeft,
            (KeyCode::Right, KeyModifiers::NONE) => KeyAction::MoveRight,
            (KeyCode::Home, KeyModifiers::NONE) => KeyAction::MoveToStart,
            (KeyCode::End, KeyModifiers::NONE) => KeyAction::MoveToEnd,

            (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Submit,

            (KeyCode::Backspace, KeyModifiers::NONE) => KeyAction::Backspace,
            (KeyCode::Delete, KeyModifiers::NONE) => KeyAction::Delete,

            // Readline chords
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => KeyAction::MoveToStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => KeyAction::MoveToEnd,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearLine,

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if c.is_control() {
                    log::warn!("Blocked control character in input: {:?}", c);
                    KeyAction::NoAction
                } else {
                    KeyAction::InsertChar(c)
                }
            }

            _ => KeyAction::NoAction,
        }
    }

    fn handle_escape(&mut self) -> KeyAction {
        let now = Instant::now();
        if let Some(prev) = self.last_esc_press.take() {
            if now.duration_since(prev) <= self.double_press_threshold {
                log::info!("Double Esc detected, quit requested");
                return KeyAction::Quit;
            }
        }
        self.last_esc_press = Some(now);
        KeyAction::NoAction
    }
}

impl Default for KeyboardManager {
    fn default() -> Self {
        Self::new()
    }
}
