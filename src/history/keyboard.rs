use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    NavigatePrevious,
    NavigateNext,
}

pub struct HistoryKeyboardHandler;

impl HistoryKeyboardHandler {
    /// Up/Down arrows and the readline chords Ctrl-P/Ctrl-N request history
    /// navigation; everything else passes through.
    pub fn get_history_action(key: &KeyEvent) -> Option<HistoryAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Up, KeyModifiers::NONE)
            | (KeyCode::Char('p'), KeyModifiers::CONTROL) => Some(HistoryAction::NavigatePrevious),
            (KeyCode::Down, KeyModifiers::NONE)
            | (KeyCode::Char('n'), KeyModifiers::CONTROL) => Some(HistoryAction::NavigateNext),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_navigation() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            HistoryKeyboardHandler::get_history_action(&up),
            Some(HistoryAction::NavigatePrevious)
        );

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            HistoryKeyboardHandler::get_history_action(&down),
            Some(HistoryAction::NavigateNext)
        );
    }

    #[test]
    fn test_readline_chords() {
        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(
            HistoryKeyboardHandler::get_history_action(&ctrl_p),
            Some(HistoryAction::NavigatePrevious)
        );

        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(
            HistoryKeyboardHandler::get_history_action(&ctrl_n),
            Some(HistoryAction::NavigateNext)
        );
    }

    #[test]
    fn test_modified_arrows_pass_through() {
        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(HistoryKeyboardHandler::get_history_action(&shift_up), None);

        let plain_char = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(HistoryKeyboardHandler::get_history_action(&plain_char), None);
    }
}
