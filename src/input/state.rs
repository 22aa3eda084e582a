use crate::core::prelude::*;
use crate::history::{
    HistoryAction, HistoryKeyboardHandler, HistoryNavigator, HistoryStore,
};
use crate::input::buffer::LineBuffer;
use crate::input::keyboard::{KeyAction, KeyboardManager};
use crate::ui::cursor::CursorBlink;
use crate::ui::widget::{AnimatedWidget, CursorWidget, Widget};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// What a key event produced beyond ordinary editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    Submitted(String),
    Quit,
}

/// The console's input line: editing buffer, history store, and the
/// navigation policy wired together.
pub struct InputState {
    line: LineBuffer,
    history: HistoryStore,
    navigator: HistoryNavigator,
    keyboard: KeyboardManager,
    blink: CursorBlink,
    prompt: String,
}

impl InputState {
    pub fn new(config: &Config) -> Self {
        Self {
            line: LineBuffer::new(config.input_max_length),
            history: HistoryStore::new(),
            navigator: HistoryNavigator::new(),
            keyboard: KeyboardManager::new(),
            blink: CursorBlink::new(),
            prompt: config.prompt.clone(),
        }
    }

    pub fn content(&self) -> &str {
        self.line.content()
    }

    pub fn cursor_column(&self) -> usize {
        self.line.cursor()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<InputSignal> {
        if let Some(action) = HistoryKeyboardHandler::get_history_action(&key) {
            if self.handle_history(action) {
                return None;
            }
            // Off the first/last line the key falls through to the
            // ordinary handling below.
        }

        match self.keyboard.get_action(&key) {
            KeyAction::Submit => self.handle_submit().map(InputSignal::Submitted),
            KeyAction::Quit => Some(InputSignal::Quit),
            KeyAction::InsertChar(c) => {
                self.line.insert_char(c);
                self.blink.show();
                None
            }
            KeyAction::Backspace => {
                self.line.backspace();
                self.blink.show();
                None
            }
            KeyAction::Delete => {
                self.line.delete();
                self.blink.show();
                None
            }
            KeyAction::MoveLeft => {
                self.line.move_left();
                self.blink.show();
                None
            }
            KeyAction::MoveRight => {
                self.line.move_right();
                self.blink.show();
                None
            }
            KeyAction::MoveToStart => {
                self.line.move_to_start();
                self.blink.show();
                None
            }
            KeyAction::MoveToEnd => {
                self.line.move_to_end();
                self.blink.show();
                None
            }
            KeyAction::ClearLine => {
                self.line.clear();
                self.blink.show();
                None
            }
            KeyAction::NoAction => None,
        }
    }

    fn handle_history(&mut self, action: HistoryAction) -> bool {
        let handled = match action {
            HistoryAction::NavigatePrevious => self
                .navigator
                .navigate_previous(&mut self.history, &mut self.line),
            HistoryAction::NavigateNext => self
                .navigator
                .navigate_next(&mut self.history, &mut self.line),
        };
        if handled {
            self.blink.show();
        }
        handled
    }

    fn handle_submit(&mut self) -> Option<String> {
        if self.line.content().trim().is_empty() {
            return None;
        }

        let content = self.line.take();
        self.history.commit(&content);
        Some(content)
    }
}

impl Widget for InputState {
    fn render(&self, area: Rect) -> Paragraph<'_> {
        self.render_with_cursor(area).0
    }
}

impl CursorWidget for InputState {
    fn render_with_cursor(&self, area: Rect) -> (Paragraph<'_>, Option<(u16, u16)>) {
        let graphemes: Vec<&str> = self.line.content().graphemes(true).collect();
        let cursor_pos = self.line.cursor();
        let prompt_width = self.prompt.width();
        let inner_width = (area.width as usize).saturating_sub(prompt_width + 1);

        // Scroll the viewport so the cursor stays visible.
        let viewport_start = if inner_width > 0 && cursor_pos >= inner_width {
            cursor_pos + 1 - inner_width
        } else {
            0
        };
        let end = (viewport_start + inner_width).min(graphemes.len());
        let visible = graphemes.get(viewport_start..end).unwrap_or(&[]).join("");

        let spans = vec![
            Span::styled(self.prompt.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw(visible),
        ];
        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        let cursor_coord = if self.blink.is_visible() && cursor_pos >= viewport_start {
            let width_before: usize = graphemes
                .get(viewport_start..cursor_pos)
                .unwrap_or(&[])
                .iter()
                .map(|g| g.width())
                .sum();
            Some(((prompt_width + width_before) as u16, 1))
        } else {
            None
        };

        (paragraph, cursor_coord)
    }
}

impl AnimatedWidget for InputState {
    fn tick(&mut self) {
        self.blink.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(state: &mut InputState, code: KeyCode) -> Option<InputSignal> {
        state.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(state: &mut InputState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn submit(state: &mut InputState, text: &str) -> Option<InputSignal> {
        type_line(state, text);
        press(state, KeyCode::Enter)
    }

    #[test]
    fn test_submit_commits_and_clears_the_line() {
        let config = Config::default();
        let mut state = InputState::new(&config);

        let signal = submit(&mut state, "ls -la");
        assert_eq!(signal, Some(InputSignal::Submitted("ls -la".into())));
        assert_eq!(state.content(), "");
        assert_eq!(state.history().tail(1), ["ls -la"]);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let config = Config::default();
        let mut state = InputState::new(&config);

        assert_eq!(submit(&mut state, "   "), None);
        assert!(state.history().is_empty());
        assert_eq!(state.content(), "   ", "The buffer itself is left alone");
    }

    #[test]
    fn test_up_down_round_trip_preserves_live_line() {
        let config = Config::default();
        let mut state = InputState::new(&config);
        submit(&mut state, "first");
        submit(&mut state, "second");

        // With the cursor at column 0 the search prefix is empty, so Up
        // scrolls plainly while the draft is stashed away.
        type_line(&mut state, "draft");
        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.content(), "second");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.content(), "first");

        press(&mut state, KeyCode::Down);
        assert_eq!(state.content(), "second");
        press(&mut state, KeyCode::Down);
        assert_eq!(state.content(), "draft", "The unsubmitted draft comes back");
    }

    #[test]
    fn test_history_edit_is_not_committed() {
        let config = Config::default();
        let mut state = InputState::new(&config);
        submit(&mut state, "original");

        press(&mut state, KeyCode::Up);
        type_line(&mut state, " edited");
        assert_eq!(state.content(), "original edited");

        press(&mut state, KeyCode::Down);
        assert_eq!(state.content(), "", "Back on the (empty) live line");

        press(&mut state, KeyCode::Up);
        assert_eq!(
            state.content(),
            "original edited",
            "The overlay edit is still there while browsing"
        );
        assert_eq!(state.history().tail(10), ["original"], "The log itself is untouched");
    }

    #[test]
    fn test_quit_signal_on_double_esc() {
        let config = Config::default();
        let mut state = InputState::new(&config);

        assert_eq!(press(&mut state, KeyCode::Esc), None);
        assert_eq!(press(&mut state, KeyCode::Esc), Some(InputSignal::Quit));
    }
}
