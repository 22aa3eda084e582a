use crate::core::prelude::*;
use crate::history::HistoryConfig;
use crate::input::state::{InputSignal, InputState};
use crate::output::message::MessageLog;
use crate::ui::terminal::TerminalManager;
use crate::ui::widget::{AnimatedWidget, CursorWidget, Widget};
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use std::io::Stdout;

pub type TerminalBackend = Terminal<CrosstermBackend<Stdout>>;

/// Demo console: a transcript area on top and the history-aware input line
/// at the bottom. Accepted lines are echoed; `history` and `history -c`
/// inspect and clear the log; `exit` or a double Esc quits.
pub struct ScreenManager {
    terminal: TerminalBackend,
    terminal_mgr: TerminalManager,
    input: InputState,
    messages: MessageLog,
    history_config: HistoryConfig,
    poll_rate: Duration,
}

impl ScreenManager {
    pub fn new(config: &Config) -> Result<Self> {
        let mut terminal_mgr = TerminalManager::new();
        terminal_mgr.setup()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            terminal_mgr,
            input: InputState::new(config),
            messages: MessageLog::new(config.max_messages),
            history_config: HistoryConfig::from_main_config(config),
            poll_rate: Duration::from_millis(config.poll_rate),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            if event::poll(self.poll_rate)? {
                match event::read()? {
                    Event::Key(key) => match self.input.handle_key_event(key) {
                        Some(InputSignal::Quit) => break,
                        Some(InputSignal::Submitted(line)) => {
                            if self.process_line(&line) {
                                break;
                            }
                        }
                        None => {}
                    },
                    Event::Resize(_, _) => {} // redrawn on the next frame
                    _ => {}
                }
            }

            self.input.tick();
            self.draw()?;
        }

        self.terminal_mgr.cleanup()
    }

    // Returns true when the console should shut down.
    fn process_line(&mut self, line: &str) -> bool {
        let echo = format!("{}{}", self.input.prompt(), line);
        self.messages.push(echo);

        match line.trim() {
            "exit" | "quit" => return true,
            "history" => self.show_history(),
            "history -c" | "history --clear" => {
                self.input.history_mut().clear();
                self.messages.push("History cleared");
            }
            // No execution engine in the demo; accepted lines are only
            // echoed and remembered.
            _ => {}
        }
        false
    }

    fn show_history(&mut self) {
        let tail = self
            .input
            .history()
            .tail(self.history_config.tail_count)
            .to_vec();
        if tail.is_empty() {
            self.messages.push("History is empty");
            return;
        }

        let offset = self.input.history().len() - tail.len();
        for (i, entry) in tail.iter().enumerate() {
            self.messages.push(format!("{:>4}  {}", offset + i + 1, entry));
        }
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            input,
            messages,
            ..
        } = self;

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(2)])
                .split(frame.size());

            frame.render_widget(messages.render(chunks[0]), chunks[0]);

            let (paragraph, cursor) = input.render_with_cursor(chunks[1]);
            frame.render_widget(paragraph, chunks[1]);
            if let Some((x, y)) = cursor {
                frame.set_cursor(chunks[1].x + x, chunks[1].y + y);
            }
        })?;
        Ok(())
    }
}
