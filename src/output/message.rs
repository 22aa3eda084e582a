use crate::ui::widget::Widget;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

/// Bounded transcript of console output, newest at the bottom.
#[derive(Debug)]
pub struct MessageLog {
    lines: Vec<String>,
    max_messages: usize,
}

impl MessageLog {
    pub fn new(max_messages: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_messages: max_messages.max(1),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        if self.lines.len() > self.max_messages {
            let excess = self.lines.len() - self.max_messages;
            self.lines.drain(0..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Widget for MessageLog {
    fn render(&self, area: Rect) -> Paragraph<'_> {
        // Show the newest lines that fit the area.
        let visible = area.height as usize;
        let start = self.lines.len().saturating_sub(visible);
        let lines: Vec<Line> = self.lines[start..]
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}
