use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

pub trait Widget {
    fn render(&self, area: Rect) -> Paragraph<'_>;
}

/// Widgets that place a terminal cursor. The coordinate is relative to the
/// rendered area; `None` hides the cursor (e.g. during the blink-off phase).
pub trait CursorWidget: Widget {
    fn render_with_cursor(&self, area: Rect) -> (Paragraph<'_>, Option<(u16, u16)>);
}

pub trait AnimatedWidget {
    fn tick(&mut self);
}
