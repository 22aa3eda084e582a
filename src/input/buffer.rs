use crate::history::navigator::InputBuffer;
use unicode_segmentation::UnicodeSegmentation;

/// Single-line editing buffer with a grapheme-indexed cursor.
#[derive(Debug)]
pub struct LineBuffer {
    content: String,
    cursor: usize,
    max_length: usize,
}

impl LineBuffer {
    pub fn new(max_length: usize) -> Self {
        Self {
            content: String::with_capacity(100),
            cursor: 0,
            max_length,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn grapheme_len(&self) -> usize {
        self.content.graphemes(true).count()
    }

    /// Takes the buffer contents, leaving it empty with the cursor at 0.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if self.grapheme_len() >= self.max_length {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.byte_offset(self.cursor);
        let start = self.byte_offset(self.cursor - 1);
        self.content.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.content.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.grapheme_len();
    }

    // Byte offset right after `position` graphemes.
    fn byte_offset(&self, position: usize) -> usize {
        self.content
            .grapheme_indices(true)
            .take(position)
            .last()
            .map(|(pos, grapheme)| pos + grapheme.len())
            .unwrap_or(0)
    }
}

impl InputBuffer for LineBuffer {
    fn input_buffer(&self) -> &str {
        &self.content
    }

    fn set_input_buffer(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.grapheme_len();
    }

    fn cursor_column(&self) -> usize {
        self.cursor
    }

    fn set_cursor_column(&mut self, column: usize) {
        self.cursor = column.min(self.grapheme_len());
    }

    // Single-line buffer: the cursor is always on both edges.
    fn cursor_on_first_line(&self) -> bool {
        true
    }

    fn cursor_on_last_line(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_move() {
        let mut line = LineBuffer::new(16);
        for c in "hello".chars() {
            line.insert_char(c);
        }
        assert_eq!(line.content(), "hello");
        assert_eq!(line.cursor(), 5);

        line.move_to_start();
        line.insert_char('>');
        assert_eq!(line.content(), ">hello");
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn test_backspace_and_delete_on_graphemes() {
        let mut line = LineBuffer::new(16);
        for c in "héllo".chars() {
            line.insert_char(c);
        }

        line.set_cursor_column(2);
        line.backspace();
        assert_eq!(line.content(), "hllo");
        assert_eq!(line.cursor(), 1);

        line.delete();
        assert_eq!(line.content(), "hlo");
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn test_edits_at_the_edges_are_noops() {
        let mut line = LineBuffer::new(16);
        line.backspace();
        line.delete();
        line.move_left();
        line.move_right();
        assert_eq!(line.content(), "");
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn test_max_length_is_enforced() {
        let mut line = LineBuffer::new(3);
        for c in "abcdef".chars() {
            line.insert_char(c);
        }
        assert_eq!(line.content(), "abc");
    }

    #[test]
    fn test_set_input_buffer_moves_cursor_to_end() {
        let mut line = LineBuffer::new(32);
        line.set_input_buffer("ls -la");
        assert_eq!(line.cursor_column(), 6);

        line.set_cursor_column(100);
        assert_eq!(line.cursor_column(), 6, "Column is clamped to the text length");
    }

    #[test]
    fn test_take_resets_cursor() {
        let mut line = LineBuffer::new(16);
        line.set_input_buffer("pwd");
        assert_eq!(line.take(), "pwd");
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }
}
