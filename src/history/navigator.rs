use crate::history::store::HistoryStore;
use unicode_segmentation::UnicodeSegmentation;

/// Widget-side surface the navigator drives. Columns are grapheme offsets,
/// matching the input buffer's cursor model.
pub trait InputBuffer {
    fn input_buffer(&self) -> &str;
    /// Replaces the buffer contents and places the cursor at the end.
    fn set_input_buffer(&mut self, text: &str);
    fn cursor_column(&self) -> usize;
    fn set_cursor_column(&mut self, column: usize);
    fn cursor_on_first_line(&self) -> bool;
    fn cursor_on_last_line(&self) -> bool;
}

/// Host-side navigation policy layered over [`HistoryStore`]: decides when a
/// key press starts a fresh prefix search versus continuing one, and where
/// the cursor lands afterwards. Kept out of the store because it depends on
/// cursor and line geometry the core has no business knowing.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    prefix: String,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Handles an up/navigate-previous request. Returns false when the
    /// cursor is not on the buffer's first line; the caller should then let
    /// the key fall through to ordinary cursor movement.
    ///
    /// A fresh search starts (index back to the live line, prefix recomputed
    /// as the text left of the cursor) when the store is not browsing, or
    /// when a non-empty recorded prefix no longer agrees with the cursor
    /// column. Otherwise the recorded prefix is reused.
    pub fn navigate_previous(&mut self, store: &mut HistoryStore, buffer: &mut dyn InputBuffer) -> bool {
        if !buffer.cursor_on_first_line() {
            return false;
        }

        let column = buffer.cursor_column();
        if !store.is_browsing() || (!self.prefix.is_empty() && column != grapheme_count(&self.prefix)) {
            store.reset_position();
            self.prefix = take_graphemes(buffer.input_buffer(), column);
        }

        let current = buffer.input_buffer().to_string();
        if let Some(found) = store.navigate_backward(&current, &self.prefix) {
            buffer.set_input_buffer(&found.text);
        }

        // Emulate readline: the cursor stays at the end of the prefix for a
        // prefix search, and goes to the end of the line otherwise.
        self.place_cursor(buffer);
        true
    }

    /// Handles a down/navigate-next request, reusing the recorded prefix.
    /// Returns false when the cursor is not on the buffer's last line.
    pub fn navigate_next(&mut self, store: &mut HistoryStore, buffer: &mut dyn InputBuffer) -> bool {
        if !buffer.cursor_on_last_line() {
            return false;
        }

        let current = buffer.input_buffer().to_string();
        if let Some(found) = store.navigate_forward(&current, &self.prefix) {
            buffer.set_input_buffer(&found.text);
        }

        if !self.prefix.is_empty() {
            buffer.set_cursor_column(grapheme_count(&self.prefix));
        }
        true
    }

    fn place_cursor(&self, buffer: &mut dyn InputBuffer) {
        if self.prefix.is_empty() {
            buffer.set_cursor_column(grapheme_count(buffer.input_buffer()));
        } else {
            buffer.set_cursor_column(grapheme_count(&self.prefix));
        }
    }
}

fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

fn take_graphemes(text: &str, count: usize) -> String {
    text.graphemes(true).take(count).collect()
}
