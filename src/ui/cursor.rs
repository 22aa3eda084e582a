use std::time::{Duration, Instant};

const BLINK_INTERVAL_MS: u64 = 530;

/// Blink state for a rendered cursor. `show` resets the phase so the cursor
/// is solid right after a keystroke.
#[derive(Debug)]
pub struct CursorBlink {
    visible: bool,
    last_blink: Instant,
    blink_interval: Duration,
}

impl CursorBlink {
    pub fn new() -> Self {
        Self {
            visible: true,
            last_blink: Instant::now(),
            blink_interval: Duration::from_millis(BLINK_INTERVAL_MS),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update(&mut self) {
        if self.last_blink.elapsed() >= self.blink_interval {
            self.visible = !self.visible;
            self.last_blink = Instant::now();
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.last_blink = Instant::now();
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
