use crate::core::constants::APP_TITLE;
use crate::core::prelude::*;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::Stdout;

/// Raw-mode and alternate-screen guard for the demo console.
pub struct TerminalManager {
    stdout: Stdout,
    raw_mode_enabled: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw_mode_enabled: false,
        }
    }

    pub fn setup(&mut self) -> Result<()> {
        enable_raw_mode()
            .map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
        self.raw_mode_enabled = true;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            terminal::SetTitle(APP_TITLE),
            cursor::Hide
        )?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> Result<()> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            LeaveAlternateScreen,
            cursor::Show,
            ResetColor
        )?;
        self.stdout.flush()?;
        log::info!("Terminal restored");
        Ok(())
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show, ResetColor);
            log::warn!("Emergency terminal cleanup in destructor");
        }
    }
}
