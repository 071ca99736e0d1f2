//! Terminal lifecycle: raw mode, alternate screen and mouse capture.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, warn};

/// Terminal driven by crossterm on stdout.
pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of a game and restores it on drop,
/// including when the game loop returns an error.
pub struct TerminalSession {
    terminal: CrosstermTerminal,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen with mouse capture enabled.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!("Terminal ready");
        Ok(Self { terminal })
    }

    /// The wrapped terminal.
    pub fn terminal(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
        info!("Terminal restored");
    }
}
