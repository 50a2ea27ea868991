//! Terminal event configuration.
//!
//! Turns on bracketed paste, so a paste arrives as one event instead of a
//! burst of keystrokes, and the keyboard enhancement protocol, so Esc and
//! Ctrl-modified arrows reach the log-food form unambiguously.

use std::io::{self, stdout};

use ratatui::crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

/// A terminal mode the guard may switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    BracketedPaste,
    KeyboardEnhancement,
}

impl TerminalMode {
    fn enable(self) -> io::Result<()> {
        match self {
            Self::BracketedPaste => execute!(stdout(), EnableBracketedPaste),
            Self::KeyboardEnhancement => execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            ),
        }
    }

    fn disable(self) -> io::Result<()> {
        match self {
            Self::BracketedPaste => execute!(stdout(), DisableBracketedPaste),
            Self::KeyboardEnhancement => execute!(stdout(), PopKeyboardEnhancementFlags),
        }
    }
}

/// Switches terminal modes on and restores them when dropped, including
/// during a panic unwind.
#[derive(Debug)]
pub struct TerminalEventGuard {
    enabled: Vec<TerminalMode>,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut enabled = Vec::new();
        for mode in [TerminalMode::BracketedPaste, TerminalMode::KeyboardEnhancement] {
            match mode.enable() {
                Ok(()) => {
                    debug!(?mode, "terminal mode enabled");
                    enabled.push(mode);
                }
                // Pastes then arrive as plain keys; Esc may be delayed.
                Err(e) => warn!(?mode, error = %e, "terminal mode unavailable"),
            }
        }
        Self { enabled }
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        while let Some(mode) = self.enabled.pop() {
            if let Err(e) = mode.disable() {
                debug!(?mode, error = %e, "could not restore terminal mode");
            }
        }
    }
}
