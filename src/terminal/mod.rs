//! Terminal input and output.
//!
//! Key presses and rendering for the interactive generator. Key events
//! feed the keystroke-timing source and the regenerate prompt; the
//! renderer shows the countdown and the generated passphrase.

mod keys;
mod renderer;

pub use keys::TerminalKeys;
pub use renderer::{parse_answer, Renderer};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Keeps the terminal in raw mode while alive.
///
/// Raw mode delivers single key presses immediately, which both the
/// timing source and the y/n prompt rely on.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switches the terminal into raw mode.
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        tracing::debug!("Terminal raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to restore terminal mode");
        }
    }
}
