//! Key events from the controlling terminal.

use crate::entropy::{EntropyError, KeyEventSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Reads key presses through crossterm.
///
/// The terminal must be in raw mode (see [`RawModeGuard`](super::RawModeGuard))
/// so that single presses arrive without waiting for Enter. Ctrl-C is not
/// turned into a signal in raw mode, so it is reported as
/// [`EntropyError::Interrupted`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }

    /// Blocks until the next key press and returns it.
    pub fn next_press(&mut self) -> Result<KeyEvent, EntropyError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_interrupt(&key) {
                        return Err(EntropyError::Interrupted);
                    }
                    return Ok(key);
                }
                _ => continue,
            }
        }
    }

    /// Blocks until a printable character is typed.
    pub fn next_char(&mut self) -> Result<char, EntropyError> {
        loop {
            if let KeyCode::Char(c) = self.next_press()?.code {
                return Ok(c);
            }
        }
    }
}

impl KeyEventSource for TerminalKeys {
    fn wait_for_key(&mut self) -> Result<(), EntropyError> {
        self.next_press().map(|_| ())
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_interrupts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&key));
    }

    #[test]
    fn test_plain_keys_do_not_interrupt() {
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)));
    }
}
