//! Raw input classification.

use crate::tui::settings;

/// Logical key produced from one raw read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Anything not in the key table. Shows the help text.
    NoOp,
    Up,
    Down,
    Confirm,
    /// `Ctrl-C`. The caller decides whether to treat it as an interrupt.
    Abort,
}

impl KeyEvent {
    /// Whether this key finishes the prompt.
    pub fn ends_prompt(self) -> bool {
        match self {
            KeyEvent::Confirm | KeyEvent::Abort => true,
            KeyEvent::NoOp | KeyEvent::Up | KeyEvent::Down => false,
        }
    }
}

/// Classify the bytes returned by a single read.
///
/// The whole chunk must match one table entry. A read that carries several
/// sequences back to back (`ESC[A ESC[A`) is one `NoOp`.
pub fn classify(bytes: &[u8]) -> KeyEvent {
    match bytes {
        settings::KEY_UP => KeyEvent::Up,
        settings::KEY_DOWN => KeyEvent::Down,
        settings::KEY_CONFIRM => KeyEvent::Confirm,
        settings::KEY_ABORT => KeyEvent::Abort,
        _ => KeyEvent::NoOp,
    }
}
