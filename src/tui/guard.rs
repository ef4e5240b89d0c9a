//! Scoped terminal state: raw input mode and cursor visibility.
//!
//! Both guards restore the terminal in `Drop`, so an early `?` return, a
//! read failure, or a panic unwinding through the prompt still leaves the
//! invoking shell usable.

use crate::tui::screen;
use crossterm::terminal;
use std::io::{self, Write};

/// Switches the controlling terminal between raw and cooked input.
pub trait TerminalMode {
    /// Enter raw mode, remembering the prior mode for `disable_raw`.
    fn enable_raw(&self) -> io::Result<()>;
    /// Restore the mode saved by `enable_raw`.
    fn disable_raw(&self) -> io::Result<()>;
}

/// Raw mode via crossterm, which saves and restores the prior termios.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn enable_raw(&self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable_raw(&self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
pub struct RawModeGuard<'a, M: TerminalMode + ?Sized> {
    mode: &'a M,
}

impl<'a, M: TerminalMode + ?Sized> RawModeGuard<'a, M> {
    /// Enable raw mode and return a guard that disables it on drop.
    pub fn acquire(mode: &'a M) -> io::Result<Self> {
        mode.enable_raw()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { mode })
    }
}

impl<M: TerminalMode + ?Sized> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        match self.mode.disable_raw() {
            Ok(()) => tracing::debug!("raw mode restored"),
            Err(e) => tracing::warn!(error = %e, "failed to restore terminal mode"),
        }
    }
}

/// Hides the cursor while alive.
///
/// On release the cursor is shown again and returned to column 0 so the
/// next shell prompt starts at the left edge.
pub struct CursorGuard<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> CursorGuard<'a, W> {
    pub fn acquire(out: &'a mut W) -> io::Result<Self> {
        screen::hide_cursor(out)?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Output stream the prompt draws on while the cursor is hidden.
    pub fn out(&mut self) -> &mut W {
        &mut *self.out
    }
}

impl<W: Write> Drop for CursorGuard<'_, W> {
    fn drop(&mut self) {
        let restored = screen::show_cursor(self.out)
            .and_then(|()| self.out.write_all(b"\r"))
            .and_then(|()| self.out.flush());
        if let Err(e) = restored {
            tracing::warn!(error = %e, "failed to restore cursor");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::RecordingMode;

    #[test]
    fn raw_mode_guard_restores_on_drop() {
        let mode = RecordingMode::default();
        {
            let _guard = RawModeGuard::acquire(&mode).unwrap();
            assert!(mode.is_raw());
        }
        assert!(!mode.is_raw());
        assert_eq!(mode.calls(), vec!["enable", "disable"]);
    }

    #[test]
    fn failed_enable_does_not_restore() {
        let mode = RecordingMode::failing_enable();
        assert!(RawModeGuard::acquire(&mode).is_err());
        assert_eq!(mode.calls(), vec!["enable"]);
    }

    #[test]
    fn raw_mode_guard_restores_during_unwind() {
        let mode = RecordingMode::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&mode).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!mode.is_raw());
    }

    #[test]
    fn cursor_guard_hides_then_shows_and_returns_to_column_zero() {
        let mut out = Vec::new();
        {
            let mut guard = CursorGuard::acquire(&mut out).unwrap();
            guard.out().write_all(b"frame").unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?25lframe\x1b[?25h\r");
    }
}
