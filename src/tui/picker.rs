//! Prompt orchestration: terminal guards, reader thread, coordinator loop.
//!
//! Setup order is raw mode, hidden cursor, first frame, reader thread.
//! Teardown runs in reverse on every path: the reader is joined, the cursor
//! is shown and returned to column 0, and cooked mode is restored.

use crate::error::PromptError;
use crate::tui::coordinator::Coordinator;
use crate::tui::guard::{CrosstermMode, CursorGuard, RawModeGuard, TerminalMode};
use crate::tui::reader::{self, Ack, ReadEvent};
use crate::types::{PromptResult, Selection};
use std::io::{self, Read, Write};
use std::sync::mpsc;
use std::thread;

/// Ask the user to pick one option on the controlling terminal.
///
/// Reads keys from stdin and draws on stderr, so stdout stays free for the
/// caller's own output. Blocks until the user confirms (`Enter`) or aborts
/// (`Ctrl-C`).
pub fn pick(selection: &Selection) -> Result<PromptResult, PromptError> {
    pick_with(selection, io::stdin(), &mut io::stderr(), &CrosstermMode)
}

/// Ask the user to pick one option using explicit streams and mode control.
///
/// `input` is read on a background thread that is always joined before this
/// returns, so no key is consumed after the prompt ends.
pub fn pick_with<R, W, M>(
    selection: &Selection,
    input: R,
    output: &mut W,
    mode: &M,
) -> Result<PromptResult, PromptError>
where
    R: Read + Send,
    W: Write,
    M: TerminalMode + ?Sized,
{
    if selection.options.is_empty() {
        return Err(PromptError::NoOptions);
    }

    let _raw = RawModeGuard::acquire(mode).map_err(PromptError::RawMode)?;
    let mut cursor = CursorGuard::acquire(output)?;

    let mut coordinator = Coordinator::new(selection, cursor.out());
    // Drawn before the reader starts: a failure here must not leave a
    // thread blocked in `read` that nothing can wake.
    coordinator.draw_initial()?;

    let (event_tx, event_rx) = mpsc::sync_channel::<ReadEvent>(0);
    let (ack_tx, ack_rx) = mpsc::sync_channel::<Ack>(0);

    let result = thread::scope(|s| {
        let handle = s.spawn(move || reader::run(input, event_tx, ack_rx));
        let result = coordinator.run(event_rx, ack_tx);
        match handle.join() {
            Ok(()) => result,
            Err(_) => Err(PromptError::ReaderStopped),
        }
    });

    match &result {
        Ok(r) => tracing::debug!(selected = %r.selected, exit = ?r.exit_key, "prompt finished"),
        Err(e) => tracing::debug!(error = %e, "prompt failed"),
    }
    result
}
