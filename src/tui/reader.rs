//! Background input reader.
//!
//! The reader owns the input stream for the prompt's lifetime. It performs
//! one read, hands one classified key to the coordinator, then parks until
//! the coordinator acknowledges. Because both channels are rendezvous
//! channels, at most one key is ever in flight and the coordinator never
//! races a redraw against a newer key.

use crate::tui::keys::{classify, KeyEvent};
use crate::tui::settings;
use std::io::{self, Read};
use std::sync::mpsc::{Receiver, SyncSender};

/// Coordinator reply to a delivered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Read the next key.
    Continue,
    /// The prompt finished; stop without reading again.
    Stop,
}

/// What the reader hands to the coordinator for each read.
pub type ReadEvent = io::Result<KeyEvent>;

/// Run the read/classify/handoff loop until stopped.
///
/// A failed read is forwarded as `Err` and ends the loop. An empty read is
/// reported as `UnexpectedEof`: in raw mode it means the input device is
/// gone, and retrying would spin.
pub fn run<R: Read>(mut input: R, events: SyncSender<ReadEvent>, acks: Receiver<Ack>) {
    let mut buf = [0u8; settings::READ_BUFFER_BYTES];
    loop {
        let event = match input.read(&mut buf) {
            Ok(0) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )),
            Ok(n) => {
                let key = classify(&buf[..n]);
                tracing::debug!(bytes = n, ?key, "read key");
                Ok(key)
            }
            Err(e) => Err(e),
        };
        let failed = event.is_err();
        if events.send(event).is_err() {
            // Coordinator already returned.
            return;
        }
        if failed {
            return;
        }
        match acks.recv() {
            Ok(Ack::Continue) => {}
            Ok(Ack::Stop) | Err(_) => return,
        }
    }
}
