//! Shared test fixtures for the reader, guard, coordinator, and picker test
//! modules.
//!
//! `VirtualScreen` understands exactly the control sequences the prompt
//! emits, which lets tests assert on what a terminal would show rather than
//! on raw byte strings.

use crate::tui::guard::TerminalMode;
use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Input stream that returns one scripted chunk per `read` call.
#[derive(Debug)]
pub struct ScriptedInput {
    chunks: VecDeque<Vec<u8>>,
    fail_when_empty: bool,
}

impl ScriptedInput {
    /// Chunks are delivered in order; afterwards reads report end of input.
    pub fn new(chunks: &[&[u8]]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            fail_when_empty: false,
        }
    }

    /// Fail with `ErrorKind::Other` once the script is exhausted.
    pub fn then_fail(mut self) -> Self {
        self.fail_when_empty = true;
        self
    }

    /// Chunks that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(mut chunk) = self.chunks.pop_front() else {
            if self.fail_when_empty {
                return Err(io::Error::other("scripted read failure"));
            }
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            self.chunks.push_front(chunk.split_off(n));
        }
        Ok(n)
    }
}

/// Terminal mode double that records every call.
#[derive(Debug, Default)]
pub struct RecordingMode {
    calls: Mutex<Vec<&'static str>>,
    raw: AtomicBool,
    fail_enable: bool,
}

impl RecordingMode {
    pub fn failing_enable() -> Self {
        Self {
            fail_enable: true,
            ..Self::default()
        }
    }

    pub fn is_raw(&self) -> bool {
        self.raw.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl TerminalMode for RecordingMode {
    fn enable_raw(&self) -> io::Result<()> {
        self.calls.lock().expect("calls lock").push("enable");
        if self.fail_enable {
            return Err(io::Error::other("not a terminal"));
        }
        self.raw.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn disable_raw(&self) -> io::Result<()> {
        self.calls.lock().expect("calls lock").push("disable");
        self.raw.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Minimal raw-mode terminal model.
///
/// `\n` moves down without returning to column 0, as with output
/// post-processing disabled. Moving the cursor above row 0 is recorded as an
/// overshoot: the frame tried to erase text it never drew.
#[derive(Debug, Default)]
pub struct VirtualScreen {
    rows: Vec<Vec<char>>,
    row: usize,
    col: usize,
    overshoot: bool,
    cursor_hidden: bool,
    inverted_rows: Vec<usize>,
}

impl VirtualScreen {
    pub fn feed(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => self.col = 0,
                '\n' => self.row += 1,
                '\x1b' => {
                    if chars.next() != Some('[') {
                        continue;
                    }
                    let mut params = String::new();
                    let mut final_byte = None;
                    for c in chars.by_ref() {
                        if c.is_ascii_alphabetic() {
                            final_byte = Some(c);
                            break;
                        }
                        params.push(c);
                    }
                    self.apply_csi(&params, final_byte);
                }
                c => self.put(c),
            }
        }
    }

    fn apply_csi(&mut self, params: &str, final_byte: Option<char>) {
        match (params, final_byte) {
            (n, Some('A')) => {
                let n: usize = n.parse().unwrap_or(1);
                if n > self.row {
                    self.overshoot = true;
                }
                self.row = self.row.saturating_sub(n);
            }
            ("2", Some('K')) => {
                if let Some(row) = self.rows.get_mut(self.row) {
                    row.clear();
                }
                self.inverted_rows.retain(|r| *r != self.row);
            }
            ("7", Some('m')) => self.inverted_rows.push(self.row),
            ("?25", Some('l')) => self.cursor_hidden = true,
            ("?25", Some('h')) => self.cursor_hidden = false,
            _ => {}
        }
    }

    fn put(&mut self, c: char) {
        while self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
        let row = &mut self.rows[self.row];
        while row.len() < self.col {
            row.push(' ');
        }
        if self.col < row.len() {
            row[self.col] = c;
        } else {
            row.push(c);
        }
        self.col += 1;
    }

    /// Visible rows with trailing blank rows removed.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn overshoot(&self) -> bool {
        self.overshoot
    }

    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Rows on which reverse video was switched on and not cleared since.
    pub fn inverted_rows(&self) -> &[usize] {
        &self.inverted_rows
    }
}
