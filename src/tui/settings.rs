//! Centralized, hardcoded settings for the prompt.
//!
//! This is the single place to tweak raw key sequences, indentation, and
//! text separators used while drawing frames.

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

/// Prefix written before every option row.
pub const OPTION_INDENT: &str = "  ";

/// Line separator for frame text. Raw mode disables output post-processing,
/// so a bare `\n` would not return to column 0.
pub const LINE_BREAK: &str = "\r\n";

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// Bytes requested per read. Large enough for any single escape sequence.
pub const READ_BUFFER_BYTES: usize = 128;

pub const KEY_UP: &[u8] = b"\x1b[A";
pub const KEY_DOWN: &[u8] = b"\x1b[B";
pub const KEY_CONFIRM: &[u8] = b"\r";
/// ETX, delivered for Ctrl-C once the line discipline is off.
pub const KEY_ABORT: &[u8] = b"\x03";
