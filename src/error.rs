//! Unified error types for the prompt and its selection loader.

use std::fmt;

// ---------------------------------------------------------------------------
// SelectionError
// ---------------------------------------------------------------------------

/// Errors when loading a selection request from disk.
#[derive(Debug)]
pub enum SelectionError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    /// The request lists no options to choose from.
    NoOptions,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::NoOptions => write!(f, "invalid selection: at least one option is required"),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<std::io::Error> for SelectionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for SelectionError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors from running an interactive prompt.
///
/// `RawMode` and `Read` mean the terminal cannot be used for interactive
/// input at all. They are reported only after the terminal has been put
/// back into cooked mode.
#[derive(Debug)]
pub enum PromptError {
    /// The selection has no options to choose from.
    NoOptions,
    /// The terminal could not be switched into raw mode.
    RawMode(std::io::Error),
    /// Reading from the input stream failed.
    Read(std::io::Error),
    /// Writing a frame to the output stream failed.
    Write(std::io::Error),
    /// The input reader thread ended without reporting an event or error.
    ReaderStopped,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOptions => write!(f, "selection has no options"),
            Self::RawMode(e) => write!(f, "raw mode: {e}"),
            Self::Read(e) => write!(f, "read: {e}"),
            Self::Write(e) => write!(f, "write: {e}"),
            Self::ReaderStopped => write!(f, "input reader stopped unexpectedly"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RawMode(e) | Self::Read(e) | Self::Write(e) => Some(e),
            Self::NoOptions | Self::ReaderStopped => None,
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        Self::Write(e)
    }
}
