//! Data model for one prompt: the request and its result.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// What to ask the user.
///
/// `options` must not be empty; prompting with no options fails with
/// `PromptError::NoOptions` before the terminal is touched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Selection {
    /// Shown above the options. May span several lines.
    #[serde(default)]
    pub title: String,

    /// Choices in display order.
    pub options: Vec<String>,

    /// Shown below the options after an unrecognized key.
    #[serde(default)]
    pub help: String,
}

impl Selection {
    /// Create a selection with no help text.
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            help: String::new(),
        }
    }

    /// Attach help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// How the prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKey {
    /// The user confirmed a choice.
    None,
    /// The user pressed `Ctrl-C`. Callers usually treat this as an interrupt.
    Abort,
}

/// Final answer of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult {
    /// Chosen option text, empty on abort.
    pub selected: String,
    pub exit_key: ExitKey,
}

impl PromptResult {
    pub fn confirmed(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            exit_key: ExitKey::None,
        }
    }

    pub fn aborted() -> Self {
        Self {
            selected: String::new(),
            exit_key: ExitKey::Abort,
        }
    }

    pub fn is_abort(&self) -> bool {
        self.exit_key == ExitKey::Abort
    }
}
