//! termpick — an interactive single-choice terminal prompt.
//!
//! Renders a title and a list of options in place, highlights the current
//! choice, and reads raw keys: arrows move, `Enter` confirms, `Ctrl-C`
//! aborts, and any other key reveals the help text.
//!
//! # Quick start
//!
//! ```no_run
//! use termpick::tui::pick;
//! use termpick::types::Selection;
//!
//! let selection = Selection::new("Deploy to", vec!["staging".into(), "production".into()])
//!     .with_help("Arrow keys move, Enter confirms, Ctrl-C aborts.");
//! let result = pick(&selection).unwrap();
//! if !result.is_abort() {
//!     println!("{}", result.selected);
//! }
//! ```

pub mod error;
pub mod selection;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod types;
