//! Terminal building blocks for the single-choice prompt.
//!
//! Key classification, screen primitives, and terminal guards are leaf
//! modules. The reader thread and the coordinator meet only through the
//! rendezvous channels set up in `picker`.

pub mod coordinator;
pub mod guard;
pub mod keys;
pub mod picker;
pub mod reader;
pub mod screen;
pub mod settings;

pub use guard::{CrosstermMode, TerminalMode};
pub use keys::KeyEvent;
pub use picker::{pick, pick_with};
