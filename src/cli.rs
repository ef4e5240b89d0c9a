//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

/// Pick one option interactively and print it to stdout.
///
/// Arrow keys move the selection, Enter confirms, Ctrl-C aborts (exit status
/// 130). Any other key shows the help text.
#[derive(Debug, Parser)]
#[command(name = "termpick", version)]
pub struct Args {
    /// Options to choose from, appended after any loaded from --file.
    pub choices: Vec<String>,

    /// Title shown above the options.
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Help text shown after an unrecognized key.
    #[arg(short = 'H', long = "hint", value_name = "TEXT")]
    pub hint: Option<String>,

    /// Load title, options, and help from a TOML file.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write diagnostics to this file (filter with TERMPICK_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Title used when neither the file nor the flags provide one.
pub const DEFAULT_TITLE: &str = "Select an option";
