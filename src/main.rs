//! CLI entry point for termpick.

mod cli;

use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use termpick::selection::{load_selection, merge, validate};
use termpick::tui::pick;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "TERMPICK_LOG";

/// Conventional status for a process interrupted by SIGINT.
const EXIT_ABORTED: i32 = 130;

fn main() {
    let args = cli::Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }

    let base = match args.file.as_deref().map(load_selection).transpose() {
        Ok(base) => base,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    // Fall back to the default title only when nothing else could supply one.
    let title = if args.title.is_none() && base.is_none() {
        Some(cli::DEFAULT_TITLE.to_string())
    } else {
        args.title
    };
    let selection = merge(base, title, args.hint, args.choices);
    if let Err(e) = validate(&selection) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    match pick(&selection) {
        Ok(result) if result.is_abort() => {
            tracing::debug!("prompt aborted");
            process::exit(EXIT_ABORTED);
        }
        Ok(result) => println!("{}", result.selected),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Install the tracing subscriber.
///
/// With `--log-file`, everything at `debug` and above goes to the file.
/// Without it, only warnings reach stderr so the prompt frame stays intact.
fn init_logging(log_file: Option<&Path>) -> Result<(), String> {
    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("{}: {e}", path.display()))?;
            let filter =
                EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| e.to_string())
        }
        None => {
            let filter =
                EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| e.to_string())
        }
    }
}
