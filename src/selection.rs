//! Loading selection requests from TOML files.
//!
//! ```toml
//! title = "Deploy target"
//! help = "Arrow keys move, Enter confirms, Ctrl-C aborts."
//! options = ["staging", "production"]
//! ```

use crate::error::SelectionError;
use crate::types::Selection;
use std::path::Path;

/// Read and validate a selection file.
pub fn load_selection(path: &Path) -> Result<Selection, SelectionError> {
    load_selection_from(path, |p| std::fs::read_to_string(p))
}

pub(crate) fn load_selection_from<F>(path: &Path, read_file: F) -> Result<Selection, SelectionError>
where
    F: Fn(&Path) -> Result<String, std::io::Error>,
{
    let text = read_file(path)?;
    let selection: Selection = toml::from_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        options = selection.options.len(),
        "loaded selection file"
    );
    validate(&selection)?;
    Ok(selection)
}

/// Reject requests that cannot be prompted.
pub fn validate(selection: &Selection) -> Result<(), SelectionError> {
    if selection.options.is_empty() {
        return Err(SelectionError::NoOptions);
    }
    Ok(())
}

/// Combine a base request (usually from a file) with command-line values.
///
/// `title` and `help` replace the base values when given. `extra_options`
/// are appended after the base options.
pub fn merge(
    base: Option<Selection>,
    title: Option<String>,
    help: Option<String>,
    extra_options: Vec<String>,
) -> Selection {
    let mut selection = base.unwrap_or_default();
    if let Some(title) = title {
        selection.title = title;
    }
    if let Some(help) = help {
        selection.help = help;
    }
    selection.options.extend(extra_options);
    selection
}
