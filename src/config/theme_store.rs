//! Persisted theme preference.
//!
//! The resolved theme choice survives restarts as a single-word file under
//! the state directory. Only explicit "light"/"dark" values are persisted;
//! "auto" is the absence of a saved choice.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Path of the persisted theme file, `~/.local/state/folio/theme`.
///
/// Returns `None` when no state directory can be determined; persistence is
/// then silently disabled.
pub fn theme_file_path() -> Option<PathBuf> {
    dirs::state_dir().map(|dir| dir.join("folio").join("theme"))
}

/// Load the saved theme from the default location.
pub fn load_saved_theme() -> Option<String> {
    theme_file_path().and_then(|path| load_from(&path))
}

/// Save a theme choice to the default location.
///
/// Failures are logged and swallowed - losing the preference is not worth
/// interrupting the session.
pub fn save_theme(theme: &str) {
    let Some(path) = theme_file_path() else {
        return;
    };
    if let Err(e) = save_to(&path, theme) {
        warn!("Failed to persist theme preference to {path:?}: {e}");
    }
}

/// Load a saved theme from a specific file.
///
/// Returns `Some` only for the two explicit values; anything else (missing
/// file, stale garbage) reads as "no saved choice".
pub fn load_from(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    match trimmed {
        "light" | "dark" => Some(trimmed.to_string()),
        _ => None,
    }
}

/// Save a theme choice to a specific file, creating parent directories.
pub fn save_to(path: &Path, theme: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, theme)
}
