//! Tracing subscriber initialization.
//!
//! Logs go to a file rather than the terminal the TUI owns; users can
//! follow them with `tail -f` in another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that failed to be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Log file path has no usable filename component.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if it doesn't exist. Respects `RUST_LOG`,
/// defaulting to "info".
///
/// # Errors
///
/// Returns an error when the directory cannot be created, the path has no
/// filename, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Subscriber installation is process-global, so these tests only assert
    // on the filesystem side effects and tolerate SubscriberAlreadySet.

    #[test]
    #[serial(tracing_init)]
    fn init_creates_missing_log_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log_file = dir.path().join("nested").join("folio.log");

        let _ = init(&log_file);

        assert!(
            log_file.parent().expect("has parent").exists(),
            "Log directory should be created"
        );
    }

    #[test]
    #[serial(tracing_init)]
    fn init_accepts_existing_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log_file = dir.path().join("folio.log");

        let _ = init(&log_file);

        assert!(dir.path().exists());
    }

    #[test]
    #[serial(tracing_init)]
    fn init_rejects_path_without_filename() {
        let result = init(Path::new("/"));
        assert!(
            matches!(result, Err(LoggingError::InvalidPath(_))),
            "Root path has no filename component"
        );
    }
}
