//! Error types for the folio application.
//!
//! A small hierarchical taxonomy built on `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! Recovery strategy: document load and terminal errors are fatal; a parse
//! error on reload is non-fatal (the current document is kept and the
//! failure is logged). Malformed image descriptors never surface here at
//! all; they are dropped during carousel construction.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the portfolio document from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse the portfolio document.
    #[error("Failed to parse document: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the document from a file or stdin.
///
/// File-not-found is distinguished from generic I/O so the CLI can suggest
/// checking the path rather than printing a bare errno.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document file does not exist at the given path.
    #[error("Document not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O failure (permissions, disk errors, broken pipe on stdin).
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path (or `-` for stdin) that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors encountered when parsing the portfolio JSON document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not valid JSON at all.
    #[error("Invalid JSON: {reason}")]
    InvalidJson {
        /// Parser error details.
        reason: String,
    },

    /// The document parsed as JSON but is not an object.
    #[error("Document root must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type actually found at the root.
        found: &'static str,
    },
}
