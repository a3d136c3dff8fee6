//! Document input sources (impure).
//!
//! The document comes either from a file path or, when the path is `-`,
//! from stdin. Stdin can only be read once, so reload is file-only.

use crate::model::InputError;
use std::io::Read;
use std::path::PathBuf;

/// Where the portfolio document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A document file on disk.
    File(PathBuf),
    /// Piped input; `-` on the command line.
    Stdin,
}

impl DocumentSource {
    /// Detect the source from a CLI path argument.
    pub fn detect(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    /// Whether this source can be read again for the reload action.
    pub fn is_reloadable(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Human-readable name for the status bar.
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Read the whole document text.
    ///
    /// # Errors
    ///
    /// `FileNotFound` when the file does not exist, `Io` for anything else.
    pub fn load(&self) -> Result<String, InputError> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path: path.clone() });
                }
                std::fs::read_to_string(path).map_err(|source| InputError::Io {
                    path: path.clone(),
                    source,
                })
            }
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| InputError::Io {
                        path: PathBuf::from("-"),
                        source,
                    })?;
                Ok(text)
            }
        }
    }
}
