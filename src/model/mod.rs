//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod image;
pub mod key_action;
pub mod portfolio;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use image::{normalize_image, resolve_source, ImageData, ImageSource, IMAGES_DIR};
pub use key_action::KeyAction;
pub use portfolio::{Entry, EntryLink, Portfolio, SiteLink};
