//! Image descriptors and source resolution.
//!
//! Documents may reference an image as a bare string or as a record with
//! metadata. Both shapes (and malformed values) deserialize into
//! [`ImageData`]; [`normalize_image`] flattens them into the uniform
//! [`ImageSource`] the carousel consumes.

use serde::Deserialize;

/// Default directory prefix for relative image references.
pub const IMAGES_DIR: &str = "images/";

/// Raw image value exactly as it appears in the document.
///
/// Untagged: a JSON string becomes `Reference`, a JSON object becomes
/// `Detailed` (unknown keys ignored), anything else falls through to
/// `Invalid` and is dropped later rather than failing the parse.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ImageData {
    /// Bare reference string, e.g. `"shot.png"`.
    Reference(String),
    /// Record form with optional metadata.
    Detailed {
        /// Image reference; display is impossible without it.
        #[serde(default)]
        src: Option<String>,
        /// Alternative text.
        #[serde(default)]
        alt: Option<String>,
        /// Caption text (not used by layout).
        #[serde(default)]
        caption: Option<String>,
        /// Width hint in pixels (not used by layout).
        #[serde(default)]
        width: Option<f64>,
        /// Height hint in pixels (not used by layout).
        #[serde(default)]
        height: Option<f64>,
    },
    /// Any other JSON value (number, array, null, ...).
    Invalid(serde_json::Value),
}

/// Normalized image descriptor.
///
/// `source` may be empty; such descriptors are excluded during carousel
/// construction, after resolution and before the item count is fixed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSource {
    /// Image reference, possibly relative. Empty means "not displayable".
    pub source: String,
    /// Alternative text.
    pub alt_text: Option<String>,
    /// Caption text.
    pub caption: Option<String>,
    /// Width hint in pixels.
    pub width: Option<f64>,
    /// Height hint in pixels.
    pub height: Option<f64>,
}

/// Normalize a raw image value into a uniform descriptor.
///
/// String → record with only a source; record → retained fields; anything
/// else → empty source.
pub fn normalize_image(data: &ImageData) -> ImageSource {
    match data {
        ImageData::Reference(src) => ImageSource {
            source: src.clone(),
            ..ImageSource::default()
        },
        ImageData::Detailed {
            src,
            alt,
            caption,
            width,
            height,
        } => ImageSource {
            source: src.clone().unwrap_or_default(),
            alt_text: alt.clone(),
            caption: caption.clone(),
            width: *width,
            height: *height,
        },
        ImageData::Invalid(_) => ImageSource::default(),
    }
}

/// Resolve an image reference to a display-ready path.
///
/// Precedence, in order:
/// 1. Empty input stays empty.
/// 2. Absolute references are returned unchanged: `http://`, `https://`,
///    protocol-relative `//`, a leading `/`, or a `data:` URI.
/// 3. References already under `images_dir` are returned unchanged.
/// 4. Everything else is prefixed with `images_dir`.
pub fn resolve_source(src: &str, images_dir: &str) -> String {
    if src.is_empty() {
        return String::new();
    }
    let is_absolute = src.starts_with("http://")
        || src.starts_with("https://")
        || src.starts_with('/')
        || src.starts_with("data:");
    if is_absolute {
        return src.to_string();
    }
    if src.starts_with(images_dir) {
        return src.to_string();
    }
    format!("{images_dir}{src}")
}
