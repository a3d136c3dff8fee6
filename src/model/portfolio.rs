//! Portfolio document model (pure).

use crate::model::image::ImageData;
use chrono::NaiveDate;

/// A parsed portfolio document: profile header plus timeline entries.
///
/// Entries are kept in ascending date order (undated entries first); the
/// parser establishes that order once and the view relies on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Portfolio {
    /// Display name shown in the header.
    pub name: Option<String>,
    /// One-line tagline shown under the name.
    pub tagline: Option<String>,
    /// Profile links (GitHub, email, ...).
    pub links: Vec<SiteLink>,
    /// Timeline entries, ascending by date.
    pub entries: Vec<Entry>,
}

impl Portfolio {
    /// Header title, falling back to a placeholder when the document has no
    /// name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Portfolio")
    }
}

/// A profile-level link in the header.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLink {
    /// Link text; falls back to the URL when absent.
    pub label: Option<String>,
    /// Target URL.
    pub url: String,
}

impl SiteLink {
    /// Text to display for this link.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.url)
    }
}

/// One timeline record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    /// Entry title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Entry date; `None` when absent or unparseable.
    pub date: Option<NaiveDate>,
    /// Tag labels.
    pub tags: Vec<String>,
    /// Optional call-to-action link.
    pub link: Option<EntryLink>,
    /// Raw image values, pre-normalization.
    pub images: Vec<ImageData>,
}

impl Entry {
    /// Date marker for the timeline spine, formatted as "Mon YYYY".
    pub fn date_marker(&self) -> String {
        self.date
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_default()
    }

    /// Whether this entry carries any raw image values at all.
    ///
    /// Carousel construction may still end up empty if none of them
    /// resolve; this is only the cheap pre-check.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Call-to-action link attached to an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryLink {
    /// Link text; falls back to "Learn more" when absent.
    pub label: Option<String>,
    /// Target URL.
    pub url: String,
}

impl EntryLink {
    /// Text to display for this link.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("Learn more")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_placeholder() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.display_name(), "Portfolio");

        let named = Portfolio {
            name: Some("Ada".to_string()),
            ..Portfolio::default()
        };
        assert_eq!(named.display_name(), "Ada");
    }

    #[test]
    fn site_link_label_falls_back_to_url() {
        let link = SiteLink {
            label: None,
            url: "https://example.com".to_string(),
        };
        assert_eq!(link.display_label(), "https://example.com");
    }

    #[test]
    fn entry_link_label_falls_back_to_learn_more() {
        let link = EntryLink {
            label: None,
            url: "https://example.com/p".to_string(),
        };
        assert_eq!(link.display_label(), "Learn more");
    }

    #[test]
    fn date_marker_formats_month_and_year() {
        let entry = Entry {
            date: NaiveDate::from_ymd_opt(2023, 4, 12),
            ..Entry::default()
        };
        assert_eq!(entry.date_marker(), "Apr 2023");
    }

    #[test]
    fn date_marker_is_empty_without_date() {
        let entry = Entry::default();
        assert_eq!(entry.date_marker(), "");
    }
}
