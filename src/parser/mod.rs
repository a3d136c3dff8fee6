//! JSON parser for portfolio documents.
//!
//! Pure functions converting a JSON document into a validated [`Portfolio`].
//! Validation is limited to presence checks: missing sections degrade to
//! empty values, links without a URL are dropped, and unparseable dates
//! become `None` rather than failing the document.

use crate::model::{Entry, EntryLink, ImageData, ParseError, Portfolio, SiteLink};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Raw JSON structure of the document root.
#[derive(Debug, Deserialize)]
struct RawPortfolio {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    links: Option<Vec<RawLink>>,
    #[serde(default)]
    entries: Option<Vec<RawEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    link: Option<RawLink>,
    #[serde(default)]
    images: Option<Vec<ImageData>>,
}

/// Parse a portfolio document from JSON text.
///
/// Entries are sorted ascending by date; entries without a parseable date
/// sort first, keeping their relative document order (stable sort).
///
/// # Errors
///
/// Returns an error only when the text is not valid JSON or the root is not
/// an object. Everything below the root degrades gracefully.
pub fn parse_portfolio(text: &str) -> Result<Portfolio, ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ParseError::InvalidJson {
            reason: e.to_string(),
        })?;

    if !value.is_object() {
        return Err(ParseError::NotAnObject {
            found: json_type_name(&value),
        });
    }

    let raw: RawPortfolio =
        serde_json::from_value(value).map_err(|e| ParseError::InvalidJson {
            reason: e.to_string(),
        })?;

    let links = raw
        .links
        .unwrap_or_default()
        .into_iter()
        .filter_map(site_link)
        .collect();

    let mut entries: Vec<Entry> = raw
        .entries
        .unwrap_or_default()
        .into_iter()
        .map(entry)
        .collect();
    entries.sort_by_key(|e| e.date);

    Ok(Portfolio {
        name: raw.name,
        tagline: raw.tagline,
        links,
        entries,
    })
}

fn site_link(raw: RawLink) -> Option<SiteLink> {
    let url = raw.url?;
    Some(SiteLink {
        label: raw.label,
        url,
    })
}

fn entry_link(raw: RawLink) -> Option<EntryLink> {
    let url = raw.url?;
    Some(EntryLink {
        label: raw.label,
        url,
    })
}

fn entry(raw: RawEntry) -> Entry {
    Entry {
        title: raw.title,
        description: raw.description,
        date: raw.date.as_deref().and_then(parse_date),
        tags: raw.tags.unwrap_or_default(),
        link: raw.link.and_then(entry_link),
        images: raw.images.unwrap_or_default(),
    }
}

/// Parse a date string in any of the accepted shapes.
///
/// Accepted: RFC 3339 timestamps, `YYYY-MM-DD`, and `YYYY-MM` (first of the
/// month). Anything else yields `None`.
fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    // YYYY-MM: pin to the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    None
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
