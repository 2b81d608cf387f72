//! Data models for scraped news entries.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`ListingEntry`]: One news item as discovered on the listing page,
//!   progressively enriched and normalized as the run proceeds
//! - [`ArticleContent`]: The enrichment payload extracted from an article's
//!   own page
//! - [`CsvRow`]: The flat projection of an entry written to the output file
//!
//! Absence is modeled with `Option` at every stage; missing values only
//! become empty cells at the CSV boundary.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Format used for the `datetime` column of the output file.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A news item discovered on the listing page.
///
/// Entries are created by the listing extractor with `author`, `full_text`
/// and `timestamp` unset. The enrichment step fills the first two for the
/// head of the listing; the normalizer derives `timestamp` from `raw_time`.
/// From the normalizer onward entries are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingEntry {
    /// Visible text of the article anchor. Never empty for a retained entry.
    pub title: String,
    /// Absolute article URL. Always contains the `/news/` path marker.
    pub link: String,
    /// Publish time text as found on the card, e.g. `"09:41"`.
    pub raw_time: Option<String>,
    /// Short teaser text following the anchor, empty when the card has none.
    pub summary: String,
    /// Article author, populated by enrichment when found.
    pub author: Option<String>,
    /// Cleaned full body text, populated by enrichment when found.
    pub full_text: Option<String>,
    /// Absolute publish time, derived from `raw_time` against the run date.
    pub timestamp: Option<NaiveDateTime>,
}

impl ListingEntry {
    /// Create a fresh entry as produced by the listing extractor.
    pub fn new(title: String, link: String, raw_time: Option<String>, summary: String) -> Self {
        Self {
            title,
            link,
            raw_time,
            summary,
            author: None,
            full_text: None,
            timestamp: None,
        }
    }
}

/// Author and body text extracted from an article page.
///
/// This is the message an enrichment task sends back to the collector.
/// Both fields stay `None` when the page could not be fetched or the
/// expected containers are missing; extraction never fails outright.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleContent {
    pub author: Option<String>,
    pub body: Option<String>,
}

/// One row of the output file.
///
/// Field order defines the column order: `title, link, datetime, summary,
/// author, full_text`. Missing values serialize as empty cells.
#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub datetime: String,
    pub summary: &'a str,
    pub author: &'a str,
    pub full_text: &'a str,
}

impl<'a> From<&'a ListingEntry> for CsvRow<'a> {
    fn from(entry: &'a ListingEntry) -> Self {
        CsvRow {
            title: &entry.title,
            link: &entry.link,
            datetime: entry
                .timestamp
                .map(|ts| ts.format(DATETIME_FORMAT).to_string())
                .unwrap_or_default(),
            summary: &entry.summary,
            author: entry.author.as_deref().unwrap_or(""),
            full_text: entry.full_text.as_deref().unwrap_or(""),
        }
    }
}
