//! Listing-page extraction.
//!
//! Scans the front page for news-card containers and extracts one
//! [`ListingEntry`] per card: the anchor supplies title and link, a
//! time-classed element supplies the raw publish time, and the first
//! text-bearing sibling of the anchor supplies the teaser summary.
//!
//! Cards are matched structurally (class-name regexes, href pattern), so a
//! site redesign degrades to fewer or zero matches rather than a parse
//! error. Every retained entry is guaranteed a non-empty title and a link
//! containing the `/news/` path marker.

use crate::models::ListingEntry;
use crate::utils::element_text;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Path marker every retained link must contain.
pub const NEWS_PATH_MARKER: &str = "/news/";

static CARD_CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"news-card|item").unwrap());
static NEWS_HREF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(rus|ukr)/news/").unwrap());
static TIME_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"pub-date|time|news-card__time").unwrap());

static DIV_WITH_CLASS: Lazy<Selector> = Lazy::new(|| Selector::parse("div[class]").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static ANY_WITH_CLASS: Lazy<Selector> = Lazy::new(|| Selector::parse("[class]").unwrap());

/// Extract all news entries from a parsed listing page.
///
/// Relative links are resolved against `base`. Duplicate links keep their
/// first occurrence, preserving page order.
///
/// # Returns
///
/// The ordered entries, or an empty vector when the page contains no
/// recognizable cards (logged as an extraction failure, not an error).
#[instrument(level = "info", skip_all)]
pub fn extract_listing(doc: &Html, base: &Url) -> Vec<ListingEntry> {
    let cards: Vec<ElementRef> = doc
        .select(&DIV_WITH_CLASS)
        .filter(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| CARD_CLASS_RE.is_match(class))
        })
        .collect();

    if cards.is_empty() {
        warn!("No news-card containers found; listing extraction produced nothing");
        return Vec::new();
    }
    debug!(count = cards.len(), "Found candidate news cards");

    let entries: Vec<ListingEntry> = cards
        .iter()
        .filter_map(|card| extract_card(card, base))
        .unique_by(|entry| entry.link.clone())
        .collect();

    info!(count = entries.len(), "Collected unique news links");
    entries
}

/// Extract one entry from a card, or `None` when the card does not qualify.
fn extract_card(card: &ElementRef, base: &Url) -> Option<ListingEntry> {
    let anchor = card.select(&ANCHOR).find(|a| {
        a.value()
            .attr("href")
            .is_some_and(|href| NEWS_HREF_RE.is_match(href))
    })?;

    let title = element_text(&anchor);
    if title.is_empty() {
        debug!("Skipping card with empty anchor text");
        return None;
    }

    let href = anchor.value().attr("href")?;
    let link = match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            debug!(href, error = %e, "Skipping card with unresolvable link");
            return None;
        }
    };
    if !link.contains(NEWS_PATH_MARKER) {
        debug!(%link, "Skipping card with non-news link");
        return None;
    }

    Some(ListingEntry::new(
        title,
        link,
        find_raw_time(card),
        find_summary(&anchor),
    ))
}

/// Locate the publish-time text inside a card.
fn find_raw_time(card: &ElementRef) -> Option<String> {
    card.select(&ANY_WITH_CLASS)
        .find(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| TIME_CLASS_RE.is_match(class))
        })
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
}

/// The teaser is the first `p`/`span`/`div` sibling following the anchor.
fn find_summary(anchor: &ElementRef) -> String {
    anchor
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| matches!(el.value().name(), "p" | "span" | "div"))
        .map(|el| element_text(&el))
        .unwrap_or_default()
}
