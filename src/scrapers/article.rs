//! Article-page enrichment extraction.
//!
//! Given one article URL this module fetches the page and pulls out the
//! author attribution and a cleaned rendering of the body text. The body
//! walk covers only the direct children of the text container — paragraphs
//! become plain lines, `h2` headings become `## heading` blocks, and lists
//! become `* item` lines. A container with no recognizable children falls
//! back to its flattened text.
//!
//! Enrichment never fails: an unreachable page or missing markup yields an
//! [`ArticleContent`] with absent fields, which makes it safe to run
//! unsupervised inside the concurrent batch.

use crate::fetch::PageClient;
use crate::models::ArticleContent;
use crate::utils::{element_text, element_text_lines};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

static AUTHOR_WRAPPER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.publication-wrapper-author").unwrap());
static AUTHOR_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static TEXT_CONTAINER: Lazy<Selector> = Lazy::new(|| Selector::parse("div.txt").unwrap());
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());

/// Fetch an article page and extract author and body text.
///
/// All failure paths resolve to absent fields; the caller receives data,
/// never an error.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn enrich_article(client: &PageClient, url: &str) -> ArticleContent {
    let Some(doc) = client.fetch(url).await else {
        debug!("Article fetch failed; entry stays unenriched");
        return ArticleContent::default();
    };
    extract_content(&doc)
}

/// Extract author and body from a parsed article page.
pub fn extract_content(doc: &Html) -> ArticleContent {
    ArticleContent {
        author: extract_author(doc),
        body: extract_body(doc),
    }
}

/// The author is the text of the first link inside the attribution wrapper.
fn extract_author(doc: &Html) -> Option<String> {
    let wrapper = doc.select(&AUTHOR_WRAPPER).next()?;
    let link = wrapper.select(&AUTHOR_LINK).next()?;
    Some(element_text(&link)).filter(|text| !text.is_empty())
}

/// Render the body container's direct children into ordered text.
fn extract_body(doc: &Html) -> Option<String> {
    let container = doc.select(&TEXT_CONTAINER).next()?;

    let mut parts: Vec<String> = Vec::new();
    for child in container.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "p" => parts.push(format!("{}\n", element_text(&child))),
            "h2" => parts.push(format!("\n\n## {}\n", element_text(&child))),
            "ul" => {
                let items: Vec<String> = child
                    .select(&LIST_ITEM)
                    .map(|li| element_text(&li))
                    .collect();
                parts.push(format!("\n* {}\n", items.join("\n* ")));
            }
            _ => {}
        }
    }

    let text = if parts.is_empty() {
        // no recognizable structure: flatten the whole container
        element_text_lines(&container)
    } else {
        parts.concat()
    };

    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}
