//! Concurrent article enrichment.
//!
//! Runs the article extractor over the head of the listing in parallel and
//! merges the results back into the entry set. Each task owns exactly one
//! entry's enrichment: it returns `(index, ArticleContent)` and a single
//! collector writes the fields, so no task ever touches shared state.
//!
//! The batch is a join-all barrier — it waits for every scheduled task to
//! settle and never aborts on an individual failure. A panicking task
//! surfaces as a `JoinError`, which is logged while the entry passes through
//! unenriched. Entries beyond the cap are never scheduled and pass through
//! untouched.

use crate::fetch::PageClient;
use crate::models::{ArticleContent, ListingEntry};
use crate::scrapers::article;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Enrich the first `max_articles` entries with author and full text.
///
/// # Arguments
///
/// * `client` - Shared page client used by every task
/// * `entries` - The full listing, in page order
/// * `max_articles` - How many leading entries are eligible for enrichment
/// * `concurrency` - Maximum number of article fetches in flight
///
/// # Returns
///
/// The complete entry set: the (possibly enriched) head followed by the
/// untouched tail, relative order preserved within each group.
#[instrument(level = "info", skip_all, fields(total = entries.len(), max_articles, concurrency))]
pub async fn enrich_batch(
    client: Arc<PageClient>,
    mut entries: Vec<ListingEntry>,
    max_articles: usize,
    concurrency: usize,
) -> Vec<ListingEntry> {
    let head_len = entries.len().min(max_articles);
    let tail = entries.split_off(head_len);
    let mut head = entries;

    let eligible: Vec<(usize, String)> = head
        .iter()
        .enumerate()
        .filter(|(_, entry)| !entry.link.is_empty())
        .map(|(index, entry)| (index, entry.link.clone()))
        .collect();
    info!(count = eligible.len(), "Scheduling article enrichment");

    let results: Vec<(usize, ArticleContent)> = stream::iter(eligible)
        .map(|(index, url)| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let content = article::enrich_article(&client, &url).await;
                (index, url, content)
            })
        })
        .buffer_unordered(concurrency.max(1))
        .filter_map(|joined| async move {
            match joined {
                Ok((index, url, content)) => {
                    info!(%url, "Processed article");
                    Some((index, content))
                }
                Err(e) => {
                    error!(error = %e, "Enrichment task failed; entry retained unenriched");
                    None
                }
            }
        })
        .collect()
        .await;

    apply_enrichment(&mut head, results);

    head.extend(tail);
    head
}

/// Merge completed enrichment results into the entries, keyed by index.
///
/// Entries without a result keep their fields untouched. This is the only
/// place `author`/`full_text` are ever written.
fn apply_enrichment(entries: &mut [ListingEntry], results: Vec<(usize, ArticleContent)>) {
    for (index, content) in results {
        if let Some(entry) = entries.get_mut(index) {
            entry.author = content.author;
            entry.full_text = content.body;
        }
    }
}
