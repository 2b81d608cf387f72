//! # RBC News
//!
//! A news-scraping pipeline that collects recent articles from the
//! RBC-Ukraine front page, enriches a bounded head of the listing with
//! author and full body text, filters the set by recency, and exports the
//! result as CSV.
//!
//! ## Usage
//!
//! ```sh
//! rbc_news -o news.csv --days 7 --max-articles 15
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Listing**: Fetch the front page and extract article cards
//! 2. **Enrichment**: Fetch the first N article pages (parallel, bounded
//!    worker pool) for author and full text
//! 3. **Normalization**: Turn `HH:MM` publish times into absolute
//!    timestamps and drop stale or untimed entries
//! 4. **Output**: Log a run summary and write the CSV file
//!
//! Every failure short of a broken output path degrades gracefully: fetch
//! and extraction failures end the run early with nothing written, and
//! per-article failures leave single entries unenriched.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod enrich;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod timeline;
mod utils;

use cli::Cli;
use fetch::PageClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("rbc_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let base = Url::parse(&args.url)?;
    let client = Arc::new(PageClient::new(Duration::from_secs(args.timeout_secs))?);

    // ---- Listing ----
    let entries = {
        let Some(listing_doc) = client.fetch(&args.url).await else {
            error!(url = %args.url, "Listing page could not be fetched; nothing to do");
            return Ok(());
        };
        scrapers::listing::extract_listing(&listing_doc, &base)
    };
    if entries.is_empty() {
        error!(url = %args.url, "Listing yielded no entries; nothing to do");
        return Ok(());
    }

    // ---- Enrichment ----
    info!(
        count = entries.len().min(args.max_articles),
        "Starting article enrichment"
    );
    let mut entries = enrich::enrich_batch(
        Arc::clone(&client),
        entries,
        args.max_articles,
        args.concurrency,
    )
    .await;

    // ---- Normalize & filter ----
    timeline::normalize(&mut entries, Local::now().date_naive());
    let entries = timeline::filter_recent(entries, args.days, Local::now().naive_local());

    // ---- Report & persist ----
    outputs::report::report(&entries);
    if let Err(e) = outputs::csv::write_csv(&entries, &args.output) {
        error!(path = %args.output, error = %e, "Failed writing CSV output");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
