//! Command-line interface definitions for the RBC news scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every tunable of the run lives here — there is no process-wide
//! configuration state. Most options can also be provided via environment
//! variables.

use clap::Parser;

/// Command-line arguments for the scraper.
///
/// Defaults reproduce the canonical run: scrape the RBC-Ukraine front page,
/// enrich the first 15 articles with 10 workers, keep entries from the last
/// 7 days, and write `news.csv`.
///
/// # Examples
///
/// ```sh
/// # Canonical run
/// rbc_news
///
/// # Wider window, different output file
/// rbc_news -o /tmp/rbc.csv --days 14
///
/// # Enrich more articles with fewer workers
/// rbc_news --max-articles 30 --concurrency 4
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to scrape
    #[arg(long, env = "RBC_NEWS_URL", default_value = "https://www.rbc.ua/")]
    pub url: String,

    /// Output CSV file path
    #[arg(short, long, env = "RBC_NEWS_OUTPUT", default_value = "news.csv")]
    pub output: String,

    /// Keep only entries newer than this many days
    #[arg(long, default_value_t = 7)]
    pub days: i64,

    /// Number of listing entries to enrich with author and full text
    #[arg(long, default_value_t = 15)]
    pub max_articles: usize,

    /// Maximum number of article pages fetched in parallel
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Total per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["rbc_news"]);

        assert_eq!(cli.url, "https://www.rbc.ua/");
        assert_eq!(cli.output, "news.csv");
        assert_eq!(cli.days, 7);
        assert_eq!(cli.max_articles, 15);
        assert_eq!(cli.concurrency, 10);
        assert_eq!(cli.timeout_secs, 15);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "rbc_news",
            "--url",
            "https://www.rbc.ua/rus/",
            "-o",
            "/tmp/out.csv",
            "--days",
            "3",
            "--max-articles",
            "5",
            "--concurrency",
            "2",
        ]);

        assert_eq!(cli.url, "https://www.rbc.ua/rus/");
        assert_eq!(cli.output, "/tmp/out.csv");
        assert_eq!(cli.days, 3);
        assert_eq!(cli.max_articles, 5);
        assert_eq!(cli.concurrency, 2);
    }
}
