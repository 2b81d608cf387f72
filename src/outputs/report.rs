//! Run summary reporting.
//!
//! Logs the size of the final news set and the newest article's title and
//! time of day. The input is never mutated; ordering happens on a copied
//! view.

use crate::models::ListingEntry;
use tracing::{info, instrument};

/// Log a short statistical summary of the final entry set.
#[instrument(level = "info", skip_all)]
pub fn report(entries: &[ListingEntry]) {
    let Some(latest) = newest(entries) else {
        info!("No news left to analyze after filtering");
        return;
    };

    let time = latest
        .timestamp
        .map(|ts| ts.format("%H:%M").to_string())
        .unwrap_or_default();

    info!(total = entries.len(), "Final news set");
    info!(title = %latest.title, %time, "Newest article");
}

/// The entry with the greatest timestamp, via a sorted non-mutating view.
pub fn newest(entries: &[ListingEntry]) -> Option<&ListingEntry> {
    let mut sorted: Vec<&ListingEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn entry(title: &str, hour: u32, minute: u32) -> ListingEntry {
        let mut e = ListingEntry::new(
            title.to_string(),
            "https://www.rbc.ua/ukr/news/x.html".to_string(),
            None,
            String::new(),
        );
        e.timestamp = Some(
            NaiveDate::from_ymd_opt(2025, 11, 3)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()),
        );
        e
    }

    #[test]
    fn test_newest_picks_latest_timestamp() {
        let entries = vec![
            entry("morning", 8, 15),
            entry("evening", 21, 40),
            entry("noon", 12, 0),
        ];
        assert_eq!(newest(&entries).unwrap().title, "evening");
    }

    #[test]
    fn test_newest_does_not_mutate_input() {
        let entries = vec![entry("a", 8, 0), entry("b", 9, 0)];
        let before = entries.clone();
        let _ = newest(&entries);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_newest_of_empty_is_none() {
        assert!(newest(&[]).is_none());
    }

    #[test]
    fn test_report_handles_empty_set() {
        // must not panic
        report(&[]);
    }
}
