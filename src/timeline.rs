//! Temporal normalization and recency filtering.
//!
//! The listing only exposes a time of day (`"HH:MM"`), so every raw time is
//! interpreted against the run's calendar date. An article published before
//! midnight but scraped after it will land on the wrong day; that ambiguity
//! is inherent to the source and deliberately not papered over. The
//! day-window filter is a safety net against stale or cached pages rather
//! than a true multi-day filter.
//!
//! Both operations take the clock as a parameter so behavior is
//! deterministic under test; `main` passes the real local time.

use crate::models::ListingEntry;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{info, instrument};

/// Derive absolute timestamps from each entry's raw publish time.
///
/// `raw_time` is trimmed and parsed as `%H:%M`, then combined with `today`.
/// Absent or unparseable times yield an absent timestamp, never an error.
/// Re-running against the same date yields identical results.
pub fn normalize(entries: &mut [ListingEntry], today: NaiveDate) {
    for entry in entries.iter_mut() {
        entry.timestamp = parse_raw_time(entry.raw_time.as_deref(), today);
    }
}

fn parse_raw_time(raw: Option<&str>, today: NaiveDate) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(raw?.trim(), "%H:%M").ok()?;
    Some(today.and_time(time))
}

/// Keep entries whose timestamp is within the last `days` days.
///
/// The lower bound `now - days` is inclusive. Entries without a timestamp
/// are dropped. An empty set, or one where no entry carries a timestamp at
/// all, passes through unchanged.
#[instrument(level = "info", skip_all, fields(days))]
pub fn filter_recent(
    entries: Vec<ListingEntry>,
    days: i64,
    now: NaiveDateTime,
) -> Vec<ListingEntry> {
    if entries.is_empty() || entries.iter().all(|e| e.timestamp.is_none()) {
        return entries;
    }

    let threshold = now - Duration::days(days);
    let kept: Vec<ListingEntry> = entries
        .into_iter()
        .filter(|entry| entry.timestamp.is_some_and(|ts| ts >= threshold))
        .collect();

    info!(kept = kept.len(), days, "Filtered news by recency");
    kept
}
