//! CSV persistence for the final entry set.
//!
//! Entries are projected onto the fixed column set
//! `title, link, datetime, summary, author, full_text` and written UTF-8
//! with a header row. An empty entry set writes nothing at all — the run
//! ends without an output file rather than producing an empty one.

use crate::models::{CsvRow, ListingEntry};
use std::error::Error;
use tracing::{info, instrument, warn};

/// Write the entries to `path` as delimited rows with a header.
///
/// # Returns
///
/// `Ok(())` on success or when there was nothing to write. I/O errors are
/// returned to the caller, which logs them without aborting the process.
#[instrument(level = "info", skip_all, fields(path = %path, count = entries.len()))]
pub fn write_csv(entries: &[ListingEntry], path: &str) -> Result<(), Box<dyn Error>> {
    if entries.is_empty() {
        warn!("No data to persist; skipping CSV write");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }
    writer.flush()?;

    info!(rows = entries.len(), "Wrote news CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::listing::extract_listing;
    use crate::timeline::{filter_recent, normalize};
    use chrono::{NaiveDate, NaiveTime};
    use scraper::Html;
    use std::fs;
    use std::path::PathBuf;
    use url::Url;

    fn temp_csv(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rbc_news_{}_{}.csv", name, std::process::id()))
    }

    fn entry(title: &str) -> ListingEntry {
        ListingEntry::new(
            title.to_string(),
            "https://www.rbc.ua/ukr/news/x.html".to_string(),
            Some("10:30".to_string()),
            "summary text".to_string(),
        )
    }

    #[test]
    fn test_header_and_rows_round_trip() {
        let path = temp_csv("round_trip");
        let mut first = entry("Перша новина");
        first.timestamp = Some(
            NaiveDate::from_ymd_opt(2025, 11, 3)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap()),
        );
        first.author = Some("Олег Петренко".to_string());
        first.full_text = Some("Текст, з комою".to_string());
        let second = entry("Друга новина");

        write_csv(&[first, second], path.to_str().unwrap()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers,
            csv::StringRecord::from(vec![
                "title",
                "link",
                "datetime",
                "summary",
                "author",
                "full_text"
            ])
        );

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "Перша новина");
        assert_eq!(&records[0][2], "2025-11-03 10:30:00");
        assert_eq!(&records[0][5], "Текст, з комою");
        // unenriched entry serializes empty cells
        assert_eq!(&records[1][2], "");
        assert_eq!(&records[1][4], "");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_set_writes_no_file() {
        let path = temp_csv("empty");
        let _ = fs::remove_file(&path);

        write_csv(&[], path.to_str().unwrap()).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_write_error_is_returned_not_panicked() {
        let result = write_csv(&[entry("x")], "/nonexistent-dir/news.csv");
        assert!(result.is_err());
    }

    // Listing fixture with three cards: two valid news links with times,
    // one with no time element. Extract -> normalize -> filter -> persist
    // must end with exactly the two timestamped rows.
    #[test]
    fn test_pipeline_composition_persists_filtered_rows() {
        const LISTING: &str = r#"
            <div class="news-card">
              <a href="/ukr/news/morning-story.html">Ранкова новина</a>
              <span class="news-card__time">09:00</span>
            </div>
            <div class="news-card">
              <a href="/ukr/news/late-story.html">Пізня новина</a>
              <span class="news-card__time">23:50</span>
            </div>
            <div class="news-card">
              <a href="/ukr/news/untimed-story.html">Новина без часу</a>
            </div>
        "#;

        let base = Url::parse("https://www.rbc.ua/").unwrap();
        let doc = Html::parse_document(LISTING);
        let mut entries = extract_listing(&doc, &base);
        assert_eq!(entries.len(), 3);

        let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        normalize(&mut entries, today);
        assert_eq!(entries.iter().filter(|e| e.timestamp.is_some()).count(), 2);

        let now = today.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        let entries = filter_recent(entries, 7, now);
        assert_eq!(entries.len(), 2);

        let path = temp_csv("pipeline");
        write_csv(&entries, path.to_str().unwrap()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "Ранкова новина");
        assert_eq!(&records[1][2], "2025-11-03 23:50:00");

        fs::remove_file(&path).unwrap();
    }
}
