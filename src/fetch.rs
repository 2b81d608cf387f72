//! HTTP page fetching with charset-aware decoding.
//!
//! All network access goes through [`PageClient`], a thin wrapper around a
//! single configured `reqwest::Client`. The client presents a realistic
//! browser user-agent and a Ukrainian language preference, and bounds every
//! request with one total timeout.
//!
//! Fetch failures never cross this module as errors: any network problem or
//! non-2xx status is logged and surfaces to the caller as `None`. There are
//! no retries; a transient failure permanently fails that fetch for the run.

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{self, HeaderMap, HeaderValue};
use scraper::Html;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "uk-UA,uk;q=0.9,en-US;q=0.8,en;q=0.7";

/// `<meta charset=...>` / `<meta http-equiv ... charset=...>` sniffer,
/// applied to the head of the raw body.
static META_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([A-Za-z0-9_\-]+)"#).unwrap());

/// How many leading bytes to scan for a `<meta>` charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// HTTP client for fetching and parsing HTML pages.
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    /// Build the configured client.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Total per-request timeout, covering connect through
    ///   body download
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and parse the response body as an HTML document.
    ///
    /// The body is decoded using the response's declared charset (header
    /// first, then a sniffed `<meta>` tag), falling back to UTF-8.
    ///
    /// # Returns
    ///
    /// The parsed document, or `None` on any network error or non-2xx
    /// status. Failures are logged here; callers only handle the absence.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn fetch(&self, url: &str) -> Option<Html> {
        info!("Fetching page");

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "Request failed");
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "Non-success status");
                return None;
            }
        };

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let bytes = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                error!(error = %e, "Failed reading response body");
                return None;
            }
        };

        let body = decode_body(&bytes, content_type.as_deref());
        debug!(bytes = bytes.len(), "Fetched page body");
        Some(Html::parse_document(&body))
    }
}

/// Decode a response body using its apparent encoding.
///
/// Resolution order: `charset` parameter of the `Content-Type` header, then
/// a `<meta>` charset declaration within the first [`SNIFF_WINDOW`] bytes,
/// then UTF-8.
fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .or_else(|| sniff_meta_charset(bytes))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("charset="))
        .next()
        .and_then(|label| Encoding::for_label(label.trim_matches('"').as_bytes()))
}

fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(head);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}
