//! Text-cleanup helpers shared by the listing and article extractors.
//!
//! Scraped text arrives as a stream of raw text nodes with layout whitespace
//! and empty fragments. These helpers flatten an element's text into a
//! predictable single-line or line-per-node rendering.

use scraper::ElementRef;

/// Flatten an element's text nodes into one whitespace-normalized line.
///
/// Every text node is split on whitespace and the fragments are re-joined
/// with single spaces, so indentation and newlines inside the markup do not
/// leak into the output.
///
/// # Examples
///
/// ```ignore
/// // <a> Hello <b>  world </b> </a>
/// assert_eq!(element_text(&el), "Hello world");
/// ```
pub fn element_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten an element's text nodes into newline-separated lines.
///
/// Each non-empty text node becomes one trimmed line. Used as the
/// best-effort fallback when an article body has no recognizable
/// paragraph structure.
pub fn element_text_lines(el: &ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<a>\n  Hello   <b> world </b>\n</a>");
        let el = first(&doc, "a");
        assert_eq!(element_text(&el), "Hello world");
    }

    #[test]
    fn test_element_text_empty_element() {
        let doc = Html::parse_fragment("<a>   </a>");
        let el = first(&doc, "a");
        assert_eq!(element_text(&el), "");
    }

    #[test]
    fn test_element_text_lines_one_line_per_node() {
        let doc = Html::parse_fragment("<div><p>first</p>\n<p>second</p><p> </p></div>");
        let el = first(&doc, "div");
        assert_eq!(element_text_lines(&el), "first\nsecond");
    }
}
