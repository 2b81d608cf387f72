//! HTML extraction for the RBC-Ukraine site.
//!
//! Two extraction stages mirror the two kinds of page the site serves:
//!
//! 1. **Listing**: the front page enumerates recent news as repeated "card"
//!    blocks — [`listing`] turns those into [`crate::models::ListingEntry`]
//!    values.
//! 2. **Article**: each news item's own page carries the author attribution
//!    and the full body text — [`article`] extracts both for the enrichment
//!    step.
//!
//! # Selector strategy
//!
//! The site's class names drift between redesigns, so cards and time
//! elements are located by regex match on the `class` attribute rather than
//! exact selectors. A page that matches nothing degrades to an empty (or
//! unenriched) result, never an error.

pub mod article;
pub mod listing;
