//! Signal bundle produced by one analysis run.
//!
//! Every extractor writes into exactly one field, and a defined sentinel
//! distinguishes "extraction failed" from a genuine empty result: an empty
//! metadata map, an empty font list, an image count of -1, a page size of
//! (0, 0) and an absent year are all valid degraded states the rule
//! evaluator knows how to handle.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Image count sentinel meaning the census could not run at all.
/// Distinct from 0, which means "confirmed zero images".
pub const IMAGE_COUNT_UNAVAILABLE: i64 = -1;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"20\d{2}").unwrap();
}

/// Raw pixel dimensions of one embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDims {
    pub width: i64,
    pub height: i64,
}

/// Union of all extracted signals for a single document.
///
/// Created fresh per analysis run, owned by that run, and consumed when
/// the report is assembled.
#[derive(Debug, Clone, Default)]
pub struct SignalBundle {
    /// Raw Info dictionary, unfiltered; empty when metadata parsing failed
    pub metadata: BTreeMap<String, String>,
    pub producer: String,
    pub title: String,
    /// Empty string means the field is absent, which is a valid state
    pub creation_date: String,
    pub mod_date: String,
    pub file_size: u64,
    /// 64 lowercase hex characters
    pub file_hash: String,
    /// De-duplicated, first-seen order across pages
    pub fonts_found: Vec<String>,
    /// -1 when the census failed outright
    pub image_count: i64,
    /// Raw pixel width/height per embedded image
    pub images: Vec<ImageDims>,
    /// (0, 0) when the page box could not be read
    pub page_size_pts: (i64, i64),
    /// First year-like token in the metadata date fields
    pub metadata_year: Option<String>,
    /// First year-like token recognized on the rasterized first page
    pub ocr_year: Option<String>,
}

/// Returns the first `20xx` token in the given text, if any.
pub fn first_year(text: &str) -> Option<String> {
    YEAR_RE.find(text).map(|m| m.as_str().to_string())
}
