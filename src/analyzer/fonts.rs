//! Embedded font inventory extraction.
//!
//! Walks every page's resource dictionary and collects each referenced
//! font's base name, with the subsetting prefix stripped. Per-font and
//! per-page faults skip that item; partial results beat total failure.
//! A document this extractor cannot open yields an empty list, which the
//! rule evaluator reads as "skip the font rule".

use std::path::Path;

use lopdf::Document;
use tracing::warn;

use super::{resolve, resolve_inherited};

/// Returns the de-duplicated font base names in first-seen order.
pub fn extract(path: &Path) -> Vec<String> {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "font inventory failed, continuing without fonts");
            return Vec::new();
        }
    };

    let mut fonts = Vec::new();
    for page_id in doc.get_pages().values() {
        let resources = match resolve_inherited(&doc, *page_id, b"Resources")
            .and_then(|obj| obj.as_dict().ok())
        {
            Some(dict) => dict,
            None => continue,
        };
        let font_dict = match resources
            .get(b"Font")
            .ok()
            .map(|obj| resolve(&doc, obj))
            .and_then(|obj| obj.as_dict().ok())
        {
            Some(dict) => dict,
            None => continue,
        };
        for (_, font_ref) in font_dict.iter() {
            let font = match resolve(&doc, font_ref).as_dict() {
                Ok(dict) => dict,
                Err(_) => continue,
            };
            let base = match font
                .get(b"BaseFont")
                .ok()
                .and_then(|obj| resolve(&doc, obj).as_name().ok())
            {
                Some(name) => String::from_utf8_lossy(name).into_owned(),
                None => continue,
            };
            let name = strip_subset_prefix(&base).to_string();
            if !fonts.contains(&name) {
                fonts.push(name);
            }
        }
    }
    fonts
}

/// Subsetted fonts embed under `ABCDEF+RealName`; keep the real name.
fn strip_subset_prefix(name: &str) -> &str {
    match name.split_once('+') {
        Some((_, rest)) => rest,
        None => name,
    }
}
