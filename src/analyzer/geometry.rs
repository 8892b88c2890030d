//! Embedded image census and page geometry extraction.
//!
//! The image count and the page box carry different failure semantics:
//! a failed census reports the -1 sentinel and the image-count rule is
//! skipped, while a failed page-box read falls back to (0, 0), which the
//! always-evaluated geometry rule will flag. An unreadable document is
//! therefore suspicious by construction (fail closed on geometry).

use std::path::Path;

use lopdf::{Document, Object};
use tracing::warn;

use super::signals::{ImageDims, IMAGE_COUNT_UNAVAILABLE};
use super::{resolve, resolve_inherited};

/// Counts image XObjects across all pages, recording raw pixel dimensions.
/// Returns (-1, empty) when the document cannot be opened at all.
pub fn count_images(path: &Path) -> (i64, Vec<ImageDims>) {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "image census failed, image-count rule will be skipped");
            return (IMAGE_COUNT_UNAVAILABLE, Vec::new());
        }
    };

    let mut count = 0i64;
    let mut dims = Vec::new();
    for page_id in doc.get_pages().values() {
        let xobjects = match resolve_inherited(&doc, *page_id, b"Resources")
            .and_then(|obj| obj.as_dict().ok())
            .and_then(|res| res.get(b"XObject").ok())
            .map(|obj| resolve(&doc, obj))
            .and_then(|obj| obj.as_dict().ok())
        {
            Some(dict) => dict,
            None => continue,
        };
        for (_, entry) in xobjects.iter() {
            let dict = match resolve(&doc, entry) {
                Object::Stream(stream) => &stream.dict,
                Object::Dictionary(dict) => dict,
                _ => continue,
            };
            let is_image = dict
                .get(b"Subtype")
                .ok()
                .and_then(|obj| obj.as_name().ok())
                .map(|name| name == b"Image")
                .unwrap_or(false);
            if !is_image {
                continue;
            }
            count += 1;
            dims.push(ImageDims {
                width: dict.get(b"Width").ok().and_then(|o| o.as_i64().ok()).unwrap_or(0),
                height: dict.get(b"Height").ok().and_then(|o| o.as_i64().ok()).unwrap_or(0),
            });
        }
    }
    (count, dims)
}

/// Reads the first page's MediaBox and returns (width, height) in points,
/// computed as upper-right minus lower-left per axis. Any failure falls
/// back to (0, 0).
pub fn page_size_pts(path: &Path) -> (i64, i64) {
    const FALLBACK: (i64, i64) = (0, 0);

    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "page geometry unreadable, falling back to (0, 0)");
            return FALLBACK;
        }
    };
    let page_id = match doc.get_pages().values().next().copied() {
        Some(id) => id,
        None => return FALLBACK,
    };
    let media_box = match resolve_inherited(&doc, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
    {
        Some(array) if array.len() == 4 => array,
        _ => return FALLBACK,
    };
    let mut corners = [0f64; 4];
    for (slot, obj) in corners.iter_mut().zip(media_box.iter()) {
        *slot = match numeric(resolve(&doc, obj)) {
            Some(value) => value,
            None => return FALLBACK,
        };
    }
    (
        (corners[2] - corners[0]) as i64,
        (corners[3] - corners[1]) as i64,
    )
}

fn numeric(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}
