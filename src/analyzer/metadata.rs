//! Metadata extraction from the PDF Info dictionary.
//!
//! Returns the raw key/value mapping with keys stripped of their leading
//! slash. Any parse failure, at any level, degrades to an empty map; the
//! rest of the pipeline tolerates total metadata absence.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Document, Object};
use tracing::{debug, warn};

use super::resolve;

/// Extracts the document's Info dictionary as string key/value pairs.
pub fn extract(path: &Path) -> BTreeMap<String, String> {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "metadata extraction failed, continuing without metadata");
            return BTreeMap::new();
        }
    };

    let info = match doc.trailer.get(b"Info") {
        Ok(obj) => obj,
        Err(_) => {
            debug!("document has no Info dictionary");
            return BTreeMap::new();
        }
    };

    let dict = match resolve(&doc, info).as_dict() {
        Ok(dict) => dict,
        Err(e) => {
            warn!(error = %e, "Info entry is not a dictionary");
            return BTreeMap::new();
        }
    };

    let mut out = BTreeMap::new();
    for (key, value) in dict.iter() {
        let key = String::from_utf8_lossy(key).into_owned();
        out.insert(key, decode_text(resolve(&doc, value)));
    }
    out
}

/// Renders an Info dictionary value as text. String values may carry a
/// UTF-16BE byte order mark per the PDF text string convention.
fn decode_text(obj: &Object) -> String {
    match obj {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
        Object::Integer(i) => i.to_string(),
        Object::Real(r) => r.to_string(),
        Object::Boolean(b) => b.to_string(),
        other => format!("{:?}", other),
    }
}

fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&utf16)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
