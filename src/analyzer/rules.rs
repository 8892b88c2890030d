//! Rule evaluation: signals plus reference profile in, reasons out.
//!
//! A pure function over the signal bundle. Evaluation order fixes the
//! display order of the reason list only; the score is order-independent.
//! Rules with unavailable inputs are skipped per their documented
//! sentinels, except page geometry, which always evaluates and therefore
//! flags unreadable documents through the (0, 0) fallback.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::AnalyzerConfig;

use super::signals::{SignalBundle, IMAGE_COUNT_UNAVAILABLE};

lazy_static! {
    /// Version-number-looking producer prefix, e.g. "3.2.1 (", used by
    /// common low-end PDF editors that rewrite the producer field
    static ref VERSION_PREFIX_RE: Regex = Regex::new(r"^\d+\.\d+\.\d+ ?\(").unwrap();
}

/// Evaluates every authenticity rule against the extracted signals.
pub fn evaluate(signals: &SignalBundle, config: &AnalyzerConfig) -> Vec<String> {
    let mut reasons = Vec::new();
    let profile = &config.profile;
    let producer_lower = signals.producer.to_lowercase();
    let title_lower = signals.title.to_lowercase();

    if signals.producer != profile.producer {
        reasons.push("Producer does not match reference producer.".to_string());
    }

    if is_generic_editor_producer(&signals.producer) {
        reasons.push("Producer matches Sejda-style PDF editor signature.".to_string());
    }

    // A re-saved PDF commonly loses its original creation stamp
    if signals.creation_date.is_empty() && !signals.mod_date.is_empty() {
        reasons.push("CreationDate missing but ModDate present - edited PDF.".to_string());
    }

    // Each keyword fires independently against producer and title, so
    // overlapping keywords produce separate reasons on purpose
    for kw in &config.suspicious_keywords {
        if producer_lower.contains(kw.as_str()) || title_lower.contains(kw.as_str()) {
            reasons.push(format!("Suspicious keyword '{}' detected.", kw));
        }
    }

    if signals.file_size < config.min_file_size {
        reasons.push("File too small.".to_string());
    }
    if signals.file_size > config.max_file_size {
        reasons.push("File too large - likely rasterized.".to_string());
    }

    // Skipped entirely when the census failed
    if signals.image_count != IMAGE_COUNT_UNAVAILABLE
        && signals.image_count != profile.expected_image_count
    {
        reasons.push(format!(
            "Image count mismatch ({} vs expected {}).",
            signals.image_count, profile.expected_image_count
        ));
    }

    let (pw, ph) = signals.page_size_pts;
    let (ew, eh) = (
        i64::from(profile.page_size_pts.0),
        i64::from(profile.page_size_pts.1),
    );
    let tolerance = i64::from(config.page_tolerance_pts);
    if (pw - ew).abs() > tolerance || (ph - eh).abs() > tolerance {
        reasons.push(format!(
            "Page size mismatch ({}x{} vs {}x{}).",
            pw, ph, ew, eh
        ));
    }

    // Skipped when either side of the comparison is empty
    if !profile.expected_fonts.is_empty() && !signals.fonts_found.is_empty() {
        let missing: Vec<&String> = profile
            .expected_fonts
            .iter()
            .filter(|expected| {
                let expected_lower = expected.to_lowercase();
                !signals
                    .fonts_found
                    .iter()
                    .any(|found| found.to_lowercase().contains(&expected_lower))
            })
            .collect();
        if !missing.is_empty() {
            reasons.push(format!(
                "Expected fonts missing: {:?} (found: {:?})",
                missing, signals.fonts_found
            ));
        }
    }

    if let (Some(meta_year), Some(ocr_year)) = (&signals.metadata_year, &signals.ocr_year) {
        if meta_year != ocr_year {
            reasons.push(format!(
                "OCR year {} does not match metadata year {}.",
                ocr_year, meta_year
            ));
        }
    }
    // The reference engine legitimately omits dates, so a dateless document
    // from that producer is not flagged here
    if let (None, Some(ocr_year)) = (&signals.metadata_year, &signals.ocr_year) {
        if signals.producer != profile.producer {
            reasons.push(format!(
                "OCR detected year {}, but metadata has no date at all.",
                ocr_year
            ));
        }
    }
    if let (Some(meta_year), None) = (&signals.metadata_year, &signals.ocr_year) {
        reasons.push(format!(
            "Metadata year {} exists, but OCR found no date.",
            meta_year
        ));
    }

    reasons
}

/// Detects producer strings rewritten by common low-end PDF editors:
/// a bare version-number prefix or anything mentioning sejda.
fn is_generic_editor_producer(producer: &str) -> bool {
    if producer.is_empty() {
        return false;
    }
    let p = producer.trim().to_lowercase();
    VERSION_PREFIX_RE.is_match(&p) || p.contains("sejda")
}
