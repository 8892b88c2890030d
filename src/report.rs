//! Final analysis report: verdict, score, reasons and raw signals.
//!
//! Pure aggregation over the signal bundle; no decision logic lives here.
//! Serialization preserves the declared field order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analyzer::signals::SignalBundle;

/// One analysis run's complete output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub suspicious: bool,
    /// Suspicion score in [0, 1], rounded to 3 decimal places
    pub score: f64,
    /// Human-readable reasons in rule-evaluation order
    pub reasons: Vec<String>,
    /// Raw extracted metadata, unfiltered
    pub metadata: BTreeMap<String, String>,
    pub file_size: u64,
    /// Whole-file SHA-256, 64 lowercase hex characters
    pub file_hash: String,
    pub producer: String,
    pub title: String,
    pub creation_date: String,
    pub mod_date: String,
    pub fonts_found: Vec<String>,
    /// -1 when the image census could not run
    pub image_count: i64,
    /// (width, height) in points; (0, 0) when unreadable
    pub page_size_pts: (i64, i64),
    pub ocr_year: Option<String>,
    pub metadata_year: Option<String>,
}

impl Report {
    /// Packages the extracted signals with the evaluation outcome.
    pub fn assemble(
        signals: SignalBundle,
        reasons: Vec<String>,
        score: f64,
        suspicious: bool,
    ) -> Self {
        Self {
            suspicious,
            score,
            reasons,
            metadata: signals.metadata,
            file_size: signals.file_size,
            file_hash: signals.file_hash,
            producer: signals.producer,
            title: signals.title,
            creation_date: signals.creation_date,
            mod_date: signals.mod_date,
            fonts_found: signals.fonts_found,
            image_count: signals.image_count,
            page_size_pts: signals.page_size_pts,
            ocr_year: signals.ocr_year,
            metadata_year: signals.metadata_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_expected_fields() {
        let signals = SignalBundle {
            producer: "Prince 15.1 (www.princexml.com)".to_string(),
            page_size_pts: (792, 612),
            image_count: 2,
            ..SignalBundle::default()
        };
        let report = Report::assemble(signals, Vec::new(), 1.0, false);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["suspicious"], false);
        assert_eq!(json["score"], 1.0);
        assert_eq!(json["page_size_pts"][0], 792);
        assert_eq!(json["page_size_pts"][1], 612);
        assert!(json["ocr_year"].is_null());
        assert!(json["reasons"].as_array().unwrap().is_empty());
    }
}
