//! Configuration types for the analysis pipeline.
//!
//! The reference profile describes the one authentic form of the credential
//! document precisely: which renderer produced it, its page geometry, how
//! many images it embeds and which font families it carries. Swapping
//! credential templates is a matter of loading a different profile file,
//! never a code change.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fingerprint of the known-good rendering pipeline's output.
///
/// Immutable for the duration of a run; every rule in the evaluator is a
/// comparison against one of these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceProfile {
    /// Exact producer string written by the authentic renderer
    pub producer: String,
    /// Title the renderer stamps into the Info dictionary
    pub title: String,
    /// Page size of the credential in points (width, height)
    pub page_size_pts: (u32, u32),
    /// Number of images the authentic template embeds
    pub expected_image_count: i64,
    /// Font family names expected in the document, substring-matched
    /// case-insensitively against the embedded font inventory
    pub expected_fonts: Vec<String>,
}

impl Default for ReferenceProfile {
    fn default() -> Self {
        Self {
            producer: "Prince 15.1 (www.princexml.com)".to_string(),
            title: "Credential Renderer".to_string(),
            page_size_pts: (792, 612),
            expected_image_count: 2,
            expected_fonts: vec![
                "CormorantGaramond-BoldItalic".to_string(),
                "Charm-Bold".to_string(),
            ],
        }
    }
}

/// Analyzer configuration: reference profile plus rule thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Fingerprint of the authentic document
    pub profile: ReferenceProfile,
    /// Files below this size are too small to be a rendered credential
    pub min_file_size: u64,
    /// Files above this size are likely rasterized or re-scanned
    pub max_file_size: u64,
    /// Editor/phone/screenshot brand names searched case-insensitively
    /// in the producer and title fields
    pub suspicious_keywords: Vec<String>,
    /// Allowed deviation per page axis before geometry is flagged, in points
    pub page_tolerance_pts: u32,
    /// Resolution for first-page rasterization before text recognition
    pub ocr_dpi: u32,
    /// Deadline for the rasterize-and-recognize step; on expiry the OCR
    /// signal degrades to "no year found"
    pub ocr_timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            profile: ReferenceProfile::default(),
            min_file_size: 5 * 1024,
            max_file_size: 15 * 1024 * 1024,
            suspicious_keywords: [
                "photoshop",
                "microsoft word",
                "word",
                "canva",
                "wps",
                "screenshot",
                "mobile",
                "iphone",
                "android",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            page_tolerance_pts: 4,
            ocr_dpi: 200,
            ocr_timeout_secs: 30,
        }
    }
}

impl AnalyzerConfig {
    /// Loads a configuration from a JSON file. Missing keys fall back to
    /// the built-in defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigError(format!(
                "cannot read profile file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        serde_json::from_str(&raw).map_err(Error::config)
    }

    /// OCR deadline as a `Duration`
    pub fn ocr_timeout(&self) -> Duration {
        Duration::from_secs(self.ocr_timeout_secs)
    }
}
