//! Authenticity scoring engine for credential PDFs.
//!
//! Four independent signal extractors feed a pure rule evaluator whose
//! reasons are reduced to a weighted suspicion score. Extractors share no
//! state and each opens its own handle on the document, so no extractor
//! can poison another's cursor or partial parse.

pub mod fonts;
pub mod geometry;
pub mod metadata;
pub mod ocr;
pub mod rules;
pub mod score;
pub mod signals;

use std::fs;
use std::path::Path;

use lopdf::{Document, Object, ObjectId};
use tracing::{debug, info, instrument};

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::hash_utils;
use crate::report::Report;

pub use ocr::OcrDateExtractor;
pub use score::Severity;
pub use signals::{ImageDims, SignalBundle, IMAGE_COUNT_UNAVAILABLE};

/// Analyzes single documents against one reference profile.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the full pipeline on one file: extract signals, evaluate
    /// rules, score, assemble the report.
    ///
    /// Returns `Err` only for infrastructure failures (unreadable file,
    /// failed hash, missing OCR engine with OCR requested); structural
    /// faults inside the PDF degrade to sentinels and still produce a
    /// complete report.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn analyze(&self, path: &Path, run_ocr: bool) -> Result<Report> {
        // Probe the OCR engine up front so a missing binary fails the
        // call before any signal work happens
        let ocr_engine = if run_ocr {
            Some(OcrDateExtractor::detect(&self.config).await?)
        } else {
            None
        };

        let file_size = fs::metadata(path)?.len();
        let file_hash = hash_utils::sha256_file(path)?;

        let metadata = metadata::extract(path);
        let field = |key: &str| {
            metadata
                .get(key)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };
        let producer = field("Producer");
        let title = field("Title");
        let creation_date = field("CreationDate");
        let mod_date = field("ModDate");

        let fonts_found = fonts::extract(path);
        let (image_count, images) = geometry::count_images(path);
        let page_size_pts = geometry::page_size_pts(path);
        debug!(image_count, ?images, ?page_size_pts, "structure signals extracted");

        let date_source = if creation_date.is_empty() {
            &mod_date
        } else {
            &creation_date
        };
        let metadata_year = signals::first_year(date_source);
        let ocr_year = match &ocr_engine {
            Some(engine) => engine.first_year(path).await,
            None => None,
        };

        let bundle = SignalBundle {
            metadata,
            producer,
            title,
            creation_date,
            mod_date,
            file_size,
            file_hash,
            fonts_found,
            image_count,
            images,
            page_size_pts,
            metadata_year,
            ocr_year,
        };

        let reasons = rules::evaluate(&bundle, &self.config);
        let (score, suspicious) = score::score(&reasons);
        info!(
            score,
            suspicious,
            reason_count = reasons.len(),
            "analysis complete"
        );

        Ok(Report::assemble(bundle, reasons, score, suspicious))
    }
}

/// Analyzes one file against the default reference profile.
pub async fn analyze<P: AsRef<Path>>(path: P, run_ocr: bool) -> Result<Report> {
    Analyzer::default().analyze(path.as_ref(), run_ocr).await
}

/// Follows reference chains to the pointed-to object. Broken references
/// and cycles stop the walk and hand back the last object seen.
pub(crate) fn resolve<'a>(doc: &'a Document, mut obj: &'a Object) -> &'a Object {
    for _ in 0..32 {
        match obj {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(next) => obj = next,
                Err(_) => break,
            },
            _ => break,
        }
    }
    obj
}

/// Looks up a key on a page dictionary, walking up the page tree through
/// `/Parent` links for inheritable attributes like MediaBox and Resources.
pub(crate) fn resolve_inherited<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = page_id;
    for _ in 0..64 {
        let dict = doc.get_object(current).ok()?.as_dict().ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(resolve(doc, value));
        }
        current = dict.get(b"Parent").ok()?.as_reference().ok()?;
    }
    None
}
