//! Rasterized-date extraction via optical character recognition.
//!
//! The first page is rendered to a bitmap with poppler's `pdftoppm` and
//! the bitmap is read back with `tesseract`; the first `20xx` token in
//! the recognized text is the OCR year signal. This is the slowest and
//! least deterministic extractor, so it is disable-able by the caller and
//! runs under a deadline. A missing tesseract binary at startup is fatal;
//! every failure after that degrades to "no year found".

use std::path::Path;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};

use super::signals::first_year;

/// OCR-based extractor for the year printed on the credential.
#[derive(Debug)]
pub struct OcrDateExtractor {
    dpi: u32,
    deadline: Duration,
}

impl OcrDateExtractor {
    /// Probes for the OCR engine. Requesting OCR without a tesseract
    /// binary on PATH is an infrastructure failure, not a degraded signal.
    pub async fn detect(config: &AnalyzerConfig) -> Result<Self> {
        let probe = Command::new("tesseract").arg("--version").output().await;
        match probe {
            Ok(output) if output.status.success() => Ok(Self {
                dpi: config.ocr_dpi,
                deadline: config.ocr_timeout(),
            }),
            Ok(output) => Err(Error::OcrUnavailable(format!(
                "tesseract probe exited with {}",
                output.status
            ))),
            Err(e) => Err(Error::OcrUnavailable(format!(
                "tesseract binary not found on PATH: {}",
                e
            ))),
        }
    }

    /// Rasterizes the first page and returns the first recognized year
    /// token, or `None` on any rendering/recognition failure or timeout.
    pub async fn first_year(&self, path: &Path) -> Option<String> {
        match timeout(self.deadline, self.recognize(path)).await {
            Ok(year) => year,
            Err(_) => {
                warn!(deadline_secs = self.deadline.as_secs(), "OCR timed out");
                None
            }
        }
    }

    async fn recognize(&self, path: &Path) -> Option<String> {
        let scratch = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!(error = %e, "cannot create OCR scratch directory");
                return None;
            }
        };
        let prefix = scratch.path().join("page");

        let render = Command::new("pdftoppm")
            .arg("-f")
            .arg("1")
            .arg("-l")
            .arg("1")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-png")
            .arg("-singlefile")
            .arg(path)
            .arg(&prefix)
            .output()
            .await;
        match render {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                warn!(status = %output.status, "pdftoppm failed, skipping OCR");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "pdftoppm not runnable, skipping OCR");
                return None;
            }
        }

        let bitmap = prefix.with_extension("png");
        let recognized = Command::new("tesseract")
            .arg(&bitmap)
            .arg("stdout")
            .output()
            .await;
        let output = match recognized {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                warn!(status = %output.status, "tesseract failed, skipping OCR");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "tesseract not runnable, skipping OCR");
                return None;
            }
        };

        let text = String::from_utf8_lossy(&output.stdout);
        let year = first_year(&text);
        debug!(?year, text_len = text.len(), "OCR pass complete");
        year
    }
}
