//! Error types and handling for the credential authenticity gate.
//!
//! Only infrastructure-level failures surface here: an unreadable input
//! file, a failed whole-file hash, an OCR engine that is missing outright,
//! or a broken profile file. Extraction-level faults inside a PDF never
//! become errors; each extractor degrades to its sentinel value instead.

use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Custom result type for analysis operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for the analysis pipeline
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("OCR engine unavailable: {0}")]
    OcrUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Helper for building a `ConfigError` from anything displayable
    pub fn config<E: std::fmt::Display>(e: E) -> Self {
        Error::ConfigError(e.to_string())
    }
}
