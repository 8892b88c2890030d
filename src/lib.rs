//! Forensic authenticity gate for machine-generated credential PDFs.
//!
//! Inspects a single document and decides whether it was produced by the
//! known-good rendering pipeline or tampered with. Independent signal
//! extractors (metadata, embedded fonts, image census and page geometry,
//! OCR-recognized date) feed a rule evaluator whose reasons are reduced
//! to a weighted suspicion score and a boolean verdict.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod hash_utils;
pub mod report;

// Re-exports for crate consumers
pub use analyzer::{analyze, Analyzer, Severity, SignalBundle};
pub use config::{AnalyzerConfig, ReferenceProfile};
pub use error::{Error, Result};
pub use report::Report;
