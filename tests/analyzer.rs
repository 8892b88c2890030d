//! End-to-end analysis tests over synthetic documents.
//!
//! OCR stays disabled throughout: these tests exercise the deterministic
//! extractors and the rule/score pipeline, not the external OCR engine.

mod fixtures;

use std::fs;
use std::path::Path;

use credgate::{analyze, hash_utils, Analyzer, AnalyzerConfig, Report};
use fixtures::PdfFixture;
use tempfile::TempDir;

async fn analyze_fixture(fixture: &PdfFixture) -> Report {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.pdf");
    fixture.build().save(&path).unwrap();
    analyze(&path, false).await.unwrap()
}

#[tokio::test]
async fn authentic_credential_is_clean() {
    let report = analyze_fixture(&PdfFixture::default()).await;

    assert!(report.reasons.is_empty(), "{:?}", report.reasons);
    assert_eq!(report.score, 1.0);
    assert!(!report.suspicious);

    assert_eq!(report.producer, "Prince 15.1 (www.princexml.com)");
    assert_eq!(report.title, "Credential Renderer");
    assert_eq!(report.image_count, 2);
    assert_eq!(report.page_size_pts, (792, 612));
    assert_eq!(
        report.fonts_found,
        vec![
            "CormorantGaramond-BoldItalic".to_string(),
            "Charm-Bold".to_string(),
        ]
    );
    assert_eq!(report.file_hash.len(), 64);
    assert!(report.file_size > 5 * 1024);
    assert_eq!(report.metadata.get("Producer").unwrap(), &report.producer);
    assert!(report.metadata_year.is_none());
    assert!(report.ocr_year.is_none());
}

#[tokio::test]
async fn repeated_analysis_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.pdf");
    PdfFixture::default().build().save(&path).unwrap();

    let first = analyze(&path, false).await.unwrap();
    let second = analyze(&path, false).await.unwrap();

    assert_eq!(first.reasons, second.reasons);
    assert_eq!(first.score, second.score);
    assert_eq!(first.suspicious, second.suspicious);
    assert_eq!(first.file_hash, second.file_hash);
    assert_eq!(first.fonts_found, second.fonts_found);
    assert_eq!(first.metadata, second.metadata);
}

#[tokio::test]
async fn unparseable_file_fails_closed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.pdf");
    fs::write(&path, b"This is not a valid PDF file").unwrap();

    let report = analyze(&path, false).await.unwrap();

    // Image census degrades to the sentinel and its rule is skipped
    assert_eq!(report.image_count, -1);
    assert!(!report
        .reasons
        .iter()
        .any(|r| r.contains("Image count mismatch")));

    // Geometry fails closed through the (0, 0) fallback
    assert_eq!(report.page_size_pts, (0, 0));
    assert!(report
        .reasons
        .iter()
        .any(|r| r.contains("Page size mismatch (0x0 vs 792x612)")));

    assert!(report
        .reasons
        .contains(&"Producer does not match reference producer.".to_string()));
    assert!(report.reasons.contains(&"File too small.".to_string()));

    // One heavy, one medium, one light
    assert_eq!(report.score, 0.4);
    assert!(report.suspicious);
    assert!(report.metadata.is_empty());
    assert!(report.fonts_found.is_empty());
}

#[tokio::test]
async fn resaved_document_is_flagged() {
    let fixture = PdfFixture {
        producer: Some("3.2.1 (pdfsejda.com)".to_string()),
        mod_date: Some("D:20240201120000Z".to_string()),
        ..PdfFixture::default()
    };
    let report = analyze_fixture(&fixture).await;

    assert!(report
        .reasons
        .contains(&"Producer does not match reference producer.".to_string()));
    assert!(report
        .reasons
        .contains(&"Producer matches Sejda-style PDF editor signature.".to_string()));
    assert!(report
        .reasons
        .contains(&"CreationDate missing but ModDate present - edited PDF.".to_string()));
    // OCR is off, so a metadata year with no recognized year also fires
    assert!(report
        .reasons
        .contains(&"Metadata year 2024 exists, but OCR found no date.".to_string()));
    assert_eq!(report.reasons.len(), 4);

    // Two heavy, one medium, one light
    assert_eq!(report.score, 0.05);
    assert!(report.suspicious);
    assert_eq!(report.metadata_year, Some("2024".to_string()));
}

#[tokio::test]
async fn rotated_page_is_the_only_flag() {
    let fixture = PdfFixture {
        media_box: (612, 792),
        ..PdfFixture::default()
    };
    let report = analyze_fixture(&fixture).await;

    assert_eq!(
        report.reasons,
        vec!["Page size mismatch (612x792 vs 792x612).".to_string()]
    );
    assert_eq!(report.score, 0.8);
    assert!(report.suspicious);
}

#[tokio::test]
async fn wrong_fonts_are_flagged() {
    let fixture = PdfFixture {
        fonts: vec!["Helvetica".to_string()],
        ..PdfFixture::default()
    };
    let report = analyze_fixture(&fixture).await;

    assert_eq!(report.reasons.len(), 1);
    assert!(report.reasons[0].starts_with("Expected fonts missing"));
    assert!(report.reasons[0].contains("Helvetica"));
    assert_eq!(report.score, 0.8);
    assert!(report.suspicious);
}

#[tokio::test]
async fn missing_image_is_flagged() {
    let fixture = PdfFixture {
        image_count: 1,
        ..PdfFixture::default()
    };
    let report = analyze_fixture(&fixture).await;

    assert!(report
        .reasons
        .contains(&"Image count mismatch (1 vs expected 2).".to_string()));
    assert_eq!(report.image_count, 1);
}

#[tokio::test]
async fn file_hash_and_size_match_the_bytes_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.pdf");
    PdfFixture::default().build().save(&path).unwrap();
    let bytes = fs::read(&path).unwrap();

    let report = analyze(&path, false).await.unwrap();

    assert_eq!(report.file_hash, hash_utils::sha256_bytes(&bytes));
    assert_eq!(report.file_size, bytes.len() as u64);
}

#[tokio::test]
async fn custom_profile_swaps_the_template() {
    let mut config = AnalyzerConfig::default();
    config.profile.producer = "Acme Renderer 2.0".to_string();
    config.profile.page_size_pts = (612, 792);
    config.profile.expected_image_count = 1;
    config.profile.expected_fonts = vec!["Helvetica".to_string()];

    let fixture = PdfFixture {
        producer: Some("Acme Renderer 2.0".to_string()),
        media_box: (612, 792),
        fonts: vec!["Helvetica".to_string()],
        image_count: 1,
        ..PdfFixture::default()
    };

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.pdf");
    fixture.build().save(&path).unwrap();

    let report = Analyzer::new(config)
        .analyze(&path, false)
        .await
        .unwrap();
    assert!(report.reasons.is_empty(), "{:?}", report.reasons);
    assert!(!report.suspicious);
}

#[tokio::test]
async fn missing_input_is_an_infrastructure_error() {
    let result = analyze(Path::new("/nonexistent/input.pdf"), false).await;
    assert!(result.is_err());
}
