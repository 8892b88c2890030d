//! Command-line interface for the credential authenticity gate.
//!
//! Analyzes one PDF and emits the JSON report on stdout (or to a file).
//! Exit codes: 0 authentic, 2 suspicious, 1 on any infrastructure error,
//! so shell pipelines can gate issuance on the verdict directly.

use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, Command};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use credgate::{Analyzer, AnalyzerConfig};

fn build_cli() -> Command {
    Command::new("credgate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Forensic authenticity gate for machine-generated credential PDFs")
        .arg(
            Arg::new("input")
                .help("Path to the PDF document to analyze")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-ocr")
                .long("no-ocr")
                .help("Skip first-page rasterization and text recognition")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .short('p')
                .help("JSON file overriding the built-in reference profile")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the JSON report to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log level: error, warn, info, debug, trace")
                .default_value("warn"),
        )
}

fn init_logging(level: &str) {
    let filter = match level {
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        other => {
            eprintln!("Unknown log level '{}', using 'warn'", other);
            LevelFilter::WARN
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_one::<String>("verbose").map(String::as_str).unwrap_or("warn"));

    let input = matches.get_one::<PathBuf>("input").unwrap();
    let run_ocr = !matches.get_flag("no-ocr");

    if !input.exists() {
        error!("Input file does not exist: {}", input.display());
        process::exit(1);
    }

    let config = match matches.get_one::<PathBuf>("profile") {
        Some(path) => match AnalyzerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load profile: {}", e);
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };

    let analyzer = Analyzer::new(config);
    let report = match analyzer.analyze(input, run_ocr).await {
        Ok(report) => report,
        Err(e) => {
            error!("Analysis failed: {}", e);
            process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize report: {}", e);
            process::exit(1);
        }
    };

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &json) {
                error!("Failed to write report to {}: {}", path.display(), e);
                process::exit(1);
            }
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    if report.suspicious {
        process::exit(2);
    }
}
