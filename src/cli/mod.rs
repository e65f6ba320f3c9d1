//! # CLI Module
//!
//! Command-line interface for the image similarity tool.
//!
//! ## Usage
//! ```bash
//! # Compare two images
//! img-compare photo1.jpg photo2.jpg
//!
//! # With a larger comparison grid
//! img-compare photo1.jpg photo2.jpg --hash-size 16
//!
//! # JSON output
//! img-compare photo1.jpg photo2.jpg --output json
//! ```

use clap::{Parser, ValueEnum};
use console::{style, Term};
use image_similarity::core::{compare_images, ComparisonReport, DEFAULT_HASH_SIZE, MAX_HASH_SIZE};
use image_similarity::error::Result;
use std::path::PathBuf;

/// Image Similarity - How alike are two photos?
#[derive(Parser, Debug)]
#[command(name = "img-compare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First image to compare
    image_a: PathBuf,

    /// Second image to compare
    image_b: PathBuf,

    /// Comparison grid size (8 = 64-bit fingerprint)
    #[arg(long, default_value_t = DEFAULT_HASH_SIZE,
          value_parser = clap::value_parser!(u32).range(1..=MAX_HASH_SIZE as i64))]
    hash_size: u32,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Show fingerprints and Hamming distance
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Bare percentage only
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = compare_images(&cli.image_a, &cli.image_b, cli.hash_size)?;

    match cli.output {
        OutputFormat::Pretty => print_pretty_report(&report, cli.verbose),
        OutputFormat::Json => print_json_report(&report),
        OutputFormat::Minimal => println!("{:.2}", report.similarity),
    }

    Ok(())
}

fn print_pretty_report(report: &ComparisonReport, verbose: bool) {
    let term = Term::stderr();

    term.write_line(&format!(
        "{} {}",
        style("Image Similarity").bold().cyan(),
        style(format!("(dHash {0}x{0})", report.hash_size())).dim()
    ))
    .ok();
    term.write_line(&format!("  {}", report.path_a.display())).ok();
    term.write_line(&format!("  {}", report.path_b.display())).ok();
    term.write_line("").ok();

    let styled_score = if report.similarity >= 90.0 {
        style(format!("{:.2}%", report.similarity)).green().bold()
    } else if report.similarity >= 70.0 {
        style(format!("{:.2}%", report.similarity)).yellow().bold()
    } else {
        style(format!("{:.2}%", report.similarity)).red().bold()
    };

    println!("Similarity: {}", styled_score);

    if verbose {
        term.write_line("").ok();
        term.write_line(&format!(
            "  {} {} of {} bits differ",
            style("Hamming distance:").dim(),
            report.hamming_distance,
            report.hash_a.bit_count()
        ))
        .ok();
        term.write_line(&format!(
            "  {} {}",
            style("Fingerprint A:").dim(),
            report.hash_a.to_hex()
        ))
        .ok();
        term.write_line(&format!(
            "  {} {}",
            style("Fingerprint B:").dim(),
            report.hash_b.to_hex()
        ))
        .ok();
    }
}

fn print_json_report(report: &ComparisonReport) {
    let output = serde_json::json!({
        "image_a": report.path_a,
        "image_b": report.path_b,
        "hash_size": report.hash_size(),
        "hash_a": report.hash_a.to_hex(),
        "hash_b": report.hash_b.to_hex(),
        "hamming_distance": report.hamming_distance,
        "similarity": report.similarity,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
