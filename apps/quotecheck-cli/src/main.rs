//! QuoteCheck CLI
//!
//! Validates the content of a generated insurance-quote PDF against a row of
//! CSV fixture data and prints a per-field report. The quote can be supplied
//! as a PDF file (text is extracted with pdf-extract) or as an already
//! extracted plain-text file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quote_types::Section;
use validation_engine::{MismatchMode, QuoteValidator};

mod fixtures;

/// Command-line arguments for quotecheck
#[derive(Parser, Debug)]
#[command(name = "quotecheck")]
#[command(about = "Validate a generated insurance-quote PDF against fixture data")]
struct Args {
    /// Quote to validate: a .pdf file or a plain-text extraction
    #[arg(short, long)]
    input: PathBuf,

    /// CSV fixture file (header row + data rows)
    #[arg(short, long)]
    fixture: PathBuf,

    /// Zero-based data row of the fixture file to validate against
    #[arg(long, default_value = "0")]
    row: usize,

    /// Expected pricing value; enables the pricing section
    #[arg(long)]
    pricing: Option<String>,

    /// Stop at the first mismatch instead of collecting a full report
    #[arg(long)]
    fail_fast: bool,

    /// Sections to validate (default: insurant, vehicle, product)
    #[arg(long = "section", value_enum)]
    sections: Vec<SectionArg>,

    /// Print the extracted quote text after the report
    #[arg(long)]
    show_text: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum SectionArg {
    Insurant,
    Vehicle,
    Product,
    Pricing,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Insurant => Section::Insurant,
            SectionArg::Vehicle => Section::Vehicle,
            SectionArg::Product => Section::Product,
            SectionArg::Pricing => Section::Pricing,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let text = read_quote_text(&args.input)?;
    info!(
        "Extracted {} characters from {}",
        text.len(),
        args.input.display()
    );

    let fixture = fixtures::load_csv_row(&args.fixture, args.row)?;

    let mode = if args.fail_fast {
        MismatchMode::Throw
    } else {
        MismatchMode::Collect
    };
    let validator = QuoteValidator::with_mode(mode);

    let mut sections: Vec<Section> = args.sections.iter().map(|&s| s.into()).collect();
    if sections.is_empty() {
        sections = vec![Section::Insurant, Section::Vehicle, Section::Product];
        if args.pricing.is_some() {
            sections.push(Section::Pricing);
        }
    }

    let report =
        validator.validate_sections(&text, &fixture, &sections, args.pricing.as_deref())?;

    for line in &report.results {
        println!("{}", line);
    }

    if args.show_text {
        println!("\n--- extracted text ---\n{}", report.raw_text);
    }

    if report.is_valid {
        info!("Quote content matches fixture row {}", args.row);
        Ok(ExitCode::SUCCESS)
    } else {
        info!("Quote content does not match fixture row {}", args.row);
        Ok(ExitCode::FAILURE)
    }
}

/// Reads the quote text, extracting from PDF when the input is a .pdf file.
fn read_quote_text(path: &Path) -> anyhow::Result<String> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf_extract::extract_text(path)
            .with_context(|| format!("failed to extract text from {}", path.display()))
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
