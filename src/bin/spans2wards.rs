use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ward_tally::{ParseOptions, ParseReport, parse_pages_file};

#[derive(Debug, Parser)]
#[command(
    name = "spans2wards",
    version,
    about = "Reconstruct ward election results from captured page spans"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a captured-pages JSON file and write the ward results JSON.
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Input JSON path: an array of pages, each an array of fragments.
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON path for the ward list.
    #[arg(short, long)]
    output: PathBuf,

    /// Document title that marks the first fragment of a new ward table.
    #[arg(long)]
    title: Option<String>,

    /// Short label marking a ward name wrapped onto a continuation page.
    #[arg(long)]
    wrap_marker: Option<String>,

    /// Vertical offset in pixels applied to continuation pages.
    #[arg(long)]
    offset: Option<f64>,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(args: &ParseArgs) -> ParseOptions {
    let defaults = ParseOptions::default();
    ParseOptions {
        document_title: args.title.clone().unwrap_or(defaults.document_title),
        wrap_marker: args.wrap_marker.clone().unwrap_or(defaults.wrap_marker),
        continuation_offset: args.offset.unwrap_or(defaults.continuation_offset),
    }
}

fn log_report(report: &ParseReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} page={:?} ward={:?}: {}",
                warning.code, warning.page, warning.ward, warning.message
            );
        }
    }
}

fn run_parse(args: &ParseArgs) -> Result<ParseReport> {
    let options = parse_options(args);
    parse_pages_file(&args.input, &args.output, &options)
        .with_context(|| format!("failed to parse captured pages '{}'", args.input.display()))
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ward_tally=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse(args) => match run_parse(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                if report.ward_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
