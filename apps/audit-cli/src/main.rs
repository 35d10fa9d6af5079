//! dotali performance audit CLI
//!
//! Reads HTML and/or CSS text from files, runs the static heuristic
//! checks, prints a console report, and optionally writes the JSON
//! snapshot. Logs go to stderr so the report stays clean on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use audit_engine::report::REPORT_FILE_NAME;
use audit_engine::reporter::{ConsoleReporter, OutputFormat, Reporter};
use audit_engine::{Analysis, AuditEngine};

#[derive(Parser, Debug)]
#[command(name = "dotali-audit")]
#[command(
    version,
    about = "Static heuristic checks for page-load performance (CLS, LCP, stylesheet weight)"
)]
struct Args {
    /// HTML file to audit
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// CSS file to audit
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Write the JSON report snapshot, optionally to a custom path
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = REPORT_FILE_NAME)]
    json: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Suppress the console report
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let html = read_input(args.html.as_deref())?;
    let css = read_input(args.css.as_deref())?;

    let engine = AuditEngine::new();
    match engine.analyze(&html, &css) {
        Analysis::Empty => {
            // Nothing to export either; any prior snapshot is simply not replaced
            print!("{}", ConsoleReporter::format_empty());
        }
        Analysis::Report(report) => {
            if !args.quiet {
                Reporter::new(OutputFormat::Console).report(&report)?;
            }
            if let Some(path) = args.json {
                let format = if args.pretty {
                    OutputFormat::JsonPretty
                } else {
                    OutputFormat::Json
                };
                Reporter::new(format)
                    .write_to_file(&report, &path)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                tracing::info!(path = %path.display(), "report written");
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
        }
        None => Ok(String::new()),
    }
}
