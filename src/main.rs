//! CLI entry point for the transcript GPA calculator.
//!
//! Provides subcommands for printing a GPA report from a transcript,
//! exporting per-term rows to CSV, and converting a single percentage.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use transcript_gpa::{
    analyzers::{grade::to_grade_points, types::TranscriptSummary},
    fetch::load_source,
    output::{append_records, print_pretty, to_json},
    parser::parse_transcript,
    report::{PARSE_FAILURE_MESSAGE, build_report},
    stats::TermStats,
};

#[derive(Parser)]
#[command(name = "transcript_gpa")]
#[command(about = "Compute term and cumulative GPA from an unofficial transcript", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a GPA report for a transcript
    Report {
        /// Path to transcript text, URL to fetch, or "-" for stdin
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Append one CSV row per term to a file
    Export {
        /// Path to transcript text, URL to fetch, or "-" for stdin
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to append results to
        #[arg(short, long, default_value = "terms.csv")]
        output: String,
    },
    /// Convert a percentage grade to grade points
    Convert {
        /// Percentage grade (0-100)
        percent: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/transcript_gpa.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("transcript_gpa.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { source, format } => {
            let text = load_source(&source).await?;
            let Some(summary) = parse_or_report(&text) else {
                return Ok(ExitCode::FAILURE);
            };
            print_pretty(&summary);

            match format {
                Format::Text => print!("{}", build_report(&summary)),
                Format::Json => println!("{}", to_json(&summary)?),
            }
        }
        Commands::Export { source, output } => {
            let text = load_source(&source).await?;
            let Some(summary) = parse_or_report(&text) else {
                return Ok(ExitCode::FAILURE);
            };
            let rows = TermStats::from_summary(&summary);

            append_records(&output, &rows)?;
            info!(output = %output, rows = rows.len(), "Term rows exported");
        }
        Commands::Convert { percent } => {
            println!("{:.1}", to_grade_points(percent));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Parses transcript text. On failure the cause goes to the debug log and
/// only the generic failure message reaches the user.
fn parse_or_report(text: &str) -> Option<TranscriptSummary> {
    match parse_transcript(text) {
        Ok(summary) => Some(summary),
        Err(e) => {
            debug!(error = %e, "Transcript parse failed");
            eprintln!("{PARSE_FAILURE_MESSAGE}");
            None
        }
    }
}
