//! Output formatting and persistence for parsed transcripts.
//!
//! Supports debug logging, JSON serialization, and CSV append.

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::TranscriptSummary;
use crate::stats::TermStats;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &TranscriptSummary) {
    debug!("{:#?}", summary);
}

/// Serializes a summary as pretty-printed JSON.
pub fn to_json(summary: &TranscriptSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Appends one row per [`TermStats`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, rows: &[TermStats]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = rows.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
