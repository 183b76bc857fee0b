//! Parser for the plain-text unofficial undergraduate transcript.

use tracing::info;

use crate::analyzers::aggregate::GpaTotals;
use crate::analyzers::term::extract_term;
use crate::analyzers::types::{TermRecord, TranscriptSummary};
use crate::error::TranscriptError;
use crate::segment::segment;

/// Parses a transcript into per-term records and a cumulative GPA.
///
/// Term chunks without a recognisable header are dropped; malformed course
/// rows are ignored.
///
/// # Errors
///
/// Returns [`TranscriptError::MissingProgram`] if the transcript has no
/// program line.
#[tracing::instrument(skip_all, fields(input_len = raw.len()))]
pub fn parse_transcript(raw: &str) -> Result<TranscriptSummary, TranscriptError> {
    let segments = segment(raw)?;

    let term_records: Vec<TermRecord> = segments
        .term_chunks
        .iter()
        .filter_map(|chunk| extract_term(chunk))
        .collect();

    let cumulative_gpa = GpaTotals::from_terms(&term_records).gpa();

    info!(
        chunks = segments.term_chunks.len(),
        terms = term_records.len(),
        cumulative_gpa,
        "Transcript parsed"
    );

    Ok(TranscriptSummary {
        student_id: segments.student_id,
        program_name: segments.program_name,
        term_records,
        cumulative_gpa,
    })
}
