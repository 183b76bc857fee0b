//! Locates the transcript body and splits it into raw per-term chunks.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::TranscriptError;

/// Text that precedes the transcript body in the export.
pub const BEGIN_MARKER: &str = "UNIVERSITY  OF  WATERLOO  UNDERGRADUATE  UNOFFICIAL  TRANSCRIPT";

/// Text that follows the transcript body in the export.
pub const END_MARKER: &str = "End of Transcript";

static STUDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Student ID: ([0-9]+)").unwrap());

static PROGRAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Program: (.*?)\n").unwrap());

// No word-boundary check: a course title containing one of these words also
// starts a new chunk. Such chunks fail the header match and are skipped.
static TERM_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Spring|Fall|Winter").unwrap());

/// The transcript split into its header fields and raw term chunks.
///
/// All slices borrow from the input text.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments<'a> {
    pub body: &'a str,
    pub student_id: Option<u64>,
    pub program_name: String,
    pub term_chunks: Vec<&'a str>,
}

/// Segments raw transcript text.
///
/// # Errors
///
/// Returns [`TranscriptError::MissingProgram`] if the body has no
/// `Program: ` line.
pub fn segment(raw: &str) -> Result<Segments<'_>, TranscriptError> {
    let body = transcript_body(raw);

    let student_id = STUDENT_ID.captures(body).and_then(|caps| {
        let digits = &caps[1];
        match digits.parse::<u64>() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(digits, error = %e, "Student ID out of range, leaving unset");
                None
            }
        }
    });

    let program_name = PROGRAM
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .ok_or(TranscriptError::MissingProgram)?;

    let term_chunks = split_terms(body);
    debug!(
        body_len = body.len(),
        chunks = term_chunks.len(),
        has_student_id = student_id.is_some(),
        "Transcript segmented"
    );

    Ok(Segments {
        body,
        student_id,
        program_name,
        term_chunks,
    })
}

/// Returns the text between the begin and end markers.
///
/// A missing begin marker starts the body at the beginning of the input; a
/// missing end marker runs it to the end. The end marker is only searched
/// for after the begin marker.
pub fn transcript_body(raw: &str) -> &str {
    let start = raw
        .find(BEGIN_MARKER)
        .map(|i| i + BEGIN_MARKER.len())
        .unwrap_or(0);

    let rest = &raw[start..];
    match rest.find(END_MARKER) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Splits the body at every term name. Text before the first term name is
/// dropped.
pub fn split_terms(body: &str) -> Vec<&str> {
    let starts: Vec<usize> = TERM_NAME.find_iter(body).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(body.len());
            &body[start..end]
        })
        .collect()
}
