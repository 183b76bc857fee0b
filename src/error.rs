//! Errors raised by the transcript parser.

/// Conditions that make a parsed summary meaningless.
///
/// Everything else (bad grades, missing student id, unrecognised term
/// blocks) is tolerated by omission rather than reported.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("transcript has no \"Program: \" line")]
    MissingProgram,
}
