//! Term extraction, grade conversion, and GPA aggregation.
//!
//! Each raw term chunk produced by [`crate::segment`] is turned into a
//! [`types::TermRecord`] with its course rows converted to grade points and
//! weighted into a term GPA. The per-term sums then roll up into the
//! cumulative GPA of a [`types::TranscriptSummary`].

pub mod aggregate;
pub mod grade;
pub mod term;
pub mod types;
pub mod utility;
