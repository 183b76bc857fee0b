//! Data types produced by the transcript parser.

use serde::Serialize;

/// One course row from a term block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    pub course_code: String,
    /// `None` when the grade column is not a number (e.g. `CR`, `INC`).
    pub percent_grade: Option<u32>,
    pub weight: f64,
    pub counts_for_credit: bool,
    pub counts_toward_gpa: bool,
    /// `None` when the course does not count toward GPA.
    pub grade_points: Option<f64>,
}

/// A recognised term block and its weighted totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRecord {
    pub term_label: String,
    pub program_year_id: String,
    pub courses: Vec<CourseRecord>,
    pub weighted_gpa_sum: f64,
    pub credit_sum: f64,
    pub term_gpa: f64,
}

/// Everything extracted from a single transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSummary {
    pub student_id: Option<u64>,
    pub program_name: String,
    pub term_records: Vec<TermRecord>,
    pub cumulative_gpa: f64,
}
