use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::types::{TermRecord, TranscriptSummary};

/// One flattened CSV row per parsed term.
#[derive(Debug, Default, Serialize)]
pub struct TermStats {
    pub timestamp: DateTime<Utc>,
    pub student_id: Option<u64>,
    pub program_name: String,

    // term identity
    pub term_label: String,
    pub program_year_id: String,

    // course counts
    pub courses: usize,
    pub courses_in_gpa: usize,
    pub credits_earned: f64,

    // weighted totals
    pub weighted_gpa_sum: f64,
    pub credit_sum: f64,
    pub term_gpa: f64,
    pub cumulative_gpa: f64,
}

impl TermStats {
    pub fn from_term(term: &TermRecord) -> Self {
        TermStats {
            timestamp: Utc::now(),
            term_label: term.term_label.clone(),
            program_year_id: term.program_year_id.clone(),
            courses: term.courses.len(),
            courses_in_gpa: term.courses.iter().filter(|c| c.counts_toward_gpa).count(),
            credits_earned: term
                .courses
                .iter()
                .filter(|c| c.counts_for_credit)
                .map(|c| c.weight)
                .sum(),
            weighted_gpa_sum: term.weighted_gpa_sum,
            credit_sum: term.credit_sum,
            term_gpa: term.term_gpa,
            ..Default::default()
        }
    }

    /// Builds one row per term, each stamped with the transcript's student
    /// and program details and its cumulative GPA.
    pub fn from_summary(summary: &TranscriptSummary) -> Vec<Self> {
        summary
            .term_records
            .iter()
            .map(|term| {
                Self::from_term(term).with_transcript_info(
                    summary.student_id,
                    &summary.program_name,
                    summary.cumulative_gpa,
                )
            })
            .collect()
    }

    /// Set transcript-wide metadata
    pub fn with_transcript_info(
        mut self,
        student_id: Option<u64>,
        program_name: &str,
        cumulative_gpa: f64,
    ) -> Self {
        self.student_id = student_id;
        self.program_name = program_name.to_string();
        self.cumulative_gpa = cumulative_gpa;
        self
    }
}
