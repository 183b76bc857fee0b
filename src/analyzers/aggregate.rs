use crate::analyzers::types::{CourseRecord, TermRecord};
use crate::analyzers::utility::weighted_average;

/// Running weighted grade-point and credit totals.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GpaTotals {
    pub weighted_gpa_sum: f64,
    pub credit_sum: f64,
}

impl GpaTotals {
    /// Sums grade points times weight over the courses that count toward
    /// GPA. Other courses contribute nothing, whatever their grade.
    pub fn from_courses(courses: &[CourseRecord]) -> Self {
        courses
            .iter()
            .filter(|c| c.counts_toward_gpa)
            .fold(Self::default(), |acc, c| Self {
                weighted_gpa_sum: acc.weighted_gpa_sum + c.grade_points.unwrap_or(0.0) * c.weight,
                credit_sum: acc.credit_sum + c.weight,
            })
    }

    /// Adds up the stored totals of every term.
    pub fn from_terms(terms: &[TermRecord]) -> Self {
        terms.iter().fold(Self::default(), |acc, t| Self {
            weighted_gpa_sum: acc.weighted_gpa_sum + t.weighted_gpa_sum,
            credit_sum: acc.credit_sum + t.credit_sum,
        })
    }

    pub fn gpa(&self) -> f64 {
        weighted_average(self.weighted_gpa_sum, self.credit_sum)
    }
}
