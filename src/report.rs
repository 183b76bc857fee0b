use std::fmt::Write;

use crate::analyzers::types::{CourseRecord, TranscriptSummary};

/// Shown in place of a report when parsing fails.
pub const PARSE_FAILURE_MESSAGE: &str = "An error has occurred while parsing your transcript. \
     Make sure you are selecting your transcript contents when you are copying the page.";

/// Renders a plain-text GPA report.
///
/// Terms with a term GPA of exactly zero (co-op or credit-only terms) are
/// left out of the report.
pub fn build_report(summary: &TranscriptSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Your cumulative GPA is: {:.2}",
        summary.cumulative_gpa
    );
    let _ = writeln!(
        output,
        "Student ID: {}",
        summary
            .student_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    let _ = writeln!(output, "Program: {}", summary.program_name);

    for term in summary.term_records.iter().filter(|t| t.term_gpa != 0.0) {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {} - {}", term.program_year_id, term.term_label);
        let _ = writeln!(
            output,
            "{:<12} {:>7} {:>6} {:>5} {:>7}",
            "Course", "Percent", "Weight", "GPA", "In GPA?"
        );

        for course in &term.courses {
            let _ = writeln!(output, "{}", course_row(course));
        }

        let _ = writeln!(output, "Term GPA: {:.2}", term.term_gpa);
    }

    output
}

fn course_row(course: &CourseRecord) -> String {
    let percent = course
        .percent_grade
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let gpa = course
        .grade_points
        .map(|g| format!("{g:.2}"))
        .unwrap_or_else(|| "N/A".to_string());
    let in_gpa = if course.counts_toward_gpa { "Y" } else { "N" };

    format!(
        "{:<12} {:>7} {:>6.2} {:>5} {:>7}",
        course.course_code, percent, course.weight, gpa, in_gpa
    )
}
