//! Extraction of term headers and course rows from a raw term chunk.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::analyzers::aggregate::GpaTotals;
use crate::analyzers::grade::to_grade_points;
use crate::analyzers::types::{CourseRecord, TermRecord};

static TERM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:Spring|Fall|Winter) [0-9]{4})\s+([0-9][AB])").unwrap()
});

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

// Course codes are only recognised at the start of a line. The content before
// the details must end on a non-digit so a multi-digit weight stays whole.
static COURSE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([A-Z]+ [0-9]{3}[A-Z]?).*[^0-9](([0-9]+\.[0-9]+)/[0-9]+\.[0-9]+\s[\s\w/.]+)$",
    )
    .unwrap()
});

/// Parses one term chunk.
///
/// Returns `None` when the chunk does not open with a `<Term> <year>`
/// header followed by a program-year code such as `2A`. Transfer-credit
/// blocks and chunks cut at a term name inside a course title end up here.
pub fn extract_term(chunk: &str) -> Option<TermRecord> {
    let Some(caps) = TERM_HEADER.captures(chunk) else {
        let prefix: String = chunk.chars().take(40).collect();
        debug!(prefix = %prefix, "Chunk has no term header, skipping");
        return None;
    };

    let term_label = caps[1].to_string();
    let program_year_id = caps[2].to_string();
    let rest = &chunk[term_label.len()..];

    let courses: Vec<CourseRecord> = LINE_BREAK.split(rest).filter_map(parse_course_line).collect();
    let totals = GpaTotals::from_courses(&courses);

    debug!(
        term = %term_label,
        program_year = %program_year_id,
        courses = courses.len(),
        credit_sum = totals.credit_sum,
        "Term extracted"
    );

    Some(TermRecord {
        term_label,
        program_year_id,
        courses,
        weighted_gpa_sum: totals.weighted_gpa_sum,
        credit_sum: totals.credit_sum,
        term_gpa: totals.gpa(),
    })
}

/// Parses a single course row, or returns `None` for any other line.
///
/// The trailing details field reads
/// `<weight>/<max weight> <percent> <credit Y/N> <in GPA Y/N>`.
pub fn parse_course_line(line: &str) -> Option<CourseRecord> {
    let caps = COURSE_ROW.captures(line)?;

    let course_code = caps[1].to_string();
    let weight: f64 = caps[3].parse().ok()?;

    let details: Vec<&str> = caps[2].split_whitespace().collect();
    let percent_grade = details.get(1).and_then(|t| leading_int(t));
    let counts_for_credit = details.get(2) == Some(&"Y");
    let counts_toward_gpa = details.get(3) == Some(&"Y");

    // A counted course without a numeric grade scores zero.
    let grade_points =
        counts_toward_gpa.then(|| percent_grade.map(to_grade_points).unwrap_or(0.0));

    Some(CourseRecord {
        course_code,
        percent_grade,
        weight,
        counts_for_credit,
        counts_toward_gpa,
        grade_points,
    })
}

/// Reads the run of ASCII digits at the start of `token`, so `"85"` and
/// `"85*"` both give 85 while `"CR"` gives `None`.
fn leading_int(token: &str) -> Option<u32> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_line_counted() {
        let course = parse_course_line("CS 341 Algorithms  0.50/0.50 85 Y Y").unwrap();

        assert_eq!(course.course_code, "CS 341");
        assert_eq!(course.percent_grade, Some(85));
        assert_eq!(course.weight, 0.5);
        assert!(course.counts_for_credit);
        assert!(course.counts_toward_gpa);
        assert_eq!(course.grade_points, Some(3.9));
    }

    #[test]
    fn test_parse_course_line_leading_whitespace_and_suffix() {
        let course = parse_course_line("   PHYS 121L Mechanics Lab 0.25/0.25 72 Y Y").unwrap();

        assert_eq!(course.course_code, "PHYS 121L");
        assert_eq!(course.weight, 0.25);
        assert_eq!(course.grade_points, Some(2.7));
    }

    #[test]
    fn test_parse_course_line_not_in_gpa() {
        let course = parse_course_line("COOP 001 Co-operative Work Term 0.00/0.00 CR Y N").unwrap();
        assert_eq!(course.course_code, "COOP 001");
        assert_eq!(course.percent_grade, None);
        assert!(course.counts_for_credit);
        assert!(!course.counts_toward_gpa);
        assert_eq!(course.grade_points, None);
    }

    #[test]
    fn test_parse_course_line_missing_flags() {
        let course = parse_course_line("MATH 135 Algebra 0.50/0.50 91").unwrap();

        assert_eq!(course.percent_grade, Some(91));
        assert!(!course.counts_for_credit);
        assert!(!course.counts_toward_gpa);
        assert_eq!(course.grade_points, None);
    }

    #[test]
    fn test_parse_course_line_counted_without_grade_scores_zero() {
        let course = parse_course_line("ECON 101 Micro 0.50/0.50 INC N Y").unwrap();

        assert_eq!(course.percent_grade, None);
        assert_eq!(course.grade_points, Some(0.0));
    }

    #[test]
    fn test_parse_course_line_multi_digit_weight() {
        let course = parse_course_line("THES 799 Thesis 10.00/10.00 88 Y Y").unwrap();
        assert_eq!(course.weight, 10.0);
        assert_eq!(course.percent_grade, Some(88));
    }

    #[test]
    fn test_parse_course_line_weight_glued_to_description() {
        let course = parse_course_line("CS 100 Lab2B0.50/0.50 85 Y Y").unwrap();
        assert_eq!(course.weight, 0.5);
        assert_eq!(course.percent_grade, Some(85));

        let course = parse_course_line("CS 100 Intro_0.50/0.50 85 Y Y").unwrap();
        assert_eq!(course.weight, 0.5);
        assert_eq!(course.grade_points, Some(3.9));
    }

    #[test]
    fn test_parse_course_line_ignores_other_lines() {
        assert!(parse_course_line("").is_none());
        assert!(parse_course_line("Course  Description  Attempted/Earned  Grade").is_none());
        assert!(parse_course_line("Term Average: 81.2").is_none());
        assert!(parse_course_line("cs 341 lowercase 0.50/0.50 85 Y Y").is_none());
    }

    #[test]
    fn test_extract_term() {
        let chunk = "Fall 2021  2A\r\nCourse Description\r\nCS 341 Algorithms  0.50/0.50 85 Y Y\r\nCS 350 Operating Systems 0.50/0.50 74 Y Y\r\n";
        let term = extract_term(chunk).unwrap();

        assert_eq!(term.term_label, "Fall 2021");
        assert_eq!(term.program_year_id, "2A");
        assert_eq!(term.courses.len(), 2);
        assert!((term.weighted_gpa_sum - (3.9 * 0.5 + 3.0 * 0.5)).abs() < 1e-9);
        assert!((term.credit_sum - 1.0).abs() < 1e-9);
        assert!((term.term_gpa - 3.45).abs() < 1e-9);
    }

    #[test]
    fn test_extract_term_mixed_line_endings() {
        let chunk = "Winter 2022 2B\rSTAT 230 Probability 0.50/0.50 90 Y Y\nSTAT 231 Statistics 0.50/0.50 60 Y Y";
        let term = extract_term(chunk).unwrap();

        assert_eq!(term.courses.len(), 2);
        assert!((term.term_gpa - (4.0 + 1.7) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_extract_term_without_counted_courses() {
        let chunk = "Spring 2022  3A\nCOOP 002 Work Term 0.00/0.00 CR Y N\n";
        let term = extract_term(chunk).unwrap();

        assert_eq!(term.courses.len(), 1);
        assert_eq!(term.credit_sum, 0.0);
        assert_eq!(term.term_gpa, 0.0);
    }

    #[test]
    fn test_extract_term_skips_headerless_chunks() {
        assert!(extract_term("Fall Transfer Credit\nMATH 1XX 0.50/0.50 TR Y N\n").is_none());
        assert!(extract_term("Fall 2021 Co-op\n").is_none());
        assert!(extract_term("Fall 21  2A\n").is_none());
        assert!(extract_term("Fall 2021  2C\n").is_none());
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("85"), Some(85));
        assert_eq!(leading_int("85*"), Some(85));
        assert_eq!(leading_int("CR"), None);
        assert_eq!(leading_int(""), None);
    }
}
