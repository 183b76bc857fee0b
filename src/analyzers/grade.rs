/// Converts a percentage grade into grade points on a 4.0 scale.
///
/// | Range  | Points |
/// |--------|--------|
/// | >= 90  | 4.0    |
/// | >= 85  | 3.9    |
/// | >= 80  | 3.7    |
/// | >= 77  | 3.3    |
/// | >= 73  | 3.0    |
/// | >= 70  | 2.7    |
/// | >= 67  | 2.3    |
/// | >= 63  | 2.0    |
/// | >= 60  | 1.7    |
/// | >= 57  | 1.3    |
/// | >= 53  | 1.0    |
/// | >= 50  | 0.7    |
/// | < 50   | 0.0    |
pub fn to_grade_points(percent: u32) -> f64 {
    match percent {
        p if p >= 90 => 4.0,
        p if p >= 85 => 3.9,
        p if p >= 80 => 3.7,
        p if p >= 77 => 3.3,
        p if p >= 73 => 3.0,
        p if p >= 70 => 2.7,
        p if p >= 67 => 2.3,
        p if p >= 63 => 2.0,
        p if p >= 60 => 1.7,
        p if p >= 57 => 1.3,
        p if p >= 53 => 1.0,
        p if p >= 50 => 0.7,
        _ => 0.0,
    }
}
