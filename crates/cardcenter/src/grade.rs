//! PSA-style centering grade from front/back limiting ratios.
//!
//! The front face carries the grade; the back only gates the top grades.
//! Rules are checked top-down and the first match wins.

use serde::Serialize;

/// Minimum limiting percentages required for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeRule {
    pub grade: u8,
    pub min_front: f64,
    /// `None` leaves the back face unconstrained.
    pub min_back: Option<f64>,
}

impl GradeRule {
    pub fn matches(&self, front: f64, back: f64) -> bool {
        front >= self.min_front && self.min_back.map_or(true, |min| back >= min)
    }
}

/// Ordered centering table, best grade first.
pub const CENTERING_RULES: [GradeRule; 6] = [
    GradeRule {
        grade: 10,
        min_front: 45.0,
        min_back: Some(25.0),
    },
    GradeRule {
        grade: 9,
        min_front: 40.0,
        min_back: Some(20.0),
    },
    GradeRule {
        grade: 8,
        min_front: 35.0,
        min_back: Some(15.0),
    },
    GradeRule {
        grade: 7,
        min_front: 30.0,
        min_back: Some(10.0),
    },
    GradeRule {
        grade: 6,
        min_front: 25.0,
        min_back: Some(10.0),
    },
    GradeRule {
        grade: 5,
        min_front: 20.0,
        min_back: None,
    },
];

/// Grade when no rule matches. Grades below this are not distinguished.
pub const FLOOR_GRADE: u8 = 4;

/// Grade for a pair of limiting percentages.
pub fn map_grade(front: f64, back: f64) -> u8 {
    CENTERING_RULES
        .iter()
        .find(|rule| rule.matches(front, back))
        .map_or(FLOOR_GRADE, |rule| rule.grade)
}
