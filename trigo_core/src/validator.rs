//! # Answer Validator
//!
//! Compares free-text student answers against a solved triangle. This is
//! the system boundary where locale-tolerant parsing lives: commas are
//! accepted as decimal separators here (and only here, plus the export
//! formatting) so the solver stays strictly numeric.
//!
//! Sides are checked with an absolute tolerance of 0.2 — generated side
//! lengths are integer-ish draws, so a fixed slack is fairer than a
//! relative one. Angles compare by truncated integer part only; fractional
//! degrees are ignored by design. Missing or unparseable input counts as
//! 0 and is compared normally, so it is simply marked wrong rather than
//! flagged specially.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::solver::TriangleData;

/// Absolute tolerance for side answers
pub const SIDE_TOLERANCE: f64 = 0.2;

/// The six answerable fields of a triangle.
///
/// Serialized as the short field keys used throughout the data contract
/// (`"a"`, `"A"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerField {
    #[serde(rename = "a")]
    SideA,
    #[serde(rename = "b")]
    SideB,
    #[serde(rename = "c")]
    SideC,
    #[serde(rename = "A")]
    AngleA,
    #[serde(rename = "B")]
    AngleB,
    #[serde(rename = "C")]
    AngleC,
}

impl AnswerField {
    /// All six fields in check order
    pub const ALL: [AnswerField; 6] = [
        AnswerField::SideA,
        AnswerField::SideB,
        AnswerField::SideC,
        AnswerField::AngleA,
        AnswerField::AngleB,
        AnswerField::AngleC,
    ];

    /// Whether this field is a side (tolerance check) rather than an angle
    /// (integer-part check)
    pub fn is_side(self) -> bool {
        matches!(
            self,
            AnswerField::SideA | AnswerField::SideB | AnswerField::SideC
        )
    }

    /// The solved value this field is compared against
    pub fn solved_value(self, solution: &TriangleData) -> f64 {
        match self {
            AnswerField::SideA => solution.a,
            AnswerField::SideB => solution.b,
            AnswerField::SideC => solution.c,
            AnswerField::AngleA => solution.angle_a,
            AnswerField::AngleB => solution.angle_b,
            AnswerField::AngleC => solution.angle_c,
        }
    }
}

/// Parse a student's numeric text, accepting a comma as the decimal
/// separator. Anything unparseable (including empty input) becomes 0.
pub fn parse_answer(input: &str) -> f64 {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Check a full set of answers against a solution.
///
/// Every field in [`AnswerField::ALL`] gets a verdict; fields missing from
/// `answers` are treated as empty input.
pub fn check_answers(
    solution: &TriangleData,
    answers: &BTreeMap<AnswerField, String>,
) -> BTreeMap<AnswerField, bool> {
    AnswerField::ALL
        .iter()
        .map(|&field| {
            let given = answers.get(&field).map(String::as_str).unwrap_or("");
            (field, check_field(solution, field, given))
        })
        .collect()
}

/// Check a single field's answer text.
pub fn check_field(solution: &TriangleData, field: AnswerField, answer: &str) -> bool {
    let user = parse_answer(answer);
    let correct = field.solved_value(solution);
    if field.is_side() {
        (user - correct).abs() <= SIDE_TOLERANCE
    } else {
        user.trunc() == correct.trunc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve, TriangleMode};

    fn solution() -> TriangleData {
        // a=3, b=4, c=5, A=36.9, B=53.1, C=90
        solve(TriangleMode::Sss, 3.0, 4.0, 5.0)
    }

    #[test]
    fn test_parse_answer_locale_tolerant() {
        assert_eq!(parse_answer("3.5"), 3.5);
        assert_eq!(parse_answer("3,5"), 3.5);
        assert_eq!(parse_answer("  7,25 "), 7.25);
        assert_eq!(parse_answer(""), 0.0);
        assert_eq!(parse_answer("abc"), 0.0);
    }

    #[test]
    fn test_side_within_tolerance() {
        let t = solution();
        assert!(check_field(&t, AnswerField::SideA, "3"));
        assert!(check_field(&t, AnswerField::SideA, "3,1"));
        assert!(check_field(&t, AnswerField::SideA, "2.9"));
        assert!(!check_field(&t, AnswerField::SideA, "3.3"));
        assert!(!check_field(&t, AnswerField::SideA, "4"));
    }

    #[test]
    fn test_angle_integer_part_only() {
        let t = solution();
        // Solved A = 36.9: any 36.x is accepted, 37 is not
        assert!(check_field(&t, AnswerField::AngleA, "36"));
        assert!(check_field(&t, AnswerField::AngleA, "36,9"));
        assert!(check_field(&t, AnswerField::AngleA, "36.1"));
        assert!(!check_field(&t, AnswerField::AngleA, "37"));
        assert!(check_field(&t, AnswerField::AngleC, "90"));
    }

    #[test]
    fn test_missing_answer_is_wrong_not_flagged() {
        let t = solution();
        let results = check_answers(&t, &BTreeMap::new());
        assert_eq!(results.len(), 6);
        assert!(results.values().all(|&ok| !ok));
    }

    #[test]
    fn test_full_answer_set() {
        let t = solution();
        let answers: BTreeMap<AnswerField, String> = [
            (AnswerField::SideA, "3".to_string()),
            (AnswerField::SideB, "4,1".to_string()),
            (AnswerField::SideC, "5.05".to_string()),
            (AnswerField::AngleA, "36.5".to_string()),
            (AnswerField::AngleB, "53".to_string()),
            (AnswerField::AngleC, "89".to_string()),
        ]
        .into();
        let results = check_answers(&t, &answers);
        assert!(results[&AnswerField::SideA]);
        assert!(results[&AnswerField::SideB]);
        assert!(results[&AnswerField::SideC]);
        assert!(results[&AnswerField::AngleA]);
        assert!(results[&AnswerField::AngleB]);
        assert!(!results[&AnswerField::AngleC]);
    }

    #[test]
    fn test_field_serde_keys() {
        assert_eq!(serde_json::to_string(&AnswerField::SideA).unwrap(), "\"a\"");
        assert_eq!(
            serde_json::to_string(&AnswerField::AngleC).unwrap(),
            "\"C\""
        );
    }
}
