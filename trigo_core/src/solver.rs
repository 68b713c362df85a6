//! # Triangle Solver
//!
//! Solves a triangle from one of eight input configurations: four
//! right-triangle sub-cases plus the classic SSS, SAS, ASA, and AAS oblique
//! cases. The solver is a pure function: same inputs, same output, no hidden
//! state, no I/O.
//!
//! ## Contract
//!
//! [`solve`] never returns an error to the caller. Every failure path — bad
//! magnitudes, impossible geometry, trigonometric domain errors — is folded
//! into a [`TriangleData`] with `valid = false` and a human-readable
//! `error` message. Callers must branch on `valid` before reading any
//! numeric field; on an invalid result all numerics are zero.
//!
//! ## Conventions
//!
//! Sides `a`, `b`, `c` are opposite vertices `A`, `B`, `C`. All angles are
//! in degrees. In right-triangle modes the right angle is always `C`, so
//! `c` is the hypotenuse. Every stored numeric passes through the display
//! rounding of [`crate::units::round_display`] before it lands in the
//! result.
//!
//! ## Example
//!
//! ```rust
//! use trigo_core::solver::{solve, TriangleMode};
//!
//! let t = solve(TriangleMode::Sss, 3.0, 4.0, 5.0);
//! assert!(t.valid);
//! assert_eq!(t.angle_c, 90.0);
//! assert_eq!(t.area, 6.0);
//! assert_eq!(t.perimeter, 12.0);
//!
//! let bad = solve(TriangleMode::Sss, 1.0, 1.0, 5.0);
//! assert!(!bad.valid);
//! assert!(bad.error.is_some());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{TrigoError, TrigoResult};
use crate::units::{round_display, Degrees};

/// Safety bound on any supplied input value
pub const MAX_INPUT: f64 = 1_000_000.0;

/// Tolerance on the A + B + C = 180 check, in degrees
pub const ANGLE_SUM_TOLERANCE: f64 = 0.5;

/// The eight supported input configurations.
///
/// Each variant fixes which three scalars `solve` expects and what they
/// mean. The third value is ignored for the right-triangle modes, which
/// are fully determined by two scalars.
///
/// Serialized tags match the share-code wire format (`"SSS"`,
/// `"Right_HypCat"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleMode {
    /// Right triangle from two legs (v1 = a, v2 = b)
    Right,
    /// Right triangle from hypotenuse and leg (v1 = c, v2 = a)
    #[serde(rename = "Right_HypCat")]
    RightHypCat,
    /// Right triangle from leg and its opposite acute angle (v1 = a, v2 = A)
    #[serde(rename = "Right_CatAng")]
    RightCatAng,
    /// Right triangle from hypotenuse and acute angle (v1 = c, v2 = A)
    #[serde(rename = "Right_HypAng")]
    RightHypAng,
    /// Three sides (v1 = a, v2 = b, v3 = c)
    #[serde(rename = "SSS")]
    Sss,
    /// Two sides and the included angle (v1 = b, v2 = A, v3 = c)
    #[serde(rename = "SAS")]
    Sas,
    /// Two angles and the included side (v1 = A, v2 = c, v3 = B)
    #[serde(rename = "ASA")]
    Asa,
    /// Two angles and a non-included side (v1 = A, v2 = B, v3 = a)
    #[serde(rename = "AAS")]
    Aas,
}

impl TriangleMode {
    /// All eight modes
    pub const ALL: [TriangleMode; 8] = [
        TriangleMode::Right,
        TriangleMode::RightHypCat,
        TriangleMode::RightCatAng,
        TriangleMode::RightHypAng,
        TriangleMode::Sss,
        TriangleMode::Sas,
        TriangleMode::Asa,
        TriangleMode::Aas,
    ];

    /// The four oblique (law-of-sines/cosines) modes
    pub const OBLIQUE: [TriangleMode; 4] = [
        TriangleMode::Sss,
        TriangleMode::Sas,
        TriangleMode::Asa,
        TriangleMode::Aas,
    ];

    /// Whether this is one of the right-triangle sub-cases
    pub fn is_right(self) -> bool {
        matches!(
            self,
            TriangleMode::Right
                | TriangleMode::RightHypCat
                | TriangleMode::RightCatAng
                | TriangleMode::RightHypAng
        )
    }

    /// Whether the mode consumes a third input value
    pub fn requires_third_value(self) -> bool {
        !self.is_right()
    }

    /// The serialized tag for this mode (`"SSS"`, `"Right_HypCat"`, ...)
    pub fn tag(self) -> &'static str {
        match self {
            TriangleMode::Right => "Right",
            TriangleMode::RightHypCat => "Right_HypCat",
            TriangleMode::RightCatAng => "Right_CatAng",
            TriangleMode::RightHypAng => "Right_HypAng",
            TriangleMode::Sss => "SSS",
            TriangleMode::Sas => "SAS",
            TriangleMode::Asa => "ASA",
            TriangleMode::Aas => "AAS",
        }
    }
}

impl fmt::Display for TriangleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lengths of one cevian family (heights, medians, or bisectors), keyed by
/// the side each cevian lands on. The cevian for key `a` runs from vertex
/// `A` to side `a`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CevianSet {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl CevianSet {
    /// All-zero set, used on invalid results
    pub const ZERO: CevianSet = CevianSet {
        a: 0.0,
        b: 0.0,
        c: 0.0,
    };
}

/// A fully solved triangle.
///
/// Immutable once produced. When `valid` is true, all sides and angles are
/// finite and strictly positive, the angles sum to 180 degrees within half
/// a degree, and the triangle inequality holds. When `valid` is false,
/// every numeric field is zero and `error` carries the reason.
///
/// ## JSON Example
///
/// ```json
/// {
///   "a": 3.0, "b": 4.0, "c": 5.0,
///   "A": 36.9, "B": 53.1, "C": 90.0,
///   "area": 6.0, "perimeter": 12.0, "height": 2.4,
///   "heights": { "a": 4.0, "b": 3.0, "c": 2.4 },
///   "medians": { "a": 4.3, "b": 3.6, "c": 2.5 },
///   "bisectors": { "a": 4.2, "b": 3.4, "c": 2.4 },
///   "valid": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleData {
    /// Side opposite vertex A
    pub a: f64,
    /// Side opposite vertex B
    pub b: f64,
    /// Side opposite vertex C (the hypotenuse in right-triangle modes)
    pub c: f64,

    /// Angle at vertex A, degrees
    #[serde(rename = "A")]
    pub angle_a: f64,
    /// Angle at vertex B, degrees
    #[serde(rename = "B")]
    pub angle_b: f64,
    /// Angle at vertex C, degrees
    #[serde(rename = "C")]
    pub angle_c: f64,

    /// Triangle area (Heron's formula)
    pub area: f64,
    /// Sum of the three sides
    pub perimeter: f64,
    /// Altitude to side c (the drawing base)
    pub height: f64,

    /// Altitude lengths per side
    pub heights: CevianSet,
    /// Median lengths per side
    pub medians: CevianSet,
    /// Internal angle-bisector lengths per side
    pub bisectors: CevianSet,

    /// Whether this result describes a real triangle
    pub valid: bool,
    /// Failure reason, present only when `valid` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TriangleData {
    /// Build the all-zero invalid result carrying the failure message.
    pub fn invalid(err: &TrigoError) -> Self {
        TriangleData {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            angle_a: 0.0,
            angle_b: 0.0,
            angle_c: 0.0,
            area: 0.0,
            perimeter: 0.0,
            height: 0.0,
            heights: CevianSet::ZERO,
            medians: CevianSet::ZERO,
            bisectors: CevianSet::ZERO,
            valid: false,
            error: Some(err.to_string()),
        }
    }
}

/// Solve a triangle from three numeric inputs interpreted per `mode`.
///
/// This is a pure, referentially transparent function. It never panics and
/// never returns `Err`: every failure becomes a `valid = false` result with
/// a descriptive message. `v3` is ignored for the right-triangle modes.
///
/// # Example
///
/// ```rust
/// use trigo_core::solver::{solve, TriangleMode};
///
/// // b = 5, included angle A = 90, c = 5
/// let t = solve(TriangleMode::Sas, 5.0, 90.0, 5.0);
/// assert!(t.valid);
/// assert_eq!(t.a, 7.1); // sqrt(50), display-rounded
/// assert_eq!(t.angle_b, 45.0);
/// ```
pub fn solve(mode: TriangleMode, v1: f64, v2: f64, v3: f64) -> TriangleData {
    match solve_inner(mode, v1, v2, v3) {
        Ok(data) => data,
        Err(err) => TriangleData::invalid(&err),
    }
}

/// Raw sides and angles before sanity checks and rounding.
struct RawTriangle {
    a: f64,
    b: f64,
    c: f64,
    angle_a: f64,
    angle_b: f64,
    angle_c: f64,
}

fn solve_inner(mode: TriangleMode, v1: f64, v2: f64, v3: f64) -> TrigoResult<TriangleData> {
    // Magnitude bound first, then positivity. NaN inputs sail through both
    // comparisons and get caught by the finiteness check after solving.
    if v1 > MAX_INPUT || v2 > MAX_INPUT || (mode.requires_third_value() && v3 > MAX_INPUT) {
        return Err(TrigoError::ValuesTooLarge);
    }
    if v1 <= 0.0 || v2 <= 0.0 {
        return Err(TrigoError::NonPositiveInput);
    }
    if mode.requires_third_value() && v3 <= 0.0 {
        return Err(TrigoError::NonPositiveInput);
    }

    let raw = match mode {
        TriangleMode::Sss => solve_sss(v1, v2, v3)?,
        TriangleMode::Sas => solve_sas(v1, v2, v3)?,
        TriangleMode::Asa => solve_asa(v1, v2, v3)?,
        TriangleMode::Aas => solve_aas(v1, v2, v3)?,
        TriangleMode::Right => solve_right_legs(v1, v2),
        TriangleMode::RightHypCat => solve_right_hyp_leg(v1, v2)?,
        TriangleMode::RightCatAng => solve_right_leg_angle(v1, v2)?,
        TriangleMode::RightHypAng => solve_right_hyp_angle(v1, v2)?,
    };

    sanity_check(&raw)?;
    Ok(finish(raw))
}

/// Three sides: law of cosines for A and B, remainder for C.
fn solve_sss(a: f64, b: f64, c: f64) -> TrigoResult<RawTriangle> {
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(TrigoError::TriangleInequality);
    }
    let angle_a = ((b * b + c * c - a * a) / (2.0 * b * c)).acos().to_degrees();
    let angle_b = ((a * a + c * c - b * b) / (2.0 * a * c)).acos().to_degrees();
    Ok(RawTriangle {
        a,
        b,
        c,
        angle_a,
        angle_b,
        angle_c: 180.0 - angle_a - angle_b,
    })
}

/// Two sides and the included angle: law of cosines for the third side,
/// then its inverse for angle B.
fn solve_sas(b: f64, angle_a: f64, c: f64) -> TrigoResult<RawTriangle> {
    if angle_a <= 0.0 || angle_a >= 180.0 {
        return Err(TrigoError::angle_not_in_open_180());
    }
    let a = (b * b + c * c - 2.0 * b * c * Degrees(angle_a).cos()).sqrt();
    let angle_b = ((a * a + c * c - b * b) / (2.0 * a * c)).acos().to_degrees();
    Ok(RawTriangle {
        a,
        b,
        c,
        angle_a,
        angle_b,
        angle_c: 180.0 - angle_a - angle_b,
    })
}

/// Two angles and the included side c: remainder angle, then law of sines.
fn solve_asa(angle_a: f64, c: f64, angle_b: f64) -> TrigoResult<RawTriangle> {
    check_given_angle_pair(angle_a, angle_b)?;
    let angle_c = 180.0 - angle_a - angle_b;
    let a = c * Degrees(angle_a).sin() / Degrees(angle_c).sin();
    let b = c * Degrees(angle_b).sin() / Degrees(angle_c).sin();
    Ok(RawTriangle {
        a,
        b,
        c,
        angle_a,
        angle_b,
        angle_c,
    })
}

/// Two angles and side a (opposite the first): remainder angle, law of sines.
fn solve_aas(angle_a: f64, angle_b: f64, a: f64) -> TrigoResult<RawTriangle> {
    check_given_angle_pair(angle_a, angle_b)?;
    let angle_c = 180.0 - angle_a - angle_b;
    let b = a * Degrees(angle_b).sin() / Degrees(angle_a).sin();
    let c = a * Degrees(angle_c).sin() / Degrees(angle_a).sin();
    Ok(RawTriangle {
        a,
        b,
        c,
        angle_a,
        angle_b,
        angle_c,
    })
}

fn check_given_angle_pair(angle_a: f64, angle_b: f64) -> TrigoResult<()> {
    if angle_a <= 0.0 || angle_a >= 180.0 || angle_b <= 0.0 || angle_b >= 180.0 {
        return Err(TrigoError::angle_not_in_open_180());
    }
    if angle_a + angle_b >= 180.0 {
        return Err(TrigoError::AngleSumExceeded);
    }
    Ok(())
}

/// Two legs: Pythagoras for the hypotenuse, arctangent for angle A.
fn solve_right_legs(a: f64, b: f64) -> RawTriangle {
    let angle_a = (a / b).atan().to_degrees();
    RawTriangle {
        a,
        b,
        c: (a * a + b * b).sqrt(),
        angle_a,
        angle_b: 90.0 - angle_a,
        angle_c: 90.0,
    }
}

/// Hypotenuse and one leg: Pythagoras for the other leg, arcsine for A.
fn solve_right_hyp_leg(c: f64, a: f64) -> TrigoResult<RawTriangle> {
    if a >= c {
        return Err(TrigoError::LegNotLessThanHypotenuse);
    }
    let angle_a = (a / c).asin().to_degrees();
    Ok(RawTriangle {
        a,
        b: (c * c - a * a).sqrt(),
        c,
        angle_a,
        angle_b: 90.0 - angle_a,
        angle_c: 90.0,
    })
}

/// Leg a and its opposite acute angle A.
fn solve_right_leg_angle(a: f64, angle_a: f64) -> TrigoResult<RawTriangle> {
    if angle_a <= 0.0 || angle_a >= 90.0 {
        return Err(TrigoError::angle_not_acute());
    }
    Ok(RawTriangle {
        a,
        b: a / Degrees(angle_a).tan(),
        c: a / Degrees(angle_a).sin(),
        angle_a,
        angle_b: 90.0 - angle_a,
        angle_c: 90.0,
    })
}

/// Hypotenuse c and acute angle A.
fn solve_right_hyp_angle(c: f64, angle_a: f64) -> TrigoResult<RawTriangle> {
    if angle_a <= 0.0 || angle_a >= 90.0 {
        return Err(TrigoError::angle_not_acute());
    }
    Ok(RawTriangle {
        a: c * Degrees(angle_a).sin(),
        b: c * Degrees(angle_a).cos(),
        c,
        angle_a,
        angle_b: 90.0 - angle_a,
        angle_c: 90.0,
    })
}

/// Post-solve checks applied uniformly regardless of mode.
fn sanity_check(raw: &RawTriangle) -> TrigoResult<()> {
    let scalars = [
        raw.a,
        raw.b,
        raw.c,
        raw.angle_a,
        raw.angle_b,
        raw.angle_c,
    ];
    // Rejects NaN/infinity from domain errors such as acos past +-1
    if scalars.iter().any(|v| !v.is_finite()) {
        return Err(TrigoError::NumericDomain);
    }
    for angle in [raw.angle_a, raw.angle_b, raw.angle_c] {
        if angle <= 0.0 || angle >= 180.0 {
            return Err(TrigoError::angle_not_in_open_180());
        }
    }
    if ((raw.angle_a + raw.angle_b + raw.angle_c) - 180.0).abs() > ANGLE_SUM_TOLERANCE {
        return Err(TrigoError::AngleSumMismatch);
    }
    if raw.a <= 0.0 || raw.b <= 0.0 || raw.c <= 0.0 {
        return Err(TrigoError::DegenerateSide);
    }
    Ok(())
}

/// Compute the derived quantities and apply display rounding everywhere.
fn finish(raw: RawTriangle) -> TriangleData {
    let RawTriangle {
        a,
        b,
        c,
        angle_a,
        angle_b,
        angle_c,
    } = raw;

    let s = (a + b + c) / 2.0;
    // Heron's formula; the radicand is clamped so floating-point underflow
    // on near-degenerate shapes cannot produce a NaN area
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
    let height = 2.0 * area / c;

    let heights = CevianSet {
        a: round_display(2.0 * area / a),
        b: round_display(2.0 * area / b),
        c: round_display(2.0 * area / c),
    };

    let medians = CevianSet {
        a: round_display(0.5 * (2.0 * b * b + 2.0 * c * c - a * a).max(0.0).sqrt()),
        b: round_display(0.5 * (2.0 * a * a + 2.0 * c * c - b * b).max(0.0).sqrt()),
        c: round_display(0.5 * (2.0 * a * a + 2.0 * b * b - c * c).max(0.0).sqrt()),
    };

    let bisectors = CevianSet {
        a: round_display(2.0 * b * c * Degrees(angle_a / 2.0).cos() / (b + c)),
        b: round_display(2.0 * a * c * Degrees(angle_b / 2.0).cos() / (a + c)),
        c: round_display(2.0 * a * b * Degrees(angle_c / 2.0).cos() / (a + b)),
    };

    TriangleData {
        a: round_display(a),
        b: round_display(b),
        c: round_display(c),
        angle_a: round_display(angle_a),
        angle_b: round_display(angle_b),
        angle_c: round_display(angle_c),
        area: round_display(area),
        perimeter: round_display(a + b + c),
        height: round_display(height),
        heights,
        medians,
        bisectors,
        valid: true,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sss_3_4_5() {
        let t = solve(TriangleMode::Sss, 3.0, 4.0, 5.0);
        assert!(t.valid);
        assert_eq!(t.angle_c, 90.0);
        assert_eq!(t.area, 6.0);
        assert_eq!(t.perimeter, 12.0);
        assert_close(t.angle_a, 36.9, 0.05);
        assert_close(t.angle_b, 53.1, 0.05);
    }

    #[test]
    fn test_sss_triangle_inequality() {
        let t = solve(TriangleMode::Sss, 1.0, 1.0, 5.0);
        assert!(!t.valid);
        let msg = t.error.unwrap();
        assert!(msg.contains("sum of any two sides"));
        // All numerics zeroed on failure
        let t = solve(TriangleMode::Sss, 1.0, 1.0, 5.0);
        assert_eq!(t.a, 0.0);
        assert_eq!(t.area, 0.0);
        assert_eq!(t.medians, CevianSet::ZERO);
    }

    #[test]
    fn test_sss_degenerate_is_rejected() {
        // Exactly collinear: 2 + 3 == 5
        let t = solve(TriangleMode::Sss, 2.0, 3.0, 5.0);
        assert!(!t.valid);
    }

    #[test]
    fn test_right_legs_3_4() {
        let t = solve(TriangleMode::Right, 3.0, 4.0, 0.0);
        assert!(t.valid);
        assert_eq!(t.a, 3.0);
        assert_eq!(t.b, 4.0);
        assert_eq!(t.c, 5.0);
        assert_eq!(t.angle_c, 90.0);
        assert_close(t.angle_a, 36.9, 0.05);
        assert_close(t.angle_b, 53.1, 0.05);
        // v3 is ignored for right modes, even when nonsensical
        let t2 = solve(TriangleMode::Right, 3.0, 4.0, -7.0);
        assert!(t2.valid);
        assert_eq!(t2.c, 5.0);
    }

    #[test]
    fn test_sas_isoceles_right() {
        // b = 5, A = 90, c = 5 -> a = sqrt(50), B = C = 45
        let t = solve(TriangleMode::Sas, 5.0, 90.0, 5.0);
        assert!(t.valid);
        assert_eq!(t.a, 7.1);
        assert_close(t.angle_b, 45.0, 0.05);
        assert_close(t.angle_c, 45.0, 0.05);
    }

    #[test]
    fn test_asa() {
        // A = 60, c = 10, B = 90 -> C = 30, sides by law of sines from c
        let t = solve(TriangleMode::Asa, 60.0, 10.0, 90.0);
        assert!(t.valid);
        assert_close(t.angle_c, 30.0, 0.05);
        assert_close(t.a, 10.0 * Degrees(60.0).sin() / Degrees(30.0).sin(), 0.05);
        assert_close(t.b, 10.0 * Degrees(90.0).sin() / Degrees(30.0).sin(), 0.05);
    }

    #[test]
    fn test_aas() {
        // A = 30, B = 60, a = 5 -> C = 90, b = 5*sin60/sin30, c = 5/sin30
        let t = solve(TriangleMode::Aas, 30.0, 60.0, 5.0);
        assert!(t.valid);
        assert_close(t.angle_c, 90.0, 0.05);
        assert_close(t.b, 8.7, 0.05);
        assert_close(t.c, 10.0, 0.05);
    }

    #[test]
    fn test_right_hyp_leg() {
        let t = solve(TriangleMode::RightHypCat, 5.0, 3.0, 0.0);
        assert!(t.valid);
        assert_eq!(t.b, 4.0);
        assert_close(t.angle_a, 36.9, 0.05);
    }

    #[test]
    fn test_right_leg_angle() {
        let t = solve(TriangleMode::RightCatAng, 3.0, 30.0, 0.0);
        assert!(t.valid);
        assert_close(t.c, 6.0, 0.05);
        assert_close(t.b, 5.2, 0.05);
        assert_eq!(t.angle_b, 60.0);
    }

    #[test]
    fn test_right_hyp_angle() {
        let t = solve(TriangleMode::RightHypAng, 10.0, 30.0, 0.0);
        assert!(t.valid);
        assert_eq!(t.a, 5.0);
        assert_close(t.b, 8.7, 0.05);
    }

    #[test]
    fn test_leg_not_less_than_hypotenuse() {
        let t = solve(TriangleMode::RightHypCat, 3.0, 5.0, 0.0);
        assert!(!t.valid);
        assert!(t.error.unwrap().contains("hypotenuse"));
    }

    #[test]
    fn test_acute_angle_range() {
        assert!(!solve(TriangleMode::RightCatAng, 3.0, 90.0, 0.0).valid);
        assert!(!solve(TriangleMode::RightHypAng, 5.0, 120.0, 0.0).valid);
        assert!(solve(TriangleMode::RightCatAng, 3.0, 89.9, 0.0).valid);
    }

    #[test]
    fn test_magnitude_bound() {
        let t = solve(TriangleMode::Sss, 2_000_000.0, 4.0, 5.0);
        assert!(!t.valid);
        assert!(t.error.unwrap().contains("1,000,000"));
        // The bound also applies to v3 in non-right modes
        assert!(!solve(TriangleMode::Sas, 4.0, 60.0, 2_000_000.0).valid);
        // But a huge v3 is ignored in right modes
        assert!(solve(TriangleMode::Right, 3.0, 4.0, 2_000_000.0).valid);
    }

    #[test]
    fn test_non_positive_inputs() {
        assert!(!solve(TriangleMode::Right, 0.0, 4.0, 0.0).valid);
        assert!(!solve(TriangleMode::Right, 3.0, -1.0, 0.0).valid);
        assert!(!solve(TriangleMode::Sss, 3.0, 4.0, 0.0).valid);
    }

    #[test]
    fn test_nan_input_rejected() {
        let t = solve(TriangleMode::Sss, f64::NAN, 4.0, 5.0);
        assert!(!t.valid);
    }

    #[test]
    fn test_angle_sum_exceeded() {
        assert!(!solve(TriangleMode::Asa, 100.0, 10.0, 80.0).valid);
        assert!(!solve(TriangleMode::Aas, 90.0, 95.0, 10.0).valid);
        // 60 + 90 = 150 < 180 passes
        assert!(solve(TriangleMode::Asa, 60.0, 10.0, 90.0).valid);
    }

    #[test]
    fn test_angle_sum_invariant() {
        let cases = [
            solve(TriangleMode::Sss, 7.0, 9.0, 12.0),
            solve(TriangleMode::Sas, 8.0, 40.0, 13.0),
            solve(TriangleMode::Asa, 25.0, 6.0, 35.0),
            solve(TriangleMode::Aas, 47.0, 62.0, 9.0),
            solve(TriangleMode::Right, 5.0, 12.0, 0.0),
            solve(TriangleMode::RightHypCat, 13.0, 5.0, 0.0),
            solve(TriangleMode::RightCatAng, 4.0, 28.0, 0.0),
            solve(TriangleMode::RightHypAng, 11.0, 63.0, 0.0),
        ];
        for t in cases {
            assert!(t.valid);
            assert!((t.angle_a + t.angle_b + t.angle_c - 180.0).abs() <= ANGLE_SUM_TOLERANCE);
            // Triangle inequality on the solved sides
            assert!(t.a < t.b + t.c);
            assert!(t.b < t.a + t.c);
            assert!(t.c < t.a + t.b);
            assert!(t.area >= 0.0);
        }
    }

    #[test]
    fn test_round_trip_closure() {
        // Re-solving a solved triangle with SAS-equivalent inputs (b, A, c)
        // reproduces it within the display-rounding tolerance
        let t = solve(TriangleMode::Sss, 6.0, 8.0, 11.0);
        assert!(t.valid);
        let again = solve(TriangleMode::Sas, t.b, t.angle_a, t.c);
        assert!(again.valid);
        assert_close(again.a, t.a, 0.1);
        assert_close(again.angle_b, t.angle_b, 0.2);
        assert_close(again.angle_c, t.angle_c, 0.2);
    }

    #[test]
    fn test_near_degenerate_area_non_negative() {
        // A sliver triangle: Heron radicand clamp keeps area >= 0
        let t = solve(TriangleMode::Sss, 1.0, 1.0, 1.9999999);
        if t.valid {
            assert!(t.area >= 0.0);
        }
    }

    #[test]
    fn test_cevians_of_equilateral() {
        let t = solve(TriangleMode::Sss, 10.0, 10.0, 10.0);
        assert!(t.valid);
        // In an equilateral triangle heights, medians, and bisectors coincide
        assert_close(t.heights.a, 8.7, 0.05);
        assert_close(t.medians.a, 8.7, 0.05);
        assert_close(t.bisectors.a, 8.7, 0.05);
        assert_eq!(t.angle_a, 60.0);
    }

    #[test]
    fn test_display_rounding_applied() {
        let t = solve(TriangleMode::Sas, 5.0, 90.0, 5.0);
        // sqrt(50) = 7.0710... stored as 7.1
        assert_eq!(t.a, 7.1);
        let sub_unit = solve(TriangleMode::Right, 0.3, 0.4, 0.0);
        assert!(sub_unit.valid);
        assert_eq!(sub_unit.c, 0.5);
        assert_eq!(sub_unit.area, 0.06);
    }

    #[test]
    fn test_mode_serde_tags() {
        let json = serde_json::to_string(&TriangleMode::RightHypCat).unwrap();
        assert_eq!(json, "\"Right_HypCat\"");
        let mode: TriangleMode = serde_json::from_str("\"SSS\"").unwrap();
        assert_eq!(mode, TriangleMode::Sss);
        assert_eq!(TriangleMode::Aas.tag(), "AAS");
    }

    #[test]
    fn test_data_serialization_roundtrip() {
        let t = solve(TriangleMode::Sss, 3.0, 4.0, 5.0);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"A\":"));
        assert!(!json.contains("error"));
        let roundtrip: TriangleData = serde_json::from_str(&json).unwrap();
        assert_eq!(t, roundtrip);
    }
}
