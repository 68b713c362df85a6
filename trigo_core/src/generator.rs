//! # Exercise Generator
//!
//! Synthesizes random, guaranteed-solvable triangle problems. Each attempt
//! draws "given" values for the requested mode, feeds the derived solver
//! inputs (not always identical to the displayed values — see the right
//! triangle sub-cases) through [`solve`], and keeps the result only when it
//! is valid. The retry loop is bounded at [`MAX_ATTEMPTS`]; an exhausted
//! slot yields `None` and the caller simply omits it.
//!
//! Randomness comes from a caller-owned [`Rng`], so batch generation stays
//! deterministic under a seeded `StdRng` and the generated-id ordering is
//! stable left to right.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use trigo_core::generator::generate_list;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let list = generate_list(3, 2, &mut rng);
//! assert!(list.iter().all(|ex| ex.solution.valid));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::solver::{solve, TriangleData, TriangleMode};
use crate::units::Degrees;

/// Retry budget per exercise slot
pub const MAX_ATTEMPTS: u32 = 50;

/// Random side draws land in [SIDE_MIN, SIDE_MAX] (integers)
const SIDE_MIN: i64 = 3;
const SIDE_MAX: i64 = 17;

/// Random angle draws land in [ANGLE_MIN, ANGLE_MAX] degrees (integers)
const ANGLE_MIN: i64 = 10;
const ANGLE_MAX: i64 = 89;

/// Hypotenuse draws are offset above the base side range so the legs
/// derived from sin/cos stay comfortably sized
const HYPOTENUSE_OFFSET: f64 = 5.0;

// Sub-case split for right-triangle synthesis. Tunable weights, not a
// contract: leg+leg, then hypotenuse+angle, remainder leg+angle.
const RIGHT_LEG_LEG_CUTOFF: f64 = 0.4;
const RIGHT_HYP_ANG_CUTOFF: f64 = 0.7;

/// The displayed problem statement: up to three labeled values.
///
/// For right-triangle modes `val3`/`label3` are absent. The displayed
/// values are what the student sees; the solver may have been fed a
/// converted form (e.g. hypotenuse+angle shown, two legs solved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GivenValues {
    pub val1: f64,
    pub label1: String,
    pub val2: f64,
    pub label2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label3: Option<String>,
}

/// One generated exercise: the statement plus its full solution.
///
/// Immutable once created. Regeneration replaces the whole exercise,
/// preserving only `id` and `mode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrigoExercise {
    pub id: u32,
    pub mode: TriangleMode,
    pub given: GivenValues,
    pub solution: TriangleData,
}

/// Generate one exercise for `mode`, retrying up to [`MAX_ATTEMPTS`] times.
///
/// The right-triangle sub-cases are drawn internally (the three weighted
/// synthesis branches), so any right mode is treated as the `Right` class
/// and the exercise records it as such; the solver always receives the
/// two-leg form for that class.
///
/// Returns `None` when every attempt produced an invalid triangle — the
/// bounded-retry rendering of "Generated or Exhausted". With the default
/// ranges exhaustion is essentially theoretical, but the bound guarantees
/// termination.
pub fn generate<R: Rng + ?Sized>(
    mode: TriangleMode,
    id: u32,
    rng: &mut R,
) -> Option<TrigoExercise> {
    let mode = if mode.is_right() {
        TriangleMode::Right
    } else {
        mode
    };
    for _ in 0..MAX_ATTEMPTS {
        let (given, solver_inputs) = synthesize(mode, rng);
        let solution = solve(mode, solver_inputs[0], solver_inputs[1], solver_inputs[2]);
        if solution.valid {
            return Some(TrigoExercise {
                id,
                mode,
                given,
                solution,
            });
        }
    }
    None
}

/// Generate a full list: `qty_right` right-triangle exercises followed by
/// `qty_oblique` exercises with the mode drawn uniformly per slot.
///
/// Ids run sequentially from 1 and are only consumed by successful
/// generations; an exhausted slot is silently dropped, so the list may be
/// shorter than requested.
pub fn generate_list<R: Rng + ?Sized>(
    qty_right: u32,
    qty_oblique: u32,
    rng: &mut R,
) -> Vec<TrigoExercise> {
    let mut list = Vec::with_capacity((qty_right + qty_oblique) as usize);
    let mut next_id = 1;

    for _ in 0..qty_right {
        if let Some(ex) = generate(TriangleMode::Right, next_id, rng) {
            list.push(ex);
            next_id += 1;
        }
    }

    for _ in 0..qty_oblique {
        let mode = TriangleMode::OBLIQUE[rng.random_range(0..TriangleMode::OBLIQUE.len())];
        if let Some(ex) = generate(mode, next_id, rng) {
            list.push(ex);
            next_id += 1;
        }
    }

    list
}

/// Draw a fresh instance for an existing exercise slot, preserving its id
/// and mode. Callers are expected to drop any recorded answers for the
/// replaced exercise.
pub fn regenerate<R: Rng + ?Sized>(exercise: &TrigoExercise, rng: &mut R) -> Option<TrigoExercise> {
    generate(exercise.mode, exercise.id, rng)
}

/// One synthesis attempt: the displayed given values plus the three solver
/// inputs derived from them.
fn synthesize<R: Rng + ?Sized>(mode: TriangleMode, rng: &mut R) -> (GivenValues, [f64; 3]) {
    match mode {
        TriangleMode::Right => synthesize_right(rng),
        // Sub-modes are normalized to Right before synthesis
        TriangleMode::RightHypCat | TriangleMode::RightCatAng | TriangleMode::RightHypAng => {
            synthesize_right(rng)
        }
        TriangleMode::Sss => synthesize_sss(rng),
        TriangleMode::Sas => {
            let (b, angle, c) = (rand_side(rng), rand_angle(rng), rand_side(rng));
            (
                given3(b, "b", angle, "angle A", c, "c"),
                [b, angle, c],
            )
        }
        TriangleMode::Asa => {
            let (angle_a, c, angle_b) = (rand_angle(rng), rand_side(rng), rand_angle(rng));
            (
                given3(angle_a, "angle A", c, "c", angle_b, "angle B"),
                [angle_a, c, angle_b],
            )
        }
        TriangleMode::Aas => {
            let (angle_a, angle_b, a) = (rand_angle(rng), rand_angle(rng), rand_side(rng));
            (
                given3(angle_a, "angle A", angle_b, "angle B", a, "a"),
                [angle_a, angle_b, a],
            )
        }
    }
}

/// Right-triangle synthesis: three weighted sub-cases. The displayed given
/// is what was drawn; the solver always receives the two-leg form.
fn synthesize_right<R: Rng + ?Sized>(rng: &mut R) -> (GivenValues, [f64; 3]) {
    let subtype: f64 = rng.random();

    if subtype < RIGHT_LEG_LEG_CUTOFF {
        // Two legs, passed through unchanged
        let (a, b) = (rand_side(rng), rand_side(rng));
        (given2(a, "leg a", b, "leg b"), [a, b, 0.0])
    } else if subtype < RIGHT_HYP_ANG_CUTOFF {
        // Hypotenuse + angle shown; legs a = h sin A, b = h cos A solved
        let h = rand_side(rng) + HYPOTENUSE_OFFSET;
        let angle = rand_angle(rng);
        let legs = [h * Degrees(angle).sin(), h * Degrees(angle).cos(), 0.0];
        (given2(h, "hypotenuse", angle, "angle A"), legs)
    } else {
        // One leg + angle shown; the missing leg follows from the tangent
        let leg = rand_side(rng);
        let angle = rand_angle(rng);
        if rng.random_bool(0.5) {
            // The drawn leg is adjacent (b); opposite leg a = b tan A
            let legs = [leg * Degrees(angle).tan(), leg, 0.0];
            (given2(leg, "leg b", angle, "angle A"), legs)
        } else {
            // The drawn leg is opposite (a); adjacent leg b = a / tan A
            let legs = [leg, leg / Degrees(angle).tan(), 0.0];
            (given2(leg, "leg a", angle, "angle A"), legs)
        }
    }
}

/// SSS synthesis: the third side is drawn inside the open interval allowed
/// by the triangle inequality, so the solver precondition holds before the
/// call.
fn synthesize_sss<R: Rng + ?Sized>(rng: &mut R) -> (GivenValues, [f64; 3]) {
    let (a, b) = (rand_side(rng), rand_side(rng));
    let min = (a - b).abs() as i64 + 1;
    let max = (a + b) as i64 - 1;
    let c = rng.random_range(min..=max) as f64;
    (given3(a, "a", b, "b", c, "c"), [a, b, c])
}

fn rand_side<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(SIDE_MIN..=SIDE_MAX) as f64
}

fn rand_angle<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(ANGLE_MIN..=ANGLE_MAX) as f64
}

fn given2(val1: f64, label1: &str, val2: f64, label2: &str) -> GivenValues {
    GivenValues {
        val1,
        label1: label1.to_string(),
        val2,
        label2: label2.to_string(),
        val3: None,
        label3: None,
    }
}

fn given3(val1: f64, label1: &str, val2: f64, label2: &str, val3: f64, label3: &str) -> GivenValues {
    GivenValues {
        val1,
        label1: label1.to_string(),
        val2,
        label2: label2.to_string(),
        val3: Some(val3),
        label3: Some(label3.to_string()),
    }
}
