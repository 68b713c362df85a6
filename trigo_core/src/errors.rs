//! # Error Types
//!
//! Structured error types for trigo_core. Every failure in the engine maps to
//! one of these variants, so callers can branch on the category (via
//! [`TrigoError::error_code`]) or show the human-readable message as-is.
//!
//! The solver itself never lets a `TrigoError` escape: `solve` folds every
//! failure into the `valid = false` result shape (see [`crate::solver`]).
//! The codec and generator surface errors through [`TrigoResult`].
//!
//! ## Example
//!
//! ```rust
//! use trigo_core::errors::{TrigoError, TrigoResult};
//!
//! fn validate_side(side: f64) -> TrigoResult<()> {
//!     if side <= 0.0 {
//!         return Err(TrigoError::NonPositiveInput);
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trigo_core operations
pub type TrigoResult<T> = Result<T, TrigoError>;

/// Structured error type for the triangle engine.
///
/// Each variant corresponds to one failure category of the solving pipeline,
/// the exercise generator, or the share codec.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TrigoError {
    /// An input magnitude exceeds the safety bound (1,000,000)
    #[error("Values too large: the safety limit is 1,000,000")]
    ValuesTooLarge,

    /// A required input is zero or negative
    #[error("Input values must be greater than zero")]
    NonPositiveInput,

    /// The three sides cannot form a triangle
    #[error("Impossible triangle: the sum of any two sides must exceed the third")]
    TriangleInequality,

    /// A given or computed angle falls outside its admissible open interval
    #[error("Angle out of range: must be strictly between {low}\u{b0} and {high}\u{b0}")]
    AngleOutOfRange { low: f64, high: f64 },

    /// Two given angles already consume the whole angle sum
    #[error("The sum of the given angles must be less than 180\u{b0}")]
    AngleSumExceeded,

    /// In hypotenuse-plus-leg input, the leg must be the shorter one
    #[error("The leg must be shorter than the hypotenuse")]
    LegNotLessThanHypotenuse,

    /// A trigonometric inverse received an out-of-domain argument
    /// (surfaces as a non-finite intermediate value)
    #[error("Invalid value combination for a real triangle")]
    NumericDomain,

    /// Computed angles do not sum to 180 degrees within tolerance
    #[error("Computed angles do not sum to 180\u{b0}: impossible triangle")]
    AngleSumMismatch,

    /// A computed side came out zero or negative
    #[error("Computed sides are zero or negative: check the inputs")]
    DegenerateSide,

    /// The generator failed to synthesize a valid exercise within its attempt budget
    #[error("Exercise generation for mode '{mode}' exhausted after {attempts} attempts")]
    GenerationExhausted { mode: String, attempts: u32 },

    /// A share code could not be decoded into a problem state
    #[error("Share code rejected: {reason}")]
    DecodeRejected { reason: String },

    /// JSON serialization error (should be rare)
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl TrigoError {
    /// Create an AngleOutOfRange error for the oblique range (0, 180)
    pub fn angle_not_in_open_180() -> Self {
        TrigoError::AngleOutOfRange {
            low: 0.0,
            high: 180.0,
        }
    }

    /// Create an AngleOutOfRange error for the acute range (0, 90)
    pub fn angle_not_acute() -> Self {
        TrigoError::AngleOutOfRange {
            low: 0.0,
            high: 90.0,
        }
    }

    /// Create a GenerationExhausted error
    pub fn generation_exhausted(mode: impl Into<String>, attempts: u32) -> Self {
        TrigoError::GenerationExhausted {
            mode: mode.into(),
            attempts,
        }
    }

    /// Create a DecodeRejected error
    pub fn decode_rejected(reason: impl Into<String>) -> Self {
        TrigoError::DecodeRejected {
            reason: reason.into(),
        }
    }

    /// Check if this error was detected before any trigonometric call
    /// (an input precondition, as opposed to a post-solve sanity failure)
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            TrigoError::ValuesTooLarge
                | TrigoError::NonPositiveInput
                | TrigoError::TriangleInequality
                | TrigoError::AngleOutOfRange { .. }
                | TrigoError::AngleSumExceeded
                | TrigoError::LegNotLessThanHypotenuse
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TrigoError::ValuesTooLarge => "VALUES_TOO_LARGE",
            TrigoError::NonPositiveInput => "NON_POSITIVE_INPUT",
            TrigoError::TriangleInequality => "TRIANGLE_INEQUALITY",
            TrigoError::AngleOutOfRange { .. } => "ANGLE_OUT_OF_RANGE",
            TrigoError::AngleSumExceeded => "ANGLE_SUM_EXCEEDED",
            TrigoError::LegNotLessThanHypotenuse => "LEG_NOT_LESS_THAN_HYPOTENUSE",
            TrigoError::NumericDomain => "NUMERIC_DOMAIN",
            TrigoError::AngleSumMismatch => "ANGLE_SUM_MISMATCH",
            TrigoError::DegenerateSide => "DEGENERATE_SIDE",
            TrigoError::GenerationExhausted { .. } => "GENERATION_EXHAUSTED",
            TrigoError::DecodeRejected { .. } => "DECODE_REJECTED",
            TrigoError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}
