//! # Angle Units & Display Rounding
//!
//! Type-safe wrappers for the two angle units the engine juggles. Solver
//! inputs, outputs, and share codes all speak degrees; the trigonometric
//! calls need radians. Newtype wrappers keep the conversion explicit while
//! serializing as plain numbers.
//!
//! This module also owns the display-rounding normalization: every numeric
//! field of a solved triangle is rounded *before* storage (one decimal for
//! magnitudes of at least 1, three decimals below that), so downstream
//! consumers never see raw unrounded floats.
//!
//! ## Example
//!
//! ```rust
//! use trigo_core::units::{Degrees, Radians};
//!
//! let right = Degrees(90.0);
//! let rad: Radians = right.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((right.sin() - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Sine of the angle
    pub fn sin(self) -> f64 {
        self.0.to_radians().sin()
    }

    /// Cosine of the angle
    pub fn cos(self) -> f64 {
        self.0.to_radians().cos()
    }

    /// Tangent of the angle
    pub fn tan(self) -> f64 {
        self.0.to_radians().tan()
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);

/// Round a value the way it will be displayed: one decimal place when the
/// magnitude is at least 1, three decimal places below that.
///
/// Applied to every stored numeric field of a solved triangle.
pub fn round_display(value: f64) -> f64 {
    if value.abs() < 1.0 {
        (value * 1000.0).round() / 1000.0
    } else {
        (value * 10.0).round() / 10.0
    }
}
