//! # trigo_core - Triangle Solving & Exercise Generation Engine
//!
//! `trigo_core` is the computational heart of TrigoMestre: it solves
//! triangles (right and oblique) from partial measurements, derives the
//! planar geometry needed for rendering, generates randomized exercises
//! with guaranteed-solvable statements, validates student answers, and
//! round-trips problem states through portable share codes.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All public types implement Serialize/Deserialize
//! - **Total Solver**: `solve` never errors out — failures become a
//!   `valid = false` result with a human-readable message
//! - **Bounded Everything**: the generator's retry loop terminates after
//!   a fixed attempt budget
//!
//! ## Quick Start
//!
//! ```rust
//! use trigo_core::geometry::{circumcircle, coordinates};
//! use trigo_core::solver::{solve, TriangleMode};
//!
//! let triangle = solve(TriangleMode::Sss, 3.0, 4.0, 5.0);
//! assert!(triangle.valid);
//!
//! let coords = coordinates(&triangle);
//! let circle = circumcircle(&triangle, &coords);
//! assert!((circle.r - 2.5).abs() < 0.05);
//! ```
//!
//! ## Modules
//!
//! - [`solver`] - Triangle solving from the eight input configurations
//! - [`geometry`] - Vertex coordinates, circumcircle, pivot rotation
//! - [`generator`] - Randomized exercise synthesis with bounded retry
//! - [`validator`] - Free-text answer checking with per-field tolerance
//! - [`share`] - Share-code encoding/decoding
//! - [`export`] - Flat text projections for copy/export consumers
//! - [`units`] - Angle units and display rounding
//! - [`errors`] - Structured error types

pub mod errors;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod share;
pub mod solver;
pub mod units;
pub mod validator;

// Re-export commonly used types at crate root for convenience
pub use errors::{TrigoError, TrigoResult};
pub use generator::{generate, generate_list, regenerate, TrigoExercise};
pub use geometry::{circumcircle, coordinates, Circumcircle, TriangleCoords};
pub use solver::{solve, TriangleData, TriangleMode};
pub use validator::{check_answers, AnswerField};
