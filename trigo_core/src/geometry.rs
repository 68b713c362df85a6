//! # Derived Geometry
//!
//! Turns a solved triangle into planar coordinates for rendering, plus the
//! circumscribed circle. Coordinates are derived on demand and never cached:
//! the scalar solution is the source of truth, and any presentation rotation
//! is applied afterwards without touching the [`TriangleData`].
//!
//! Placement convention: side `c` lies on the x-axis with vertex `A` at the
//! origin and `B` at `(c, 0)`; `C` follows from angle `A` and side `b` in
//! polar form.

use serde::{Deserialize, Serialize};

use crate::solver::TriangleData;
use crate::units::Degrees;

/// Below this area or y-offset the circumcircle formulas degenerate
const DEGENERATE_EPS: f64 = 1e-4;

/// A 2D point in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Vertex coordinates of a placed triangle.
///
/// Field names serialize capitalized (`Ax` .. `Cy`) to match the rendering
/// data contract.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TriangleCoords {
    #[serde(rename = "Ax")]
    pub ax: f64,
    #[serde(rename = "Ay")]
    pub ay: f64,
    #[serde(rename = "Bx")]
    pub bx: f64,
    #[serde(rename = "By")]
    pub by: f64,
    #[serde(rename = "Cx")]
    pub cx: f64,
    #[serde(rename = "Cy")]
    pub cy: f64,
}

impl TriangleCoords {
    /// Vertex A as a point
    pub fn vertex_a(&self) -> Point {
        Point::new(self.ax, self.ay)
    }

    /// Vertex B as a point
    pub fn vertex_b(&self) -> Point {
        Point::new(self.bx, self.by)
    }

    /// Vertex C as a point
    pub fn vertex_c(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

/// Circumscribed circle: center and radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circumcircle {
    #[serde(rename = "Ox")]
    pub ox: f64,
    #[serde(rename = "Oy")]
    pub oy: f64,
    #[serde(rename = "R")]
    pub r: f64,
}

/// Compute vertex coordinates for a valid solved triangle.
///
/// A sits at the origin, B at `(c, 0)`, C at `(b cos A, b sin A)`.
/// Only meaningful for `triangle.valid == true`; on an invalid triangle the
/// numerics are all zero and so is the returned placement.
pub fn coordinates(triangle: &TriangleData) -> TriangleCoords {
    TriangleCoords {
        ax: 0.0,
        ay: 0.0,
        bx: triangle.c,
        by: 0.0,
        cx: triangle.b * Degrees(triangle.angle_a).cos(),
        cy: triangle.b * Degrees(triangle.angle_a).sin(),
    }
}

/// Centroid of a placed triangle, the usual pivot for view rotation.
pub fn centroid(coords: &TriangleCoords) -> Point {
    Point::new(
        (coords.ax + coords.bx + coords.cx) / 3.0,
        (coords.ay + coords.by + coords.cy) / 3.0,
    )
}

/// Rotate a point counter-clockwise about a pivot.
///
/// Presentation-only: applied after coordinate generation, never altering
/// the underlying solution.
pub fn rotate_point(point: Point, pivot: Point, angle: Degrees) -> Point {
    let (sin, cos) = (angle.sin(), angle.cos());
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}

/// Circumcircle of a placed triangle.
///
/// `R = abc / (4 area)`; the center comes from intersecting the
/// perpendicular bisectors, specialized to the [`coordinates`] placement
/// (side c on the x-axis, so `Ox` is always `c / 2`).
///
/// Near-zero area would blow up the radius formula, and near-zero `Cy`
/// the center formula, so both fall back to a circle on the x-axis at the
/// midpoint of side c.
pub fn circumcircle(triangle: &TriangleData, coords: &TriangleCoords) -> Circumcircle {
    if triangle.area <= DEGENERATE_EPS {
        return Circumcircle {
            ox: coords.bx / 2.0,
            oy: 0.0,
            r: 0.0,
        };
    }
    if coords.cy.abs() < DEGENERATE_EPS {
        return Circumcircle {
            ox: coords.bx / 2.0,
            oy: 0.0,
            r: triangle.c / 2.0,
        };
    }

    let r = (triangle.a * triangle.b * triangle.c) / (4.0 * triangle.area);
    let ox = coords.bx / 2.0;
    let oy = (coords.cy / 2.0) - (coords.cx / coords.cy) * (ox - coords.cx / 2.0);

    Circumcircle { ox, oy, r }
}
