//! Measurement report for a validated triangle.
//!
//! `measure` is the caller-side gate: it refuses points that fail
//! `is_valid_triangle`, so a report never carries a near-0° or near-180°
//! angle computed from an almost collinear input.

use nalgebra::Point2;

use super::cfg::EvalCfg;
use super::eval::{self, GeometryError};
use super::types::{Triangle, TriangleKind, Vertex};

/// Everything the display shows for one triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    /// Interior angles (degrees) at A, B, C.
    pub angles: [f64; 3],
    pub angle_sum: f64,
    /// Side lengths opposite A, B, C.
    pub sides: [f64; 3],
    pub perimeter: f64,
    pub area: f64,
    pub kind: TriangleKind,
    pub centroid: Point2<f64>,
}

impl Measurements {
    #[inline]
    pub fn angle(&self, v: Vertex) -> f64 {
        self.angles[v.index()]
    }

    #[inline]
    pub fn side(&self, v: Vertex) -> f64 {
        self.sides[v.index()]
    }
}

pub fn measure(tri: &Triangle) -> Result<Measurements, GeometryError> {
    measure_with(tri, EvalCfg::default())
}

pub fn measure_with(tri: &Triangle, cfg: EvalCfg) -> Result<Measurements, GeometryError> {
    let area = tri.area();
    if !eval::is_valid_triangle_with(cfg, tri.a, tri.b, tri.c) {
        return Err(GeometryError::Degenerate { area });
    }
    let angles = tri.angles()?;
    let [a, b, c] = angles;
    Ok(Measurements {
        angles,
        angle_sum: a + b + c,
        sides: Vertex::ALL.map(|v| tri.side(v)),
        perimeter: tri.perimeter(),
        area,
        kind: eval::classify_with(cfg, a, b, c),
        centroid: tri.centroid(),
    })
}

/// Point `offset` units from vertex `at` towards the centroid (angle label position).
///
/// None if the vertex sits on the centroid or the result is not finite.
pub fn label_anchor(tri: &Triangle, at: Vertex, offset: f64) -> Option<Point2<f64>> {
    let p = tri.vertex(at);
    let d = tri.centroid() - p;
    let len = d.x.hypot(d.y);
    if !(len.is_finite() && len > 0.0) {
        return None;
    }
    let q = p + d * (offset / len);
    (q.x.is_finite() && q.y.is_finite()).then_some(q)
}
