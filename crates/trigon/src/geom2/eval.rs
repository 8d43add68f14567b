//! Closed-form triangle measurements over three labelled points.
//!
//! Every function here is pure: no state, no allocation, constant time.
//! The only partial operation is `angle_at_vertex`, which rejects a ray of
//! zero length instead of returning NaN.
//!
//! Code cross-refs: `types::Triangle` (vertex-labelled wrappers), `cfg`.

use std::fmt;

use nalgebra::{Point2, Vector2};

use super::cfg::EvalCfg;
use super::types::TriangleKind;

/// Which ray of `angle_at_vertex` was degenerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ray {
    /// `p1 - vertex`
    First,
    /// `p3 - vertex`
    Second,
}

/// Errors surfaced by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// The angle vertex coincides with a ray endpoint, or a ray is not finite.
    InvalidGeometry { ray: Ray },
    /// Measurements were requested for points that fail the validity gate.
    Degenerate { area: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGeometry { ray } => write!(
                f,
                "angle is undefined: {} ray has zero or non-finite length",
                match ray {
                    Ray::First => "first",
                    Ray::Second => "second",
                }
            ),
            GeometryError::Degenerate { area } => write!(
                f,
                "points are collinear or nearly so (area {area}), not a triangle"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Angle in degrees at `vertex` between the rays towards `p1` and `p3`.
///
/// Post: `Ok(θ)` with `θ ∈ [0, 180]`. Errors if either ray has zero length.
pub fn angle_at_vertex(
    p1: Point2<f64>,
    vertex: Point2<f64>,
    p3: Point2<f64>,
) -> Result<f64, GeometryError> {
    // Differences of coordinates above MAX/4 can overflow; a power-of-two
    // rescale is exact and leaves the angle unchanged.
    let m = [p1, vertex, p3]
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs()])
        .fold(0.0, f64::max);
    let s = if m > f64::MAX / 4.0 { 0.25 } else { 1.0 };
    let v1 = p1.coords * s - vertex.coords * s;
    let v2 = p3.coords * s - vertex.coords * s;
    let n1 = ray_norm(v1).ok_or(GeometryError::InvalidGeometry { ray: Ray::First })?;
    let n2 = ray_norm(v2).ok_or(GeometryError::InvalidGeometry { ray: Ray::Second })?;
    // Normalize before the dot product so |v1|·|v2| cannot overflow.
    Ok(acos_deg((v1 / n1).dot(&(v2 / n2))))
}

#[inline]
fn ray_norm(v: Vector2<f64>) -> Option<f64> {
    let n = v.x.hypot(v.y);
    (n.is_finite() && n > 0.0).then_some(n)
}

/// `acos` in degrees with the argument clamped to [-1, 1].
///
/// Parallel and anti-parallel rays can round to a ratio just outside the
/// domain; those are 0° and 180°, not NaN.
#[inline]
pub(crate) fn acos_deg(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Euclidean distance; zero iff the points are equal.
#[inline]
pub fn distance(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Oriented shoelace area: positive for counter-clockwise (y up), negative for clockwise.
#[inline]
pub fn signed_area(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> f64 {
    (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)) / 2.0
}

/// Triangle area magnitude; zero iff the points are collinear.
#[inline]
pub fn area(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> f64 {
    signed_area(p1, p2, p3).abs()
}

/// Gate used before any angle computation: area strictly above `VALID_AREA_EPS`.
#[inline]
pub fn is_valid_triangle(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> bool {
    is_valid_triangle_with(EvalCfg::default(), p1, p2, p3)
}

pub fn is_valid_triangle_with(
    cfg: EvalCfg,
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
) -> bool {
    area(p1, p2, p3) > cfg.valid_area_eps
}

/// Classify by the largest of three angles (degrees).
///
/// Pre: angles sum to about 180° (not checked).
/// The right-angle band is tested before `> 90`, so 90.05° is right, not obtuse.
#[inline]
pub fn classify(a: f64, b: f64, c: f64) -> TriangleKind {
    classify_with(EvalCfg::default(), a, b, c)
}

pub fn classify_with(cfg: EvalCfg, a: f64, b: f64, c: f64) -> TriangleKind {
    let m = a.max(b).max(c);
    if (m - 90.0).abs() < cfg.right_angle_tol_deg {
        TriangleKind::Right
    } else if m > 90.0 {
        TriangleKind::Obtuse
    } else {
        TriangleKind::Acute
    }
}

/// Arithmetic mean of the three points.
#[inline]
pub fn centroid(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> Point2<f64> {
    Point2::from((p1.coords + p2.coords + p3.coords) / 3.0)
}

#[inline]
pub fn perimeter(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> f64 {
    distance(p1, p2) + distance(p2, p3) + distance(p3, p1)
}
