//! Triangle geometry over three labelled 2D points.
//!
//! Purpose
//! - Closed-form measurements (angle at a vertex, distance, shoelace area,
//!   classification, validity gate) as pure free functions in `eval`.
//! - A `Triangle` value type addressing those by vertex label, and a
//!   `Measurements` report for callers that display a whole triangle.
//!
//! Numerics
//! - Angles clamp the arc-cosine argument, so parallel rays give exactly 0°/180°.
//! - Zero-length rays are an error (`GeometryError::InvalidGeometry`), never NaN.
//! - Callers should run `is_valid_triangle` (or `measure`) before asking for
//!   angles; collinear input always has a degenerate vertex.

mod cfg;
mod eval;
mod measure;
pub mod rand;
mod types;

pub use cfg::{
    EvalCfg, COORD_MAX, COORD_MIN, MIN_INPUT_AREA, RIGHT_ANGLE_TOL_DEG, VALID_AREA_EPS,
};
pub use eval::{
    angle_at_vertex, area, centroid, classify, classify_with, distance, is_valid_triangle,
    is_valid_triangle_with, perimeter, signed_area, GeometryError, Ray,
};
pub use measure::{label_anchor, measure, measure_with, Measurements};
pub use types::{Triangle, TriangleKind, Vertex};
