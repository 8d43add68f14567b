//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   experiments. Breaking changes are allowed and expected.

// Evaluator
pub use crate::geom2::{
    angle_at_vertex, area, centroid, classify, classify_with, distance, is_valid_triangle,
    is_valid_triangle_with, perimeter, signed_area, EvalCfg, GeometryError, Ray,
};
// Triangle value type and reports
pub use crate::geom2::{
    label_anchor, measure, measure_with, Measurements, Triangle, TriangleKind, Vertex,
};
// Random triangles
pub use crate::geom2::rand::{
    draw_triangle, Bounds2 as SampleBounds, ReplayToken, SampleCfg,
};
// Form policy
pub use crate::input::{InputError, InputPolicy};

use nalgebra::Point2;

/// Parse `"x,y"` into a point. Whitespace around either number is ignored.
pub fn parse_point(s: &str) -> Result<Point2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x coordinate {x:?}: {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y coordinate {y:?}: {e}"))?;
    Ok(Point2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_spaces_and_decimals() {
        assert_eq!(parse_point("100,200").unwrap(), Point2::new(100.0, 200.0));
        assert_eq!(parse_point(" 1.5 , -2 ").unwrap(), Point2::new(1.5, -2.0));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("100").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("1,2,3").is_err());
    }
}
