//! Input policy applied by the form before anything is evaluated.
//!
//! The evaluator accepts any real coordinates; the form does not. It keeps
//! every coordinate on the 800×800 canvas and refuses triangles thinner than
//! one square unit, which is stricter than the evaluator's own validity gate.

use std::fmt;

use crate::geom2::{Triangle, Vertex, COORD_MAX, COORD_MIN, MIN_INPUT_AREA};

/// Why a submission was refused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputError {
    /// A coordinate is NaN or infinite.
    NonFinite { vertex: Vertex },
    /// A coordinate lies outside `[min, max]`.
    OutOfRange {
        vertex: Vertex,
        x: f64,
        y: f64,
        min: f64,
        max: f64,
    },
    /// The points are (nearly) collinear.
    Collinear { area: f64, min_area: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonFinite { vertex } => {
                write!(f, "point {vertex} has a non-finite coordinate")
            }
            InputError::OutOfRange {
                vertex,
                x,
                y,
                min,
                max,
            } => write!(
                f,
                "point {vertex} ({x}, {y}) is outside the range {min}-{max}"
            ),
            InputError::Collinear { area, min_area } => write!(
                f,
                "points cannot lie on a straight line (area {area} < {min_area})"
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Coordinate box and minimum area a submission must satisfy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputPolicy {
    pub min: f64,
    pub max: f64,
    pub min_area: f64,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            min: COORD_MIN,
            max: COORD_MAX,
            min_area: MIN_INPUT_AREA,
        }
    }
}

impl InputPolicy {
    /// Range checks first (A, B, C; first offender wins), then the area check.
    pub fn validate(&self, tri: &Triangle) -> Result<(), InputError> {
        for vertex in Vertex::ALL {
            let p = tri.vertex(vertex);
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(InputError::NonFinite { vertex });
            }
            if p.x < self.min || p.x > self.max || p.y < self.min || p.y > self.max {
                return Err(InputError::OutOfRange {
                    vertex,
                    x: p.x,
                    y: p.y,
                    min: self.min,
                    max: self.max,
                });
            }
        }
        let area = tri.area();
        if area < self.min_area {
            return Err(InputError::Collinear {
                area,
                min_area: self.min_area,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn accepts(&self, tri: &Triangle) -> bool {
        self.validate(tri).is_ok()
    }
}
