//! Tolerance defaults for triangle evaluation.
//!
//! Policy
//! - Defaults are fixed constants; the classification band and the validity
//!   gate are externally observable, so they are never tuned per call site.
//! - `EvalCfg` exists for callers that must evaluate under other thresholds
//!   (tests, experiments); everything else goes through the free functions.

/// Minimum shoelace area for three points to count as a triangle.
pub const VALID_AREA_EPS: f64 = 1e-3;
/// Half-width (degrees) of the band around 90° that classifies as right.
pub const RIGHT_ANGLE_TOL_DEG: f64 = 0.1;

/// Lower coordinate bound accepted by the input form.
pub const COORD_MIN: f64 = 0.0;
/// Upper coordinate bound accepted by the input form (canvas size).
pub const COORD_MAX: f64 = 800.0;
/// Minimum area the input form accepts before it draws anything.
pub const MIN_INPUT_AREA: f64 = 1.0;

/// Evaluator thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalCfg {
    pub valid_area_eps: f64,
    pub right_angle_tol_deg: f64,
}

impl Default for EvalCfg {
    fn default() -> Self {
        Self {
            valid_area_eps: VALID_AREA_EPS,
            right_angle_tol_deg: RIGHT_ANGLE_TOL_DEG,
        }
    }
}
