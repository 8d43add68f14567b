//! Triangle geometry: angles, area, classification and input validation for
//! three points on a drawing canvas.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - The evaluator (`geom2`) is pure and stateless; callers build a
//!   `Triangle`, gate it with `input::InputPolicy` or `is_valid_triangle`,
//!   then ask for angles or a full `Measurements` report.

pub mod api;
pub mod geom2;
pub mod input;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Point2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_triangle, Bounds2, ReplayToken, SampleCfg};
    pub use crate::geom2::{
        angle_at_vertex, area, classify, distance, is_valid_triangle, measure, GeometryError,
        Measurements, Triangle, TriangleKind, Vertex,
    };
    pub use crate::input::{InputError, InputPolicy};
    pub use nalgebra::Point2;
}
