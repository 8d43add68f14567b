//! Triangle value types.
//!
//! - `Vertex`: label of a corner (A, B, C), used to address angles and sides.
//! - `TriangleKind`: right / obtuse / acute classification.
//! - `Triangle`: ordered triple of points; thin wrappers over `eval`.

use std::fmt;

use nalgebra::Point2;

use super::eval::{self, GeometryError};

/// Corner label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        })
    }
}

/// Classification by the largest interior angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    Right,
    Obtuse,
    Acute,
}

impl TriangleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriangleKind::Right => "right",
            TriangleKind::Obtuse => "obtuse",
            TriangleKind::Acute => "acute",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three labelled points. Not checked for degeneracy; see `is_valid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point2<f64>,
    pub b: Point2<f64>,
    pub c: Point2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn from_coords(coords: [(f64, f64); 3]) -> Self {
        let [a, b, c] = coords.map(|(x, y)| Point2::new(x, y));
        Self { a, b, c }
    }

    #[inline]
    pub fn vertex(&self, v: Vertex) -> Point2<f64> {
        match v {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
        }
    }

    #[inline]
    pub fn points(&self) -> [Point2<f64>; 3] {
        [self.a, self.b, self.c]
    }

    /// Interior angle (degrees) at `v`, rays towards the other two vertices.
    pub fn angle(&self, v: Vertex) -> Result<f64, GeometryError> {
        match v {
            Vertex::A => eval::angle_at_vertex(self.b, self.a, self.c),
            Vertex::B => eval::angle_at_vertex(self.a, self.b, self.c),
            Vertex::C => eval::angle_at_vertex(self.a, self.c, self.b),
        }
    }

    /// Angles at A, B, C in that order.
    pub fn angles(&self) -> Result<[f64; 3], GeometryError> {
        Ok([
            self.angle(Vertex::A)?,
            self.angle(Vertex::B)?,
            self.angle(Vertex::C)?,
        ])
    }

    /// Length of the side opposite `v`.
    #[inline]
    pub fn side(&self, v: Vertex) -> f64 {
        match v {
            Vertex::A => eval::distance(self.b, self.c),
            Vertex::B => eval::distance(self.a, self.c),
            Vertex::C => eval::distance(self.a, self.b),
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        eval::area(self.a, self.b, self.c)
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        eval::signed_area(self.a, self.b, self.c)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        eval::is_valid_triangle(self.a, self.b, self.c)
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        eval::perimeter(self.a, self.b, self.c)
    }

    #[inline]
    pub fn centroid(&self) -> Point2<f64> {
        eval::centroid(self.a, self.b, self.c)
    }
}
