mod circle;
mod quadrilateral;
mod triangle;

pub use circle::Circle;
pub use quadrilateral::Quadrilateral;
pub use triangle::Triangle;

use std::fmt;

use crate::error::{Result, ShapeError};
use crate::math::Point2;
use crate::point::Point;

/// A two-dimensional shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Quadrilateral(Quadrilateral),
}

impl Shape {
    /// Returns the area of the shape.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(c) => c.area(),
            Self::Triangle(t) => t.area(),
            Self::Quadrilateral(q) => q.area(),
        }
    }

    /// Returns the perimeter of the shape.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        match self {
            Self::Circle(c) => c.perimeter(),
            Self::Triangle(t) => t.perimeter(),
            Self::Quadrilateral(q) => q.perimeter(),
        }
    }

    /// Returns the x-coordinate the shape sorts by: the anchor vertex for
    /// polygons, the center for circles.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        match self {
            Self::Circle(c) => c.center().x,
            Self::Triangle(t) => t.anchor().x,
            Self::Quadrilateral(q) => q.anchor().x,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Self::Triangle(triangle)
    }
}

impl From<Quadrilateral> for Shape {
    fn from(quadrilateral: Quadrilateral) -> Self {
        Self::Quadrilateral(quadrilateral)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(c) => write!(f, "{c}"),
            Self::Triangle(t) => write!(f, "{t}"),
            Self::Quadrilateral(q) => write!(f, "{q}"),
        }
    }
}

/// Extracts the first `count` points of `points` as 2D points. Extra points
/// are ignored, matching the polygon constructors' contract.
///
/// # Errors
///
/// Returns `ShapeError::TooFewVertices` if fewer than `count` points are
/// supplied, or `ShapeError::DimensionMismatch` if any of the consumed
/// points is three-dimensional.
pub(crate) fn take_two_d(
    shape: &'static str,
    points: &[Point],
    count: usize,
) -> Result<Vec<Point2>> {
    if points.len() < count {
        return Err(ShapeError::TooFewVertices {
            shape,
            expected: count,
            actual: points.len(),
        }
        .into());
    }
    points[..count]
        .iter()
        .map(|pt| match pt {
            Point::TwoD(p2) => Ok(*p2),
            Point::ThreeD(_) => Err(ShapeError::DimensionMismatch { shape }.into()),
        })
        .collect()
}

pub(crate) fn write_vertices(f: &mut fmt::Formatter<'_>, vertices: &[Point2]) -> fmt::Result {
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({:.2}, {:.2})", v.x, v.y)?;
    }
    Ok(())
}
