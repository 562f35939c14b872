use std::fmt;

use crate::error::Result;
use crate::math::order_2d::clockwise_from_anchor;
use crate::math::slope_2d::collinear;
use crate::math::{Point2, TOLERANCE};
use crate::point::Point;

use super::{take_two_d, write_vertices};

/// A triangle in the x-y plane.
///
/// Vertices are stored starting at the anchor (the corner with the smallest
/// x, ties broken by smallest y) and proceed clockwise. The stored order is
/// re-established whenever the vertices change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from the first three points of `points`, ignoring
    /// any extra points. The vertices are reordered into canonical clockwise
    /// form.
    ///
    /// Degenerate corner configurations are accepted here and reported by
    /// [`Triangle::is_member`].
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are supplied or any of
    /// the first three is three-dimensional.
    pub fn new(points: &[Point]) -> Result<Self> {
        let taken = take_two_d("triangle", points, 3)?;
        let ordered = clockwise_from_anchor(&taken);
        Ok(Self {
            vertices: [ordered[0], ordered[1], ordered[2]],
        })
    }

    /// Returns the vertices in canonical clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns the anchor vertex.
    #[must_use]
    pub fn anchor(&self) -> Point2 {
        self.vertices[0]
    }

    /// Returns the number of sides, which is always three.
    #[must_use]
    pub fn num_sides(&self) -> usize {
        3
    }

    /// Checks whether three corners form a valid triangle: no two corners
    /// coincide and the three are not collinear. The trivial triangle with
    /// all corners at one point is invalid.
    #[must_use]
    pub fn is_member(candidate: &[Point2; 3]) -> bool {
        if (candidate[0] - candidate[1]).norm() < TOLERANCE
            || (candidate[0] - candidate[2]).norm() < TOLERANCE
        {
            return false;
        }
        // Equal slopes from the first corner also catch the remaining
        // coincident pair.
        !collinear(&candidate[0], &candidate[1], &candidate[2])
    }

    /// Checks whether this triangle's own vertices form a valid triangle.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::is_member(&self.vertices)
    }

    /// Snaps each vertex to its nearest integer x-y coordinate, in place.
    /// If rounding would make the triangle invalid, it is left unchanged.
    pub fn snap(&mut self) {
        let mut snapped = self.vertices;
        for v in &mut snapped {
            v.x = v.x.round();
            v.y = v.y.round();
        }
        if Self::is_member(&snapped) {
            // Rounding can move the anchor, so restore the canonical order.
            let ordered = clockwise_from_anchor(&snapped);
            self.vertices = [ordered[0], ordered[1], ordered[2]];
        }
    }

    /// Half the signed shoelace value of three corners. Positive when the
    /// corners run clockwise.
    #[must_use]
    pub fn signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
        0.5 * ((c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y))
    }

    /// Returns the area of this triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        Self::signed_area(a, b, c)
    }

    /// Returns the perimeter of this triangle.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        (b - a).norm() + (c - b).norm() + (a - c).norm()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle[")?;
        write_vertices(f, &self.vertices)?;
        write!(f, "]")
    }
}
