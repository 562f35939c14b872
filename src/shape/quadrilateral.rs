use std::fmt;

use crate::error::Result;
use crate::math::order_2d::clockwise_from_anchor;
use crate::math::Point2;
use crate::point::Point;

use super::{take_two_d, write_vertices, Triangle};

/// A quadrilateral in the x-y plane.
///
/// Vertices are stored starting at the anchor and proceed clockwise, like
/// [`Triangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral {
    vertices: [Point2; 4],
}

impl Quadrilateral {
    /// Creates a quadrilateral from the first four points of `points`,
    /// ignoring any extra points. The vertices are reordered into canonical
    /// clockwise form.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than four points are supplied or any of
    /// the first four is three-dimensional.
    pub fn new(points: &[Point]) -> Result<Self> {
        let taken = take_two_d("quadrilateral", points, 4)?;
        let ordered = clockwise_from_anchor(&taken);
        Ok(Self {
            vertices: [ordered[0], ordered[1], ordered[2], ordered[3]],
        })
    }

    /// Returns the vertices in canonical clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 4] {
        &self.vertices
    }

    /// Returns the anchor vertex.
    #[must_use]
    pub fn anchor(&self) -> Point2 {
        self.vertices[0]
    }

    /// Returns the number of sides, which is always four.
    #[must_use]
    pub fn num_sides(&self) -> usize {
        4
    }

    /// Checks whether four corners form a valid quadrilateral.
    ///
    /// A quadrilateral ABCD is valid when all four constituent triangles
    /// (ABC, ACD, BCD, ABD, each formed by omitting one corner) are valid,
    /// which rejects coincident corners and any three corners on one line.
    #[must_use]
    pub fn is_member(candidate: &[Point2; 4]) -> bool {
        let [a, b, c, d] = *candidate;
        Triangle::is_member(&[a, b, c])
            && Triangle::is_member(&[a, c, d])
            && Triangle::is_member(&[b, c, d])
            && Triangle::is_member(&[a, b, d])
    }

    /// Checks whether this quadrilateral's own vertices form a valid
    /// quadrilateral.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::is_member(&self.vertices)
    }

    /// Snaps each vertex to its nearest integer x-y coordinate, in place.
    /// If rounding would make the quadrilateral invalid, it is left
    /// unchanged.
    pub fn snap(&mut self) {
        let mut snapped = self.vertices;
        for v in &mut snapped {
            v.x = v.x.round();
            v.y = v.y.round();
        }
        if Self::is_member(&snapped) {
            let ordered = clockwise_from_anchor(&snapped);
            self.vertices = [ordered[0], ordered[1], ordered[2], ordered[3]];
        }
    }

    /// Returns the area of this quadrilateral: the two triangles split
    /// along the diagonal from the anchor to the opposite corner.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c, d] = &self.vertices;
        Triangle::signed_area(a, b, c) + Triangle::signed_area(a, c, d)
    }

    /// Returns the perimeter of this quadrilateral.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let [a, b, c, d] = &self.vertices;
        (b - a).norm() + (c - b).norm() + (d - c).norm() + (a - d).norm()
    }
}

impl fmt::Display for Quadrilateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quadrilateral[")?;
        write_vertices(f, &self.vertices)?;
        write!(f, "]")
    }
}
