use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3};

/// A point in two- or three-dimensional Euclidean space.
///
/// Collections mixing both dimensions can still be measured against each
/// other: a 2D point is treated as lying in the `z = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point {
    TwoD(Point2),
    ThreeD(Point3),
}

impl Point {
    /// Creates a 2D point.
    #[must_use]
    pub fn two_d(x: f64, y: f64) -> Self {
        Self::TwoD(Point2::new(x, y))
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn three_d(x: f64, y: f64, z: f64) -> Self {
        Self::ThreeD(Point3::new(x, y, z))
    }

    /// Builds 2D points from a flat coordinate array, consuming the values
    /// in (x, y) pairs.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::OddCoordinateCount` if the array holds an odd
    /// number of values.
    pub fn two_d_of(coordinates: &[f64]) -> Result<Vec<Self>> {
        if coordinates.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount(coordinates.len()).into());
        }
        Ok(coordinates
            .chunks_exact(2)
            .map(|pair| Self::two_d(pair[0], pair[1]))
            .collect())
    }

    /// Returns the x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::TwoD(pt) => pt.x,
            Self::ThreeD(pt) => pt.x,
        }
    }

    /// Returns the y value.
    #[must_use]
    pub fn y(&self) -> f64 {
        match self {
            Self::TwoD(pt) => pt.y,
            Self::ThreeD(pt) => pt.y,
        }
    }

    /// Returns the z value, or `None` for a 2D point.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match self {
            Self::TwoD(_) => None,
            Self::ThreeD(pt) => Some(pt.z),
        }
    }

    fn coords(&self) -> (f64, f64, f64) {
        match self {
            Self::TwoD(pt) => (pt.x, pt.y, 0.0),
            Self::ThreeD(pt) => (pt.x, pt.y, pt.z),
        }
    }

    /// Returns the Euclidean distance between this point and `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let (x1, y1, z1) = self.coords();
        let (x2, y2, z2) = other.coords();
        ((x2 - x1).powi(2) + (y2 - y1).powi(2) + (z2 - z1).powi(2)).sqrt()
    }

    /// Returns the distance between this point and the origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        self.distance(&Self::two_d(0.0, 0.0))
    }
}

impl From<Point2> for Point {
    fn from(pt: Point2) -> Self {
        Self::TwoD(pt)
    }
}

impl From<Point3> for Point {
    fn from(pt: Point3) -> Self {
        Self::ThreeD(pt)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoD(pt) => write!(f, "({:.2}, {:.2})", pt.x, pt.y),
            Self::ThreeD(pt) => write!(f, "({:.2}, {:.2}, {:.2})", pt.x, pt.y, pt.z),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn distance_2d() {
        let a = Point::two_d(0.0, 0.0);
        let b = Point::two_d(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn distance_3d() {
        let a = Point::three_d(1.0, 2.0, 3.0);
        let b = Point::three_d(1.0, 2.0, 3.0);
        assert!(a.distance(&b).abs() < TOLERANCE);
    }

    #[test]
    fn distance_mixed_dimensions() {
        // The 2D point sits in the z = 0 plane.
        let a = Point::two_d(0.0, 0.0);
        let b = Point::three_d(0.0, 0.0, 2.0);
        assert!((a.distance(&b) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn distance_from_origin_3d() {
        let pt = Point::three_d(2.0, 3.0, 6.0);
        assert!((pt.distance_from_origin() - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn two_d_of_pairs() {
        let pts = Point::two_d_of(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(pts.len(), 2);
        assert!((pts[1].x() - 3.0).abs() < TOLERANCE);
        assert!((pts[1].y() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn two_d_of_rejects_odd_count() {
        assert!(Point::two_d_of(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn z_accessor() {
        assert_eq!(Point::two_d(1.0, 2.0).z(), None);
        assert_eq!(Point::three_d(1.0, 2.0, 3.0).z(), Some(3.0));
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Point::two_d(7.79, 45.661).to_string(), "(7.79, 45.66)");
        assert_eq!(
            Point::three_d(-21.9, 20.77, -176.22).to_string(),
            "(-21.90, 20.77, -176.22)"
        );
    }
}
