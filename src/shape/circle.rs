use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A circle in the x-y plane, defined by a center and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the area of the circle.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle[center: {:.2}, {:.2}; radius: {:.2}]",
            self.center.x, self.center.y, self.radius
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_of_unit_circle() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        assert_relative_eq!(c.area(), PI, max_relative = 1e-12);
    }

    #[test]
    fn perimeter_scales_with_radius() {
        let c = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        assert_relative_eq!(c.perimeter(), 6.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn zero_radius_rejected() {
        assert!(Circle::new(Point2::origin(), 0.0).is_err());
    }

    #[test]
    fn negative_radius_rejected() {
        assert!(Circle::new(Point2::origin(), -2.0).is_err());
    }

    #[test]
    fn display_format() {
        let c = Circle::new(Point2::new(10.6, 3.5), 16.0).unwrap();
        assert_eq!(c.to_string(), "Circle[center: 10.60, 3.50; radius: 16.00]");
    }
}
