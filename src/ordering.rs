use std::cmp::Ordering;

use crate::point::Point;
use crate::shape::Shape;

/// Sorts shapes in increasing order of their leftmost x-coordinate.
pub fn sort_shapes_by_min_x(shapes: &mut [Shape]) {
    shapes.sort_by(|a, b| a.min_x().partial_cmp(&b.min_x()).unwrap_or(Ordering::Equal));
}

/// Sorts shapes in increasing order of area.
pub fn sort_shapes_by_area(shapes: &mut [Shape]) {
    shapes.sort_by(|a, b| a.area().partial_cmp(&b.area()).unwrap_or(Ordering::Equal));
}

/// Sorts points in increasing order of their x values.
pub fn sort_points_by_x(points: &mut [Point]) {
    points.sort_by(|a, b| a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal));
}

/// Sorts points in increasing order of their distance from the origin.
pub fn sort_points_by_origin_distance(points: &mut [Point]) {
    points.sort_by(|a, b| {
        a.distance_from_origin()
            .partial_cmp(&b.distance_from_origin())
            .unwrap_or(Ordering::Equal)
    });
}

/// Returns the shape with the smallest area, or `None` for an empty slice.
#[must_use]
pub fn least_by_area(shapes: &[Shape]) -> Option<&Shape> {
    shapes
        .iter()
        .min_by(|a, b| a.area().partial_cmp(&b.area()).unwrap_or(Ordering::Equal))
}
