use std::cmp::Ordering;

use super::slope_2d::slope;
use super::{Point2, TOLERANCE};

/// Returns the index of the anchor vertex: the one with the smallest x,
/// breaking ties by smallest y.
#[must_use]
pub fn anchor_index(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || ((pt.x - b.x).abs() < TOLERANCE && pt.y < b.y) {
            best = i;
        }
    }
    best
}

/// Reorders `points` so the result starts at the anchor vertex and proceeds
/// clockwise around the boundary. Ensures deterministic vertex storage.
///
/// Every non-anchor point lies on or right of the anchor, so sorting by
/// descending anchor slope walks the boundary clockwise: the steepest slope
/// (the vertical sentinel first of all) comes immediately after the anchor.
/// Equal slopes fall back to ascending x, then descending y.
#[must_use]
pub fn clockwise_from_anchor(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let anchor_idx = anchor_index(points);
    let anchor = points[anchor_idx];

    let mut rest: Vec<Point2> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != anchor_idx)
        .map(|(_, pt)| *pt)
        .collect();

    rest.sort_by(|a, b| {
        let sa = slope(&anchor, a);
        let sb = slope(&anchor, b);
        sb.partial_cmp(&sa)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
            .then(b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal))
    });

    let mut ordered = Vec::with_capacity(points.len());
    ordered.push(anchor);
    ordered.extend(rest);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn anchor_is_leftmost() {
        let pts = vec![p(2.0, 0.0), p(0.5, 3.0), p(1.0, 1.0)];
        assert_eq!(anchor_index(&pts), 1);
    }

    #[test]
    fn anchor_tie_breaks_on_y() {
        let pts = vec![p(1.0, 2.0), p(1.0, -1.0), p(4.0, 0.0)];
        assert_eq!(anchor_index(&pts), 1);
    }

    #[test]
    fn triangle_clockwise_order() {
        // Anchor (0,0); (1,3) is steeper than (3,1), so it comes first.
        let pts = vec![p(3.0, 1.0), p(0.0, 0.0), p(1.0, 3.0)];
        let ordered = clockwise_from_anchor(&pts);
        assert!((ordered[0] - p(0.0, 0.0)).norm() < TOLERANCE);
        assert!((ordered[1] - p(1.0, 3.0)).norm() < TOLERANCE);
        assert!((ordered[2] - p(3.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn vertical_edge_comes_first() {
        // (0,2) is straight above the anchor: sentinel slope, first clockwise.
        let pts = vec![p(2.0, 2.0), p(0.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)];
        let ordered = clockwise_from_anchor(&pts);
        assert!((ordered[0] - p(0.0, 0.0)).norm() < TOLERANCE);
        assert!((ordered[1] - p(0.0, 2.0)).norm() < TOLERANCE);
        assert!((ordered[2] - p(2.0, 2.0)).norm() < TOLERANCE);
        assert!((ordered[3] - p(2.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn equal_slopes_tie_break_on_x() {
        // Both points on the same line through the anchor.
        let pts = vec![p(4.0, 4.0), p(0.0, 0.0), p(2.0, 2.0)];
        let ordered = clockwise_from_anchor(&pts);
        assert!((ordered[1] - p(2.0, 2.0)).norm() < TOLERANCE);
        assert!((ordered[2] - p(4.0, 4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn quadrilateral_clockwise_order() {
        let pts = vec![p(3.59, 100.31), p(30.59, 1.23), p(1.59, 7.31), p(16.58, 4.15)];
        let ordered = clockwise_from_anchor(&pts);
        assert!((ordered[0] - p(1.59, 7.31)).norm() < TOLERANCE);
        assert!((ordered[1] - p(3.59, 100.31)).norm() < TOLERANCE);
        assert!((ordered[2] - p(30.59, 1.23)).norm() < TOLERANCE);
        assert!((ordered[3] - p(16.58, 4.15)).norm() < TOLERANCE);
    }

    #[test]
    fn single_point_unchanged() {
        let pts = vec![p(1.0, 1.0)];
        let ordered = clockwise_from_anchor(&pts);
        assert_eq!(ordered.len(), 1);
    }
}
