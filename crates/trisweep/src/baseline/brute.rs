use crate::geom::{Point, Triangle};

/// Number of (point, triangle) pairs with the point inside or on the triangle.
pub fn count(points: &[Point], triangles: &[Triangle]) -> u64 {
    points
        .iter()
        .map(|&p| triangles.iter().filter(|t| t.contains_point(p)).count() as u64)
        .sum()
}
