use std::cmp::Ordering;

use super::types::Point;

/// Turn direction of the ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Twice the signed area of `(a, b, c)`: cross product of `b - a` and `c - a`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i64 {
    let ab = b.to_vec() - a.to_vec();
    let ac = c.to_vec() - a.to_vec();
    ab.x * ac.y - ab.y * ac.x
}

/// Sign of `cross(a, b, c)`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    match cross(a, b, c).cmp(&0) {
        Ordering::Less => Orientation::Clockwise,
        Ordering::Equal => Orientation::Collinear,
        Ordering::Greater => Orientation::CounterClockwise,
    }
}
