//! Basic value types: points, identities, extents and boxes.
//!
//! - `Point`: integer location, immutable once created.
//! - `PointId`, `TriangleId`: input-order sequence ids, the final tie-break
//!   wherever a strict total order is needed.
//! - `Role`: what a location stands for in the event stream.

use nalgebra::Vector2;

/// Integer point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<i64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<i64>> for Point {
    #[inline]
    fn from(v: Vector2<i64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Identifier types for clarity. Both equal the index in the caller's input slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriangleId(pub usize);

/// Role of a location in the sweep: a query point, or a vertex of a triangle.
///
/// The triangle reference is an index, not ownership; the triangle slice
/// outlives every event that mentions it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Query(PointId),
    Vertex(TriangleId),
}

/// Closed horizontal interval `[min_x, max_x]` covered by a triangle at one height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i64,
    pub max_x: i64,
}

impl Extent {
    #[inline]
    pub fn contains_x(&self, x: i64) -> bool {
        self.min_x <= x && x <= self.max_x
    }
}

/// Closed axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub min: Vector2<i64>,
    pub max: Vector2<i64>,
}

impl Aabb {
    /// Smallest box containing all `points`; `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?.to_vec();
        let (min, max) = points.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (lo.inf(&p.to_vec()), hi.sup(&p.to_vec()))
        });
        Some(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}
