//! Triangle with cached extremal vertices and the height-dependent extent.

use super::predicates::cross;
use super::types::{Aabb, Extent, Point};

/// Triangle over three integer vertices, given in either winding.
///
/// Invariants:
/// - `highest` is the index of the LAST vertex (input order) with maximum y.
/// - `lowest` is the index of the FIRST vertex (input order) with minimum y.
/// - Consequently `highest != lowest`, even for a flat triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [Point; 3],
    highest: usize,
    lowest: usize,
}

impl Triangle {
    pub fn new(vertices: [Point; 3]) -> Self {
        let mut highest = 0;
        let mut lowest = 0;
        for (i, v) in vertices.iter().enumerate().skip(1) {
            if v.y >= vertices[highest].y {
                highest = i;
            }
            if v.y < vertices[lowest].y {
                lowest = i;
            }
        }
        Self {
            vertices,
            highest,
            lowest,
        }
    }

    #[inline]
    pub fn highest(&self) -> Point {
        self.vertices[self.highest]
    }

    #[inline]
    pub fn lowest(&self) -> Point {
        self.vertices[self.lowest]
    }

    #[inline]
    pub fn highest_index(&self) -> usize {
        self.highest
    }

    #[inline]
    pub fn lowest_index(&self) -> usize {
        self.lowest
    }

    /// Index of the vertex that is neither highest nor lowest.
    #[inline]
    pub fn middle_index(&self) -> usize {
        3 - self.highest - self.lowest
    }

    #[inline]
    pub fn spans_height(&self, y: i64) -> bool {
        self.lowest().y <= y && y <= self.highest().y
    }

    /// Closed containment test; boundary counts as inside, either winding accepted.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        let [a, b, c] = self.vertices;
        let ab = cross(p, a, b);
        let bc = cross(p, b, c);
        let ca = cross(p, c, a);
        (ab >= 0 && bc >= 0 && ca >= 0) || (ab <= 0 && bc <= 0 && ca <= 0)
    }

    /// Horizontal extent of the triangle on the line at height `y`.
    ///
    /// Each edge whose y-range covers `y` (inclusive) contributes its intercept;
    /// a horizontal edge contributes both endpoints. Intercepts use truncating
    /// integer division, so the result can be off by less than one unit.
    ///
    /// Returns `None` if the triangle does not intersect height `y`.
    pub fn horizontal_extent_at(&self, y: i64) -> Option<Extent> {
        let mut out: Option<Extent> = None;
        for i in 0..3 {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % 3];
            if !(a.y.min(b.y) <= y && y <= a.y.max(b.y)) {
                continue;
            }
            let (lo, hi) = if a.y == b.y {
                (a.x.min(b.x), a.x.max(b.x))
            } else {
                let x = a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y);
                (x, x)
            };
            out = Some(match out {
                None => Extent {
                    min_x: lo,
                    max_x: hi,
                },
                Some(e) => Extent {
                    min_x: e.min_x.min(lo),
                    max_x: e.max_x.max(hi),
                },
            });
        }
        out
    }

    pub fn bounding_box(&self) -> Aabb {
        let [a, b, c] = self.vertices.map(Point::to_vec);
        Aabb {
            min: a.inf(&b).inf(&c),
            max: a.sup(&b).sup(&c),
        }
    }

    /// Twice the signed area; zero for a degenerate triangle.
    #[inline]
    pub fn doubled_area(&self) -> i64 {
        let [a, b, c] = self.vertices;
        cross(a, b, c)
    }
}

impl From<[(i64, i64); 3]> for Triangle {
    fn from(v: [(i64, i64); 3]) -> Self {
        Triangle::new(v.map(Point::from))
    }
}
