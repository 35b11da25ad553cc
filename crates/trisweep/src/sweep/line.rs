//! Sweep-height context and the active-set ordering key derived from it.

use std::cmp::Ordering;

use super::error::SweepError;
use crate::geom::{Extent, Triangle, TriangleId};

/// Position of the sweep line. One per sweep invocation; never shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepLine {
    y: i64,
}

/// Ordering key of an active triangle at the current height:
/// `(min_x, max_x, id)` compared lexicographically.
///
/// The id makes the order strict, so two triangles with coincident extents
/// never collapse into one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActiveKey {
    pub min_x: i64,
    pub max_x: i64,
    pub id: TriangleId,
}

impl SweepLine {
    /// A line above every integer height, the state before the first event.
    #[inline]
    pub fn above_all() -> Self {
        Self { y: i64::MAX }
    }

    #[inline]
    pub fn at(y: i64) -> Self {
        Self { y }
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Move the line down to `y`. Heights never increase during a sweep.
    #[inline]
    pub fn advance_to(&mut self, y: i64) {
        debug_assert!(y <= self.y, "sweep line moved up: {} -> {y}", self.y);
        self.y = y;
    }

    /// Extent of triangle `id` at the current height.
    pub fn extent_of(&self, triangles: &[Triangle], id: TriangleId) -> Result<Extent, SweepError> {
        triangles[id.0]
            .horizontal_extent_at(self.y)
            .ok_or(SweepError::InactiveTriangle {
                triangle: id,
                y: self.y,
            })
    }

    pub fn key_of(&self, triangles: &[Triangle], id: TriangleId) -> Result<ActiveKey, SweepError> {
        let e = self.extent_of(triangles, id)?;
        Ok(ActiveKey {
            min_x: e.min_x,
            max_x: e.max_x,
            id,
        })
    }

    /// Order of two triangles at the current height.
    pub fn compare(
        &self,
        triangles: &[Triangle],
        a: TriangleId,
        b: TriangleId,
    ) -> Result<Ordering, SweepError> {
        Ok(self.key_of(triangles, a)?.cmp(&self.key_of(triangles, b)?))
    }

    /// Order of a query location `x` (a zero-width extent `[x, x]`) against
    /// triangle `id`, ignoring identity. `Equal` means coincident extents.
    pub fn probe(&self, triangles: &[Triangle], x: i64, id: TriangleId) -> Result<Ordering, SweepError> {
        let e = self.extent_of(triangles, id)?;
        Ok((x, x).cmp(&(e.min_x, e.max_x)))
    }
}
