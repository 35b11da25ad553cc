//! Plane-sweep counting of point-in-triangle containments.
//!
//! Purpose
//! - Count, over all query points, how many triangles contain each point, in
//!   one top-to-bottom pass instead of testing every pair.
//!
//! Model
//! - Events (`event`) are every query point plus each triangle's highest and
//!   lowest vertex, sorted by height.
//! - The active set (`active`) holds the triangles crossed by the sweep line,
//!   ordered by their extent at the current height (`line::ActiveKey`).
//! - A query looks up its floor and ceiling neighbours and runs the exact
//!   containment test on at most those two triangles.
//!
//! Limits
//! - At most two triangles are tested per query. The count matches the
//!   all-pairs count when triangles active at the same height do not overlap,
//!   which is the input class the datasets are built from.
//! - Degenerate triangles and duplicate points are precondition violations.
//!
//! Code cross-refs: `geom::Triangle`, `baseline::{brute, kd}`

mod active;
mod driver;
mod error;
mod event;
mod line;

pub use active::{ActiveSet, Iter as ActiveIter};
pub use driver::{Phase, Sweep, SweepOutcome, SweepStats};
pub use error::SweepError;
pub use event::{sweep_order, Event, EventKind, EventQueue};
pub use line::{ActiveKey, SweepLine};

use crate::geom::{Point, Triangle};

/// Plane-sweep count; invariant violations are returned as errors.
pub fn try_count(points: &[Point], triangles: &[Triangle]) -> Result<u64, SweepError> {
    Sweep::new(points, triangles).run().map(|o| o.count)
}

/// Plane-sweep count.
///
/// # Panics
/// If the sweep detects an invariant violation (an active triangle that does
/// not intersect the sweep line). That indicates a bug, not bad input.
pub fn count(points: &[Point], triangles: &[Triangle]) -> u64 {
    match try_count(points, triangles) {
        Ok(n) => n,
        Err(e) => panic!("plane sweep aborted: {e}"),
    }
}
