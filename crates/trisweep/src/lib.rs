//! Batched point-in-triangle counting.
//!
//! Given query points and (possibly overlapping) triangles, count the
//! (point, triangle) pairs where the point lies inside or on the triangle.
//! Three interchangeable algorithms share that contract:
//! - `baseline::brute`: all pairs.
//! - `baseline::kd`: 2-d tree range filtering by bounding box.
//! - `sweep`: a single top-to-bottom plane sweep over an ordered active set.
//!
//! Supporting modules: `geom` (exact integer predicates), `dataset` (text
//! input format), `gen` (deterministic benchmark datasets).

pub mod algorithm;
pub mod baseline;
pub mod dataset;
pub mod gen;
pub mod geom;
mod hash;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algorithm::Algorithm;
pub use dataset::{Dataset, ParseError};
pub use geom::{Point, Triangle};
pub use sweep::{count, try_count, SweepError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::baseline::{brute, kd};
    pub use crate::dataset::{Dataset, ParseError, ParseErrorKind};
    pub use crate::geom::{orientation, Aabb, Extent, Orientation, Point, PointId, Triangle, TriangleId};
    pub use crate::sweep::{try_count, Sweep, SweepError, SweepOutcome, SweepStats};
}
