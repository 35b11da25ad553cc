//! Exact integer 2D geometry (points, triangles, orientation).
//!
//! Purpose
//! - Provide the leaf predicates every counting algorithm relies on:
//!   the orientation test and the closed point-in-triangle test.
//! - Provide the `Triangle` abstraction used by the sweep: cached extremal
//!   vertices and the horizontal extent at a given height.
//!
//! Conventions
//! - Coordinates are `i64`. Products of two coordinate differences must fit
//!   in `i64`, which holds for coordinates up to about 1e9 in magnitude.
//! - No floating point anywhere. The only inexact step is the truncating
//!   division in `Triangle::horizontal_extent_at`.
//! - Degenerate (zero-area) triangles are a caller precondition violation;
//!   nothing here detects them.
//!
//! Code cross-refs: `sweep::ActiveSet`, `baseline::{brute, kd}`

mod predicates;
mod triangle;
mod types;

pub use predicates::{cross, orientation, Orientation};
pub use triangle::Triangle;
pub use types::{Aabb, Extent, Point, PointId, Role, TriangleId};
