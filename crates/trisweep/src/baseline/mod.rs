//! Reference counting algorithms sharing the plane sweep's contract.
//!
//! - `brute`: every (point, triangle) pair.
//! - `kd`: 2-d tree over point locations, one bounding-box range query per
//!   triangle, exact test on the candidates.
//!
//! Both count every containment, with no restriction on overlap, and serve as
//! the oracle for the sweep in tests and benchmarks.

pub mod brute;
pub mod kd;
