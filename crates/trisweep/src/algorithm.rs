//! The three interchangeable counting algorithms behind one enum.

use std::fmt;
use std::str::FromStr;

use crate::baseline::{brute, kd};
use crate::geom::{Point, Triangle};
use crate::sweep::{self, SweepError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    KdTree,
    PlaneSweep,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::BruteForce, Algorithm::KdTree, Algorithm::PlaneSweep];

    /// Name used in benchmark reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute-Force",
            Algorithm::KdTree => "KD-Search",
            Algorithm::PlaneSweep => "Plane-Sweep",
        }
    }

    /// Total number of (point, triangle) containments.
    ///
    /// Only the plane sweep can fail, and only on an internal invariant violation.
    pub fn count(self, points: &[Point], triangles: &[Triangle]) -> Result<u64, SweepError> {
        match self {
            Algorithm::BruteForce => Ok(brute::count(points, triangles)),
            Algorithm::KdTree => Ok(kd::count(points, triangles)),
            Algorithm::PlaneSweep => sweep::try_count(points, triangles),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brute" | "brute-force" | "bruteforce" => Ok(Algorithm::BruteForce),
            "kd" | "kd-tree" | "kd-search" | "kdtree" => Ok(Algorithm::KdTree),
            "sweep" | "plane-sweep" | "planesweep" => Ok(Algorithm::PlaneSweep),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}
