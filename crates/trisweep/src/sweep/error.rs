use std::fmt;

use crate::geom::TriangleId;

/// Failures of the plane sweep.
///
/// Every variant is an invariant violation in event ordering or membership
/// tracking, never bad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepError {
    /// A triangle held in the active set does not intersect the sweep line.
    InactiveTriangle { triangle: TriangleId, y: i64 },
    /// An enter event for a triangle that is already active.
    AlreadyActive { triangle: TriangleId },
    /// A leave event for a triangle that is not active.
    NotActive { triangle: TriangleId },
    /// Triangles still active after the last event.
    LeftActive { remaining: usize },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InactiveTriangle { triangle, y } => write!(
                f,
                "active triangle {} does not intersect sweep line y={y}",
                triangle.0
            ),
            Self::AlreadyActive { triangle } => {
                write!(f, "triangle {} entered twice", triangle.0)
            }
            Self::NotActive { triangle } => {
                write!(f, "triangle {} left without being active", triangle.0)
            }
            Self::LeftActive { remaining } => {
                write!(f, "{remaining} triangles still active after the last event")
            }
        }
    }
}

impl std::error::Error for SweepError {}
