//! Sweep driver: drains the event queue and resolves query points.
//!
//! State machine: `Idle` (built, nothing consumed) → `Running` → `Done`.
//! A `Sweep` runs synchronously to completion or stops at the first
//! invariant violation; there is no pause and no restart. Running a `Done`
//! sweep again returns the recorded outcome or error.

use super::active::ActiveSet;
use super::error::SweepError;
use super::event::{Event, EventKind, EventQueue};
use super::line::SweepLine;
use crate::geom::{Point, Triangle, TriangleId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Done,
}

/// Counters collected during one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub events: usize,
    pub queries: usize,
    pub containment_tests: usize,
    pub peak_active: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepOutcome {
    pub count: u64,
    pub stats: SweepStats,
}

/// One plane-sweep invocation. Owns its sweep line and active set.
pub struct Sweep<'a> {
    triangles: &'a [Triangle],
    queue: EventQueue,
    line: SweepLine,
    active: ActiveSet,
    count: u64,
    stats: SweepStats,
    phase: Phase,
    failure: Option<SweepError>,
}

impl<'a> Sweep<'a> {
    pub fn new(points: &[Point], triangles: &'a [Triangle]) -> Self {
        Self {
            triangles,
            queue: EventQueue::build(points, triangles),
            line: SweepLine::above_all(),
            active: ActiveSet::with_capacity(triangles.len()),
            count: 0,
            stats: SweepStats::default(),
            phase: Phase::Idle,
            failure: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Consume every event and return the number of (point, triangle)
    /// containments found.
    pub fn run(&mut self) -> Result<SweepOutcome, SweepError> {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            let result = self.drain().and_then(|()| self.finish());
            self.failure = result.err();
            self.phase = Phase::Done;
        }
        match self.failure {
            Some(e) => Err(e),
            None => Ok(SweepOutcome {
                count: self.count,
                stats: self.stats,
            }),
        }
    }

    fn drain(&mut self) -> Result<(), SweepError> {
        while let Some(ev) = self.queue.next() {
            self.step(ev)?;
        }
        Ok(())
    }

    /// Check that every triangle left the active set, then log the summary.
    pub(super) fn finish(&self) -> Result<(), SweepError> {
        if !self.active.is_empty() {
            return Err(SweepError::LeftActive {
                remaining: self.active.len(),
            });
        }
        tracing::debug!(
            count = self.count,
            events = self.stats.events,
            queries = self.stats.queries,
            tests = self.stats.containment_tests,
            peak_active = self.stats.peak_active,
            "plane_sweep_done"
        );
        Ok(())
    }

    pub(super) fn step(&mut self, ev: Event) -> Result<(), SweepError> {
        self.stats.events += 1;
        self.line.advance_to(ev.at.y);
        match ev.kind {
            EventKind::Enter(id) => self.enter(id),
            EventKind::Leave(id) => {
                if self.active.remove(id) {
                    Ok(())
                } else {
                    Err(SweepError::NotActive { triangle: id })
                }
            }
            EventKind::Query(_) => self.resolve(ev.at),
        }
    }

    fn enter(&mut self, id: TriangleId) -> Result<(), SweepError> {
        let (line, triangles) = (self.line, self.triangles);
        let key = line.key_of(triangles, id)?;
        let inserted = self
            .active
            .insert_by(id, |other| line.key_of(triangles, other).map(|k| key.cmp(&k)))?;
        if !inserted {
            return Err(SweepError::AlreadyActive { triangle: id });
        }
        self.stats.peak_active = self.stats.peak_active.max(self.active.len());
        Ok(())
    }

    /// Test the active neighbours left and right of `p` (at most two).
    fn resolve(&mut self, p: Point) -> Result<(), SweepError> {
        self.stats.queries += 1;
        let (line, triangles) = (self.line, self.triangles);
        let floor = self.active.floor_by(|t| line.probe(triangles, p.x, t))?;
        let ceiling = self.active.ceiling_by(|t| line.probe(triangles, p.x, t))?;
        let candidates = floor
            .into_iter()
            .chain(ceiling.filter(|&c| Some(c) != floor));
        for id in candidates {
            self.stats.containment_tests += 1;
            if triangles[id.0].contains_point(p) {
                self.count += 1;
            }
        }
        Ok(())
    }
}
