//! Event model: the totally ordered stream the sweep consumes.
//!
//! Order (see `sweep_order`):
//! 1. y descending (the line moves top to bottom),
//! 2. at equal y: enter < query < leave,
//! 3. x ascending,
//! 4. insertion sequence number.
//!
//! Enter-before-query makes a triangle whose apex sits at a query's height
//! visible to that query; query-before-leave keeps a triangle whose bottom
//! vertex sits at that height visible as well.
//!
//! Middle vertices (neither highest nor lowest) cause no state change and are
//! left out of the queue. Their sequence numbers are still reserved, so the
//! ids of the remaining events do not depend on that choice.

use std::cmp::Ordering;

use crate::geom::{Point, PointId, Role, Triangle, TriangleId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Highest vertex of a triangle: the triangle becomes active.
    Enter(TriangleId),
    /// A plain query point.
    Query(PointId),
    /// Lowest vertex of a triangle: the triangle becomes inactive.
    Leave(TriangleId),
}

impl EventKind {
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            EventKind::Enter(_) => 0,
            EventKind::Query(_) => 1,
            EventKind::Leave(_) => 2,
        }
    }

    #[inline]
    pub fn role(self) -> Role {
        match self {
            EventKind::Enter(t) | EventKind::Leave(t) => Role::Vertex(t),
            EventKind::Query(p) => Role::Query(p),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub at: Point,
    pub kind: EventKind,
    pub seq: usize,
}

/// Sweep order over events. Strict: distinct events never compare equal.
pub fn sweep_order(a: &Event, b: &Event) -> Ordering {
    b.at.y
        .cmp(&a.at.y)
        .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
        .then_with(|| a.at.x.cmp(&b.at.x))
        .then_with(|| a.seq.cmp(&b.seq))
}

/// Finite, consume-once event stream in sweep order.
#[derive(Debug)]
pub struct EventQueue {
    events: std::vec::IntoIter<Event>,
}

impl EventQueue {
    /// Merge query points and triangle extremal vertices into one sorted stream.
    ///
    /// Sequence numbers: point `i` gets `i`; vertex `k` of triangle `j` gets
    /// `points.len() + 3 * j + k`.
    pub fn build(points: &[Point], triangles: &[Triangle]) -> Self {
        let mut events = Vec::with_capacity(points.len() + 2 * triangles.len());
        events.extend(points.iter().enumerate().map(|(i, &at)| Event {
            at,
            kind: EventKind::Query(PointId(i)),
            seq: i,
        }));
        let base = points.len();
        for (j, t) in triangles.iter().enumerate() {
            let id = TriangleId(j);
            let seq = |k: usize| base + 3 * j + k;
            events.push(Event {
                at: t.highest(),
                kind: EventKind::Enter(id),
                seq: seq(t.highest_index()),
            });
            events.push(Event {
                at: t.lowest(),
                kind: EventKind::Leave(id),
                seq: seq(t.lowest_index()),
            });
        }
        events.sort_unstable_by(sweep_order);
        Self {
            events: events.into_iter(),
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Iterator for EventQueue {
    type Item = Event;

    #[inline]
    fn next(&mut self) -> Option<Event> {
        self.events.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}

impl ExactSizeIterator for EventQueue {}
