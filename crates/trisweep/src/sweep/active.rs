//! Active set: an ordered container of triangle ids with floor/ceiling lookup.
//!
//! Purpose
//! - Hold the triangles currently crossed by the sweep line, ordered by their
//!   extent at the current height, with O(log n) expected insert, remove,
//!   floor and ceiling.
//!
//! Model
//! - A treap stored in an arena (`Vec<Node>`) with parent links. Node
//!   priorities are a fixed hash of the triangle id, so the shape is
//!   reproducible run to run.
//! - The container never computes an order by itself. Every ordered
//!   operation takes a probe closure `FnMut(TriangleId) -> Result<Ordering, E>`
//!   answering "where is my probe relative to this stored triangle?". The
//!   caller evaluates it at the current sweep height; the set holds no height.
//! - Removal goes through a per-triangle handle (`slot`), so the exact entry
//!   is unlinked without comparing keys at all.
//!
//! Code cross-refs: `SweepLine::{key_of, probe}`, `Sweep::step`

use std::cmp::Ordering;

use crate::geom::TriangleId;
use crate::hash::splitmix64;

type NodeIdx = usize;
const NIL: NodeIdx = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Node {
    tri: TriangleId,
    prio: u64,
    left: NodeIdx,
    right: NodeIdx,
    parent: NodeIdx,
}

/// Ordered set of active triangle ids (see module docs).
#[derive(Clone, Debug)]
pub struct ActiveSet {
    nodes: Vec<Node>,
    free: Vec<NodeIdx>,
    /// `slot[t]` is the node holding triangle `t`, or `NIL` when inactive.
    slot: Vec<NodeIdx>,
    root: NodeIdx,
    len: usize,
}

impl Default for ActiveSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSet {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            slot: Vec::new(),
            root: NIL,
            len: 0,
        }
    }

    /// Empty set sized for triangle ids `0..triangles`.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(triangles),
            free: Vec::new(),
            slot: vec![NIL; triangles],
            root: NIL,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, tri: TriangleId) -> bool {
        self.slot.get(tri.0).is_some_and(|&n| n != NIL)
    }

    /// Insert `tri`, placing it by `probe_cmp(other) = tri.cmp(other)`.
    ///
    /// Returns `Ok(false)` without touching the tree if `tri` is already present.
    /// The probe must never answer `Equal` for a distinct stored triangle.
    pub fn insert_by<E, F>(&mut self, tri: TriangleId, mut probe_cmp: F) -> Result<bool, E>
    where
        F: FnMut(TriangleId) -> Result<Ordering, E>,
    {
        if self.contains(tri) {
            return Ok(false);
        }
        let mut parent = NIL;
        let mut cur = self.root;
        let mut as_left = false;
        while cur != NIL {
            parent = cur;
            let node = &self.nodes[cur];
            as_left = probe_cmp(node.tri)? == Ordering::Less;
            cur = if as_left { node.left } else { node.right };
        }

        let n = self.alloc(Node {
            tri,
            prio: priority(tri),
            left: NIL,
            right: NIL,
            parent,
        });
        if parent == NIL {
            self.root = n;
        } else if as_left {
            self.nodes[parent].left = n;
        } else {
            self.nodes[parent].right = n;
        }
        while self.nodes[n].parent != NIL && self.nodes[self.nodes[n].parent].prio < self.nodes[n].prio {
            self.rotate_up(n);
        }

        if tri.0 >= self.slot.len() {
            self.slot.resize(tri.0 + 1, NIL);
        }
        self.slot[tri.0] = n;
        self.len += 1;
        Ok(true)
    }

    /// Remove `tri` through its handle. Returns `false` if it was not present.
    pub fn remove(&mut self, tri: TriangleId) -> bool {
        let n = match self.slot.get(tri.0) {
            Some(&n) if n != NIL => n,
            _ => return false,
        };
        // Rotate the node down until it has at most one child.
        loop {
            let Node { left, right, .. } = self.nodes[n];
            if left == NIL || right == NIL {
                break;
            }
            let up = if self.nodes[left].prio > self.nodes[right].prio {
                left
            } else {
                right
            };
            self.rotate_up(up);
        }
        let Node {
            left,
            right,
            parent,
            ..
        } = self.nodes[n];
        let child = if left != NIL { left } else { right };
        if child != NIL {
            self.nodes[child].parent = parent;
        }
        self.replace_child(parent, n, child);

        self.free.push(n);
        self.slot[tri.0] = NIL;
        self.len -= 1;
        true
    }

    /// Greatest stored triangle at or below the probe (`probe >= stored`).
    pub fn floor_by<E, F>(&self, mut probe_cmp: F) -> Result<Option<TriangleId>, E>
    where
        F: FnMut(TriangleId) -> Result<Ordering, E>,
    {
        let mut best = None;
        let mut cur = self.root;
        while cur != NIL {
            let node = &self.nodes[cur];
            match probe_cmp(node.tri)? {
                Ordering::Less => cur = node.left,
                Ordering::Equal | Ordering::Greater => {
                    best = Some(node.tri);
                    cur = node.right;
                }
            }
        }
        Ok(best)
    }

    /// Smallest stored triangle at or above the probe (`probe <= stored`).
    pub fn ceiling_by<E, F>(&self, mut probe_cmp: F) -> Result<Option<TriangleId>, E>
    where
        F: FnMut(TriangleId) -> Result<Ordering, E>,
    {
        let mut best = None;
        let mut cur = self.root;
        while cur != NIL {
            let node = &self.nodes[cur];
            match probe_cmp(node.tri)? {
                Ordering::Greater => cur = node.right,
                Ordering::Equal | Ordering::Less => {
                    best = Some(node.tri);
                    cur = node.left;
                }
            }
        }
        Ok(best)
    }

    /// In-order iteration (ascending by the order used at insertion).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            cur: self.leftmost(self.root),
        }
    }

    /// Height of the tree; 0 when empty.
    pub fn depth(&self) -> usize {
        fn go(set: &ActiveSet, n: NodeIdx) -> usize {
            if n == NIL {
                0
            } else {
                1 + go(set, set.nodes[n].left).max(go(set, set.nodes[n].right))
            }
        }
        go(self, self.root)
    }

    fn alloc(&mut self, node: Node) -> NodeIdx {
        match self.free.pop() {
            Some(i) => {
                self.nodes[i] = node;
                i
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Point `parent`'s link to `old` at `new` (or the root when `parent` is NIL).
    fn replace_child(&mut self, parent: NodeIdx, old: NodeIdx, new: NodeIdx) {
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
    }

    /// Rotate `x` above its parent, preserving in-order sequence.
    fn rotate_up(&mut self, x: NodeIdx) {
        let p = self.nodes[x].parent;
        let g = self.nodes[p].parent;
        if self.nodes[p].left == x {
            let inner = self.nodes[x].right;
            self.nodes[p].left = inner;
            if inner != NIL {
                self.nodes[inner].parent = p;
            }
            self.nodes[x].right = p;
        } else {
            let inner = self.nodes[x].left;
            self.nodes[p].right = inner;
            if inner != NIL {
                self.nodes[inner].parent = p;
            }
            self.nodes[x].left = p;
        }
        self.nodes[p].parent = x;
        self.nodes[x].parent = g;
        self.replace_child(g, p, x);
    }

    fn leftmost(&self, mut n: NodeIdx) -> NodeIdx {
        if n == NIL {
            return NIL;
        }
        while self.nodes[n].left != NIL {
            n = self.nodes[n].left;
        }
        n
    }

    fn successor(&self, mut n: NodeIdx) -> NodeIdx {
        if self.nodes[n].right != NIL {
            return self.leftmost(self.nodes[n].right);
        }
        loop {
            let p = self.nodes[n].parent;
            if p == NIL || self.nodes[p].left == n {
                return p;
            }
            n = p;
        }
    }
}

/// In-order iterator over an `ActiveSet`.
pub struct Iter<'a> {
    set: &'a ActiveSet,
    cur: NodeIdx,
}

impl Iterator for Iter<'_> {
    type Item = TriangleId;

    fn next(&mut self) -> Option<TriangleId> {
        if self.cur == NIL {
            return None;
        }
        let tri = self.set.nodes[self.cur].tri;
        self.cur = self.set.successor(self.cur);
        Some(tri)
    }
}

/// Heap priority of a triangle: a fixed hash of its id.
#[inline]
fn priority(tri: TriangleId) -> u64 {
    splitmix64(tri.0 as u64)
}
