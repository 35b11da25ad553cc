//! KD-tree range filtering.
//!
//! Points are deduplicated into sites with a multiplicity, stored as an
//! implicit 2-d tree (median split, alternating x/y), and queried once per
//! triangle with its bounding box.

use crate::geom::{Aabb, Point, Triangle};

/// Distinct point location and how many input points share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Site {
    pub at: Point,
    pub multiplicity: u64,
}

/// Static 2-d tree. `sites[len/2]` of every subslice is that subtree's root.
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    sites: Vec<Site>,
}

#[inline]
fn coord(p: Point, axis: usize) -> i64 {
    if axis == 0 {
        p.x
    } else {
        p.y
    }
}

impl KdTree {
    pub fn build(points: &[Point]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_unstable_by_key(|p| (p.x, p.y));
        let mut sites: Vec<Site> = Vec::with_capacity(sorted.len());
        for p in sorted {
            match sites.last_mut() {
                Some(last) if last.at == p => last.multiplicity += 1,
                _ => sites.push(Site {
                    at: p,
                    multiplicity: 1,
                }),
            }
        }
        split(&mut sites, 0);
        Self { sites }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Call `visit` for every site inside the closed box `bb`.
    pub fn range<F: FnMut(&Site)>(&self, bb: &Aabb, mut visit: F) {
        search(&self.sites, 0, bb, &mut visit);
    }
}

fn split(sites: &mut [Site], axis: usize) {
    if sites.len() <= 1 {
        return;
    }
    let mid = sites.len() / 2;
    sites.select_nth_unstable_by_key(mid, |s| coord(s.at, axis));
    let (left, rest) = sites.split_at_mut(mid);
    split(left, 1 - axis);
    split(&mut rest[1..], 1 - axis);
}

fn search<F: FnMut(&Site)>(sites: &[Site], axis: usize, bb: &Aabb, visit: &mut F) {
    if sites.is_empty() {
        return;
    }
    let mid = sites.len() / 2;
    let site = &sites[mid];
    if bb.contains(site.at) {
        visit(site);
    }
    let c = coord(site.at, axis);
    if bb.min[axis] <= c {
        search(&sites[..mid], 1 - axis, bb, visit);
    }
    if c <= bb.max[axis] {
        search(&sites[mid + 1..], 1 - axis, bb, visit);
    }
}

/// Number of (point, triangle) containments via bounding-box range queries.
pub fn count(points: &[Point], triangles: &[Triangle]) -> u64 {
    let tree = KdTree::build(points);
    let mut total = 0u64;
    let mut candidates = 0usize;
    for t in triangles {
        tree.range(&t.bounding_box(), |s| {
            candidates += 1;
            if t.contains_point(s.at) {
                total += s.multiplicity;
            }
        });
    }
    tracing::debug!(sites = tree.len(), candidates, count = total, "kd_range_done");
    total
}
