//! Deterministic benchmark datasets.
//!
//! Purpose
//! - Produce the named dataset suite used to compare the counting algorithms:
//!   fixed layouts (rows, columns, lopsided point/triangle ratios) plus seeded
//!   random rows of skewed triangles.
//!
//! Model
//! - Every layout places triangles so that no two overlap, which is the input
//!   class on which the plane sweep agrees with the all-pairs count.
//! - Randomness comes from `StdRng` seeded per dataset via `splitmix64`, so a
//!   `(seed, name)` pair always reproduces the same file.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::Dataset;
use crate::geom::{Point, Triangle};
use crate::hash::splitmix64;

/// `n` triangles in a row along x, every even point inside its triangle,
/// every odd point in the gap after it.
pub fn horizontal(n: usize) -> Dataset {
    let points = (0..n as i64)
        .map(|i| {
            let x = if i % 2 == 0 { i * 200 + 40 } else { i * 200 + 150 };
            Point::new(x, 50)
        })
        .collect();
    let triangles = (0..n as i64)
        .map(|i| {
            let x0 = i * 200;
            Triangle::from([(x0, 0), (x0 + 80, 0), (x0 + 40, 100)])
        })
        .collect();
    Dataset { points, triangles }
}

/// `horizontal` rotated: triangles stacked along y.
pub fn vertical(n: usize) -> Dataset {
    let points = (0..n as i64)
        .map(|i| {
            let y = if i % 2 == 0 { i * 200 + 40 } else { i * 200 + 150 };
            Point::new(50, y)
        })
        .collect();
    let triangles = (0..n as i64)
        .map(|i| {
            let y0 = i * 200;
            Triangle::from([(0, y0), (0, y0 + 80), (100, y0 + 40)])
        })
        .collect();
    Dataset { points, triangles }
}

/// Sizes for `few_triangles_many_points`.
#[derive(Clone, Copy, Debug)]
pub struct LopsidedCfg {
    pub points: usize,
    pub triangles: usize,
    pub inside: usize,
}

/// 3 triangles, 5000 points, 4000 of them (many coincident) inside.
pub fn few_triangles_many_points(cfg: LopsidedCfg) -> Dataset {
    let inside = cfg.inside.min(cfg.points);
    let per = inside / cfg.triangles.max(1);
    let extra = inside % cfg.triangles.max(1);
    let mut points = Vec::with_capacity(cfg.points);
    for i in 0..cfg.triangles {
        let n = per + usize::from(i < extra);
        let x = i as i64 * 300 + 50;
        points.extend(std::iter::repeat(Point::new(x, 50)).take(n));
    }
    let far = cfg.triangles as i64 * 300 + 1000;
    points.extend((0..(cfg.points - inside) as i64).map(|i| Point::new(far + i * 10, 150)));
    let triangles = (0..cfg.triangles as i64)
        .map(|i| {
            let x0 = i * 300;
            Triangle::from([(x0, 0), (x0 + 100, 0), (x0 + 50, 100)])
        })
        .collect();
    Dataset { points, triangles }
}

impl LopsidedCfg {
    pub const FEW_TRIANGLES: LopsidedCfg = LopsidedCfg {
        points: 5000,
        triangles: 3,
        inside: 4000,
    };
    pub const MANY_TRIANGLES: LopsidedCfg = LopsidedCfg {
        points: 50,
        triangles: 5000,
        inside: 20,
    };
}

/// 5000 triangles in a row, 50 points: 20 inside every tenth triangle, 30 far away.
pub fn many_triangles_few_points(cfg: LopsidedCfg) -> Dataset {
    let inside = cfg.inside.min(cfg.points).min(cfg.triangles.div_ceil(10));
    let mut points: Vec<Point> = (0..inside as i64)
        .map(|i| Point::new(i * 10 * 200 + 50, 50))
        .collect();
    let far = cfg.triangles as i64 * 200 + 1_000_000;
    points.extend((0..(cfg.points - inside) as i64).map(|i| Point::new(far + i * 10, 150)));
    let triangles = (0..cfg.triangles as i64)
        .map(|i| {
            let x0 = i * 200;
            Triangle::from([(x0, 0), (x0 + 100, 0), (x0 + 50, 100)])
        })
        .collect();
    Dataset { points, triangles }
}

/// Random-row configuration.
#[derive(Clone, Copy, Debug)]
pub struct RowCfg {
    pub triangles: usize,
    pub points: usize,
    /// Points drawn inside triangles (round-robin); the rest land right of the row.
    pub inside: usize,
    pub width: i64,
    pub height: i64,
    /// Horizontal gap between neighbouring triangles.
    pub gap: i64,
    /// Apex x offset is drawn from `[-skew, skew]`. Keep below `width / 2`.
    pub skew: i64,
}

impl Default for RowCfg {
    fn default() -> Self {
        Self {
            triangles: 5000,
            points: 5000,
            inside: 2500,
            width: 100,
            height: 100,
            gap: 50,
            skew: 30,
        }
    }
}

/// Uniform barycentric sample rounded to the grid.
///
/// Rounding can push a sample across a slanted edge; such samples are redrawn,
/// and after a few misses the first vertex is used, so the result is always
/// inside `t` (boundary included).
fn sample_inside(rng: &mut StdRng, t: &Triangle) -> Point {
    let [a, b, c] = t.vertices;
    for _ in 0..8 {
        let (mut r1, mut r2): (f64, f64) = (rng.gen(), rng.gen());
        if r1 + r2 > 1.0 {
            r1 = 1.0 - r1;
            r2 = 1.0 - r2;
        }
        let x = a.x as f64 + r1 * (b.x - a.x) as f64 + r2 * (c.x - a.x) as f64;
        let y = a.y as f64 + r1 * (b.y - a.y) as f64 + r2 * (c.y - a.y) as f64;
        let p = Point::new(x.round() as i64, y.round() as i64);
        if t.contains_point(p) {
            return p;
        }
    }
    a
}

/// Row of skewed, non-overlapping triangles with `inside` interior samples
/// (round-robin over the triangles) and the remaining points right of the row.
pub fn random_row(cfg: RowCfg, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(splitmix64(seed));
    let pitch = cfg.width + cfg.gap;
    let triangles: Vec<Triangle> = (0..cfg.triangles as i64)
        .map(|i| {
            let base = i * pitch;
            let skew = rng.gen_range(-cfg.skew..=cfg.skew);
            Triangle::from([
                (base, 0),
                (base + cfg.width, 0),
                (base + cfg.width / 2 + skew, cfg.height),
            ])
        })
        .collect();

    let inside = if triangles.is_empty() { 0 } else { cfg.inside.min(cfg.points) };
    let mut points = Vec::with_capacity(cfg.points);
    for i in 0..inside {
        points.push(sample_inside(&mut rng, &triangles[i % triangles.len()]));
    }
    let right = cfg.triangles as i64 * pitch;
    for _ in inside..cfg.points {
        points.push(Point::new(
            rng.gen_range(right + 100..=right + 10_000),
            rng.gen_range(0..=2 * cfg.height),
        ));
    }
    Dataset { points, triangles }
}

/// Suite parameters. `shrink` divides every size (1 = full benchmark scale).
#[derive(Clone, Copy, Debug)]
pub struct SuiteCfg {
    pub seed: u64,
    pub shrink: usize,
}

impl Default for SuiteCfg {
    fn default() -> Self {
        Self { seed: 42, shrink: 1 }
    }
}

/// The named benchmark suite, as `(file name, dataset)` pairs.
pub fn standard_suite(cfg: SuiteCfg) -> Vec<(String, Dataset)> {
    let s = cfg.shrink.max(1);
    let scaled = |n: usize| (n / s).max(1);
    let lopsided = |c: LopsidedCfg| LopsidedCfg {
        points: scaled(c.points),
        triangles: if c.triangles > 10 { scaled(c.triangles) } else { c.triangles },
        inside: scaled(c.inside),
    };
    let mut rng = StdRng::seed_from_u64(splitmix64(cfg.seed ^ 0x5eed));

    let mut suite = vec![
        ("horizontal.txt".to_string(), horizontal(scaled(10_000))),
        ("vertical.txt".to_string(), vertical(scaled(10_000))),
        (
            "few_triangles_many_points.txt".to_string(),
            few_triangles_many_points(lopsided(LopsidedCfg::FEW_TRIANGLES)),
        ),
        (
            "many_triangles_few_points.txt".to_string(),
            many_triangles_few_points(lopsided(LopsidedCfg::MANY_TRIANGLES)),
        ),
    ];
    for i in 0..5u64 {
        let triangles = 5000 + i as usize * 3000;
        let row = RowCfg {
            triangles: scaled(triangles),
            points: scaled(5000),
            inside: scaled(rng.gen_range(1..=5000)),
            ..RowCfg::default()
        };
        suite.push((
            format!("random_dataset_{triangles}tr_5000p.txt"),
            random_row(row, cfg.seed.wrapping_add(i)),
        ));
    }
    for i in 0..5u64 {
        let points = 5000 + i as usize * 3000;
        let row = RowCfg {
            triangles: scaled(5000),
            points: scaled(points),
            inside: scaled(rng.gen_range(1..=5000)),
            ..RowCfg::default()
        };
        suite.push((
            format!("random_dataset_5000tr_{points}p.txt"),
            random_row(row, cfg.seed.wrapping_add(100 + i)),
        ));
    }
    suite
}
