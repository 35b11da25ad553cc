//! Cross-validation of the three counting algorithms.
//!
//! Layouts: triangles live in separate cells of a grid (pitch 110, cell 100),
//! so triangles crossing the same horizontal line never overlap. Query points
//! are scattered over the grid and also placed on every triangle vertex to
//! exercise the equal-height event ordering.

use proptest::prelude::*;
use trisweep::baseline::{brute, kd};
use trisweep::gen::{standard_suite, SuiteCfg};
use trisweep::prelude::*;

const CELL: i64 = 100;
const PITCH: i64 = 110;
const GRID: i64 = 6;

type Corner = (i64, i64);

fn cell_triangles(cells: &[Option<[Corner; 3]>]) -> Vec<Triangle> {
    cells
        .iter()
        .enumerate()
        .filter_map(|(k, v)| {
            let [a, b, c] = (*v)?;
            let (ox, oy) = ((k as i64 % GRID) * PITCH, (k as i64 / GRID) * PITCH);
            let t = Triangle::from([
                (ox + a.0, oy + a.1),
                (ox + b.0, oy + b.1),
                (ox + c.0, oy + c.1),
            ]);
            (t.doubled_area() != 0).then_some(t)
        })
        .collect()
}

fn corner() -> impl Strategy<Value = Corner> {
    (0..=CELL, 0..=CELL)
}

fn layout() -> impl Strategy<Value = (Vec<Triangle>, Vec<Point>)> {
    let cells = prop::collection::vec(prop::option::of([corner(), corner(), corner()]), (GRID * GRID) as usize);
    let span = -20..GRID * PITCH + 20;
    let points = prop::collection::vec((span.clone(), span), 0..150);
    (cells, points, any::<bool>()).prop_map(|(cells, pts, with_vertices)| {
        let tris = cell_triangles(&cells);
        let mut points: Vec<Point> = pts.into_iter().map(Point::from).collect();
        if with_vertices {
            points.extend(tris.iter().flat_map(|t| t.vertices));
        }
        (tris, points)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn sweep_matches_brute_force((tris, points) in layout()) {
        let expect = brute::count(&points, &tris);
        prop_assert_eq!(try_count(&points, &tris), Ok(expect));
    }

    #[test]
    fn kd_matches_brute_force((tris, points) in layout()) {
        prop_assert_eq!(kd::count(&points, &tris), brute::count(&points, &tris));
    }

    #[test]
    fn kd_matches_brute_force_with_overlaps(
        raw in prop::collection::vec(prop::array::uniform3((-50..50i64, -50..50i64)), 0..20),
        pts in prop::collection::vec((-60..60i64, -60..60i64), 0..100),
    ) {
        let tris: Vec<Triangle> = raw
            .into_iter()
            .map(Triangle::from)
            .filter(|t| t.doubled_area() != 0)
            .collect();
        let points: Vec<Point> = pts.into_iter().map(Point::from).collect();
        prop_assert_eq!(kd::count(&points, &tris), brute::count(&points, &tris));
    }

    #[test]
    fn sweep_is_deterministic((tris, points) in layout()) {
        let a = Sweep::new(&points, &tris).run();
        let b = Sweep::new(&points, &tris).run();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn algorithms_agree_on_generated_suite() {
    for (name, d) in standard_suite(SuiteCfg { seed: 3, shrink: 50 }) {
        let expect = brute::count(&d.points, &d.triangles);
        for algo in Algorithm::ALL {
            assert_eq!(algo.count(&d.points, &d.triangles), Ok(expect), "{name} / {algo}");
        }
    }
}

#[test]
fn full_scale_horizontal_layout() {
    let d = trisweep::gen::horizontal(10_000);
    assert_eq!(try_count(&d.points, &d.triangles), Ok(5_000));
    assert_eq!(kd::count(&d.points, &d.triangles), 5_000);
}
