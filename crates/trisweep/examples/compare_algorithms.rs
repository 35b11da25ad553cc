//! Run every counting algorithm on one generated dataset and print the counts.
//!
//! Usage:
//!   cargo run -p trisweep --example compare_algorithms -- [triangles] [seed]

use std::time::Instant;

use trisweep::gen::{random_row, RowCfg};
use trisweep::Algorithm;

fn main() {
    let mut args = std::env::args().skip(1);
    let triangles = args.next().and_then(|s| s.parse().ok()).unwrap_or(2000);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let cfg = RowCfg {
        triangles,
        points: triangles,
        inside: triangles / 2,
        ..RowCfg::default()
    };
    let d = random_row(cfg, seed);
    println!("triangles={} points={} seed={seed}", d.triangles.len(), d.points.len());
    for algo in Algorithm::ALL {
        let start = Instant::now();
        match algo.count(&d.points, &d.triangles) {
            Ok(n) => println!("{:<12} result={n:<8} {:?}", algo.name(), start.elapsed()),
            Err(e) => eprintln!("{:<12} failed: {e}", algo.name()),
        }
    }
}
