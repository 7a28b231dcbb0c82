//! Criterion benchmarks for the divide-and-conquer hull.
//! Sizes: n in {16, 256, 4096, 65536}; one group per cloud distribution.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dchull::prelude::*;
use nalgebra::Vector2;

fn sorted_cloud(n: usize, distribution: Distribution, seed: u64) -> Vec<Vector2<f64>> {
    let cfg = CloudCfg {
        count: n,
        distribution,
        scale: 1.0,
    };
    let mut pts = draw_cloud(cfg, ReplayToken { seed, index: n as u64 }).expect("unit scale");
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts
}

fn bench_solve(c: &mut Criterion) {
    for (name, distribution) in [
        ("square", Distribution::Square),
        ("gaussian", Distribution::Gaussian),
        ("circle", Distribution::Circle),
    ] {
        let mut group = c.benchmark_group(format!("solve/{name}"));
        for &n in &[16usize, 256, 4096, 65536] {
            group.bench_with_input(BenchmarkId::new("sorted", n), &n, |b, &n| {
                b.iter_batched(
                    || sorted_cloud(n, distribution, 43),
                    |pts| {
                        let _h = solve(&pts).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

fn bench_leaf_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_size");
    let pts = sorted_cloud(4096, Distribution::Square, 44);
    for &leaf_size in &[1usize, 3, 8, 32] {
        group.bench_with_input(BenchmarkId::new("square_4096", leaf_size), &leaf_size, |b, &leaf_size| {
            b.iter(|| {
                let _h = solve_with(&pts, SolveCfg { leaf_size }).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_leaf_size);
criterion_main!(benches);
