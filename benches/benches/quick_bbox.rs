// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sightline_bbox::{Position, bbox_from_coordinates, quick_bbox_from_coordinates};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_unit(&mut self) -> f64 {
        // Knuth's MMIX LCG multiplier.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// A wandering route: each step moves a little from the previous position.
fn gen_route(len: usize, seed: u64) -> Vec<Position> {
    let mut rng = Lcg::new(seed);
    let mut lng = 2.35;
    let mut lat = 48.85;
    (0..len)
        .map(|_| {
            lng += (rng.next_unit() - 0.5) * 1e-3;
            lat += (rng.next_unit() - 0.5) * 1e-3;
            Position::new(lng, lat)
        })
        .collect()
}

fn bench_route_extent(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_extent");
    for &len in &[1_000_usize, 10_000, 100_000, 1_000_000] {
        let route = gen_route(len, 0x5eed);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("quick", len), &route, |b, route| {
            b.iter(|| black_box(quick_bbox_from_coordinates(black_box(route))));
        });
        group.bench_with_input(BenchmarkId::new("exact", len), &route, |b, route| {
            b.iter(|| black_box(bbox_from_coordinates(black_box(route))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_route_extent);
criterion_main!(benches);
