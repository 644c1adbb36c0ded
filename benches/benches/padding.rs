// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use sightline_bbox::BBox;
use sightline_viewport::{
    LngLat, MapView, PaddingOptions, calculate_fitting_bbox, calculate_padded_bbox,
    calculate_padded_center,
};

struct LinearMap {
    container: Rect,
    degrees_per_px: f64,
}

impl MapView for LinearMap {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn unproject(&self, pixel: Point) -> LngLat {
        LngLat::new(
            pixel.x * self.degrees_per_px,
            (self.container.y1 - pixel.y) * self.degrees_per_px,
        )
    }
}

/// A typical app layout: header, sidebar, floating legend and zoom controls,
/// plus a few offscreen panels.
fn chrome() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 1920.0, 56.0),
        Rect::new(0.0, 56.0, 360.0, 1080.0),
        Rect::new(1640.0, 700.0, 1900.0, 1060.0),
        Rect::new(1860.0, 80.0, 1900.0, 180.0),
        Rect::new(-400.0, 0.0, 0.0, 1080.0),
        Rect::new(1920.0, 0.0, 2320.0, 1080.0),
    ]
}

fn bench_padding(c: &mut Criterion) {
    let map = LinearMap {
        container: Rect::new(0.0, 0.0, 1920.0, 1080.0),
        degrees_per_px: 1e-4,
    };
    let chrome = chrome();
    let options = PaddingOptions::new(&map, &chrome).with_padding(16.0);
    let target = BBox::new(0.05, 0.02, 0.15, 0.08);

    let mut group = c.benchmark_group("padding");
    group.bench_function("padded_bbox", |b| {
        b.iter(|| black_box(calculate_padded_bbox(black_box(&options))));
    });
    group.bench_function("padded_center", |b| {
        b.iter(|| black_box(calculate_padded_center(black_box(&options))));
    });
    group.bench_function("fitting_bbox", |b| {
        b.iter(|| black_box(calculate_fitting_bbox(black_box(&options), black_box(target))));
    });
    group.finish();
}

criterion_group!(benches, bench_padding);
criterion_main!(benches);
