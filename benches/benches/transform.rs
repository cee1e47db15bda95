// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_plane2d::{Matrix3x3, Vector2d};

fn real_to_view(center: Vector2d, pix_per_unit: f64) -> Matrix3x3 {
    Matrix3x3::chain(&[
        Matrix3x3::translate(Vector2d::new(400.0, 300.0)),
        Matrix3x3::scale(pix_per_unit, -pix_per_unit),
        Matrix3x3::translate(center.neg()),
    ])
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_plane2d");

    group.bench_function("chain(3)", |b| {
        b.iter(|| real_to_view(black_box(Vector2d::new(12.5, -3.0)), black_box(5.0)));
    });

    let m = Matrix3x3::chain(&[
        real_to_view(Vector2d::new(12.5, -3.0), 5.0),
        Matrix3x3::rotate_at(0.3, Vector2d::new(1.0, 2.0)),
    ]);
    group.bench_function("invert", |b| {
        b.iter(|| black_box(black_box(m).invert()));
    });

    let points: Vec<Vector2d> = (0..1_024)
        .map(|i| Vector2d::new(f64::from(i) * 0.5, f64::from(i % 37) - 18.0))
        .collect();
    group.bench_function("transform(1024)", |b| {
        b.iter(|| {
            let mut acc = Vector2d::ZERO;
            for p in &points {
                acc = acc + m * *p;
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
