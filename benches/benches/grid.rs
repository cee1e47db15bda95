// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_plane2d::Vector2d;
use understory_view2d::Viewport2D;

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_grid");
    group.sample_size(50);

    for &(width, height) in &[(800.0_f64, 600.0_f64), (3_840.0, 2_160.0), (4_000.0, 200.0)] {
        let mut view = Viewport2D::new(Size::new(width, height));
        view.set_real_center(Vector2d::new(123.4, -56.7));
        group.bench_function(format!("layout({width}x{height})"), |b| {
            b.iter(|| black_box(view.layout_grid()));
        });
    }

    group.bench_function("wheel_zoom+layout", |b| {
        let mut view = Viewport2D::new(Size::new(800.0, 600.0));
        let mut tick = 0_u32;
        b.iter(|| {
            tick = tick.wrapping_add(1);
            let delta = if tick % 20 < 10 { -1.0 } else { 1.0 };
            let zoomed = view.wheel_zoom(Vector2d::new(250.0, 410.0), delta);
            assert!(zoomed.is_ok(), "viewport became singular: {zoomed:?}");
            black_box(view.layout_grid())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
