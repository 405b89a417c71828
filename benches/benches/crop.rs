// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_crop::{
    CropConfig, CropController, FitPolicy, GestureKind, Key, PanAxes, clamp_position,
    compute_layout,
};

const VIEWPORT: Size = Size::new(800.0, 400.0);

fn loaded(config: CropConfig) -> CropController<u32> {
    let mut crop = CropController::new(config, VIEWPORT);
    let ticket = crop.set_source(0).expect("fresh controller accepts a source");
    crop.on_image_resource_resolved(ticket, Size::new(1920.0, 1280.0))
        .expect("load succeeds");
    crop.set_zoom(2.0);
    crop.set_editing(true);
    crop
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/layout");
    let naturals = [
        Size::new(400.0, 200.0),
        Size::new(100.0, 200.0),
        Size::new(4000.0, 100.0),
    ];
    for policy in [FitPolicy::FitThenCover, FitPolicy::AlwaysCover] {
        group.bench_with_input(
            BenchmarkId::new("compute_layout", format!("{policy:?}")),
            &naturals,
            |b, naturals| {
                b.iter(|| {
                    for &natural in naturals {
                        black_box(compute_layout(
                            black_box(natural),
                            VIEWPORT,
                            policy,
                            1.5,
                        ));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/clamp");
    let points: Vec<Point> = (0..1_024)
        .map(|i| {
            let t = f64::from(i);
            Point::new(t.sin() * 3_000.0, t.cos() * 3_000.0)
        })
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    for axes in [PanAxes::Both, PanAxes::VerticalOnly] {
        group.bench_with_input(
            BenchmarkId::new("clamp_position", format!("{axes:?}")),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        black_box(clamp_position(p, Size::new(3840.0, 2560.0), VIEWPORT, axes));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/interaction");

    // A long drag that sweeps past the bounds in both directions.
    for moves in [64usize, 1_024] {
        let path: Vec<Point> = (0..moves)
            .map(|i| {
                let t = i as f64 / moves as f64;
                Point::new((t * 12.0).sin() * 2_000.0, (t * 7.0).cos() * 2_000.0)
            })
            .collect();
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("drag", moves), &path, |b, path| {
            b.iter_batched(
                || loaded(CropConfig::free_pan()),
                |mut crop| {
                    let _ = crop.on_gesture_start(GestureKind::Pointer, Point::ZERO);
                    for &p in path {
                        black_box(crop.on_gesture_move(GestureKind::Pointer, p));
                    }
                    let _ = crop.on_gesture_end();
                    black_box(crop);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("keys", |b| {
        b.iter_batched(
            || loaded(CropConfig::free_pan()),
            |mut crop| {
                for key in [Key::ArrowUp, Key::ArrowRight, Key::ArrowDown, Key::ArrowLeft] {
                    for _ in 0..64 {
                        black_box(crop.on_key(key));
                    }
                }
                black_box(crop);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_layout, bench_clamp, bench_interaction);
criterion_main!(benches);
