// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_scene::{Scene, SceneObject};
use canopy_shapes::{Circle, Polygon};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

/// A square grid of alternating squares and circles, 10 world units apart.
fn grid(side: usize) -> Scene {
    let mut scene = Scene::new();
    scene.begin_update();
    for i in 0..side {
        for j in 0..side {
            let center = Point::new(i as f64 * 10.0, j as f64 * 10.0);
            let object = if (i + j) % 2 == 0 {
                SceneObject::from_primitive(Polygon::rect(center, 8.0, 8.0).unwrap())
            } else {
                SceneObject::from_primitive(Circle::new(center, 4.0).unwrap())
            };
            scene.insert(object.with_priority((i % 7) as i32));
        }
    }
    scene.end_update();
    scene
}

fn bench_objects_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/objects_at");
    for side in [16usize, 64, 256] {
        let scene = grid(side);
        let probe = Point::new((side / 2) as f64 * 10.0, (side / 2) as f64 * 10.0);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &scene, |b, scene| {
            b.iter(|| black_box(scene.objects_at(black_box(probe), |_| true)));
        });
    }
    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/pick");
    for side in [16usize, 64, 256] {
        let scene = grid(side);
        let miss = Point::new(5.0, 5.0);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("miss", side * side), &scene, |b, scene| {
            b.iter(|| black_box(scene.pick(black_box(miss), false)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_objects_at, bench_pick);
criterion_main!(benches);
