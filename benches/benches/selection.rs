// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_canvas::Canvas;
use canopy_event_state::{PointerButton, PointerEvent};
use canopy_scene::SceneObject;
use canopy_selection::{Candidate, Selection, cycle_target};
use canopy_shapes::Polygon;
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};

fn bench_cycle_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/cycle_target");

    // Worst case: the selected candidate is last in a single priority group,
    // so every click scans the whole stack before wrapping.
    for len in [4usize, 64, 1_024] {
        let mut stack: Vec<Candidate<u32>> =
            (0..len as u32).map(|k| Candidate::new(k, 0, false)).collect();
        if let Some(last) = stack.last_mut() {
            last.selected = true;
        }
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &stack, |b, stack| {
            b.iter(|| black_box(cycle_target(black_box(stack), false)));
        });
    }
    group.finish();
}

fn bench_selection_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/add");

    // `add` de-duplicates by scanning, so filling a selection is quadratic.
    for len in [128usize, 1_024] {
        let keys: Vec<u32> = (0..len as u32).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    for &k in keys {
                        sel.add(k);
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_click_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/click_cycle");

    for stacked in [3usize, 32, 256] {
        let mut canvas = Canvas::new(());
        canvas.set_canvas_area_size(Size::new(1000.0, 1000.0));
        canvas.begin_update();
        for _ in 0..stacked {
            canvas.add(SceneObject::from_primitive(
                Polygon::rect((500.0, 500.0), 100.0, 100.0).unwrap(),
            ));
        }
        canvas.end_update();
        let at = canvas.screen_from_world(Point::new(500.0, 500.0));
        let event = PointerEvent::new(at, PointerButton::Primary);

        group.bench_function(BenchmarkId::from_parameter(stacked), |b| {
            b.iter(|| {
                canvas.pointer_down(event);
                canvas.pointer_up(event);
                black_box(canvas.selected_count());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cycle_target,
    bench_selection_add,
    bench_click_cycle
);
criterion_main!(benches);
