// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dpi::PhysicalPosition;
use kurbo::Rect;
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerInfo, PointerState, PointerType,
    PointerUpdate,
};
use understory_slider::{Slider, SliderConfig, StaticProbe, geometry};

const MOUSE: PointerInfo = PointerInfo {
    pointer_id: None,
    persistent_device_id: None,
    pointer_type: PointerType::Mouse,
};

fn state(x: f64, y: f64) -> PointerState {
    PointerState {
        position: PhysicalPosition::new(x, y),
        scale_factor: 1.0,
        ..Default::default()
    }
}

fn button(x: f64, y: f64) -> PointerButtonEvent {
    PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: MOUSE,
        state: state(x, y),
    }
}

fn bench_value_from_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/value_from_offset");

    for steps in [10_i64, 1_000, 1_000_000] {
        let offsets: Vec<f64> = (0..1_024).map(|i| f64::from(i) * 0.37).collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &offsets, |b, offsets| {
            b.iter(|| {
                let mut acc = 0_i64;
                for &offset in offsets {
                    acc = acc.wrapping_add(geometry::value_from_offset(
                        black_box(offset),
                        366.0,
                        steps,
                        0,
                    ));
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_drag_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/drag");
    let container = Rect::new(0.0, 0.0, 400.0, 40.0);

    // A drag session is dominated by moves; each one clamps and re-derives.
    for moves in [64_usize, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_function(BenchmarkId::new("pointer_moves", moves), |b| {
            b.iter(|| {
                let mut slider = Slider::mount(
                    SliderConfig::new(0, 100).with_value(0),
                    &StaticProbe(false),
                    &container,
                );
                let y = container.center().y;
                slider.on_event(0, PointerEvent::Down(button(17.0, y)), &container);
                let mut x = 17.0;
                for i in 0..moves {
                    x += if i % 8 < 5 { 3.0 } else { -4.0 };
                    let update = PointerUpdate {
                        pointer: MOUSE,
                        current: state(x, y),
                        coalesced: Vec::new(),
                        predicted: Vec::new(),
                    };
                    slider.on_event(0, PointerEvent::Move(update), &container);
                }
                slider.on_event(0, PointerEvent::Up(button(x, y)), &container);
                black_box(slider.value())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_value_from_offset, bench_drag_moves);
criterion_main!(benches);
