// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_timing::TimerQueue;

fn bench_reschedule_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/reschedule");

    // Resize storms reschedule the same key over and over before it fires.
    for burst in [16_u64, 256, 4_096] {
        group.throughput(Throughput::Elements(burst));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |b, &burst| {
            b.iter(|| {
                let mut queue = TimerQueue::new();
                for now in 0..burst {
                    queue.schedule(black_box(now % 3), now, 1_000);
                }
                let mut fired = 0_u32;
                while queue.pop_due(burst + 1_000).is_some() {
                    fired += 1;
                }
                black_box(fired)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reschedule_burst);
criterion_main!(benches);
