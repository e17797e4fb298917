//! Benchmark for decorators: once, memoize and throttle.
//!
//! Measures the overhead a decorator adds on its hot (cached) and cold paths.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use underbar::decorator::{ManualScheduler, memoize, once, throttle};

// =============================================================================
// once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let decorated = once(|value: u64| value.wrapping_mul(31));
            black_box(decorated.call(black_box(7)))
        });
    });

    group.bench_function("settled_call", |bencher| {
        let decorated = once(|value: u64| value.wrapping_mul(31));
        decorated.call(7);
        bencher.iter(|| black_box(decorated.call(black_box(9))));
    });

    group.finish();
}

// =============================================================================
// memoize Benchmarks
// =============================================================================

fn fibonacci(value: u64) -> u64 {
    (0..value).fold((0_u64, 1_u64), |(current, next), _| (next, current.wrapping_add(next))).0
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for distinct in [1_u64, 16, 256] {
        group.bench_with_input(BenchmarkId::new("cached_integer", distinct), &distinct, |bencher, &distinct| {
            let decorated = memoize(fibonacci);
            for value in 0..distinct {
                decorated.call(value);
            }
            let mut value = 0;
            bencher.iter(|| {
                value = (value + 1) % distinct;
                black_box(decorated.call(black_box(value)))
            });
        });
    }

    group.bench_function("cached_tuple_with_string", |bencher| {
        let decorated = memoize(|(name, count): (String, usize)| name.repeat(count).len());
        decorated.call(("warm".to_string(), 3));
        bencher.iter(|| black_box(decorated.call((black_box("warm".to_string()), 3))));
    });

    group.finish();
}

// =============================================================================
// throttle Benchmarks
// =============================================================================

fn benchmark_throttle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("throttle");

    // Every call after the first lands in the armed window and is dropped
    group.bench_function("dropped_call", |bencher| {
        let scheduler = Arc::new(ManualScheduler::new());
        let throttled = throttle(|value: u64| black_box(value), Duration::from_secs(60), scheduler);
        throttled.call(0);
        throttled.call(1);
        bencher.iter(|| black_box(throttled.call(black_box(2))));
    });

    group.bench_function("executed_call", |bencher| {
        let scheduler = Arc::new(ManualScheduler::new());
        let throttled = throttle(|value: u64| black_box(value), Duration::ZERO, scheduler);
        bencher.iter(|| black_box(throttled.call(black_box(3))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_once, benchmark_memoize, benchmark_throttle);
criterion_main!(benches);
