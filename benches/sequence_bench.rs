//! Benchmark for sequence operations: uniq, flatten, set combinators and sort_by.
//!
//! Measures how each operation scales with input size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::sequence::{Nested, difference, flatten, intersection, sort_by, uniq};

fn repeating(size: usize) -> Vec<usize> {
    (0..size).map(|index| (index * 7919) % (size / 4 + 1)).collect()
}

// =============================================================================
// uniq Benchmarks
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in [100, 1000] {
        let unsorted = repeating(size);
        let mut sorted = unsorted.clone();
        sorted.sort_unstable();

        group.bench_with_input(BenchmarkId::new("unsorted", size), &unsorted, |bencher, input| {
            bencher.iter(|| black_box(uniq(black_box(input), false)));
        });

        // The sorted path only compares against the last accepted element
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |bencher, input| {
            bencher.iter(|| black_box(uniq(black_box(input), true)));
        });
    }

    group.finish();
}

// =============================================================================
// flatten Benchmarks
// =============================================================================

fn nested_tree(width: usize, depth: usize) -> Vec<Nested<usize>> {
    if depth == 0 {
        return Nested::from_flat((0..width).collect());
    }
    (0..width)
        .map(|_| Nested::Sequence(nested_tree(width, depth - 1)))
        .collect()
}

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for depth in [1, 3, 5] {
        let tree = nested_tree(4, depth);
        group.bench_with_input(BenchmarkId::new("width_4", depth), &tree, |bencher, tree| {
            bencher.iter(|| black_box(flatten(black_box(tree))));
        });
    }

    group.finish();
}

// =============================================================================
// Set Benchmarks
// =============================================================================

fn benchmark_sets(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sets");

    for size in [100, 500] {
        let left: Vec<usize> = (0..size).collect();
        let right: Vec<usize> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(intersection(&[&left[..], &right[..]])));
        });
        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(difference(&left, &[&right[..]])));
        });
    }

    group.finish();
}

// =============================================================================
// sort_by Benchmarks
// =============================================================================

fn benchmark_sort_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by");

    for size in [100, 1000] {
        let values = repeating(size);
        group.bench_with_input(BenchmarkId::new("integers", size), &values, |bencher, values| {
            bencher.iter(|| black_box(sort_by(black_box(values), |value| Some(*value))));
        });

        // Compare with the standard library's stable sort
        group.bench_with_input(BenchmarkId::new("std_sort_by_key", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut copied = black_box(values).clone();
                copied.sort_by_key(|value| *value);
                black_box(copied)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_uniq,
    benchmark_flatten,
    benchmark_sets,
    benchmark_sort_by
);
criterion_main!(benches);
