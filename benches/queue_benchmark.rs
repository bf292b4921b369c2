/*!
 * Queue Benchmarks
 *
 * Throughput of insertion, reversal, and merge sort across chain lengths
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strqueue::StrQueue;

fn build_queue(n: usize) -> StrQueue {
    let mut q = StrQueue::new();
    // descending so sort always has work to do
    for i in (0..n).rev() {
        q.insert_tail(&format!("{:08}", i)).unwrap();
    }
    q
}

fn bench_insert_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_tail");

    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut q = StrQueue::new();
                for i in 0..n {
                    q.insert_tail(black_box("benchmark-value")).unwrap();
                    black_box(i);
                }
                q
            });
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut q = build_queue(n);
            b.iter(|| {
                q.reverse();
                black_box(q.peek_head());
            });
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || build_queue(n),
                |mut q| {
                    q.sort();
                    q
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_tail, bench_reverse, bench_sort);
criterion_main!(benches);
