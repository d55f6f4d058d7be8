//! Performance benchmarks for the commit index
//!
//! Run with: cargo bench --package history

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use history::{CommitIndex, CommitRecord};

fn record(n: u64) -> CommitRecord {
    CommitRecord::new(
        format!("commit_{}.txt", n),
        "Added: 1, Removed: 0",
        format!("commit {}", n),
    )
}

fn filled(n: u64) -> CommitIndex {
    let mut index = CommitIndex::new();
    for k in 1..=n {
        index.insert(k, record(k)).unwrap();
    }
    index
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100u64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let index = filled(size);
                black_box(index.len());
            });
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let index = filled(10_000);
    let head = index.head_version().unwrap();

    c.bench_function("get_at_head", |b| {
        b.iter(|| {
            let node = index.get(black_box(5_000), head);
            black_box(node);
        });
    });

    c.bench_function("get_at_old_version", |b| {
        b.iter(|| {
            let node = index.get(black_box(2_500), 5_000);
            black_box(node);
        });
    });

    c.bench_function("predecessor", |b| {
        b.iter(|| {
            let node = index.predecessor(black_box(5_000), head);
            black_box(node);
        });
    });

    c.bench_function("successor", |b| {
        b.iter(|| {
            let node = index.successor(black_box(5_000), head);
            black_box(node);
        });
    });

    c.bench_function("timeline_at_head", |b| {
        b.iter(|| {
            let nodes = index.timeline(head);
            black_box(nodes.len());
        });
    });
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);
