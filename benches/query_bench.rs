#![allow(unused)]
//! Index build and query benchmarks.
//!
//! The prefix scan must stay interactive at every keystroke in the TUI, so
//! the targets here are per-keystroke budgets, not batch throughput.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `build` | Merge + sort + FST construction as the index grows |
//! | `query/prefix_scan` | FST range scan: hit, miss, and full-iteration cases |
//! | `query/substring_scan` | Linear substring scan over the entry table |
//!
//! # Key performance targets (aspirational, not enforced in CI)
//!
//! - Prefix scan over a 100k-key index: well under 1 ms per keystroke
//! - Substring scan over 100k keys: < 10 ms
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench query_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doxidx_core::{Index, IndexEntry, Target};
use std::hint::black_box;

/// Deterministic corpus of `n` entries with realistic key shapes.
fn corpus(n: usize) -> Vec<IndexEntry> {
    const STEMS: &[&str] = &[
        "bind", "calibrate", "capture", "close", "copy", "create", "draw", "load", "unbind",
        "update",
    ];
    (0..n)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            IndexEntry {
                key: format!("{stem}{}_{}", i / STEMS.len(), i % 10),
                name: stem.to_string(),
                targets: vec![Target::new(format!("../class{stem}.html#a{i:04x}"), "")],
            }
        })
        .collect()
}

fn build_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000usize, 10_000, 100_000] {
        let entries = corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("from_entries", size), &entries, |b, entries| {
            b.iter(|| black_box(Index::from_entries(entries.iter().cloned())))
        });
    }

    group.finish();
}

fn prefix_scan_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/prefix_scan");
    let index = Index::from_entries(corpus(100_000));

    // ~10% of the corpus matches.
    group.bench_function("hit_100k_index", |b| {
        b.iter(|| black_box(index.query("calibrate").count()))
    });

    group.bench_function("miss_100k_index", |b| {
        b.iter(|| black_box(index.query("zzz").count()))
    });

    // Empty prefix walks the entire index.
    group.bench_function("full_iteration_100k_index", |b| {
        b.iter(|| black_box(index.query("").count()))
    });

    group.finish();
}

fn substring_scan_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/substring_scan");
    let index = Index::from_entries(corpus(100_000));

    group.bench_function("hit_100k_index", |b| {
        b.iter(|| black_box(index.find("librate").count()))
    });

    group.bench_function("miss_100k_index", |b| {
        b.iter(|| black_box(index.find("zzz").count()))
    });

    group.finish();
}

criterion_group!(query_benches, build_bench, prefix_scan_bench, substring_scan_bench);
criterion_main!(query_benches);
