// Aggregation and rendering benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use migrate_info::report::ReportFormatter;
use migrate_info::stats::ExtensionStatsAggregator;
use std::hint::black_box;

const EXTENSIONS: [&str; 8] = ["rs", "png", "jpg", "psd", "bin", "md", "json", "zip"];

fn synthetic_paths(count: usize) -> Vec<(String, i64)> {
    (0..count)
        .map(|i| {
            let ext = EXTENSIONS[i % EXTENSIONS.len()];
            let path = format!("src/dir_{}/file_{}.{}", i / 100, i, ext);
            (path, ((i * 7919) % 4_000_000) as i64)
        })
        .collect()
}

fn bench_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregator_observe");
    for size in [1_000, 10_000, 100_000] {
        let paths = synthetic_paths(size);
        group.bench_with_input(BenchmarkId::new("blobs", size), &paths, |b, paths| {
            b.iter(|| {
                let mut agg = ExtensionStatsAggregator::new(1024 * 1024);
                for (path, size) in paths {
                    agg.observe(path, *size);
                }
                black_box(agg)
            });
        });
    }
    group.finish();
}

fn bench_collect_and_render(c: &mut Criterion) {
    let paths = synthetic_paths(50_000);

    c.bench_function("collect_and_render", |b| {
        b.iter(|| {
            let mut agg = ExtensionStatsAggregator::new(1024 * 1024);
            for (path, size) in &paths {
                agg.observe(path, *size);
            }
            let entries = agg.into_entries().sort_by_bytes_above_desc().truncate(5);
            black_box(ReportFormatter::new(1024 * 1024).render(entries.as_slice()))
        });
    });
}

criterion_group!(benches, bench_observe, bench_collect_and_render);
criterion_main!(benches);
