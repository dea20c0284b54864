// Benchmark for the greedy selector on mid-size universes
//
// Uses a 12-symbol universe with 7-symbol rows so a full select-and-cover
// cycle fits in milliseconds while still exercising priming, lazy
// revalidation, and the coverage bitmap.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lotocover::cover::{CoverConfig, RowStore, TargetIndex, greedy_cover};
use lotocover::tables;

fn bench_greedy(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = CoverConfig::new(12, 7, 5);
    let (targets, _) = tables::write_table(dir.path(), 12, 5).expect("write targets");
    let (rows, _) = tables::write_table(dir.path(), 12, 7).expect("write rows");

    let index = TargetIndex::load(&targets, &config).expect("load index");
    let row_store = RowStore::load(&rows, &config).expect("load rows");

    let mut group = c.benchmark_group("greedy_cover");
    for store_all in [true, false] {
        let label = if store_all { "store_all" } else { "stream" };
        group.bench_with_input(BenchmarkId::new("mode", label), &store_all, |b, &mode| {
            b.iter(|| {
                let selection =
                    greedy_cover(&config, &index, &row_store, black_box(mode)).expect("coverable");
                black_box(selection.chosen.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_greedy);
criterion_main!(benches);
