use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use salestat::prelude::*;

fn create_dataset(record_count: usize) -> SalesData {
    let sellers: Vec<Seller> = (0..50)
        .map(|i| Seller::new(format!("s{i}"), format!("First{i}"), format!("Last{i}")))
        .collect();
    let products: Vec<Product> = (0..200)
        .map(|i| Product::new(format!("P{i}"), 5.0 + (i % 40) as f64))
        .collect();
    let records: Vec<PurchaseRecord> = (0..record_count)
        .map(|i| {
            let items: Vec<LineItem> = (0..(i % 4 + 1))
                .map(|j| {
                    LineItem::new(
                        format!("P{}", (i * 7 + j) % 200),
                        (j % 5 + 1) as u32,
                        20.0 + (i % 30) as f64,
                        (i % 20) as f64,
                    )
                })
                .collect();
            PurchaseRecord::new(
                format!("s{}", i % 50),
                format!("r-{i}"),
                50.0 + (i % 100) as f64,
                items,
            )
        })
        .collect();
    SalesData::new(products, sellers, records)
}

/// Benchmark the sequential pipeline at increasing record counts
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for count in [100, 1_000, 10_000] {
        let data = create_dataset(count);
        let options = AnalyzeOptions::builtin();

        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| black_box(analyze(data, &options).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the partitioned pipeline against the same datasets
fn bench_analyze_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_parallel");

    for count in [1_000, 10_000, 100_000] {
        let data = create_dataset(count);
        let options = AnalyzeOptions::builtin();

        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| black_box(analyze_parallel(data, &options).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_analyze_parallel);
criterion_main!(benches);
