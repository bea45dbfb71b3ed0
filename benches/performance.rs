use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ratecard_core::{
    HistoryStore, InMemoryHistoryStorage, PricingService, SequentialIdGenerator, SystemClock,
};
use ratecard_domain::{CurrencyCode, ExperienceLevel, PricingInput, ProjectComplexity};
use ratecard_storage_json::JsonHistoryStorage;
use tempfile::tempdir;

fn sample_input(idx: usize) -> PricingInput {
    let mut input = PricingInput::new(format!("Job {idx}"), CurrencyCode::default())
        .with_project(5.0 + (idx % 20) as f64, ProjectComplexity::High, 10.0);
    input.experience_level = ExperienceLevel::ALL[idx % 3];
    input.fixed_costs = 500.0 + (idx % 100) as f64 * 25.0;
    input
}

fn bench_pricing(c: &mut Criterion) {
    let input = sample_input(7);
    c.bench_function("price_project_quote", |b| {
        b.iter(|| PricingService::price(black_box(input.clone())).expect("valid input"))
    });
}

fn bench_history(c: &mut Criterion) {
    c.bench_function("history_add_1k_in_memory", |b| {
        b.iter_batched(
            || {
                HistoryStore::open(
                    Box::new(InMemoryHistoryStorage::default()),
                    Arc::new(SystemClock),
                    Box::new(SequentialIdGenerator::default()),
                )
            },
            |mut store| {
                for idx in 0..1_000 {
                    let result = PricingService::compute_rates(sample_input(idx));
                    black_box(store.add(result));
                }
                store
            },
            BatchSize::SmallInput,
        )
    });

    let dir = tempdir().expect("tempdir");
    let storage = JsonHistoryStorage::new(dir.path().to_path_buf()).expect("json storage");
    let mut store = HistoryStore::open(
        Box::new(storage),
        Arc::new(SystemClock),
        Box::new(SequentialIdGenerator::default()),
    );
    let result = PricingService::compute_rates(sample_input(1));
    c.bench_function("history_add_json", |b| {
        b.iter(|| black_box(store.add(result.clone())))
    });
}

criterion_group!(benches, bench_pricing, bench_history);
criterion_main!(benches);
