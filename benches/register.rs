//! Performance benchmarks for podwave-events
//!
//! Run with: cargo bench

use podwave_events::{
    sample_events, EventFilter, EventHub, EventRegistry, HubConfig, LogNotifier, TypeFilter,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_registry_create(c: &mut Criterion) {
    let draft = sample_events()[1].to_draft();

    c.bench_function("EventRegistry::create", |b| {
        let mut registry = EventRegistry::new();
        b.iter(|| registry.create(draft.clone()).available_seats);
    });
}

fn bench_registry_register(c: &mut Criterion) {
    c.bench_function("EventRegistry::register", |b| {
        b.iter_batched(
            EventRegistry::with_samples,
            |mut registry| registry.register("2", 1).is_ok(),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let mut registry = EventRegistry::with_samples();
    let draft = sample_events()[0].to_draft();
    for _ in 0..500 {
        registry.create(draft.clone());
    }
    let filter = EventFilter::new()
        .with_search("storytelling")
        .with_type(TypeFilter::Virtual);

    c.bench_function("EventRegistry::search (502 events)", |b| {
        b.iter(|| registry.search(&filter).len());
    });
}

fn bench_hub_register(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = HubConfig::empty().with_validation(false);
    let hub = EventHub::new(config, LogNotifier).unwrap();
    let mut draft = sample_events()[0].to_draft();
    draft.total_seats = u32::MAX;
    let id = rt.block_on(hub.create(draft)).unwrap().id;

    c.bench_function("EventHub register", |b| {
        b.iter(|| rt.block_on(hub.register(&id, 1)).is_ok());
    });
}

criterion_group!(
    benches,
    bench_registry_create,
    bench_registry_register,
    bench_search,
    bench_hub_register
);
criterion_main!(benches);
