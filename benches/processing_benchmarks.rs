//! Processing throughput benchmarks
//! Compares cold computation, cache hits and batch fan-out for both services

use awesome_tool::service::NoopObserver;
use awesome_tool::{AwesomeService, AwesomeServiceAsync, Config};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn quiet_sync() -> AwesomeService {
    AwesomeService::with_observer(Config::default(), Arc::new(NoopObserver))
}

fn quiet_async() -> AwesomeServiceAsync {
    AwesomeServiceAsync::with_observer(Config::default(), Arc::new(NoopObserver))
        .with_delay(Duration::ZERO)
}

fn items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("benchmark item {i}")).collect()
}

fn bench_sync_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_process");

    group.bench_function("cold", |b| {
        b.iter_batched(
            quiet_sync,
            |mut service| black_box(service.process("hello world")),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("cached", |b| {
        let mut service = quiet_sync();
        let _ = service.process("hello world");
        b.iter(|| black_box(service.process("hello world")))
    });

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let runtime = Runtime::new().expect("Failed to create runtime");
    let mut group = c.benchmark_group("batch_process");

    for size in [10usize, 100, 1000] {
        let batch = items(size);

        group.bench_with_input(BenchmarkId::new("sync", size), &batch, |b, batch| {
            b.iter_batched(
                quiet_sync,
                |mut service| black_box(service.batch_process(batch)),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("async", size), &batch, |b, batch| {
            b.to_async(&runtime).iter_batched(
                quiet_async,
                |service| async move { black_box(service.batch_process(batch).await) },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sync_process, bench_batches);
criterion_main!(benches);
