//! Criterion benchmarks for the slider pipeline.
//! Focus: one full recomputation (`compute`) and one chart config build per ε.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use limites::chart::{self, ChartConfig};
use limites::epsdelta::{compute, Tolerance};
use limites::visualizer::Visualizer;

fn bench_compute(c: &mut Criterion) {
    let registry = chart::init();
    let mut group = c.benchmark_group("epsdelta");
    for &eps in &[0.1f64, 1.0, 2.0] {
        let tol = Tolerance::new(eps).unwrap();
        group.bench_with_input(BenchmarkId::new("compute", eps), &tol, |b, &tol| {
            b.iter(|| compute(black_box(tol)))
        });
        group.bench_with_input(BenchmarkId::new("chart_config", eps), &tol, |b, &tol| {
            let view = compute(tol);
            b.iter(|| ChartConfig::epsilon_delta(registry, black_box(&view.samples)).unwrap())
        });
    }
    group.bench_function("slider_event", |b| {
        let mut v = Visualizer::mount();
        b.iter(|| v.on_input(black_box("1.37")).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
