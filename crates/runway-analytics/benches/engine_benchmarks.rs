//! Benchmarks for the runway-analytics engine.
//!
//! Run with: cargo bench -p runway-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal_macros::dec;

use runway_analytics::{compare_scenarios, compute, compute_scenario, CashFlowBreakdown};
use runway_core::{InputRecord, ScenarioName};
use runway_scenarios::InputOverrides;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for scenario in ScenarioName::ALL {
        let input = runway_scenarios::resolve(scenario);
        group.bench_with_input(BenchmarkId::from_parameter(scenario.key()), &input, |b, input| {
            b.iter(|| compute(black_box(input)))
        });
    }

    let fractional =
        InputRecord::new(dec!(249.99), dec!(0.8125), 30, dec!(180.5), 300, dec!(35000.75))
            .expect("valid input");
    group.bench_function("fractional", |b| b.iter(|| compute(black_box(&fractional))));

    group.finish();
}

fn bench_scenario_pipeline(c: &mut Criterion) {
    let overrides = InputOverrides::new().with_cac(dec!(0)).with_lifetime(36);

    c.bench_function("compute_scenario_with_overrides", |b| {
        b.iter(|| compute_scenario(black_box(ScenarioName::Base), black_box(&overrides)))
    });

    c.bench_function("compare_scenarios", |b| {
        b.iter(|| compare_scenarios(black_box(&overrides)))
    });

    let result = compute_scenario(ScenarioName::Base, &overrides).expect("valid scenario");
    c.bench_function("cash_flow_breakdown", |b| {
        b.iter(|| CashFlowBreakdown::from_result(black_box(&result)))
    });
}

criterion_group!(engine, bench_compute, bench_scenario_pipeline);
criterion_main!(engine);
