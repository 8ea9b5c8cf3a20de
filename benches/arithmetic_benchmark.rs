// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Variadic operations - add_many / subtract_many over growing slices
// 2. Expression evaluation - tokenize, parse and compute
// 3. Configured evaluation - same inputs through a strict Evaluator
// ============================================================================

use calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Variadic Operation Benchmarks
// ============================================================================

fn benchmark_variadic(c: &mut Criterion) {
    let mut group = c.benchmark_group("variadic");

    for len in [10, 100, 1000].iter() {
        let values: Vec<f64> = (0..*len).map(|i| i as f64 * 0.5).collect();

        group.bench_with_input(BenchmarkId::new("add_many", len), &values, |b, values| {
            b.iter(|| black_box(add_many(black_box(values))));
        });

        group.bench_with_input(
            BenchmarkId::new("subtract_many", len),
            &values,
            |b, values| {
                b.iter(|| black_box(subtract_many(black_box(values))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Expression Evaluation Benchmarks
// ============================================================================

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let inputs = [
        ("simple", "2 * 2"),
        ("decimal", "1 + 1.5"),
        ("padded", "   18  /   6   "),
        ("exponent", "-1.25e-3 - 4.5E2"),
        ("malformed", "1 + 2 + 3"),
    ];

    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("default", name), input, |b, input| {
            b.iter(|| black_box(evaluate(black_box(input))));
        });
    }

    let strict = Evaluator::new(EvaluatorConfig::strict()).unwrap();
    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("strict", name), input, |b, input| {
            b.iter(|| black_box(strict.evaluate(black_box(input))));
        });
    }

    group.finish();
}

fn benchmark_parse_only(c: &mut Criterion) {
    c.bench_function("parse_expression", |b| {
        b.iter(|| black_box(black_box("123.456 / 7.89").parse::<Expression>()));
    });
}

criterion_group!(
    benches,
    benchmark_variadic,
    benchmark_evaluate,
    benchmark_parse_only,
);
criterion_main!(benches);
