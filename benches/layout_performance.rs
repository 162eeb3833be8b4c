//! Layout engine micro-benchmarks
//!
//! Measures parse-and-layout cost for flat text, nested constructs and
//! batches of labels.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mathtext::{CachedMetrics, DrawList, MathText, UniformMetrics};
use std::hint::black_box;

/// `depth` nested fractions, each with a scripted numerator.
fn nested_fraction(depth: usize) -> String {
    let mut expr = String::from("x");
    for _ in 0..depth {
        expr = format!("\\frac{{{expr}^2}}{{1+{expr}}}");
    }
    format!("${expr}$")
}

fn benchmark_layout_simple_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_simple_text");
    let engine = MathText::new(UniformMetrics::new());

    for text_length in [10, 100, 1000] {
        let input = format!("${}$", "x+".repeat(text_length / 2));
        group.bench_with_input(
            BenchmarkId::new("chars", text_length),
            &input,
            |b, input| {
                b.iter(|| engine.parse(black_box(input)).expect("Failed to parse"));
            },
        );
    }

    group.finish();
}

fn benchmark_layout_nested_fractions(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_nested_fractions");
    let engine = MathText::new(UniformMetrics::new());

    for depth in [1, 4, 8] {
        let input = nested_fraction(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &input, |b, input| {
            b.iter(|| engine.parse(black_box(input)).expect("Failed to parse"));
        });
    }

    group.finish();
}

fn benchmark_ship(c: &mut Criterion) {
    let engine = MathText::new(UniformMetrics::new());
    let node = engine
        .parse(&nested_fraction(6))
        .expect("Failed to parse");

    c.bench_function("ship_nested_fraction", |b| {
        b.iter(|| {
            let mut list = DrawList::new();
            mathtext::render(&mut list, black_box(&node)).expect("Failed to render");
            list
        });
    });
}

fn benchmark_label_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_batch");
    let engine = MathText::new(CachedMetrics::new(UniformMetrics::new()));
    let labels: Vec<String> = (0..200)
        .map(|i| format!("$10^{{{i}}}$ and $\\sqrt{{x_{{{i}}}}}$"))
        .collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

    for count in [10, 200] {
        group.bench_with_input(BenchmarkId::new("labels", count), &count, |b, &count| {
            b.iter(|| engine.parse_batch(black_box(&labels[..count])));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_layout_simple_text,
    benchmark_layout_nested_fractions,
    benchmark_ship,
    benchmark_label_batch
);
criterion_main!(benches);
