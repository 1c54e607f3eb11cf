//! Benchmarks for number-as-string validation
//!
//! Measures:
//! - Scanner throughput on short and long inputs
//! - Full `check` with format policy and range rules
//! - Object validation through a schema

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use field_rules::foundation::{FieldContext, ValidationOptions};
use field_rules::number::scan::scan;
use field_rules::number::{DecimalSeparator, Limit, number_as_string};
use field_rules::schema::ObjectSchema;
use serde_json::json;

fn scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("number/scan");

    let long = format!("{}.{}", "9".repeat(60), "1".repeat(20));
    for input in ["0", "-1250,00", "00.01", long.as_str()] {
        group.bench_with_input(BenchmarkId::from_parameter(input.len()), input, |b, input| {
            b.iter(|| black_box(scan(black_box(input))));
        });
    }

    group.finish();
}

fn check(c: &mut Criterion) {
    let mut group = c.benchmark_group("number/check");
    let ctx = FieldContext::default();

    let plain = number_as_string().decimal(DecimalSeparator::Comma, 2);
    group.bench_function("format_only", |b| {
        b.iter(|| black_box(plain.check(black_box(" 1250,00 "), &ctx)));
    });

    let ranged = plain.clone().min(0).less(1_000_000);
    group.bench_function("with_ranges", |b| {
        b.iter(|| black_box(ranged.check(black_box("1250,00"), &ctx)));
    });

    group.bench_function("rejected", |b| {
        b.iter(|| black_box(ranged.check(black_box("-0,00"), &ctx)));
    });

    group.finish();
}

fn schema(c: &mut Criterion) {
    let schema = ObjectSchema::new()
        .field("floor", number_as_string())
        .field(
            "amount",
            number_as_string()
                .decimal(DecimalSeparator::Comma, 2)
                .min(Limit::reference("floor")),
        );
    let input = json!({ "floor": "10", "amount": "12,50" });
    let options = ValidationOptions::default();

    c.bench_function("schema/validate", |b| {
        b.iter(|| black_box(schema.validate(black_box(&input), &options)));
    });
}

criterion_group!(benches, scanner, check, schema);
criterion_main!(benches);
