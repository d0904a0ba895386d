//! Operator invocation benchmarks
//!
//! Covers the decimal/float conversions and registry dispatch.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use decimal_math_operators::conversion::{from_f64_exact, to_f64};
use decimal_math_operators::{BigDecimal, create_standard_registry};
use std::hint::black_box;
use std::str::FromStr;

const INPUTS: &[(&str, &str)] = &[
    ("integer", "8"),
    ("short", "0.25"),
    ("long", "0.1000000000000000055511151231257827021181583404541015625"),
];

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.throughput(Throughput::Elements(1));

    for (label, literal) in INPUTS {
        let decimal = BigDecimal::from_str(literal).unwrap();
        group.bench_with_input(BenchmarkId::new("to_f64", label), &decimal, |b, d| {
            b.iter(|| black_box(to_f64(black_box(d))))
        });
    }

    for (label, value) in [("one", 1.0), ("tenth", 0.1), ("tiny", 1e-300)] {
        group.bench_with_input(BenchmarkId::new("from_f64_exact", label), &value, |b, v| {
            b.iter(|| black_box(from_f64_exact(black_box(*v))))
        });
    }

    group.finish();
}

fn bench_invoke(c: &mut Criterion) {
    let registry = create_standard_registry().unwrap();
    let mut group = c.benchmark_group("invoke");
    group.throughput(Throughput::Elements(1));

    let input = [Some(BigDecimal::from_str("0.5").unwrap())];
    for name in ["abs", "acos", "exp", "floor", "exponent"] {
        group.bench_with_input(BenchmarkId::new("operator", name), &name, |b, name| {
            b.iter(|| black_box(registry.invoke(black_box(name), &input)))
        });
    }

    let absent: [Option<BigDecimal>; 1] = [None];
    group.bench_function("absent", |b| {
        b.iter(|| black_box(registry.invoke("loge", black_box(&absent))))
    });

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_invoke);
criterion_main!(benches);
