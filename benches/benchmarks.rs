//! Benchmarks for GF(2^173) operations.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gf2m173::FieldElement;

/// Twenty random elements built from random binary strings, the way an
/// external caller would construct them.
fn random_elements() -> Vec<FieldElement> {
    let mut rng = StdRng::seed_from_u64(173);
    (0..20)
        .map(|_| {
            let digits: String = (0..173)
                .map(|_| if rng.gen::<bool>() { '1' } else { '0' })
                .collect();
            FieldElement::from_bin_str(&digits).unwrap()
        })
        .collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^173) Arithmetic");

    let xs = random_elements();
    let a = xs[0];
    let b = xs[1];

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    group.bench_function("multiply", |bencher| {
        bencher.iter(|| black_box(a).multiply(black_box(b)))
    });

    group.bench_function("square", |bencher| {
        bencher.iter(|| black_box(a).square())
    });

    group.bench_function("multiply_self", |bencher| {
        bencher.iter(|| black_box(a).multiply(black_box(a)))
    });

    group.finish();
}

fn bench_exponentiation(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^173) Exponentiation");

    let xs = random_elements();
    let a = xs[2];
    let e = xs[3];

    group.bench_function("pow", |bencher| {
        bencher.iter(|| black_box(a).pow(black_box(e)))
    });

    group.bench_function("trace", |bencher| bencher.iter(|| black_box(a).trace()));

    group.bench_function("inverse", |bencher| {
        bencher.iter(|| black_box(a).inverse())
    });

    group.bench_function("sqrt", |bencher| bencher.iter(|| black_box(a).sqrt()));

    group.bench_function("batch_inverse_20", |bencher| {
        bencher.iter_batched(
            || xs.clone(),
            |elements| FieldElement::batch_inverse(&elements),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^173) Text Encodings");

    let a = random_elements()[4];
    let bin = a.to_bin_string();
    let hex = a.to_hex_string();

    group.bench_function("from_bin_str", |bencher| {
        bencher.iter(|| FieldElement::from_bin_str(black_box(&bin)))
    });

    group.bench_function("from_hex_str", |bencher| {
        bencher.iter(|| FieldElement::from_hex_str(black_box(&hex)))
    });

    group.bench_function("to_hex_string", |bencher| {
        bencher.iter(|| black_box(a).to_hex_string())
    });

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_exponentiation, bench_codec);
criterion_main!(benches);
