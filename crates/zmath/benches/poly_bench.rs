//! Benchmarks for FFT polynomial multiplication and the raw transform.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use zmath::poly::{fft, ifft, Complex64, Polynomial};

/// Generates a polynomial of the given degree with coefficients in [-1, 1).
fn random_poly(rng: &mut ChaCha8Rng, degree: usize) -> Polynomial {
    Polynomial::new((0..=degree).map(|_| rng.gen_range(-1.0..1.0)).collect())
}

fn bench_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [16, 64, 256, 1024, 4096] {
        let p = random_poly(&mut rng, size);
        let q = random_poly(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("FFT", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q))
        });
    }

    group.finish();
}

fn bench_polynomial_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_pow");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let p = random_poly(&mut rng, 8);

    for exp in [2u32, 8, 32] {
        group.bench_with_input(BenchmarkId::new("square_and_multiply", exp), &exp, |b, &n| {
            b.iter(|| black_box(p.pow(n)))
        });
    }

    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for log_len in [8, 12, 14, 16] {
        let n = 1usize << log_len;
        let data: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();

        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, _| {
            b.iter(|| {
                let mut buf = data.clone();
                fft(&mut buf).unwrap();
                black_box(buf)
            })
        });

        group.bench_with_input(BenchmarkId::new("roundtrip", n), &n, |b, _| {
            b.iter(|| {
                let mut buf = data.clone();
                fft(&mut buf).unwrap();
                ifft(&mut buf).unwrap();
                black_box(buf)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_polynomial_multiplication,
    bench_polynomial_power,
    bench_fft
);
criterion_main!(benches);
