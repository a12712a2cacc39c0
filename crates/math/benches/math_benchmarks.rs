//! Benchmarks for factorscope-math operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use factorscope_math::{Moments, add_intercept, ordinary_least_squares, percentile};
use ndarray::{Array1, Array2};
use rand::Rng;

fn random_returns(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.r#gen::<f64>() * 0.1 - 0.05).collect()
}

fn random_matrix(rows: usize, cols: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((rows, cols), |_| rng.r#gen::<f64>() * 0.04 - 0.02)
}

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");

    for size in [250, 1000, 5000, 25000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_returns(size);
            b.iter(|| Moments::from_slice(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile");

    for size in [250, 1000, 5000, 25000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_returns(size);
            b.iter(|| percentile(black_box(&data), black_box(5.0)).unwrap());
        });
    }

    group.finish();
}

fn bench_ols(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordinary_least_squares");

    for (n_obs, n_factors) in [(252, 1), (252, 3), (1260, 3), (2520, 3)] {
        group.throughput(Throughput::Elements(n_obs as u64));
        group.bench_with_input(
            BenchmarkId::new("obs_factors", format!("{n_obs}_{n_factors}")),
            &(n_obs, n_factors),
            |b, &(n_obs, n_factors)| {
                let y = Array1::from_vec(random_returns(n_obs));
                let x = add_intercept(&random_matrix(n_obs, n_factors));
                b.iter(|| ordinary_least_squares(black_box(&y), black_box(&x)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_moments, bench_percentile, bench_ols);
criterion_main!(benches);
