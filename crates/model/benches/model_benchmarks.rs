//! Benchmarks for lagfactor-model factor estimation.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lagfactor_model::{CumulativeCovarianceEstimator, EstimatorConfig, estimate_factors};
use lagfactor_primitives::MaxLag;
use lagfactor_traits::FactorEstimator;
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Series driven by `n_factors` AR(1) factors plus white noise.
fn factor_series(n_obs: usize, n_vars: usize, n_factors: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    let normal = Normal::new(0.0, 1.0).unwrap();

    let loadings = Array2::from_shape_fn((n_vars, n_factors), |_| rng.r#gen::<f64>() * 2.0 - 1.0);
    let mut factors = Array2::<f64>::zeros((n_obs, n_factors));
    for t in 1..n_obs {
        for j in 0..n_factors {
            factors[[t, j]] = 0.8 * factors[[t - 1, j]] + normal.sample(&mut rng);
        }
    }
    let noise = Array2::from_shape_fn((n_obs, n_vars), |_| 0.5 * normal.sample(&mut rng));
    factors.dot(&loadings.t()) + noise
}

fn bench_estimate_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_factors");
    group.sample_size(20);

    let scenarios = [
        (250, 12, 3, "small_panel"),
        (500, 50, 5, "medium_panel"),
        (1000, 100, 5, "large_panel"),
    ];

    for (n_obs, n_vars, n_factors, name) in scenarios {
        group.throughput(Throughput::Elements((n_obs * n_vars) as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", name),
            &(n_obs, n_vars, n_factors),
            |b, &(n_obs, n_vars, n_factors)| {
                let series = factor_series(n_obs, n_vars, n_factors);
                b.iter(|| {
                    estimate_factors(black_box(series.view()), black_box(2), black_box(n_factors))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_lag_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lag_scaling");
    group.sample_size(20);

    let series = factor_series(500, 30, 3);
    for max_lag in [1, 2, 5, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(max_lag), &max_lag, |b, &max_lag| {
            let estimator = CumulativeCovarianceEstimator::with_config(EstimatorConfig {
                max_lag: MaxLag::new(max_lag),
                ..EstimatorConfig::default()
            });
            b.iter(|| estimator.estimate(black_box(series.view())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_estimate_factors, bench_lag_scaling);
criterion_main!(benches);
