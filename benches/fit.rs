//! Polynomial fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100 to 100K samples)
//! - Polynomial degrees (constant through degree 8)
//! - Pump curves (head and efficiency fit together)
//! - Rank-deficient input under the minimum-norm policy
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pumpfit::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Noisy quadratic head curve sampled over 0..2000 gpm.
fn generate_head_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 2000.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&q| 150.0 - 2.5e-5 * q * q + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Pump table with noisy head and efficiency columns.
fn generate_pump_data(rows: usize, seed: u64) -> PumpData<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.3).unwrap();

    let mut data = PumpData::new("bench", "gpm", "ft");
    for i in 0..rows {
        let q = i as f64 * 600.0 / rows as f64;
        let head = 120.0 - 3e-4 * q * q + noise_dist.sample(&mut rng);
        let eff = 0.4 * q - 8e-4 * q * q + 4e-7 * q * q * q + noise_dist.sample(&mut rng);
        data.push(q, head, eff);
    }
    data
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_head_data(size, 42);
        let fitter = PolyFit::new().degree(Quadratic).build().unwrap();

        group.bench_with_input(BenchmarkId::new("quadratic", size), &size, |b, _| {
            b.iter(|| fitter.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_polynomial_degrees(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_degrees");
    group.sample_size(100);

    let (x, y) = generate_head_data(5_000, 7);

    for degree in [0usize, 1, 2, 3, 5, 8] {
        let fitter = PolyFit::new().degree(degree).build().unwrap();

        group.bench_with_input(BenchmarkId::new("fit", degree), &degree, |b, _| {
            b.iter(|| fitter.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_pump_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("pump_curve");

    for rows in [10, 50, 500] {
        let data = generate_pump_data(rows, 11);
        let fitter = PumpCurveBuilder::new().build().unwrap();

        group.bench_with_input(BenchmarkId::new("head_and_efficiency", rows), &rows, |b, _| {
            b.iter(|| fitter.fit(black_box(&data)).unwrap())
        });
    }
    group.finish();
}

fn bench_minimum_norm(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_norm");

    // Abscissae binned to 40 gpm steps: many repeated values, still full rank.
    let (x, y) = generate_head_data(1_000, 3);
    let x: Vec<f64> = x.iter().map(|&q| (q / 40.0).floor() * 40.0).collect();

    let strict = PolyFit::new().degree(Cubic).build().unwrap();
    let lenient = PolyFit::new()
        .degree(Cubic)
        .rank_policy(MinimumNorm)
        .build()
        .unwrap();

    group.bench_function("strict_full_rank", |b| {
        b.iter(|| strict.fit(black_box(&x), black_box(&y)).unwrap())
    });

    let few_x = [100.0, 100.0, 900.0, 900.0, 900.0];
    let few_y = [149.0, 150.0, 130.0, 129.5, 130.5];
    group.bench_function("minimum_norm_deficient", |b| {
        b.iter(|| lenient.fit(black_box(&few_x), black_box(&few_y)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_polynomial_degrees,
    bench_pump_curve,
    bench_minimum_norm,
);

criterion_main!(benches);
