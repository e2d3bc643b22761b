//! Complexity-profile smoothing benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Direct vs FFT convolution across window sizes
//! - Bidirectional smoothing at genome-like lengths
//! - Batch fan-out over many short profiles
//! - Wide moving-average comparison
//!
//! For serial execution, use `CXSMOOTH_MODE=serial cargo bench`.
//! For parallel execution, use `CXSMOOTH_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cxsmooth::internals::algorithms::convolution::{
    ConvolutionMethod, ConvolutionOptions, window_filter_with,
};
use cxsmooth::internals::math::kernel::{KernelType, WindowKernel};
use cxsmooth::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("CXSMOOTH_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Complexity around 1.9 bits with Gaussian noise and periodic low-complexity dips.
fn generate_complexity(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.05).unwrap();

    (0..size)
        .map(|i| {
            let base = if i % 5_000 < 200 { 1.2 } else { 1.9 };
            (base + noise.sample(&mut rng)).clamp(0.0, 2.0)
        })
        .collect()
}

fn generate_profile(id: &str, size: usize, k: u64, seed: u64) -> ComplexityProfile<f64> {
    let positions: Vec<u64> = (1..=size as u64).collect();
    ComplexityProfile::new(id, k, positions, generate_complexity(size, seed)).unwrap()
}

/// Many short profiles with random lengths, as from a multi-record FASTA.
fn generate_collection(count: usize, seed: u64) -> Vec<ComplexityProfile<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let size = rng.random_range(2_000..20_000);
            generate_profile(&format!("contig_{i}"), size, 10, seed + i as u64)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_convolution_method(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("convolution_{}", mode_name));
    group.sample_size(30);

    let size = 200_000;
    let signal = generate_complexity(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    for window in [11, 101, 1_001, 10_001] {
        let kernel = WindowKernel::<f64>::new(KernelType::Blackman, window).unwrap();

        for (name, method) in [
            ("direct", ConvolutionMethod::Direct),
            ("fft", ConvolutionMethod::Fft),
        ] {
            let options = ConvolutionOptions {
                method,
                parallel: use_parallel,
                ..ConvolutionOptions::default()
            };
            group.bench_with_input(BenchmarkId::new(name, window), &window, |b, _| {
                b.iter(|| window_filter_with(black_box(&signal), &kernel, options).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_bidirectional(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("bidirectional_{}", mode_name));
    group.sample_size(20);

    for size in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let profile = generate_profile("chr", size, 10, 7);

        group.bench_with_input(BenchmarkId::new("adaptive", size), &size, |b, _| {
            b.iter(|| {
                Smoother::new()
                    .adapter(Single)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .smooth(black_box(&profile))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("batch_{}", mode_name));
    group.sample_size(20);

    for count in [10, 100] {
        let profiles = generate_collection(count, 11);

        group.bench_with_input(BenchmarkId::new("profiles", count), &count, |b, _| {
            b.iter(|| {
                Smoother::new()
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .run(black_box(&profiles))
            })
        });
    }
    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("comparison_{}", mode_name));
    group.sample_size(20);

    let first = generate_profile("NC_000001", 500_000, 10, 1);
    let second = generate_profile("chr1", 500_000, 10, 2);

    for (name, method) in [("direct", Direct), ("fft", Fft), ("auto", Auto)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                Comparator::new()
                    .method(method)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .compare(black_box(&first), black_box(&second))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_convolution_method,
    bench_bidirectional,
    bench_batch,
    bench_comparison,
);

criterion_main!(benches);
