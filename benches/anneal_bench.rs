//! Criterion benchmarks for the annealing engine.
//!
//! Uses synthetic lattices (antiferromagnetic ring, random-coupling chain)
//! to measure sweep throughput and whole-run cost at several problem sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ising_anneal::{
    default_beta_range, sweep, AnnealParams, AnnealRunner, BetaSchedule, IsingModel, SpinState,
};

/// Ring of `n` spins with unit antiferromagnetic couplers.
fn ring(n: usize) -> IsingModel {
    let couplers = (0..n).map(|v| (v, (v + 1) % n, 1.0)).collect();
    IsingModel::new(vec![0.0; n], couplers).unwrap()
}

/// Chain with deterministic pseudo-random weights, no RNG dependency.
fn weighted_chain(n: usize) -> IsingModel {
    let couplers = (0..n - 1)
        .map(|v| {
            let w = ((v * 2654435761) % 1000) as f64 / 500.0 - 1.0;
            (v, v + 1, w)
        })
        .collect();
    let h = (0..n).map(|v| ((v * 40503) % 100) as f64 / 100.0 - 0.5).collect();
    IsingModel::new(h, couplers).unwrap()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for &n in &[64, 512, 4096] {
        let model = ring(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = ising_anneal::rng::read_stream(42, 0);
            let mut state = SpinState::random(&model, &mut rng);
            b.iter(|| {
                let accepted = sweep(&model, &mut state, black_box(1.0), &mut rng);
                black_box(accepted);
            });
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);
    for &n in &[64, 512] {
        let model = weighted_chain(n);
        let (hot, cold) = default_beta_range(&model);
        let schedule = BetaSchedule::geometric(hot, cold, 100);
        let params = AnnealParams::default()
            .with_num_reads(10)
            .with_sweeps_per_beta(1)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let result = AnnealRunner::run(&model, &schedule, &params).unwrap();
                black_box(result.energies);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_full_run);
criterion_main!(benches);
