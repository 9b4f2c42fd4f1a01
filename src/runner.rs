//! Annealing run execution.
//!
//! [`AnnealRunner`] drives the full run: per read it derives a private PRNG
//! stream, draws a fresh random spin state, walks the beta schedule start to
//! finish (a fixed number of sweeps per entry, no early exit), then records
//! the final spins and energy at the read's ordinal slot.
//!
//! Reads are embarrassingly parallel. They share only the read-only model
//! and schedule, and each read's stream depends only on `(seed, read_index)`,
//! so sequential and parallel execution produce bit-identical results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{AnnealError, RequestError, ScheduleError};
use crate::model::IsingModel;
use crate::rng::read_stream;
use crate::schedule::BetaSchedule;
use crate::state::SpinState;
use crate::sweep::sweep;

/// Run request parameters.
///
/// # Examples
///
/// ```
/// use ising_anneal::AnnealParams;
///
/// let params = AnnealParams::default()
///     .with_num_reads(100)
///     .with_sweeps_per_beta(10)
///     .with_seed(42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealParams {
    /// Number of independent annealing trajectories to run.
    pub num_reads: usize,

    /// Number of sweeps performed at each beta value.
    pub sweeps_per_beta: usize,

    /// Run seed. A fixed seed reproduces bit-identical results on the same
    /// build; `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Whether to execute reads on rayon workers. Results are identical to
    /// sequential execution either way. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            num_reads: 10,
            sweeps_per_beta: 1,
            seed: None,
            parallel: false,
        }
    }
}

impl AnnealParams {
    pub fn with_num_reads(mut self, n: usize) -> Self {
        self.num_reads = n;
        self
    }

    pub fn with_sweeps_per_beta(mut self, n: usize) -> Self {
        self.sweeps_per_beta = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the request.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if self.num_reads == 0 {
            return Err(RequestError::NonPositiveReads.into());
        }
        if self.sweeps_per_beta == 0 {
            return Err(ScheduleError::NonPositiveSweeps.into());
        }
        Ok(())
    }
}

/// Result of an annealing run.
///
/// Row `r` of `samples` and entry `r` of `energies` belong to read `r`,
/// regardless of which worker finished it first.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Final spin assignment per read, values in `{-1, +1}`.
    pub samples: Vec<Vec<i8>>,

    /// Energy of each row, recomputed from the final spins. No constant
    /// offset is applied.
    pub energies: Vec<f64>,

    /// Accepted flip count per read, summed over the whole schedule.
    pub accepted_flips: Vec<usize>,

    /// Whether cancellation cut the run short. When set, `samples` holds the
    /// longest completed prefix of reads.
    pub cancelled: bool,
}

impl AnnealResult {
    /// Number of completed reads.
    pub fn num_reads(&self) -> usize {
        self.samples.len()
    }

    /// The completed read with the lowest energy, as `(spins, energy)`.
    pub fn best(&self) -> Option<(&[i8], f64)> {
        self.energies
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(r, &energy)| (self.samples[r].as_slice(), energy))
    }
}

/// Executes annealing runs.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the full request against `model` and `schedule`.
    ///
    /// All structural checks happen here, before any sweep: model shape was
    /// already enforced at construction, the schedule must be non-empty with
    /// positive betas, and the request must ask for at least one read and one
    /// sweep per beta. After that point the run cannot fail.
    pub fn run(
        model: &IsingModel,
        schedule: &BetaSchedule,
        params: &AnnealParams,
    ) -> Result<AnnealResult, AnnealError> {
        Self::run_with_cancel(model, schedule, params, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// Cancellation is honored only at read boundaries: completed reads are
    /// returned intact (in read order), remaining reads are abandoned, and
    /// no read is ever interrupted mid-sweep.
    pub fn run_with_cancel(
        model: &IsingModel,
        schedule: &BetaSchedule,
        params: &AnnealParams,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, AnnealError> {
        params.validate()?;
        schedule.validate()?;

        let seed = match params.seed {
            Some(seed) => seed,
            None => rand::random(),
        };

        let rows = collect_reads(model, schedule, params, seed, cancel.as_deref());

        let cancelled = rows.iter().any(Option::is_none);
        let completed = rows.into_iter().map_while(|row| row);

        let mut samples = Vec::with_capacity(params.num_reads);
        let mut energies = Vec::with_capacity(params.num_reads);
        let mut accepted_flips = Vec::with_capacity(params.num_reads);
        for (spins, energy, accepted) in completed {
            samples.push(spins);
            energies.push(energy);
            accepted_flips.push(accepted);
        }

        Ok(AnnealResult {
            samples,
            energies,
            accepted_flips,
            cancelled,
        })
    }
}

type ReadRow = (Vec<i8>, f64, usize);

/// One complete annealing trajectory: fresh stream, fresh state, the whole
/// schedule in order.
fn anneal_read(
    model: &IsingModel,
    schedule: &BetaSchedule,
    sweeps_per_beta: usize,
    seed: u64,
    read: usize,
) -> ReadRow {
    let mut rng = read_stream(seed, read as u64);
    let mut state = SpinState::random(model, &mut rng);

    let mut accepted = 0;
    for &beta in schedule.betas() {
        for _ in 0..sweeps_per_beta {
            accepted += sweep(model, &mut state, beta, &mut rng);
        }
    }

    let energy = state.energy(model);
    (state.spins().to_vec(), energy, accepted)
}

fn run_read(
    model: &IsingModel,
    schedule: &BetaSchedule,
    params: &AnnealParams,
    seed: u64,
    read: usize,
    cancel: Option<&AtomicBool>,
) -> Option<ReadRow> {
    if let Some(flag) = cancel {
        if flag.load(Ordering::Relaxed) {
            return None;
        }
    }
    Some(anneal_read(model, schedule, params.sweeps_per_beta, seed, read))
}

#[cfg(feature = "parallel")]
fn collect_reads(
    model: &IsingModel,
    schedule: &BetaSchedule,
    params: &AnnealParams,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Vec<Option<ReadRow>> {
    if params.parallel {
        (0..params.num_reads)
            .into_par_iter()
            .map(|read| run_read(model, schedule, params, seed, read, cancel))
            .collect()
    } else {
        (0..params.num_reads)
            .map(|read| run_read(model, schedule, params, seed, read, cancel))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_reads(
    model: &IsingModel,
    schedule: &BetaSchedule,
    params: &AnnealParams,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Vec<Option<ReadRow>> {
    (0..params.num_reads)
        .map(|read| run_read(model, schedule, params, seed, read, cancel))
        .collect()
}
