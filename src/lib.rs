//! Seeded, reproducible simulated annealing for Ising/QUBO objectives.
//!
//! Given per-variable linear biases `h`, pairwise couplers `J`, and an
//! inverse-temperature (beta) schedule, the engine runs one or more
//! independent annealing trajectories ("reads") and returns each read's final
//! spin assignment and energy.
//!
//! - **[`IsingModel`]**: immutable flattened problem with an adjacency
//!   structure for O(degree) local-field updates.
//! - **[`BetaSchedule`]**: ordered positive betas, with linear and geometric
//!   interpolation helpers and a [`default_beta_range`] heuristic.
//! - **[`SpinState`]**: per-read ±1 assignment with an incrementally
//!   maintained local-field cache.
//! - **[`sweep`]**: one fixed-order Metropolis pass at a given beta.
//! - **[`AnnealRunner`]**: traverses the schedule for every read and collects
//!   results in read-index order.
//!
//! Every read derives its own PRNG stream from the run seed and its read
//! index, so a fixed seed reproduces bit-identical results whether reads run
//! sequentially or on rayon workers (the optional `parallel` feature).
//!
//! This is a heuristic sampler: it offers no optimality guarantee, only
//! low-energy samples.
//!
//! # Examples
//!
//! ```
//! use ising_anneal::{AnnealParams, AnnealRunner, BetaSchedule, IsingModel};
//!
//! // Frustrated triangle: three spins, all pairs want to disagree.
//! let model = IsingModel::new(
//!     vec![0.0, 0.0, 0.0],
//!     vec![(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)],
//! )?;
//! let schedule = BetaSchedule::geometric(0.1, 4.0, 100);
//! let params = AnnealParams::default().with_num_reads(10).with_seed(42);
//!
//! let result = AnnealRunner::run(&model, &schedule, &params)?;
//! let (spins, energy) = result.best().unwrap();
//! assert_eq!(spins.len(), 3);
//! assert_eq!(energy, -1.0);
//! # Ok::<(), ising_anneal::AnnealError>(())
//! ```

pub mod error;
pub mod model;
pub mod rng;
pub mod runner;
pub mod schedule;
pub mod state;
pub mod sweep;

pub use error::{AnnealError, RequestError, ScheduleError, ShapeError};
pub use model::IsingModel;
pub use runner::{AnnealParams, AnnealResult, AnnealRunner};
pub use schedule::{default_beta_range, BetaSchedule};
pub use state::SpinState;
pub use sweep::sweep;
