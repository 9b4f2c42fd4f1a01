//! Beta (inverse temperature) schedule construction.
//!
//! The annealing engine itself consumes an opaque ordered `&[f64]` and
//! traverses it as given. This module holds the two interpolation shapes
//! callers usually want, plus the default beta range heuristic derived from
//! the problem's bias magnitudes.

use crate::error::ScheduleError;
use crate::model::IsingModel;

/// An ordered sequence of positive beta values, one annealing stage each.
///
/// Typically monotonically increasing (hot to cold), but any order is
/// traversed faithfully.
///
/// # Examples
///
/// ```
/// use ising_anneal::BetaSchedule;
///
/// let schedule = BetaSchedule::geometric(0.1, 4.2, 100);
/// assert_eq!(schedule.len(), 100);
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaSchedule {
    betas: Vec<f64>,
}

impl BetaSchedule {
    /// Wraps an already-materialized sequence of betas.
    pub fn from_betas(betas: Vec<f64>) -> Self {
        Self { betas }
    }

    /// `num_betas` values interpolated linearly from `start` toward `end`.
    ///
    /// The step is `(end - start) / num_betas`, so `end` itself is excluded:
    /// the sequence is `start, start + step, …, start + (num_betas-1)·step`.
    pub fn linear(start: f64, end: f64, num_betas: usize) -> Self {
        let step = (end - start) / num_betas as f64;
        let betas = (0..num_betas).map(|s| start + s as f64 * step).collect();
        Self { betas }
    }

    /// `num_betas` values interpolated geometrically from `start` toward
    /// `end`, with ratio `(end / start)^(1/num_betas)`.
    pub fn geometric(start: f64, end: f64, num_betas: usize) -> Self {
        let ratio = (end / start).powf(1.0 / num_betas as f64);
        let betas = (0..num_betas).map(|i| start * ratio.powi(i as i32)).collect();
        Self { betas }
    }

    /// The beta values in traversal order.
    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    /// Number of schedule entries.
    pub fn len(&self) -> usize {
        self.betas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.betas.is_empty()
    }

    /// Checks that the schedule can drive a run: non-empty, every entry a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.betas.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for (index, &beta) in self.betas.iter().enumerate() {
            if !(beta > 0.0 && beta.is_finite()) {
                return Err(ScheduleError::NonPositiveBeta { index, beta });
            }
        }
        Ok(())
    }
}

/// A `(hot, cold)` beta range sized to the problem's bias magnitudes.
///
/// The cold end is `2·max_v(|h[v]| + Σ_u |J[v,u]|)`, twice the largest total
/// bias any single variable sees, so that even the stiffest variable freezes
/// by the end of the schedule. The hot end is fixed at `0.1`. An empty
/// problem gets `(0.1, 1.0)`; the range is then irrelevant anyway.
pub fn default_beta_range(model: &IsingModel) -> (f64, f64) {
    let hot = 0.1;

    let max_sigma = (0..model.num_variables())
        .map(|v| {
            model.linear(v).abs()
                + model
                    .neighbors(v)
                    .iter()
                    .map(|&(_, w)| w.abs())
                    .sum::<f64>()
        })
        .fold(f64::NEG_INFINITY, f64::max);

    if max_sigma.is_finite() && max_sigma > 0.0 {
        (hot, 2.0 * max_sigma)
    } else {
        (hot, 1.0)
    }
}
