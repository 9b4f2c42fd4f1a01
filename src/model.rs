//! Immutable problem definition: linear biases, couplers, adjacency.
//!
//! The model is built once per invocation from flat index-labelled arrays
//! (mapping arbitrary variable labels to `0..n` is the caller's job) and is
//! read-only for the duration of a run, so it can be shared freely across
//! parallel reads.

use std::collections::HashSet;

use crate::error::ShapeError;

/// An Ising objective `E(s) = Σ h[v]·s[v] + Σ J[u,v]·s[u]·s[v]` over spins
/// `s[v] ∈ {-1, +1}`.
///
/// Alongside the coupler list the model stores an adjacency list so that the
/// local field of a variable can be maintained in O(degree) per flip rather
/// than O(couplers).
#[derive(Debug, Clone)]
pub struct IsingModel {
    h: Vec<f64>,
    couplers: Vec<(usize, usize, f64)>,
    neighbors: Vec<Vec<(usize, f64)>>,
}

impl IsingModel {
    /// Builds a model from linear biases and `(u, v, weight)` couplers.
    ///
    /// Couplers are undirected: `(u, v, w)` and `(v, u, w)` denote the same
    /// edge, and listing both is rejected as a duplicate.
    pub fn new(h: Vec<f64>, couplers: Vec<(usize, usize, f64)>) -> Result<Self, ShapeError> {
        let n = h.len();
        let mut seen = HashSet::with_capacity(couplers.len());
        let mut neighbors = vec![Vec::new(); n];

        for &(u, v, weight) in &couplers {
            if u >= n || v >= n {
                return Err(ShapeError::CouplerOutOfRange { u, v, n });
            }
            if u == v {
                return Err(ShapeError::SelfCoupler { v });
            }
            let key = (u.min(v), u.max(v));
            if !seen.insert(key) {
                return Err(ShapeError::DuplicateCoupler { u: key.0, v: key.1 });
            }
            neighbors[u].push((v, weight));
            neighbors[v].push((u, weight));
        }

        Ok(Self {
            h,
            couplers,
            neighbors,
        })
    }

    /// Builds a model from the flat parallel arrays used at FFI-style
    /// boundaries: a declared variable count, `h`, and coupler start
    /// indices, end indices, and weights.
    pub fn from_arrays(
        num_variables: usize,
        h: Vec<f64>,
        coupler_starts: &[usize],
        coupler_ends: &[usize],
        coupler_weights: &[f64],
    ) -> Result<Self, ShapeError> {
        if h.len() != num_variables {
            return Err(ShapeError::LinearLengthMismatch {
                expected: num_variables,
                got: h.len(),
            });
        }
        if coupler_starts.len() != coupler_ends.len()
            || coupler_starts.len() != coupler_weights.len()
        {
            return Err(ShapeError::CouplerArrayMismatch {
                starts: coupler_starts.len(),
                ends: coupler_ends.len(),
                weights: coupler_weights.len(),
            });
        }
        let couplers = coupler_starts
            .iter()
            .zip(coupler_ends)
            .zip(coupler_weights)
            .map(|((&u, &v), &w)| (u, v, w))
            .collect();
        Self::new(h, couplers)
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.h.len()
    }

    /// Linear bias of variable `v`.
    pub fn linear(&self, v: usize) -> f64 {
        self.h[v]
    }

    /// All linear biases, index-labelled.
    pub fn linear_biases(&self) -> &[f64] {
        &self.h
    }

    /// The couplers as given at construction.
    pub fn couplers(&self) -> &[(usize, usize, f64)] {
        &self.couplers
    }

    /// Variables coupled to `v`, with their coupler weights.
    pub fn neighbors(&self, v: usize) -> &[(usize, f64)] {
        &self.neighbors[v]
    }

    /// Total energy of a spin assignment, recomputed from scratch.
    ///
    /// Each coupler contributes exactly once. No constant offset is applied;
    /// callers that carried an offset out of their original formulation add
    /// it back themselves.
    pub fn energy(&self, spins: &[i8]) -> f64 {
        debug_assert_eq!(spins.len(), self.h.len());
        let linear: f64 = self
            .h
            .iter()
            .zip(spins)
            .map(|(&h, &s)| h * f64::from(s))
            .sum();
        let quadratic: f64 = self
            .couplers
            .iter()
            .map(|&(u, v, w)| w * f64::from(spins[u]) * f64::from(spins[v]))
            .sum();
        linear + quadratic
    }
}
