//! Mutable per-read spin state with a local-field cache.

use rand::Rng;

use crate::model::IsingModel;

/// The spin assignment of one read, together with the cached local field
/// `field[v] = h[v] + Σ_u J[v,u]·spin[u]` of every variable.
///
/// The cache is maintained incrementally on every flip, never recomputed
/// wholesale, so evaluating a flip costs O(degree) and the cache equals the
/// true field at every point between sweeps. Each read owns its state
/// exclusively; nothing here is shared.
#[derive(Debug, Clone)]
pub struct SpinState {
    spins: Vec<i8>,
    local_fields: Vec<f64>,
}

impl SpinState {
    /// Draws a fresh state from the read's stream: an unbiased coin flip per
    /// variable, with the field cache initialized to match.
    pub fn random<R: Rng>(model: &IsingModel, rng: &mut R) -> Self {
        let n = model.num_variables();
        let spins: Vec<i8> = (0..n)
            .map(|_| if rng.random::<bool>() { 1 } else { -1 })
            .collect();

        let local_fields = (0..n)
            .map(|v| {
                model.linear(v)
                    + model
                        .neighbors(v)
                        .iter()
                        .map(|&(u, w)| w * f64::from(spins[u]))
                        .sum::<f64>()
            })
            .collect();

        Self {
            spins,
            local_fields,
        }
    }

    /// Current spin of variable `v`.
    pub fn spin(&self, v: usize) -> i8 {
        self.spins[v]
    }

    /// Cached local field of variable `v`.
    pub fn local_field(&self, v: usize) -> f64 {
        self.local_fields[v]
    }

    /// The full spin row.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Flips variable `v` and patches each neighbor's field in O(degree).
    ///
    /// `field[v]` carries no self term, so it is unchanged by the flip.
    pub fn flip(&mut self, model: &IsingModel, v: usize) {
        self.spins[v] = -self.spins[v];
        let delta = 2.0 * f64::from(self.spins[v]);
        for &(u, w) in model.neighbors(v) {
            self.local_fields[u] += delta * w;
        }
    }

    /// Total energy of the current assignment, recomputed from the model.
    pub fn energy(&self, model: &IsingModel) -> f64 {
        model.energy(&self.spins)
    }
}

#[cfg(test)]
pub(crate) fn recompute_fields(model: &IsingModel, state: &SpinState) -> Vec<f64> {
    (0..model.num_variables())
        .map(|v| {
            model.linear(v)
                + model
                    .neighbors(v)
                    .iter()
                    .map(|&(u, w)| w * f64::from(state.spin(u)))
                    .sum::<f64>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::read_stream;
    use proptest::prelude::*;

    fn ring_model(n: usize) -> IsingModel {
        let couplers = (0..n).map(|v| (v, (v + 1) % n, 1.0)).collect();
        IsingModel::new(vec![0.25; n], couplers).unwrap()
    }

    #[test]
    fn test_random_init_spins_are_unit() {
        let model = ring_model(64);
        let mut rng = read_stream(42, 0);
        let state = SpinState::random(&model, &mut rng);
        assert!(state.spins().iter().all(|&s| s == 1 || s == -1));
    }

    #[test]
    fn test_random_init_fields_match_recomputation() {
        let model = ring_model(32);
        let mut rng = read_stream(7, 0);
        let state = SpinState::random(&model, &mut rng);
        let expected = recompute_fields(&model, &state);
        for v in 0..32 {
            assert!((state.local_field(v) - expected[v]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_flip_toggles_spin_and_leaves_own_field() {
        let model = ring_model(8);
        let mut rng = read_stream(1, 0);
        let mut state = SpinState::random(&model, &mut rng);

        let before_spin = state.spin(3);
        let before_field = state.local_field(3);
        state.flip(&model, 3);

        assert_eq!(state.spin(3), -before_spin);
        assert!((state.local_field(3) - before_field).abs() < 1e-12);
    }

    #[test]
    fn test_flip_patches_neighbor_fields() {
        let model =
            IsingModel::new(vec![0.0; 3], vec![(0, 1, 2.0), (1, 2, -0.5)]).unwrap();
        let mut rng = read_stream(1, 0);
        let mut state = SpinState::random(&model, &mut rng);

        state.flip(&model, 1);
        let expected = recompute_fields(&model, &state);
        for v in 0..3 {
            assert!((state.local_field(v) - expected[v]).abs() < 1e-12);
        }
    }

    proptest! {
        // Cache consistency survives arbitrary flip sequences.
        #[test]
        fn prop_fields_track_flips(
            seed in any::<u64>(),
            flips in proptest::collection::vec(0usize..16, 0..200),
        ) {
            let model = ring_model(16);
            let mut rng = read_stream(seed, 0);
            let mut state = SpinState::random(&model, &mut rng);

            for v in flips {
                state.flip(&model, v);
            }

            let expected = recompute_fields(&model, &state);
            for v in 0..16 {
                prop_assert!((state.local_field(v) - expected[v]).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_energy_matches_field_identity(seed in any::<u64>()) {
            // E = Σ_v (h[v]·s[v] + s[v]·(field[v] − h[v]))/2 + Σ h·s/2,
            // i.e. 2E = Σ_v s[v]·(field[v] + h[v]).
            let model = ring_model(12);
            let mut rng = read_stream(seed, 0);
            let state = SpinState::random(&model, &mut rng);

            let via_fields: f64 = (0..12)
                .map(|v| f64::from(state.spin(v)) * (state.local_field(v) + model.linear(v)))
                .sum::<f64>()
                / 2.0;
            prop_assert!((state.energy(&model) - via_fields).abs() < 1e-9);
        }
    }
}
