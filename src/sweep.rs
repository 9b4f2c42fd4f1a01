//! Single-spin-flip Metropolis sweep.

use rand::Rng;

use crate::model::IsingModel;
use crate::state::SpinState;

/// Runs one sweep at inverse temperature `beta`: a flip trial at every
/// variable in fixed index order `0..n`. Returns the number of accepted
/// flips.
///
/// Flipping `v` changes the energy by `ΔE = -2·spin[v]·field[v]`. The flip is
/// accepted when `ΔE ≤ 0`, or when a uniform draw falls below
/// `exp(-beta·ΔE)`. The draw is compared against the exponential (never the
/// other way around): `exp` underflowing to 0 at large `beta·ΔE` then simply
/// always rejects, with no log of zero anywhere.
pub fn sweep<R: Rng>(model: &IsingModel, state: &mut SpinState, beta: f64, rng: &mut R) -> usize {
    let mut accepted = 0;
    for v in 0..model.num_variables() {
        let delta = -2.0 * f64::from(state.spin(v)) * state.local_field(v);

        let accept = if delta <= 0.0 {
            true
        } else {
            rng.random::<f64>() < (-beta * delta).exp()
        };

        if accept {
            state.flip(model, v);
            accepted += 1;
        }
    }
    accepted
}
