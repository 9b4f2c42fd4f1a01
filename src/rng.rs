//! Per-read PRNG stream derivation.
//!
//! Every read owns a private `Xoshiro256StarStar` whose state is derived
//! deterministically from the run seed and the read index. The derivation is
//! a pure function, so a read produces a bit-identical trajectory no matter
//! how many other reads run alongside it or in what order parallel workers
//! pick them up. Streams are never reseeded mid-run.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Golden-ratio increment used by SplitMix64.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Derives the seed for read `read` from the run seed.
///
/// Two SplitMix64 rounds over `seed ^ read·γ`; consecutive read indices land
/// on uncorrelated seeds even for small or equal inputs.
pub fn mix_seed(seed: u64, read: u64) -> u64 {
    let z = seed ^ read.wrapping_mul(GOLDEN_GAMMA).wrapping_add(GOLDEN_GAMMA);
    splitmix64(splitmix64(z))
}

/// The private generator for one read.
pub fn read_stream(seed: u64, read: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(mix_seed(seed, read))
}
