//! Deterministic seeding utilities.
//!
//! Environments own an instance-local [`RngStream`] so that episodes are
//! reproducible per seed and independent across instances; there is no
//! shared global generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The reproducible PRNG stream used across the crate.
pub type RngStream = ChaCha8Rng;

/// Create a new RNG stream from a root seed.
pub fn rng_from_seed(seed: u64) -> RngStream {
    RngStream::seed_from_u64(seed)
}
