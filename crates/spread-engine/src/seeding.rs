//! Seed plumbing for collaborators that need randomness.
//!
//! Movement and rewards are deterministic given the actions, so the engine
//! itself never draws from its RNG. The RNG is exposed for extensions such
//! as order-randomized variants or random action sampling.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The engine's RNG type.
pub type EnvRng = ChaCha8Rng;

/// Modulus applied to the derived secondary seed.
pub const SECONDARY_SEED_MODULUS: u64 = 1 << 31;

/// Derive the pair of seeds reported by `seed()`.
///
/// The first is `seed` itself; the second is drawn from an RNG seeded
/// with `seed + 1` and reduced below `2^31`.
pub fn derive_seeds(seed: u64) -> [u64; 2] {
    let mut rng = EnvRng::seed_from_u64(seed.wrapping_add(1));
    [seed, rng.next_u64() % SECONDARY_SEED_MODULUS]
}

/// A freshly seeded engine RNG.
pub fn rng_from_seed(seed: u64) -> EnvRng {
    EnvRng::seed_from_u64(seed)
}
