use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

/// Get a random number generator seeded for reproducibility.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a fresh seed from OS entropy.
/// This is the only non-deterministic input of maze generation; the result is meant
/// to be passed to [`seeded_rng`] and recorded.
pub fn entropy_seed() -> u64 {
    StdRng::from_os_rng().random()
}
