//! Random generator setup.
//!
//! The benchmark seeds one generator at startup and passes it down by
//! `&mut`; nothing in the crate reaches for a global rng.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;

/// Seed used by tests that need reproducible matrices.
pub const DEFAULT_SEED_FOR_TESTS: u64 = 42;

/// The generator the benchmark fills matrices from.
pub type StandardRng = rand::rngs::StdRng;

pub fn create_rnd_from_seed(seed: u64) -> StandardRng {
    StandardRng::seed_from_u64(seed)
}

/// Seed from the wall clock, in whole seconds. Returns the seed as well so
/// the caller can log it.
///
/// A clock set before the Unix epoch yields seed 0.
pub fn create_rnd_from_time() -> (StandardRng, u64) {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    (create_rnd_from_seed(seed), seed)
}

pub fn create_rnd_in_tests() -> StandardRng {
    create_rnd_from_seed(DEFAULT_SEED_FOR_TESTS)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = create_rnd_in_tests();
        let mut b = create_rnd_from_seed(DEFAULT_SEED_FOR_TESTS);
        for _ in 0..16 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }
}
