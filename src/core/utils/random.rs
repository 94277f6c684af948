//! Seedable random generator wrapper used by the samplers.

use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

/// A wrapper for the random generator owned by a sampler.
///
/// Each sampler holds its own instance, so there is no process-wide generator
/// state to synchronize between callers.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
    seed: Option<u64>,
}

impl Random {
    /// Constructor, with random seed
    pub fn new() -> Self {
        Random {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Constructor, with specific seed
    pub fn with_seed(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Build from an optional seed; `None` draws from entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Restart the sequence. Seeded generators replay from the beginning,
    /// unseeded ones are refreshed from entropy.
    pub fn reset(&mut self) {
        *self = Self::from_optional_seed(self.seed);
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_random_with_seed() {
        let mut rng1 = Random::with_seed(123456789);
        let mut rng2 = Random::with_seed(123456789);

        // Same seed should produce same results
        assert_eq!(rng1.gen_range(0..100), rng2.gen_range(0..100));
        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        use rand::seq::SliceRandom;

        let mut rng = Random::with_seed(42);
        let mut values: Vec<usize> = (0..50).collect();
        values.shuffle(&mut rng);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_reset_replays_sequence() {
        let mut rng = Random::with_seed(7);
        let first: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        rng.reset();
        let second: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded() {
        let mut rng = Random::from_optional_seed(None);
        assert_eq!(rng.seed, None);
        rng.reset();
        assert_eq!(rng.seed, None);
    }
}
