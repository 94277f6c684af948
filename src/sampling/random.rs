//! Random-sampling query strategy.
//!
//! Picks pool positions uniformly at random, skipping positions that are
//! already labeled. This is the naive baseline other query strategies are
//! measured against.

use crate::config::SamplerConfig;
use crate::core::constants::MAX_SEED;
use crate::core::error::{CardinalError, Result};
use crate::core::traits::{Pool, QueryStrategy};
use crate::core::types::*;
use crate::core::utils::random::Random;
use crate::sampling::eligibility::EligibilityMask;
use crate::sampling::selection::Selection;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

/// Convert a signed instance count into a `usize`, rejecting negatives.
pub fn checked_instance_count(n_instances: i64) -> Result<usize> {
    if n_instances < 0 {
        return Err(CardinalError::invalid_argument(
            "n_instances",
            n_instances.to_string(),
            "must be non-negative",
        ));
    }
    usize::try_from(n_instances).map_err(|_| {
        CardinalError::invalid_argument(
            "n_instances",
            n_instances.to_string(),
            "does not fit in the platform index type",
        )
    })
}

/// Select up to `n_instances` unlabeled positions of `pool` uniformly at
/// random, drawing from a caller-supplied generator.
///
/// The eligibility vector is sized according to `config.eligibility_sizing`
/// and labeled entries outside it are handled per `config.out_of_range`.
/// Returns fewer than `n_instances` positions when not enough are eligible.
///
/// # Errors
///
/// [`CardinalError::InvalidArgument`] when a labeled index is out of range
/// under [`OutOfRangePolicy::Reject`], or when `n_instances` exceeds the pool
/// under [`EligibilitySizing::RequestCount`]. No randomness is consumed on
/// error.
pub fn random_sampling<P, R>(
    rng: &mut R,
    pool: &P,
    labeled: Option<&[SampleIndex]>,
    n_instances: usize,
    config: &SamplerConfig,
) -> Result<Selection>
where
    P: Pool + ?Sized,
    R: Rng + ?Sized,
{
    if n_instances == 0 {
        debug!("random sampling asked for 0 instances, returning empty selection");
        return Ok(Selection::empty());
    }

    let pool_len = pool.pool_len();
    let mask_len = match config.eligibility_sizing {
        EligibilitySizing::PoolLength => pool_len,
        EligibilitySizing::RequestCount => {
            if n_instances > pool_len {
                return Err(CardinalError::invalid_argument(
                    "n_instances",
                    n_instances.to_string(),
                    format!(
                        "exceeds the pool length {} under request-count sizing",
                        pool_len
                    ),
                ));
            }
            n_instances
        }
    };

    let mut mask = EligibilityMask::new(mask_len);
    if let Some(labeled) = labeled {
        mask.mark_labeled(labeled, config.out_of_range)?;
    }

    let mut candidates = mask.candidates();
    candidates.shuffle(rng);
    candidates.truncate(n_instances);

    let indicators: Vec<bool> = candidates
        .iter()
        .map(|&index| mask.is_eligible(index))
        .collect();

    debug!(
        "random sampling selected {} of {} eligible positions (pool {}, sizing {})",
        candidates.len(),
        mask.num_eligible(),
        pool_len,
        config.eligibility_sizing
    );
    trace!("selected indices: {:?}", candidates);

    Selection::new(candidates, indicators)
}

/// Random-sampling query strategy owning its own seeded generator.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    config: SamplerConfig,
    random: Random,
}

impl RandomSampler {
    /// Create a sampler from a validated configuration.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        let random = Random::from_optional_seed(config.seed);
        Ok(RandomSampler { config, random })
    }

    /// Create a sampler with default policies and a fixed seed.
    ///
    /// Any `u64` seeds the generator; only seeds up to [`MAX_SEED`] survive
    /// `SamplerConfig::save_to_file`.
    pub fn with_seed(seed: u64) -> Self {
        let config = SamplerConfig {
            seed: Some(seed),
            ..SamplerConfig::default()
        };
        RandomSampler {
            random: Random::with_seed(seed),
            config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Select up to `n_instances` unlabeled positions of `pool`.
    pub fn sample<P: Pool + ?Sized>(
        &mut self,
        pool: &P,
        labeled: Option<&[SampleIndex]>,
        n_instances: usize,
    ) -> Result<Selection> {
        random_sampling(&mut self.random, pool, labeled, n_instances, &self.config)
    }

    /// Like [`sample`](Self::sample), requesting `config.default_n_instances`.
    pub fn query_default<P: Pool + ?Sized>(
        &mut self,
        pool: &P,
        labeled: Option<&[SampleIndex]>,
    ) -> Result<Selection> {
        let n_instances = self.config.default_n_instances;
        self.sample(pool, labeled, n_instances)
    }

    /// Replace the generator with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.random = Random::with_seed(seed);
    }

    /// Restart the generator sequence.
    pub fn reset(&mut self) {
        self.random.reset();
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        RandomSampler {
            config: SamplerConfig::default(),
            random: Random::new(),
        }
    }
}

impl QueryStrategy for RandomSampler {
    fn name(&self) -> &'static str {
        "random"
    }

    fn query(
        &mut self,
        pool_len: usize,
        labeled: Option<&[SampleIndex]>,
        n_instances: usize,
    ) -> Result<Selection> {
        self.sample(&PoolSize(pool_len), labeled, n_instances)
    }
}
