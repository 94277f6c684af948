//! Constants and configuration defaults for cardinal-rust.

use crate::core::types::*;

/// Default number of instances queried when the caller does not say.
pub const DEFAULT_N_INSTANCES: usize = 1;

/// Default eligibility sizing policy.
pub const DEFAULT_ELIGIBILITY_SIZING: EligibilitySizing = EligibilitySizing::PoolLength;

/// Default handling of labeled indices outside the eligibility vector.
pub const DEFAULT_OUT_OF_RANGE_POLICY: OutOfRangePolicy = OutOfRangePolicy::Reject;

/// Largest accepted seed. TOML integers are signed 64-bit.
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Environment variable overriding the sampler seed.
pub const ENV_SEED: &str = "CARDINAL_SEED";

/// Environment variable overriding the eligibility sizing policy.
pub const ENV_ELIGIBILITY_SIZING: &str = "CARDINAL_ELIGIBILITY_SIZING";

/// Environment variable overriding the out-of-range policy.
pub const ENV_OUT_OF_RANGE: &str = "CARDINAL_OUT_OF_RANGE";

/// Environment variable overriding the default number of queried instances.
pub const ENV_N_INSTANCES: &str = "CARDINAL_N_INSTANCES";

/// Library version string.
pub const CARDINAL_RUST_VERSION: &str = env!("CARGO_PKG_VERSION");
