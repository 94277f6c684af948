//! # cardinal-rust
//!
//! Query strategies for active learning. Given a pool of candidate samples
//! and the positions already labeled, a query strategy picks which samples
//! to send to the labeling oracle next.
//!
//! The crate currently ships the random-sampling baseline.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardinal_rust::{RandomSampler, SamplerConfigBuilder};
//! use ndarray::Array2;
//!
//! # fn main() -> cardinal_rust::Result<()> {
//! let pool = Array2::<f32>::zeros((10, 4));
//!
//! let config = SamplerConfigBuilder::new().seed(42).build()?;
//! let mut sampler = RandomSampler::new(config)?;
//!
//! let selection = sampler.sample(&pool, Some(&[0, 1]), 3)?;
//! assert_eq!(selection.len(), 3);
//! assert!(!selection.indices().contains(&0));
//!
//! let to_label = selection.select_rows(&pool)?;
//! assert_eq!(to_label.nrows(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Eligibility sizing
//!
//! The reference helper this strategy reproduces sized its eligibility
//! vector by the requested count rather than by the pool. That choice is
//! explicit here through [`EligibilitySizing`]: `PoolLength` (default) lets
//! every pool position be selected, while `RequestCount` reproduces the
//! reference exactly. Labeled indices falling outside the eligibility vector
//! are rejected or ignored according to [`OutOfRangePolicy`].

#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

pub mod config;
pub mod core;
pub mod sampling;

pub use crate::core::{
    constants::*,
    error::{CardinalError, Result},
    traits::{Pool, QueryStrategy},
    types::*,
    utils::log::{init_logging, init_logging_with_level, init_logging_with_verbosity},
};

pub use config::{SamplerConfig, SamplerConfigBuilder};

pub use sampling::{
    checked_instance_count, random_sampling, EligibilityMask, RandomSampler, Selection,
};

pub use crate::core::constants::CARDINAL_RUST_VERSION as VERSION;

/// Initialize the library: installs the `env_logger` backend for the `log`
/// facade, with `RUST_LOG` defaulting to `info`. Safe to call repeatedly.
///
/// ```rust
/// fn main() -> cardinal_rust::Result<()> {
///     cardinal_rust::init()?;
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    crate::core::initialize_core()
}
