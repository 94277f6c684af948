//! Query strategies for active learning.
//!
//! A query strategy decides which pool samples should be sent to the
//! labeling oracle next. [`RandomSampler`] is the uniform baseline.

pub mod eligibility;
pub mod random;
pub mod selection;

pub use eligibility::EligibilityMask;
pub use random::{checked_instance_count, random_sampling, RandomSampler};
pub use selection::Selection;
