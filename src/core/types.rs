//! Core data types for cardinal-rust.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 0-based position of a sample inside a pool.
pub type SampleIndex = usize;

/// Number of samples held by a pool, usable directly as a [`Pool`](crate::core::traits::Pool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolSize(pub usize);

/// How long the eligibility vector is.
///
/// The reference random-sampling helper sized its eligibility vector by the
/// requested count rather than by the pool, so labeled positions at or past
/// `n_instances` could not be excluded. Both behaviors are available and the
/// choice is always explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilitySizing {
    /// One entry per pool sample; every pool position can be selected.
    #[default]
    PoolLength,
    /// One entry per requested instance, reproducing the reference helper.
    /// Only positions `< n_instances` are ever candidates.
    RequestCount,
}

impl fmt::Display for EligibilitySizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EligibilitySizing::PoolLength => write!(f, "pool_length"),
            EligibilitySizing::RequestCount => write!(f, "request_count"),
        }
    }
}

impl FromStr for EligibilitySizing {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pool_length" | "pool" => Ok(EligibilitySizing::PoolLength),
            "request_count" | "request" => Ok(EligibilitySizing::RequestCount),
            other => Err(format!("unknown eligibility sizing '{}'", other)),
        }
    }
}

/// What to do with a labeled index that falls outside the eligibility vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Fail the call with an invalid argument error.
    #[default]
    Reject,
    /// Skip the entry and log a warning.
    Ignore,
}

impl fmt::Display for OutOfRangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRangePolicy::Reject => write!(f, "reject"),
            OutOfRangePolicy::Ignore => write!(f, "ignore"),
        }
    }
}

impl FromStr for OutOfRangePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(OutOfRangePolicy::Reject),
            "ignore" => Ok(OutOfRangePolicy::Ignore),
            other => Err(format!("unknown out-of-range policy '{}'", other)),
        }
    }
}
