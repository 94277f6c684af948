//! Logging setup and the random generator wrapper.

/// Logging setup utilities
pub mod log;
/// Seedable random generator wrapper
pub mod random;
