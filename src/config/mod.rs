//! Configuration management for cardinal-rust.

pub mod core;

pub use self::core::{SamplerConfig, SamplerConfigBuilder};

/// Conventional name of a sampler configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "cardinal.toml";
