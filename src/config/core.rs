//! Sampler configuration structure and builder.
//!
//! [`SamplerConfig`] carries the seed and the two explicit policy decisions
//! (eligibility sizing and out-of-range handling) that govern random
//! sampling. It can be built fluently, read from JSON or TOML files, and
//! overridden from `CARDINAL_*` environment variables.

use crate::core::constants::*;
use crate::core::error::{CardinalError, Result};
use crate::core::types::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Configuration for random-sampling query strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Random seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Length of the eligibility vector
    pub eligibility_sizing: EligibilitySizing,
    /// Handling of labeled indices outside the eligibility vector
    pub out_of_range: OutOfRangePolicy,
    /// Instances requested by `query_default`
    pub default_n_instances: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            seed: None,
            eligibility_sizing: DEFAULT_ELIGIBILITY_SIZING,
            out_of_range: DEFAULT_OUT_OF_RANGE_POLICY,
            default_n_instances: DEFAULT_N_INSTANCES,
        }
    }
}

impl SamplerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(seed) = self.seed {
            if seed > MAX_SEED {
                return Err(CardinalError::invalid_argument(
                    "seed",
                    seed.to_string(),
                    format!("must not exceed {} so it fits a TOML integer", MAX_SEED),
                ));
            }
        }

        if self.default_n_instances == 0 {
            return Err(CardinalError::invalid_argument(
                "default_n_instances",
                "0",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config: SamplerConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| CardinalError::config(format!("Failed to parse TOML config: {}", e)))?,
            _ => {
                return Err(CardinalError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;

        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| CardinalError::config(format!("Failed to serialize to TOML: {}", e)))?,
            _ => {
                return Err(CardinalError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Load configuration from environment variables
    pub fn load_from_environment() -> Result<Self> {
        Self::load_from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment variable overrides to existing configuration.
    ///
    /// Only variables that are actually set replace the current values.
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn load_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SamplerConfig::default();
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_SEED) {
            self.seed = Some(
                val.parse()
                    .map_err(|_| CardinalError::config(format!("Invalid {}", ENV_SEED)))?,
            );
        }

        if let Some(val) = lookup(ENV_ELIGIBILITY_SIZING) {
            self.eligibility_sizing = val.parse().map_err(|e: String| {
                CardinalError::config(format!("Invalid {}: {}", ENV_ELIGIBILITY_SIZING, e))
            })?;
        }

        if let Some(val) = lookup(ENV_OUT_OF_RANGE) {
            self.out_of_range = val.parse().map_err(|e: String| {
                CardinalError::config(format!("Invalid {}: {}", ENV_OUT_OF_RANGE, e))
            })?;
        }

        if let Some(val) = lookup(ENV_N_INSTANCES) {
            self.default_n_instances = val
                .parse()
                .map_err(|_| CardinalError::config(format!("Invalid {}", ENV_N_INSTANCES)))?;
        }

        self.validate()
    }

    /// Render the configuration as string parameters, for logging
    pub fn as_parameter_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        if let Some(seed) = self.seed {
            map.insert("seed".to_string(), seed.to_string());
        }
        map.insert(
            "eligibility_sizing".to_string(),
            self.eligibility_sizing.to_string(),
        );
        map.insert("out_of_range".to_string(), self.out_of_range.to_string());
        map.insert(
            "default_n_instances".to_string(),
            self.default_n_instances.to_string(),
        );

        map
    }
}

/// Configuration builder for fluent configuration creation
#[derive(Debug, Clone)]
pub struct SamplerConfigBuilder {
    config: SamplerConfig,
    validation_errors: Vec<String>,
}

impl SamplerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        SamplerConfigBuilder {
            config: SamplerConfig::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Fix the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the eligibility sizing policy
    pub fn eligibility_sizing(mut self, sizing: EligibilitySizing) -> Self {
        self.config.eligibility_sizing = sizing;
        self
    }

    /// Set the out-of-range policy
    pub fn out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.config.out_of_range = policy;
        self
    }

    /// Set the number of instances requested by `query_default`
    pub fn default_n_instances(mut self, n_instances: usize) -> Self {
        if n_instances == 0 {
            self.validation_errors
                .push("default_n_instances must be at least 1".to_string());
        }
        self.config.default_n_instances = n_instances;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SamplerConfig> {
        if !self.validation_errors.is_empty() {
            return Err(CardinalError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SamplerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
