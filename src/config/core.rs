//! Split search configuration and its builder.

use crate::core::constants::*;
use crate::core::error::{Result, SplitterError};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Configuration consumed by the [`Splitter`](crate::tree::split::Splitter)
/// and handed through to every per-feature evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Evaluate candidate features on the rayon pool
    pub parallel: bool,
    /// Number of top-ranked features kept after a full scan
    pub num_active_features: usize,
    /// Worker threads for parallel search (0 = global rayon pool)
    pub num_threads: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        SplitterConfig {
            parallel: DEFAULT_PARALLEL,
            num_active_features: DEFAULT_NUM_ACTIVE_FEATURES,
            num_threads: USE_GLOBAL_POOL,
        }
    }
}

impl SplitterConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// `num_active_features == 0` is accepted: a full scan then still
    /// returns its winner but leaves the active set empty. `num_threads` is
    /// ignored while `parallel` is off.
    pub fn validate(&self) -> Result<()> {
        if self.num_threads > MAX_NUM_THREADS {
            return Err(SplitterError::invalid_parameter(
                "num_threads",
                self.num_threads.to_string(),
                format!("must be at most {}", MAX_NUM_THREADS),
            ));
        }

        Ok(())
    }

    /// Number of worker threads a parallel search will use
    pub fn effective_num_threads(&self) -> usize {
        if self.num_threads == USE_GLOBAL_POOL {
            num_cpus::get()
        } else {
            self.num_threads
        }
    }

    /// Whether the search should run inside a dedicated pool
    pub fn uses_dedicated_pool(&self) -> bool {
        self.parallel && self.num_threads != USE_GLOBAL_POOL
    }

    /// Build a configuration from a flat parameter map.
    ///
    /// Unknown keys are ignored. Negative or fractional counts are rejected.
    pub fn from_params(params: &HashMap<String, f64>) -> Result<Self> {
        let mut builder = SplitterConfigBuilder::new();

        for (param, &value) in params {
            match param.as_str() {
                "parallel" => builder = builder.parallel(value != 0.0),
                "num_active_features" => {
                    builder = builder.num_active_features(count_param(param, value)?)
                }
                "num_threads" => builder = builder.num_threads(count_param(param, value)?),
                _ => log::debug!("ignoring unknown splitter parameter '{}'", param),
            }
        }

        builder.build()
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config: SplitterConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                SplitterError::serialization(format!("Failed to parse JSON config: {}", e))
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| {
                SplitterError::serialization(format!("Failed to parse TOML config: {}", e))
            })?,
            _ => {
                return Err(SplitterError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self).map_err(|e| {
                SplitterError::serialization(format!("Failed to serialize to JSON: {}", e))
            })?,
            Some("toml") => toml::to_string_pretty(self).map_err(|e| {
                SplitterError::serialization(format!("Failed to serialize to TOML: {}", e))
            })?,
            _ => {
                return Err(SplitterError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn count_param(name: &str, value: f64) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(SplitterError::invalid_parameter(
            name,
            value.to_string(),
            "must be a non-negative integer",
        ));
    }
    Ok(value as usize)
}

/// Builder that collects validation errors and reports them from `build()`.
#[derive(Debug, Clone, Default)]
pub struct SplitterConfigBuilder {
    config: SplitterConfig,
    validation_errors: Vec<String>,
}

impl SplitterConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        SplitterConfigBuilder {
            config: SplitterConfig::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Enable or disable parallel feature evaluation
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set the size of the active feature subset
    pub fn num_active_features(mut self, num_active_features: usize) -> Self {
        self.config.num_active_features = num_active_features;
        self
    }

    /// Set the number of worker threads (0 = global pool)
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        if num_threads > MAX_NUM_THREADS {
            self.validation_errors.push(format!(
                "num_threads must be at most {}, got {}",
                MAX_NUM_THREADS, num_threads
            ));
        }
        self.config.num_threads = num_threads;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SplitterConfig> {
        if !self.validation_errors.is_empty() {
            return Err(SplitterError::config(self.validation_errors.join("; ")));
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
