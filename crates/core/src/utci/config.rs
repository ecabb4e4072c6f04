//! Execution settings for batch evaluation
//!
//! The settings only choose how elements are scheduled. Every mode produces
//! bit-identical output because each element is computed independently.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// How a batch is spread across threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single thread, element by element
    Sequential,
    /// Rayon work stealing over fixed-size chunks
    #[default]
    Parallel,
}

/// Batch evaluation settings
///
/// Loaded from JSON; missing keys take their defaults:
///
/// ```
/// use utci_core::{EvaluatorConfig, ExecutionMode};
///
/// let cfg = EvaluatorConfig::from_json_str(r#"{ "mode": "sequential" }"#).unwrap();
/// assert_eq!(cfg.mode, ExecutionMode::Sequential);
/// assert_eq!(cfg.chunk_size, 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Scheduling strategy
    pub mode: ExecutionMode,
    /// Smallest batch (in elements) that is evaluated in parallel
    pub parallel_threshold: usize,
    /// Elements per parallel work item; must be non-zero
    pub chunk_size: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Parallel,
            parallel_threshold: 4096,
            chunk_size: 1024,
        }
    }
}

impl EvaluatorConfig {
    /// Single-threaded preset
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// Whether a batch of `len` elements is evaluated in parallel
    #[must_use]
    pub fn runs_parallel(&self, len: usize) -> bool {
        self.mode == ExecutionMode::Parallel && len >= self.parallel_threshold
    }

    /// Check that the settings are usable
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if `chunk_size` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            warn!("Rejecting evaluator config: chunk_size must be non-zero");
            return Err(ConfigError::Invalid(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    /// Returns error if the JSON cannot be parsed or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a JSON configuration file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed, or fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        let cfg = Self::from_json_str(&contents)?;
        info!(
            "Loaded evaluator config from {}: mode={:?}, parallel_threshold={}, chunk_size={}",
            path.display(),
            cfg.mode,
            cfg.parallel_threshold,
            cfg.chunk_size
        );
        Ok(cfg)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }
}
