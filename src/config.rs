//! Reduction configuration
//!
//! Controls the guard rails of the positive-zero resolver. Every field has a
//! default, so an empty JSON object is a valid config file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReduceError, Result};

/// Default minimum cap on resolver iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 256;

/// What to do when no cancellation rule matches a pole/zero pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedPolicy {
    /// Discard the zero and leave gain and poles alone (biases the gain)
    #[default]
    DropZero,
    /// Fail the reduction
    Reject,
}

/// Settings for model reduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Minimum resolver iteration cap; the resolver always allows one
    /// iteration per positive zero of its input
    pub max_iterations: usize,
    /// Handling of pole/zero pairs that match no cancellation rule
    pub unclassified: UnclassifiedPolicy,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            unclassified: UnclassifiedPolicy::DropZero,
        }
    }
}

impl ReductionConfig {
    /// Parse and validate a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReduceError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ReduceError::InvalidConfig {
                reason: "max_iterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
