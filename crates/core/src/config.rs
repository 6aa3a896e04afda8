//! Toolkit configuration via `constrained.toml`
//!
//! A small config file sets the defaults collections are built with: the
//! unranked-element policy for fixed-order rankings and the capacity ceiling
//! for bounded containers. Missing fields fall back to defaults.

use crate::error::CollectionError;
use crate::limits::{Limits, DEFAULT_MAX_CAPACITY};
use crate::policy::UnrankedPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "constrained.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written
    #[error("Failed to access config file '{path}': {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// The config parsed but names an invalid setting
    #[error(transparent)]
    Invalid(#[from] CollectionError),
}

/// Toolkit configuration loaded from `constrained.toml`
///
/// # Example
///
/// ```toml
/// # Unranked-element policy: "before", "after" or "error" (default)
/// unranked_policy = "error"
///
/// # Capacity ceiling for bounded containers
/// # max_capacity = 1000000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsConfig {
    /// Unranked-element policy: `"before"`, `"after"` or `"error"`.
    #[serde(default = "default_unranked_policy_str")]
    pub unranked_policy: String,
    /// Capacity ceiling for bounded containers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<usize>,
}

fn default_unranked_policy_str() -> String {
    UnrankedPolicy::default().as_str().to_string()
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            unranked_policy: default_unranked_policy_str(),
            max_capacity: None,
        }
    }
}

impl CollectionsConfig {
    /// Parse the policy string into an `UnrankedPolicy`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the string names no policy.
    pub fn unranked_policy(&self) -> Result<UnrankedPolicy, CollectionError> {
        self.unranked_policy.parse()
    }

    /// Capacity limits described by this config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `max_capacity` is zero.
    pub fn limits(&self) -> Result<Limits, CollectionError> {
        match self.max_capacity {
            None => Ok(Limits::default()),
            Some(0) => Err(CollectionError::InvalidCapacity {
                capacity: 0,
                max: DEFAULT_MAX_CAPACITY,
            }),
            Some(max_capacity) => Ok(Limits { max_capacity }),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Constrained collections configuration
#
# Unranked-element policy for fixed-order rankings:
#   "before" = unranked elements sort before ranked ones
#   "after"  = unranked elements sort after ranked ones
#   "error"  = comparing an unranked element fails (default)
unranked_policy = "error"

# Capacity ceiling for bounded containers (default: 1000000)
# max_capacity = 1000000
"#
    }

    /// Parse config from TOML text and validate every setting eagerly.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CollectionsConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.unranked_policy()?;
        config.limits()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
