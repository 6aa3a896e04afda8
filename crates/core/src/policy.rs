//! Unranked-element policy for fixed-order rankings
//!
//! Decides how a ranking compares an element that was never registered.
//! The policy has a textual form (`"before"`, `"after"`, `"error"`) used by
//! configuration files and a numeric form (`0`, `1`, `2`) kept for callers
//! that store it as a flag.

use crate::error::CollectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How unranked elements are ordered relative to ranked ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrankedPolicy {
    /// Unranked elements sort before every ranked element
    Before,
    /// Unranked elements sort after every ranked element
    After,
    /// Comparing an unranked element fails with `UnknownElement`
    #[default]
    Error,
}

impl UnrankedPolicy {
    /// Canonical textual form
    pub fn as_str(&self) -> &'static str {
        match self {
            UnrankedPolicy::Before => "before",
            UnrankedPolicy::After => "after",
            UnrankedPolicy::Error => "error",
        }
    }

    /// Numeric flag form
    pub fn as_u8(&self) -> u8 {
        match self {
            UnrankedPolicy::Before => 0,
            UnrankedPolicy::After => 1,
            UnrankedPolicy::Error => 2,
        }
    }
}

impl fmt::Display for UnrankedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnrankedPolicy {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "before" => Ok(UnrankedPolicy::Before),
            "after" => Ok(UnrankedPolicy::After),
            "error" => Ok(UnrankedPolicy::Error),
            _ => Err(CollectionError::InvalidPolicy(s.to_string())),
        }
    }
}

impl TryFrom<u8> for UnrankedPolicy {
    type Error = CollectionError;

    fn try_from(value: u8) -> Result<Self, CollectionError> {
        match value {
            0 => Ok(UnrankedPolicy::Before),
            1 => Ok(UnrankedPolicy::After),
            2 => Ok(UnrankedPolicy::Error),
            other => Err(CollectionError::InvalidPolicy(other.to_string())),
        }
    }
}
