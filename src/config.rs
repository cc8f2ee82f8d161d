//! Catalog configuration.
use serde::{Deserialize, Serialize};

use crate::error::{NeoError, Result};

/// How catalog construction treats a close approach whose designation
/// matches no known object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkPolicy {
    /// Fail construction with [`NeoError::UnknownDesignation`](crate::NeoError::UnknownDesignation).
    #[default]
    Strict,
    /// Keep the approach unlinked and log a warning.
    Lenient,
}

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub link_policy: LinkPolicy,

    /// Cap applied by callers to result streams; `None` means unlimited.
    #[serde(default)]
    pub default_limit: Option<usize>,
}

impl Config {
    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = policy;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Default limit must be greater than zero");
        if limit > 1_000_000 {
            log::warn!(
                "Default limit of {} is very large; results are usually consumed by a writer.",
                limit
            );
        }
        self.default_limit = Some(limit);
        self
    }

    /// Check settings that serde alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == Some(0) {
            return Err(NeoError::Config(
                "default_limit must be at least 1; leave it unset for unlimited results".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON catalog configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a TOML catalog configuration.
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)
            .map_err(|e| NeoError::Config(format!("unreadable TOML catalog config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            NeoError::Config(format!("catalog config cannot be written as TOML: {}", e))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_policy: LinkPolicy::default(),
            default_limit: None,
        }
    }
}
