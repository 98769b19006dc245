//! Configuration management for Fogwatch.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FogwatchConfig {
    pub ranking: RankingConfig,
    pub advisory: AdvisoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum community incidents returned per query
    pub incident_limit: usize,
    /// Maximum safe stops returned per query
    pub safe_stop_limit: usize,
    /// Nearby-place search radius in meters
    pub search_radius_m: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub enabled: bool,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            incident_limit: 12,
            safe_stop_limit: 15,
            search_radius_m: 5000,
        }
    }
}

impl RankingConfig {
    /// Search radius in kilometers, as reported back to callers
    pub fn search_radius_km(&self) -> f64 {
        f64::from(self.search_radius_m) / 1000.0
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 5000,
        }
    }
}

impl AdvisoryConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            default_filter: "info".to_string(),
        }
    }
}

impl FogwatchConfig {
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Reject values the ranker and advisory caller cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.ranking.incident_limit == 0 {
            return Err(CoreError::InvalidConfig(
                "ranking.incident_limit must be greater than 0".to_string(),
            ));
        }
        if self.ranking.safe_stop_limit == 0 {
            return Err(CoreError::InvalidConfig(
                "ranking.safe_stop_limit must be greater than 0".to_string(),
            ));
        }
        if self.ranking.search_radius_m == 0 {
            return Err(CoreError::InvalidConfig(
                "ranking.search_radius_m must be greater than 0".to_string(),
            ));
        }
        if self.advisory.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "advisory.timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
