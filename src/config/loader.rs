//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::{JustificationPolicy, MarketThresholds};
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, PolicyConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/wagelift/
/// ├── engine.yaml   # Name, version and display defaults
/// └── policy.yaml   # Market position and justification thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use wagelift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/wagelift")?;
/// println!("Loaded {} {}", loader.engine().name, loader.engine().version);
/// # Ok::<(), wagelift_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if either file is missing.
    /// - [`EngineError::ConfigParseError`] if a file is not valid YAML, a
    ///   required field is missing, or the market thresholds are inverted.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let metadata = Self::load_yaml::<EngineMetadata>(&engine_path)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Self::check_thresholds(&policy.market_position, &policy_path)?;

        debug!(
            name = %metadata.name,
            version = %metadata.version,
            below_market_under = %policy.market_position.below_market_under,
            above_market_over = %policy.market_position.above_market_over,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_thresholds(thresholds: &MarketThresholds, path: &Path) -> EngineResult<()> {
        if thresholds.below_market_under > thresholds.above_market_over {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "below_market_under ({}) must not exceed above_market_over ({})",
                    thresholds.below_market_under, thresholds.above_market_over
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the configured market position thresholds.
    pub fn market_thresholds(&self) -> &MarketThresholds {
        self.config.market_thresholds()
    }

    /// Returns the configured justification policy.
    pub fn justification_policy(&self) -> &JustificationPolicy {
        self.config.justification_policy()
    }

    /// Resolves the currency for a request, falling back to the configured default.
    pub fn currency_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(self.engine().default_currency.as_str())
    }
}
