//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::{JustificationPolicy, MarketThresholds};
use crate::format::{DEFAULT_CURRENCY, DEFAULT_PERCENTAGE_DECIMALS};

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_percentage_decimals() -> u32 {
    DEFAULT_PERCENTAGE_DECIMALS
}

/// Identifying information and display defaults from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Deployment name.
    pub name: String,
    /// Configuration version.
    pub version: String,
    /// Currency used when a request does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Decimal places for displayed percentages.
    #[serde(default = "default_percentage_decimals")]
    pub percentage_decimals: u32,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            name: "WageLift".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            default_currency: default_currency(),
            percentage_decimals: default_percentage_decimals(),
        }
    }
}

/// Classification and justification rules from `policy.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    /// Market position thresholds.
    #[serde(default)]
    pub market_position: MarketThresholds,
    /// Justification clause rules.
    #[serde(default)]
    pub justification: JustificationPolicy,
}

/// The complete engine configuration.
///
/// `EngineConfig::default()` carries the documented policy (25th/75th
/// market thresholds, 50th percentile median cut-off, three achievements,
/// USD, one decimal place) and is what the configuration files ship with.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    policy: PolicyConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, policy: PolicyConfig) -> Self {
        Self { metadata, policy }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the market position thresholds.
    pub fn market_thresholds(&self) -> &MarketThresholds {
        &self.policy.market_position
    }

    /// Returns the justification policy.
    pub fn justification_policy(&self) -> &JustificationPolicy {
        &self.policy.justification
    }
}
