//! Configuration loading and management for the salary engine.
//!
//! This module loads the engine's display defaults and classification
//! thresholds from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use wagelift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/wagelift").unwrap();
//! println!("Default currency: {}", config.engine().default_currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, PolicyConfig};
