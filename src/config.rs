//! Configuration management for the circulation system

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Path to the startup inventory CSV
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix CIRCULIB_)
            .add_source(
                Environment::with_prefix("CIRCULIB")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override inventory path from INVENTORY_PATH env var if present
            .set_override_option("inventory.path", env::var("INVENTORY_PATH").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: "data/inventory.csv".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
