//! # Configuration
//!
//! TOML configuration for the registry service, loaded once at startup.
//!
//! - [`RegistryConfig`] - where the slot database lives and its size ceiling
//! - [`CommandsConfig`] - the chat trigger character
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ```toml
//! [registry]
//! data_dir = "./data/registry"
//! max_value_bytes = 32767
//!
//! [commands]
//! prefix = "+"
//!
//! [logging]
//! level = "info"
//! file = "playerdb.log"
//! ```
//!
//! ```rust,no_run
//! use playerdb::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Registry data: {}", config.registry.data_dir);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::commands::CommandParser;
use crate::registry::properties::DEFAULT_MAX_VALUE_BYTES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub data_dir: String,
    /// Largest encoded slot value accepted before writes are refused.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,
}

fn default_max_value_bytes() -> usize {
    DEFAULT_MAX_VALUE_BYTES
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommandsConfig {
    /// Chat trigger. One of "+", "!", "^", "$", "/", ">"; defaults to "+".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl CommandsConfig {
    pub fn parser(&self) -> CommandParser {
        CommandParser::new_with_prefix(self.prefix.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Configured level as a filter; unknown strings fall back to info.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub registry: RegistryConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.registry.data_dir.trim().is_empty() {
            return Err(anyhow!("registry.data_dir must not be empty"));
        }
        if self.registry.max_value_bytes == 0 {
            return Err(anyhow!("registry.max_value_bytes must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registry: RegistryConfig {
                data_dir: "./data/registry".to_string(),
                max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
            },
            commands: CommandsConfig {
                prefix: Some("+".to_string()),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("playerdb.log".to_string()),
            },
        }
    }
}
