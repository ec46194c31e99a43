use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::models::AssistantMode;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenieConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json_format: bool,
}

/// Artificial delays applied before simulated operations complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_chat_base")]
    pub chat_base_ms: u64,

    #[serde(default = "default_chat_jitter")]
    pub chat_jitter_ms: u64,

    #[serde(default = "default_deploy")]
    pub deploy_ms: u64,

    #[serde(default = "default_contract")]
    pub contract_ms: u64,

    #[serde(default = "default_scan")]
    pub scan_ms: u64,

    #[serde(default = "default_docs")]
    pub docs_ms: u64,

    #[serde(default = "default_gas")]
    pub gas_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub default_mode: AssistantMode,

    #[serde(default = "default_true")]
    pub welcome_on_start: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_chat_base() -> u64 {
    800
}

fn default_chat_jitter() -> u64 {
    1500
}

fn default_deploy() -> u64 {
    1500
}

fn default_contract() -> u64 {
    2000
}

fn default_scan() -> u64 {
    2500
}

fn default_docs() -> u64 {
    1800
}

fn default_gas() -> u64 {
    2000
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chat_base_ms: default_chat_base(),
            chat_jitter_ms: default_chat_jitter(),
            deploy_ms: default_deploy(),
            contract_ms: default_contract(),
            scan_ms: default_scan(),
            docs_ms: default_docs(),
            gas_ms: default_gas(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_mode: AssistantMode::default(),
            welcome_on_start: true,
        }
    }
}

impl GenieConfig {
    pub fn load() -> Result<Self, ConfigLoadError> {
        Self::load_from_paths(get_config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<Self, ConfigLoadError> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("GENIE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut genie_config: GenieConfig = config.try_deserialize()?;

        if let Ok(level) = std::env::var("GENIE_LOG_LEVEL") {
            genie_config.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            genie_config.logging.level = level;
        }

        genie_config.validate()?;

        Ok(genie_config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level_lower = self.logging.level.to_lowercase();
        if !valid_levels.contains(&level_lower.as_str()) && !level_lower.contains('=') {
            return Err(ConfigLoadError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Must be one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Same configuration with every simulated delay switched off.
    pub fn instant(mut self) -> Self {
        self.latency.enabled = false;
        self
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config").join("default.toml"));
        paths.push(cwd.join("config").join("local.toml"));
        paths.push(cwd.join("genie.toml"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
        paths.push(cwd.join(".env.local"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join(".env"));
    }

    for path in paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("genie"))
}
