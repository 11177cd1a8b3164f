//! Configuration management for repscan

use crate::error::{ExplorerError, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, Default)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChainConfig {
    #[serde(default = "default_network_name")]
    pub network_name: String,
    #[serde(default = "default_token_symbol")]
    pub token_symbol: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Empty means "fall through to the platform download directory".
    #[serde(default)]
    pub directory: String,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            network_name: default_network_name(),
            token_symbol: default_token_symbol(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            color: default_color(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_network_name() -> String {
    "REP Mainnet".to_string()
}

fn default_token_symbol() -> String {
    "REP".to_string()
}

fn default_rows_per_page() -> usize {
    10
}

fn default_color() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    64
}

/// Load `repscan.toml` from the working directory, falling back to defaults
/// when the file is absent. A present but malformed file is an error.
pub fn load_config() -> Result<ExplorerConfig> {
    let config_str = fs::read_to_string("repscan.toml").unwrap_or_default();
    let config: ExplorerConfig = if config_str.is_empty() {
        ExplorerConfig::default()
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    if config.display.rows_per_page == 0 {
        return Err(ExplorerError::Config(
            "display.rows_per_page must be nonzero".to_string(),
        ));
    }
    if config.export.cache_capacity == 0 {
        return Err(ExplorerError::Config(
            "export.cache_capacity must be nonzero".to_string(),
        ));
    }

    Ok(config)
}
