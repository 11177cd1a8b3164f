//! Error types for repscan

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown time range '{0}' (expected 1d, 7d, 30d, 90d, 180d, 360d or 1y)")]
    InvalidTimeRange(String),

    #[error("The {chart} chart has no {range} series")]
    RangeNotOffered { chart: &'static str, range: String },

    #[error("Rows per page must be one of {options:?}, got {got}")]
    InvalidRowsPerPage {
        got: usize,
        options: &'static [usize],
    },

    #[error("Unknown tab '{0}' (expected Performance, Staked, Rewards, Jobs History, Blocks Mined, Slashing or Benchmarks)")]
    UnknownTab(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ExplorerError>;
