//! CSV export, the explorer's download-button analog
//!
//! The browser build hands the CSV blob to the download manager; here the
//! bytes land in a real directory instead.

use crate::config::ExportConfig;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolve where exports go: an explicit flag wins, then the configured
/// directory, then the platform download directory, then the working
/// directory.
pub fn resolve_dir(flag: Option<&Path>, config: &ExportConfig) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if !config.directory.is_empty() {
        return PathBuf::from(&config.directory);
    }
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Write CSV content under `dir`, creating the directory if needed, and
/// return the full path of the written file.
pub fn write_csv(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, content)?;
    info!(path = %path.display(), bytes = content.len(), "exported CSV");
    Ok(path)
}
