//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! - Linux: `~/.config/goalboard/`, `~/.cache/goalboard/`
//! - macOS: `~/Library/Application Support/goalboard/`, `~/Library/Caches/goalboard/`
//! - Windows: `%APPDATA%\goalboard\`, `%LOCALAPPDATA%\goalboard\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "goalboard";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}
