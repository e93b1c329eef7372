//! Configuration and data directory paths
//!
//! Uses XDG directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-issue-tui/`, `~/.cache/gh-issue-tui/`
//! - macOS: `~/Library/Application Support/gh-issue-tui/`, `~/Library/Caches/gh-issue-tui/`
//! - Windows: `%APPDATA%\gh-issue-tui\`, `%LOCALAPPDATA%\gh-issue-tui\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-issue-tui";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the path to the tracked repositories file
pub fn tracked_repositories_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("repositories.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_tracked_repositories_path() {
        let path = tracked_repositories_path().unwrap();
        assert!(path.ends_with("repositories.json"));
    }
}
