//! Tracked repository list persistence
//!
//! The list is an ordered JSON array of `{"name": "owner/repo"}` objects.
//! It is loaded once at startup and rewritten whenever the list changes.

use crate::paths::tracked_repositories_path;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A repository the user has chosen to follow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedRepository {
    /// Full "owner/repo" identifier
    pub name: String,
}

impl TrackedRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Load the tracked repository list from the config file
///
/// Returns an empty list if the file doesn't exist or can't be parsed;
/// a broken file never prevents startup.
pub fn load_tracked_repositories() -> Vec<TrackedRepository> {
    match tracked_repositories_path() {
        Ok(path) => load_tracked_repositories_from(&path),
        Err(e) => {
            log::warn!("Could not resolve tracked repositories path: {}", e);
            Vec::new()
        }
    }
}

/// Load the tracked repository list from an explicit file
pub fn load_tracked_repositories_from(path: &Path) -> Vec<TrackedRepository> {
    match File::open(path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(repos) => {
                    log::info!("Loaded tracked repositories from {}", path.display());
                    repos
                }
                Err(e) => {
                    log::warn!("Failed to parse tracked repositories file: {}", e);
                    Vec::new()
                }
            }
        }
        Err(_) => {
            log::debug!("No tracked repositories file found, starting fresh");
            Vec::new()
        }
    }
}

/// Save the tracked repository list to an explicit file
pub fn save_tracked_repositories_to(path: &Path, repos: &[TrackedRepository]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, repos)?;
    log::info!(
        "Saved {} tracked repositories to {}",
        repos.len(),
        path.display()
    );
    Ok(())
}
