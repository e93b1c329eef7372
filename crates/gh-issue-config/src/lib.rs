//! Persistence for gh-issue-tui
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - The tracked repository list: one JSON file, read once at startup,
//!   rewritten on every mutation of the list

pub mod paths;
pub mod tracked_repositories;

pub use paths::{cache_dir, config_dir, tracked_repositories_path};
pub use tracked_repositories::{
    load_tracked_repositories, load_tracked_repositories_from, save_tracked_repositories_to,
    TrackedRepository,
};
