//! Thin GitHub API client for the issue browser
//!
//! This crate covers exactly two read-only endpoints:
//!
//! - `GET /repos/{owner}/{repo}` — repository metadata
//! - `GET /repos/{owner}/{repo}/issues` — one page of issues, filtered by state
//!
//! The `GitHubClient` trait keeps the application decoupled from octocrab so
//! tests can substitute stub implementations. There is no caching, no retry
//! and no mutation support; every call goes straight to the API.

pub mod client;
pub mod octocrab_client;
pub mod types;

/// Number of issues requested per page. Every issue fetch uses this value.
pub const ISSUES_PER_PAGE: u8 = 5;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use types::{Issue, IssueFilter, Label, Repository};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
