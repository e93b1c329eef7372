//! GitHub client trait
//!
//! Defines the interface the application uses to talk to GitHub. The direct
//! implementation lives in [`crate::octocrab_client`]; tests substitute stubs.

use crate::types::{Issue, IssueFilter, Repository};
use async_trait::async_trait;

/// Read-only GitHub API client
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch repository metadata
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// Repository metadata, or an error for a missing repository or a
    /// network failure. The two are not distinguished.
    async fn fetch_repository(&self, owner: &str, repo: &str) -> anyhow::Result<Repository>;

    /// Fetch one page of issues
    ///
    /// Requests exactly [`crate::ISSUES_PER_PAGE`] items with the given
    /// state filter. Each call fully replaces whatever the caller held
    /// before; there is no merging across pages.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `filter` - Server-side issue state filter
    /// * `page` - 1-based page number
    async fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        filter: IssueFilter,
        page: u32,
    ) -> anyhow::Result<Vec<Issue>>;
}
