//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait. Makes real API calls,
//! one HTTP request per trait call, with no caching.

use crate::client::GitHubClient;
use crate::types::{Issue, IssueFilter, Label, Repository};
use crate::ISSUES_PER_PAGE;
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client against public github.com
    ///
    /// Anonymous by default; picks up `GITHUB_TOKEN`/`GH_TOKEN` when present
    /// so the unauthenticated rate limit can be avoided.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder();
        if let Ok(token) = std::env::var("GITHUB_TOKEN").or_else(|_| std::env::var("GH_TOKEN")) {
            debug!("Using token from GITHUB_TOKEN/GH_TOKEN");
            builder = builder.personal_token(token);
        }
        let octocrab = builder.build().context("Failed to build GitHub client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_repository(&self, owner: &str, repo: &str) -> anyhow::Result<Repository> {
        debug!("Fetching repository {}/{}", owner, repo);

        let repository = self
            .octocrab
            .repos(owner, repo)
            .get()
            .await
            .with_context(|| format!("Failed to fetch repository {}/{}", owner, repo))?;

        let full_name = repository
            .full_name
            .unwrap_or_else(|| format!("{}/{}", owner, repo));
        let (owner_login, owner_avatar_url) = repository
            .owner
            .map(|o| (o.login, o.avatar_url.to_string()))
            .unwrap_or_else(|| (owner.to_string(), String::new()));

        Ok(Repository {
            full_name,
            name: repository.name,
            description: repository.description,
            owner_login,
            owner_avatar_url,
            html_url: repository
                .html_url
                .map(|u| u.to_string())
                .unwrap_or_default(),
        })
    }

    async fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        filter: IssueFilter,
        page: u32,
    ) -> anyhow::Result<Vec<Issue>> {
        debug!(
            "Fetching issues for {}/{} (state={}, page={})",
            owner,
            repo,
            filter.as_str(),
            page
        );

        let state = match filter {
            IssueFilter::All => octocrab::params::State::All,
            IssueFilter::Open => octocrab::params::State::Open,
            IssueFilter::Closed => octocrab::params::State::Closed,
        };

        let issues = self
            .octocrab
            .issues(owner, repo)
            .list()
            .state(state)
            .per_page(ISSUES_PER_PAGE)
            .page(page)
            .send()
            .await
            .with_context(|| format!("Failed to fetch issues for {}/{}", owner, repo))?;

        let issues: Vec<Issue> = issues.items.iter().map(convert_issue).collect();

        debug!("Fetched {} issues for {}/{}", issues.len(), owner, repo);
        Ok(issues)
    }
}

fn convert_issue(issue: &octocrab::models::issues::Issue) -> Issue {
    Issue {
        id: issue.id.0,
        number: issue.number,
        title: issue.title.clone(),
        html_url: issue.html_url.to_string(),
        author_login: issue.user.login.clone(),
        author_avatar_url: issue.user.avatar_url.to_string(),
        labels: issue
            .labels
            .iter()
            .map(|label| Label {
                id: label.id.0,
                name: label.name.clone(),
            })
            .collect(),
        created_at: issue.created_at,
    }
}
