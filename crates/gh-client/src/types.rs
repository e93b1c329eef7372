//! GitHub API data transfer objects
//!
//! These types mirror what the two endpoints return. They are intentionally
//! separate from application state so this crate stays pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository metadata from `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Full identifier, e.g. "rust-lang/rust"
    pub full_name: String,

    /// Repository name without the owner part
    pub name: String,

    /// Repository description, if the owner set one
    pub description: Option<String>,

    /// Owner's GitHub username
    pub owner_login: String,

    /// Owner's avatar URL
    pub owner_avatar_url: String,

    /// Repository URL for opening in a browser
    pub html_url: String,
}

/// A single issue from the issue list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Globally unique issue id (not the per-repo number)
    pub id: u64,

    /// Per-repository issue number (e.g. #123)
    pub number: u64,

    /// Issue title
    pub title: String,

    /// Issue URL for opening in a browser
    pub html_url: String,

    /// Reporter's GitHub username
    pub author_login: String,

    /// Reporter's avatar URL
    pub author_avatar_url: String,

    /// Labels attached to the issue
    pub labels: Vec<Label>,

    /// When the issue was opened
    pub created_at: DateTime<Utc>,
}

/// An issue label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
}

/// Server-side issue state filter
///
/// The fixed ordered set the UI selects from by index; the order is part of
/// the screen contract (filter index 0 is the default on mount).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl IssueFilter {
    /// All filters in selection order
    pub const ALL: [IssueFilter; 3] = [IssueFilter::All, IssueFilter::Open, IssueFilter::Closed];

    /// The `state` query parameter value for this filter
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueFilter::All => "all",
            IssueFilter::Open => "open",
            IssueFilter::Closed => "closed",
        }
    }

    /// Filter at the given selection index, clamped to the valid range
    pub fn from_index(index: usize) -> IssueFilter {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Selection index of this filter
    pub fn index(&self) -> usize {
        match self {
            IssueFilter::All => 0,
            IssueFilter::Open => 1,
            IssueFilter::Closed => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_order() {
        let states: Vec<&str> = IssueFilter::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(states, vec!["all", "open", "closed"]);
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(IssueFilter::default(), IssueFilter::All);
        assert_eq!(IssueFilter::default().index(), 0);
    }

    #[test]
    fn test_filter_index_round_trip() {
        for (i, filter) in IssueFilter::ALL.iter().enumerate() {
            assert_eq!(filter.index(), i);
            assert_eq!(IssueFilter::from_index(i), *filter);
        }
    }

    #[test]
    fn test_filter_from_index_clamps() {
        assert_eq!(IssueFilter::from_index(99), IssueFilter::Closed);
    }

    #[test]
    fn test_issue_serde() {
        let issue = Issue {
            id: 1,
            number: 42,
            title: "Broken build".to_string(),
            html_url: "https://github.com/octocat/Hello-World/issues/42".to_string(),
            author_login: "octocat".to_string(),
            author_avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
            labels: vec![Label {
                id: 7,
                name: "bug".to_string(),
            }],
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&issue).unwrap();
        let parsed: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.number, 42);
        assert_eq!(parsed.labels, issue.labels);
    }
}
