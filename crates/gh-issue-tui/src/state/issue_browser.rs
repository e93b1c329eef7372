//! Issue browser screen state

use gh_client::{Issue, IssueFilter, Repository};

/// State for the issue browser screen
///
/// `expected_seq` tracks the most recently started fetch; only a result
/// stamped with that sequence number may update `issues`. This is what keeps
/// rapid filter/page changes from displaying a stale response.
#[derive(Debug, Clone)]
pub struct IssueBrowserState {
    /// Full "owner/repo" name this screen was opened with
    pub repo_name: String,
    /// Repository detail, present once the initial load completed
    pub repository: Option<Repository>,
    /// Current page of issues; fully replaced on every fetch
    pub issues: Vec<Issue>,
    /// Initial fan-out/join still in flight
    pub loading: bool,
    /// A filter/page re-fetch is in flight
    pub refreshing: bool,
    /// Index into [`IssueFilter::ALL`]; resets to 0 on open
    pub filter_index: usize,
    /// 1-based page number, floor of 1
    pub page: u32,
    /// Cursor into the issue list
    pub cursor: usize,
    /// Last fetch error for this screen
    pub error: Option<String>,
    /// Sequence number of the most recently started fetch
    pub expected_seq: u64,
}

impl Default for IssueBrowserState {
    fn default() -> Self {
        Self {
            repo_name: String::new(),
            repository: None,
            issues: Vec::new(),
            loading: false,
            refreshing: false,
            filter_index: 0,
            page: 1,
            cursor: 0,
            error: None,
            expected_seq: 0,
        }
    }
}

impl IssueBrowserState {
    /// Fresh state for entering the screen: default filter, first page
    pub fn opening(repo_name: String) -> Self {
        Self {
            repo_name,
            loading: true,
            ..Self::default()
        }
    }

    /// The currently selected filter
    pub fn current_filter(&self) -> IssueFilter {
        IssueFilter::from_index(self.filter_index)
    }

    /// Split the repo name into `(owner, repo)`
    pub fn owner_repo(&self) -> Option<(&str, &str)> {
        self.repo_name.split_once('/')
    }
}
