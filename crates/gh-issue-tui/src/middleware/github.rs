//! GitHub Operations Middleware
//!
//! Central middleware for all GitHub API interactions:
//! - Repository validation on submission
//! - Initial fan-out/join when the issue browser opens
//! - Issue re-fetches on filter and page changes
//! - Opening issue URLs in the system browser
//!
//! Every issue fetch is stamped with a sequence number from a monotonically
//! increasing counter. `FetchStarted(seq)` is dispatched before the async
//! task spawns, so the reducer always knows which in-flight request is the
//! latest and can drop responses that lose the race.

use crate::actions::{Action, IssueBrowserAction, RepoListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{repo_list::parse_repo_input, AppState};
use crate::utils::browser;
use gh_client::{GitHubClient, IssueFilter, OctocrabClient};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all GitHub API operations
///
/// The filter and page for issue fetches are kept here, not read from the
/// shared state snapshot: the snapshot is republished only after the main
/// thread reduces, so with rapid keypresses it lags behind the action
/// stream. The reducer advances its own copies from the same actions, in
/// the same order, so both sides agree without ever reading each other.
pub struct GitHubMiddleware {
    /// Tokio runtime for async fetch tasks
    runtime: Runtime,
    client: Arc<dyn GitHubClient>,
    /// Sequence counter for issue fetches
    next_seq: u64,
    /// Filter the next issue fetch uses
    filter: IssueFilter,
    /// Page the next issue fetch uses, floor 1
    page: u32,
}

impl GitHubMiddleware {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        let client = OctocrabClient::from_env()?;
        Ok(Self {
            runtime,
            client: Arc::new(client),
            next_seq: 0,
            filter: IssueFilter::default(),
            page: 1,
        })
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GitHubClient>) -> Self {
        Self {
            runtime: Runtime::new().expect("tokio runtime"),
            client,
            next_seq: 0,
            filter: IssueFilter::default(),
            page: 1,
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Validate a submitted repository name against the API
    fn handle_submit(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let input = state.repo_list.input.clone();

        let Some((owner, repo)) = parse_repo_input(&input) else {
            dispatcher.dispatch(Action::RepoList(RepoListAction::SubmitError(format!(
                "not a repository: '{}' (expected owner/repo)",
                input.trim()
            ))));
            return;
        };

        // Real uniqueness check, by name
        let candidate = format!("{}/{}", owner, repo);
        if state.repo_list.is_tracked(&candidate) {
            dispatcher.dispatch(Action::RepoList(RepoListAction::SubmitError(format!(
                "{} is already tracked",
                candidate
            ))));
            return;
        }

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        log::info!("Validating repository {}/{}", owner, repo);

        self.runtime.spawn(async move {
            match client.fetch_repository(&owner, &repo).await {
                Ok(repository) => {
                    // The canonical full name from the response, not the
                    // typed input, becomes the tracked entry
                    dispatcher.dispatch(Action::RepoList(RepoListAction::SubmitSuccess(
                        repository.full_name,
                    )));
                }
                Err(e) => {
                    log::warn!("Repository validation failed for {}/{}: {}", owner, repo, e);
                    dispatcher.dispatch(Action::RepoList(RepoListAction::SubmitError(
                        e.to_string(),
                    )));
                }
            }
        });
    }

    /// Fan-out/join for entering the issue browser: repository detail and
    /// the first issue page, both must complete before the screen leaves
    /// its loading state
    fn handle_open(&mut self, repo_name: &str, dispatcher: &Dispatcher) {
        let Some((owner, repo)) = repo_name.split_once('/') else {
            log::error!("Malformed repository name: {}", repo_name);
            return;
        };
        let (owner, repo) = (owner.to_string(), repo.to_string());

        // A fresh browser session starts over, matching the reducer's reset
        self.filter = IssueFilter::default();
        self.page = 1;

        let seq = self.next_seq();
        dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::FetchStarted(seq)));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        log::info!("Loading {}/{} (repository detail + first issue page)", owner, repo);

        self.runtime.spawn(async move {
            let (repository, issues) = tokio::join!(
                client.fetch_repository(&owner, &repo),
                client.fetch_issues(&owner, &repo, IssueFilter::default(), 1),
            );

            match (repository, issues) {
                (Ok(repository), Ok(issues)) => {
                    dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::Loaded {
                        seq,
                        repository: Box::new(repository),
                        issues,
                    }));
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Failed to load {}/{}: {}", owner, repo, e);
                    dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::LoadError(
                        seq,
                        e.to_string(),
                    )));
                }
            }
        });
    }

    /// Re-fetch the issue list only (repository detail stays as-is)
    fn spawn_issue_fetch(
        &mut self,
        state: &AppState,
        filter: IssueFilter,
        page: u32,
        dispatcher: &Dispatcher,
    ) {
        let Some((owner, repo)) = state.issue_browser.owner_repo() else {
            log::error!(
                "Issue fetch without a repository name: '{}'",
                state.issue_browser.repo_name
            );
            return;
        };
        let (owner, repo) = (owner.to_string(), repo.to_string());

        let seq = self.next_seq();
        dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::FetchStarted(seq)));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.fetch_issues(&owner, &repo, filter, page).await {
                Ok(issues) => {
                    dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::IssuesLoaded(
                        seq, issues,
                    )));
                }
                Err(e) => {
                    log::error!("Failed to fetch issues for {}/{}: {}", owner, repo, e);
                    dispatcher.dispatch(Action::IssueBrowser(
                        IssueBrowserAction::IssuesLoadError(seq, e.to_string()),
                    ));
                }
            }
        });
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::RepoList(RepoListAction::Submit) => {
                self.handle_submit(state, dispatcher);
                true // Submit still reaches the reducer to set the busy flag
            }

            Action::IssueBrowser(IssueBrowserAction::Open(repo_name)) => {
                self.handle_open(repo_name, dispatcher);
                true
            }

            Action::IssueBrowser(IssueBrowserAction::SelectFilter(index)) => {
                // New filter, current page (the page is deliberately kept)
                self.filter = IssueFilter::from_index(*index);
                let (filter, page) = (self.filter, self.page);
                self.spawn_issue_fetch(state, filter, page, dispatcher);
                true
            }

            Action::IssueBrowser(IssueBrowserAction::NextPage) => {
                self.page = self.page.saturating_add(1);
                let (filter, page) = (self.filter, self.page);
                self.spawn_issue_fetch(state, filter, page, dispatcher);
                true
            }

            Action::IssueBrowser(IssueBrowserAction::PreviousPage) => {
                // Disabled at page 1: consume, no fetch, no state change
                if self.page <= 1 {
                    return false;
                }
                self.page -= 1;
                let (filter, page) = (self.filter, self.page);
                self.spawn_issue_fetch(state, filter, page, dispatcher);
                true
            }

            Action::IssueBrowser(IssueBrowserAction::OpenInBrowser) => {
                let issue = state
                    .issue_browser
                    .issues
                    .get(state.issue_browser.cursor);
                if let Some(issue) = issue {
                    self.runtime
                        .spawn(browser::open_issue_page(issue.number, issue.html_url.clone()));
                }
                false // Consume action
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gh_client::{Issue, Repository};
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Stub client that records fetch parameters
    struct RecordingClient {
        issue_calls: Mutex<Vec<(String, String, IssueFilter, u32)>>,
    }

    impl RecordingClient {
        fn new() -> Self {
            Self {
                issue_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GitHubClient for RecordingClient {
        async fn fetch_repository(&self, owner: &str, repo: &str) -> anyhow::Result<Repository> {
            Ok(Repository {
                full_name: format!("{}/{}", owner, repo),
                name: repo.to_string(),
                description: None,
                owner_login: owner.to_string(),
                owner_avatar_url: String::new(),
                html_url: String::new(),
            })
        }

        async fn fetch_issues(
            &self,
            owner: &str,
            repo: &str,
            filter: IssueFilter,
            page: u32,
        ) -> anyhow::Result<Vec<Issue>> {
            self.issue_calls
                .lock()
                .unwrap()
                .push((owner.to_string(), repo.to_string(), filter, page));
            Ok(vec![])
        }
    }

    fn drain(rx: &mpsc::Receiver<Action>, count: usize) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.recv_timeout(Duration::from_secs(2)) {
            actions.push(action);
            if actions.len() >= count {
                break;
            }
        }
        actions
    }

    fn browser_state() -> AppState {
        let mut state = AppState::new(vec![]);
        state.issue_browser = crate::state::IssueBrowserState::opening("rust-lang/rust".into());
        state.issue_browser.loading = false;
        state
    }

    #[test]
    fn test_filter_change_keeps_the_current_page() {
        let client = Arc::new(RecordingClient::new());
        let mut mw = GitHubMiddleware::with_client(client.clone());
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = browser_state();

        mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::NextPage),
            &state,
            &dispatcher,
        );
        let _ = drain(&rx, 2);

        let passed = mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::SelectFilter(2)),
            &state,
            &dispatcher,
        );
        assert!(passed);

        let actions = drain(&rx, 2);
        assert!(matches!(
            actions[0],
            Action::IssueBrowser(IssueBrowserAction::FetchStarted(_))
        ));
        assert!(matches!(
            actions[1],
            Action::IssueBrowser(IssueBrowserAction::IssuesLoaded(_, _))
        ));

        let calls = client.issue_calls.lock().unwrap();
        assert_eq!(
            calls[1],
            (
                "rust-lang".to_string(),
                "rust".to_string(),
                IssueFilter::Closed,
                2
            )
        );
    }

    #[test]
    fn test_previous_page_at_page_one_is_consumed() {
        let client = Arc::new(RecordingClient::new());
        let mut mw = GitHubMiddleware::with_client(client.clone());
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let state = browser_state();
        let passed = mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::PreviousPage),
            &state,
            &dispatcher,
        );

        assert!(!passed);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        assert!(client.issue_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_rapid_page_presses_fetch_consecutive_pages() {
        let client = Arc::new(RecordingClient::new());
        let mut mw = GitHubMiddleware::with_client(client.clone());
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        // Both presses arrive before the main thread republishes the
        // snapshot, so both see the same stale page. The fetched pages
        // must still advance the way the displayed counter does.
        let stale = browser_state();
        mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::NextPage),
            &stale,
            &dispatcher,
        );
        let _ = drain(&rx, 2);
        mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::NextPage),
            &stale,
            &dispatcher,
        );
        let _ = drain(&rx, 2);

        let pages: Vec<u32> = client
            .issue_calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.3)
            .collect();
        assert_eq!(pages, vec![2, 3]);
    }

    #[test]
    fn test_open_starts_a_fresh_pagination_session() {
        let client = Arc::new(RecordingClient::new());
        let mut mw = GitHubMiddleware::with_client(client.clone());
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = browser_state();

        mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::NextPage),
            &state,
            &dispatcher,
        );
        let _ = drain(&rx, 2);
        mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::Open("rust-lang/rust".to_string())),
            &state,
            &dispatcher,
        );
        let _ = drain(&rx, 2);
        mw.handle(
            &Action::IssueBrowser(IssueBrowserAction::NextPage),
            &state,
            &dispatcher,
        );
        let _ = drain(&rx, 2);

        let pages: Vec<u32> = client
            .issue_calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.3)
            .collect();
        assert_eq!(pages, vec![2, 1, 2]);
    }

    #[test]
    fn test_duplicate_submission_is_rejected_without_api_call() {
        let client = Arc::new(RecordingClient::new());
        let mut mw = GitHubMiddleware::with_client(client.clone());
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let mut state = AppState::new(vec![gh_issue_config::TrackedRepository::new(
            "rust-lang/rust",
        )]);
        state.repo_list.input = "rust-lang/rust".to_string();

        mw.handle(
            &Action::RepoList(RepoListAction::Submit),
            &state,
            &dispatcher,
        );

        let action = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        match action {
            Action::RepoList(RepoListAction::SubmitError(msg)) => {
                assert!(msg.contains("already tracked"));
            }
            other => panic!("Expected SubmitError, got {:?}", other),
        }
    }

    #[test]
    fn test_submission_uses_canonical_full_name() {
        let client = Arc::new(RecordingClient::new());
        let mut mw = GitHubMiddleware::with_client(client);
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let mut state = AppState::new(vec![]);
        state.repo_list.input = "https://github.com/facebook/react".to_string();

        mw.handle(
            &Action::RepoList(RepoListAction::Submit),
            &state,
            &dispatcher,
        );

        let action = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match action {
            Action::RepoList(RepoListAction::SubmitSuccess(full_name)) => {
                assert_eq!(full_name, "facebook/react");
            }
            other => panic!("Expected SubmitSuccess, got {:?}", other),
        }
    }
}
