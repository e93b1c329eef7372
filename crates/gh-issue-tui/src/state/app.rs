//! Application state

use crate::state::{IssueBrowserState, RepoListState};
use crate::theme::Theme;
use gh_issue_config::TrackedRepository;

/// Which screen is currently visible and receiving input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    RepoList,
    IssueBrowser,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub screen: Screen,
    pub repo_list: RepoListState,
    pub issue_browser: IssueBrowserState,
    pub theme: Theme,
}

impl AppState {
    /// Initial state with the tracked repositories loaded from durable storage
    pub fn new(tracked: Vec<TrackedRepository>) -> Self {
        Self {
            running: true,
            screen: Screen::RepoList,
            repo_list: RepoListState::with_repositories(tracked),
            issue_browser: IssueBrowserState::default(),
            theme: Theme::default(),
        }
    }
}
