//! PersistenceMiddleware - writes the tracked list to durable storage
//!
//! The list is persisted on every mutation. The only mutation in the
//! application is a successful submission, so this middleware watches for
//! `SubmitSuccess`. It carries its own copy of the list, seeded from the
//! startup load: the shared state snapshot lags one reduction behind the
//! action stream, so appending to the snapshot could lose an entry when
//! two submissions land in quick succession. The write is fire-and-forget:
//! a failure is logged, never surfaced.

use crate::actions::{Action, RepoListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_issue_config::TrackedRepository;
use std::path::PathBuf;

pub struct PersistenceMiddleware {
    path: PathBuf,
    repositories: Vec<TrackedRepository>,
}

impl PersistenceMiddleware {
    pub fn new(repositories: Vec<TrackedRepository>) -> anyhow::Result<Self> {
        let path = gh_issue_config::tracked_repositories_path()?;
        Ok(Self { path, repositories })
    }

    #[cfg(test)]
    fn with_path(path: PathBuf, repositories: Vec<TrackedRepository>) -> Self {
        Self { path, repositories }
    }
}

impl Middleware for PersistenceMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::RepoList(RepoListAction::SubmitSuccess(full_name)) = action {
            self.repositories.push(TrackedRepository::new(full_name));

            if let Err(e) =
                gh_issue_config::save_tracked_repositories_to(&self.path, &self.repositories)
            {
                log::error!("Failed to save tracked repositories: {}", e);
            }
        }

        true // Always pass through to the reducer
    }
}
