//! Issue browser screen reducer
//!
//! Fetch results are guarded by sequence number: a result that doesn't match
//! the most recently started request is stale and gets dropped. Without this,
//! rapid filter/page changes could leave the last response to arrive on
//! screen, not the last one requested.

use crate::actions::{Action, IssueBrowserAction};
use crate::state::IssueBrowserState;
use gh_client::IssueFilter;

pub fn reduce(mut state: IssueBrowserState, action: &Action) -> IssueBrowserState {
    let Action::IssueBrowser(action) = action else {
        return state;
    };

    match action {
        IssueBrowserAction::Open(repo_name) => {
            return IssueBrowserState::opening(repo_name.clone());
        }
        IssueBrowserAction::FetchStarted(seq) => {
            state.expected_seq = *seq;
            if !state.loading {
                state.refreshing = true;
            }
        }
        IssueBrowserAction::Loaded {
            seq,
            repository,
            issues,
        } => {
            // The repository detail doesn't depend on filter or page, so it
            // always applies and always ends the loading state. Only the
            // issue half of the join can be superseded by a newer fetch.
            state.repository = Some((**repository).clone());
            state.loading = false;
            if *seq != state.expected_seq {
                log::debug!("Dropping stale initial issue page (seq {})", seq);
                return state;
            }
            state.issues = issues.clone();
            state.refreshing = false;
            state.cursor = 0;
            state.error = None;
        }
        IssueBrowserAction::LoadError(seq, message) => {
            if *seq != state.expected_seq {
                return state;
            }
            state.loading = false;
            state.refreshing = false;
            state.error = Some(message.clone());
        }
        IssueBrowserAction::SelectFilter(index) => {
            // Repository detail is not refetched and the page is not reset;
            // only the issue list changes (the fetch itself happens in the
            // GitHub middleware)
            state.filter_index = (*index).min(IssueFilter::ALL.len() - 1);
        }
        IssueBrowserAction::NextPage => {
            state.page = state.page.saturating_add(1);
        }
        IssueBrowserAction::PreviousPage => {
            state.page = state.page.saturating_sub(1).max(1);
        }
        IssueBrowserAction::IssuesLoaded(seq, issues) => {
            if *seq != state.expected_seq {
                log::debug!("Dropping stale issue fetch (seq {})", seq);
                return state;
            }
            state.issues = issues.clone();
            state.loading = false;
            state.refreshing = false;
            state.cursor = 0;
            state.error = None;
        }
        IssueBrowserAction::IssuesLoadError(seq, message) => {
            if *seq != state.expected_seq {
                return state;
            }
            state.loading = false;
            state.refreshing = false;
            state.error = Some(message.clone());
        }
        IssueBrowserAction::CursorNext => {
            if !state.issues.is_empty() {
                state.cursor = (state.cursor + 1).min(state.issues.len() - 1);
            }
        }
        IssueBrowserAction::CursorPrevious => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        // Handled entirely by the GitHub middleware
        IssueBrowserAction::OpenInBrowser => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gh_client::{Issue, Repository};

    fn issue_browser(action: IssueBrowserAction, state: IssueBrowserState) -> IssueBrowserState {
        reduce(state, &Action::IssueBrowser(action))
    }

    fn sample_repository() -> Repository {
        Repository {
            full_name: "rust-lang/rust".to_string(),
            name: "rust".to_string(),
            description: Some("The Rust programming language".to_string()),
            owner_login: "rust-lang".to_string(),
            owner_avatar_url: String::new(),
            html_url: "https://github.com/rust-lang/rust".to_string(),
        }
    }

    fn sample_issue(number: u64) -> Issue {
        Issue {
            id: number * 100,
            number,
            title: format!("Issue #{}", number),
            html_url: format!("https://github.com/rust-lang/rust/issues/{}", number),
            author_login: "octocat".to_string(),
            author_avatar_url: String::new(),
            labels: vec![],
            created_at: Utc::now(),
        }
    }

    fn loaded_state() -> IssueBrowserState {
        let state = IssueBrowserState::opening("rust-lang/rust".to_string());
        let state = issue_browser(IssueBrowserAction::FetchStarted(1), state);
        issue_browser(
            IssueBrowserAction::Loaded {
                seq: 1,
                repository: Box::new(sample_repository()),
                issues: vec![sample_issue(1), sample_issue(2)],
            },
            state,
        )
    }

    #[test]
    fn test_open_resets_filter_and_page() {
        let mut state = loaded_state();
        state.filter_index = 2;
        state.page = 7;

        let state = issue_browser(
            IssueBrowserAction::Open("facebook/react".to_string()),
            state,
        );
        assert_eq!(state.repo_name, "facebook/react");
        assert_eq!(state.filter_index, 0);
        assert_eq!(state.page, 1);
        assert!(state.loading);
        assert!(state.repository.is_none());
        assert!(state.issues.is_empty());
    }

    #[test]
    fn test_initial_load_transitions_to_loaded() {
        let state = loaded_state();
        assert!(!state.loading);
        assert_eq!(state.issues.len(), 2);
        assert_eq!(
            state.repository.as_ref().map(|r| r.full_name.as_str()),
            Some("rust-lang/rust")
        );
    }

    #[test]
    fn test_filter_change_leaves_repository_and_page_untouched() {
        let mut state = loaded_state();
        state.page = 3;

        let state = issue_browser(IssueBrowserAction::SelectFilter(2), state);
        assert_eq!(state.filter_index, 2);
        assert_eq!(state.current_filter(), IssueFilter::Closed);
        assert_eq!(state.page, 3);
        assert!(state.repository.is_some());
    }

    #[test]
    fn test_next_then_previous_restores_page() {
        let state = loaded_state();
        assert_eq!(state.page, 1);

        let state = issue_browser(IssueBrowserAction::NextPage, state);
        assert_eq!(state.page, 2);

        let state = issue_browser(IssueBrowserAction::PreviousPage, state);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_never_goes_below_one() {
        let state = loaded_state();
        let state = issue_browser(IssueBrowserAction::PreviousPage, state);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_stale_response_is_dropped_latest_wins() {
        let state = loaded_state();

        // Two fetches started in quick succession; seq 3 is the latest
        let state = issue_browser(IssueBrowserAction::FetchStarted(2), state);
        let state = issue_browser(IssueBrowserAction::FetchStarted(3), state);

        // The older response resolves last but must not be applied
        let state = issue_browser(
            IssueBrowserAction::IssuesLoaded(3, vec![sample_issue(30)]),
            state,
        );
        let state = issue_browser(
            IssueBrowserAction::IssuesLoaded(2, vec![sample_issue(20)]),
            state,
        );

        assert_eq!(state.issues.len(), 1);
        assert_eq!(state.issues[0].number, 30);
    }

    #[test]
    fn test_filter_change_during_initial_load_still_completes() {
        // A filter fetch starts while the initial fan-out/join is in flight;
        // its sequence number supersedes the initial one. The screen must
        // still leave the loading state and show the repository detail.
        let state = IssueBrowserState::opening("rust-lang/rust".to_string());
        let state = issue_browser(IssueBrowserAction::FetchStarted(1), state);
        let state = issue_browser(IssueBrowserAction::SelectFilter(1), state);
        let state = issue_browser(IssueBrowserAction::FetchStarted(2), state);

        let state = issue_browser(
            IssueBrowserAction::Loaded {
                seq: 1,
                repository: Box::new(sample_repository()),
                issues: vec![sample_issue(1)],
            },
            state,
        );
        let state = issue_browser(
            IssueBrowserAction::IssuesLoaded(2, vec![sample_issue(2)]),
            state,
        );

        assert!(!state.loading);
        assert!(!state.refreshing);
        assert!(state.repository.is_some());
        assert_eq!(state.issues.len(), 1);
        assert_eq!(state.issues[0].number, 2);
    }

    #[test]
    fn test_refetch_fully_replaces_issue_list() {
        let state = loaded_state();
        let state = issue_browser(IssueBrowserAction::FetchStarted(2), state);
        assert!(state.refreshing);

        let state = issue_browser(
            IssueBrowserAction::IssuesLoaded(2, vec![sample_issue(9)]),
            state,
        );
        assert!(!state.refreshing);
        assert_eq!(state.issues.len(), 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_fetch_error_is_surfaced() {
        let state = loaded_state();
        let state = issue_browser(IssueBrowserAction::FetchStarted(2), state);
        let state = issue_browser(
            IssueBrowserAction::IssuesLoadError(2, "network unreachable".to_string()),
            state,
        );
        assert_eq!(state.error.as_deref(), Some("network unreachable"));
        assert!(!state.refreshing);
        // The previous issue list stays on screen
        assert_eq!(state.issues.len(), 2);
    }
}
