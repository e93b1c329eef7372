//! Root reducer
//!
//! Pure function that produces new state from current state + action.
//! Handles screen switching and quit, then delegates to the sub-reducers.

use crate::actions::{Action, GlobalAction, IssueBrowserAction};
use crate::reducers::{issue_browser_reducer, repo_list_reducer};
use crate::state::{AppState, Screen};

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Back) => {
            log::debug!("Returning to repository list");
            state.screen = Screen::RepoList;
        }
        // Opening a repository switches screens; the sub-reducer resets the
        // screen state itself
        Action::IssueBrowser(IssueBrowserAction::Open(name)) => {
            log::debug!("Opening issue browser for {}", name);
            state.screen = Screen::IssueBrowser;
        }
        _ => {}
    }

    state.repo_list = repo_list_reducer::reduce(state.repo_list, action);
    state.issue_browser = issue_browser_reducer::reduce(state.issue_browser, action);

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_stops_the_app() {
        let state = AppState::new(vec![]);
        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_open_switches_to_issue_browser_and_back() {
        let state = AppState::new(vec![]);
        let state = reduce(
            state,
            &Action::IssueBrowser(IssueBrowserAction::Open("rust-lang/rust".to_string())),
        );
        assert_eq!(state.screen, Screen::IssueBrowser);
        assert_eq!(state.issue_browser.repo_name, "rust-lang/rust");

        let state = reduce(state, &Action::Global(GlobalAction::Back));
        assert_eq!(state.screen, Screen::RepoList);
    }
}
