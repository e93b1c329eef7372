//! Repository list screen reducer

use crate::actions::{Action, RepoListAction};
use crate::state::RepoListState;
use gh_issue_config::TrackedRepository;

pub fn reduce(mut state: RepoListState, action: &Action) -> RepoListState {
    let Action::RepoList(action) = action else {
        return state;
    };

    match action {
        RepoListAction::Char(c) => {
            state.input.push(*c);
            state.error = None;
        }
        RepoListAction::Backspace => {
            state.input.pop();
            state.error = None;
        }
        RepoListAction::ClearLine => {
            state.input.clear();
            state.error = None;
        }
        RepoListAction::ToggleFocus => {
            state.focus = state.focus.toggle();
        }
        RepoListAction::CursorNext => {
            if !state.repositories.is_empty() {
                state.cursor = (state.cursor + 1).min(state.repositories.len() - 1);
            }
        }
        RepoListAction::CursorPrevious => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        RepoListAction::Submit => {
            state.submitting = true;
            state.error = None;
        }
        RepoListAction::SubmitSuccess(full_name) => {
            state.repositories.push(TrackedRepository::new(full_name));
            state.input.clear();
            state.submitting = false;
            state.error = None;
        }
        RepoListAction::SubmitError(message) => {
            // The in-flight input text is preserved for correction
            state.submitting = false;
            state.error = Some(message.clone());
        }
    }

    state
}
