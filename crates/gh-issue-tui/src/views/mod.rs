//! Screen rendering
//!
//! One render module per screen; `render` dispatches on the active screen.

use crate::state::{AppState, Screen};
use ratatui::{layout::Rect, Frame};

pub mod issue_browser_view;
pub mod repo_list_view;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    match state.screen {
        Screen::RepoList => repo_list_view::render(state, area, f),
        Screen::IssueBrowser => issue_browser_view::render(state, area, f),
    }
}
