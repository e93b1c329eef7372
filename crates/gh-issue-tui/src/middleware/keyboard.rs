//! KeyboardMiddleware - converts raw key events to semantic actions
//!
//! Translation depends on the active screen (and, on the repository list,
//! on which widget has focus), so plain characters can go into the text
//! input on one screen and act as shortcuts on the other.

use crate::actions::{Action, GlobalAction, IssueBrowserAction, RepoListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, InputFocus, Screen};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        true
    }
}

fn handle_key_event(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    // Ctrl-C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        return;
    }

    match state.screen {
        Screen::RepoList => repo_list_keys(key, state, dispatcher),
        Screen::IssueBrowser => issue_browser_keys(key, state, dispatcher),
    }
}

fn repo_list_keys(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match state.repo_list.focus {
        InputFocus::Input => match key.code {
            KeyCode::Enter => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::Submit));
            }
            KeyCode::Tab | KeyCode::Down => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::ToggleFocus));
            }
            KeyCode::Backspace => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::Backspace));
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::ClearLine));
            }
            KeyCode::Esc => {
                // Clear a non-empty input first; quit if already empty
                if state.repo_list.input.is_empty() {
                    dispatcher.dispatch(Action::Global(GlobalAction::Quit));
                } else {
                    dispatcher.dispatch(Action::RepoList(RepoListAction::ClearLine));
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::Char(c)));
            }
            _ => {
                log::trace!("Unhandled key in repo list input: {:?}", key);
            }
        },
        InputFocus::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            }
            KeyCode::Tab | KeyCode::Char('i') => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::ToggleFocus));
            }
            KeyCode::Char('j') | KeyCode::Down => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::CursorNext));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                dispatcher.dispatch(Action::RepoList(RepoListAction::CursorPrevious));
            }
            KeyCode::Enter => {
                // Open the issue browser for the repository under the cursor
                if let Some(repo) = state.repo_list.repositories.get(state.repo_list.cursor) {
                    dispatcher
                        .dispatch(Action::IssueBrowser(IssueBrowserAction::Open(repo.name.clone())));
                }
            }
            _ => {
                log::trace!("Unhandled key in repo list: {:?}", key);
            }
        },
    }
}

fn issue_browser_keys(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    // Until the initial fan-out/join completes there is nothing to filter,
    // page or select; only leaving the screen is accepted. A filter or page
    // fetch started here would supersede the initial load's sequence number.
    if state.issue_browser.loading {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                dispatcher.dispatch(Action::Global(GlobalAction::Back));
            }
            KeyCode::Char('q') => {
                dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            }
            _ => {
                log::trace!("Key ignored while the issue browser is loading: {:?}", key);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            dispatcher.dispatch(Action::Global(GlobalAction::Back));
        }
        KeyCode::Char('q') => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        // Filters are selected by index: 1 = all, 2 = open, 3 = closed
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::SelectFilter(index)));
        }
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => {
            dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::NextPage));
        }
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => {
            dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::PreviousPage));
        }
        KeyCode::Char('j') | KeyCode::Down => {
            dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::CursorNext));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::CursorPrevious));
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            dispatcher.dispatch(Action::IssueBrowser(IssueBrowserAction::OpenInBrowser));
        }
        _ => {
            log::trace!("Unhandled key in issue browser: {:?}", key);
        }
    }
}
