use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod github;
pub mod keyboard;
pub mod logging;
pub mod persistence;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking
/// operations (API calls, file I/O) without affecting the render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: the action to process
    /// - `state`: current application state (read-only snapshot)
    /// - `dispatcher`: dispatch follow-up actions that re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
