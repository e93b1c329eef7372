//! Dispatcher for middleware action dispatch
//!
//! Middleware that needs to emit follow-up actions (fetch results, translated
//! key presses) sends them through the Dispatcher. Dispatched actions re-enter
//! the middleware chain from the beginning, so every middleware can observe
//! and react to them before they reach the reducers.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// `action_tx` must be a clone of the channel feeding the background
    /// worker, so dispatched actions re-enter the chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
