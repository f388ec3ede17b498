//! LoggingMiddleware - logs every action and the state it produced

use super::Middleware;
use crate::dispatcher::Dispatcher;
use std::fmt::Debug;

/// LoggingMiddleware - logs all actions passing through
///
/// Writes `Action: ...` before the reducer runs and `New state: ...` after.
/// Actions matched by the mute filter are passed through silently.
pub struct LoggingMiddleware<A> {
    mute: fn(&A) -> bool,
}

impl<A> LoggingMiddleware<A> {
    pub fn new() -> Self {
        Self { mute: |_| false }
    }

    /// Skip logging for actions matching `mute`
    pub fn with_filter(mute: fn(&A) -> bool) -> Self {
        Self { mute }
    }
}

impl<A> Default for LoggingMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Debug, A: Debug> Middleware<S, A> for LoggingMiddleware<A> {
    fn handle(&mut self, action: &A, _state: &S, _dispatcher: &Dispatcher<A>) -> bool {
        if !(self.mute)(action) {
            log::debug!("Action: {:?}", action);
        }

        true // Always pass action through
    }

    fn after_reduce(&mut self, action: &A, state: &S) {
        if !(self.mute)(action) {
            log::debug!("New state: {:?}", state);
        }
    }
}
