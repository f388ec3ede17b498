//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//!                                         │
//!              after_reduce hooks  ←──────┘
//! ```
//!
//! Each middleware can:
//! - Inspect actions and the state they are applied to
//! - Dispatch new actions (queued, they re-enter the chain)
//! - Perform side effects (spawning tasks, logging, etc.)
//! - Block actions from reaching the reducer
//! - Observe the new state once the reducer has run

use crate::dispatcher::Dispatcher;

mod logging;
mod thunk;

pub use logging::LoggingMiddleware;
pub use thunk::ThunkMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware<S, A>: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: State the action will be applied to (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool;

    /// Called with the new state after the reducer has run
    ///
    /// Only middleware that let the action through is called.
    fn after_reduce(&mut self, _action: &A, _state: &S) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMiddleware {
        called: bool,
    }

    impl Middleware<u32, u32> for TestMiddleware {
        fn handle(&mut self, _action: &u32, _state: &u32, _dispatcher: &Dispatcher<u32>) -> bool {
            self.called = true;
            true
        }
    }

    #[test]
    fn test_middleware_trait() {
        let mut middleware = TestMiddleware { called: false };
        let (dispatcher, _rx) = Dispatcher::channel();

        let should_continue = middleware.handle(&1, &0, &dispatcher);
        middleware.after_reduce(&1, &1);

        assert!(should_continue);
        assert!(middleware.called);
    }
}
