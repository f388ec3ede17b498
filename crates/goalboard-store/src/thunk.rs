//! Thunks - deferred action creators
//!
//! A thunk is an action that carries a function instead of data. When
//! `ThunkMiddleware` sees one it runs the function with the dispatcher and
//! the current state, and the thunk itself never reaches the reducer.
//! This is how async work (API calls) gets started from a dispatch.

use crate::dispatcher::Dispatcher;
use std::sync::Arc;

type ThunkFn<S, A> = dyn Fn(&Dispatcher<A>, &S) + Send + Sync;

/// A deferred action creator
pub struct Thunk<S, A> {
    run: Arc<ThunkFn<S, A>>,
}

impl<S, A> Thunk<S, A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Dispatcher<A>, &S) + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Run the thunk
    pub fn run(&self, dispatcher: &Dispatcher<A>, state: &S) {
        (self.run)(dispatcher, state);
    }
}

impl<S, A> Clone for Thunk<S, A> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<S, A> std::fmt::Debug for Thunk<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Thunk")
    }
}

/// Implemented by action types that can carry a thunk
pub trait AsThunk<S, A> {
    /// Return the thunk if this action is one
    fn as_thunk(&self) -> Option<&Thunk<S, A>>;
}
