//! ThunkMiddleware - runs deferred action creators

use super::Middleware;
use crate::dispatcher::Dispatcher;
use crate::thunk::AsThunk;

/// Runs thunk actions and consumes them
///
/// Plain actions pass through untouched. Put this first in the chain so
/// later middleware and the reducer only ever see plain actions.
pub struct ThunkMiddleware;

impl ThunkMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThunkMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: AsThunk<S, A>> Middleware<S, A> for ThunkMiddleware {
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool {
        match action.as_thunk() {
            Some(thunk) => {
                log::debug!("ThunkMiddleware: running thunk");
                thunk.run(dispatcher, state);
                false
            }
            None => true,
        }
    }
}
