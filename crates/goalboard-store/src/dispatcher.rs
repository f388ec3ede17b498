//! Dispatcher for queued action dispatch
//!
//! Middleware, listeners, thunks and spawned tasks cannot borrow the store
//! while it is dispatching. They use a Dispatcher instead: actions sent
//! through it are queued and re-enter the middleware chain from the
//! beginning once the current action has been fully processed.

use std::sync::mpsc::{self, Receiver, Sender};

/// Handle for sending actions back into the store
///
/// Cheap to clone and `Send`, so it can be moved into background tasks.
pub struct Dispatcher<A> {
    action_tx: Sender<A>,
}

impl<A> Dispatcher<A> {
    /// Create a dispatcher together with the receiving end of its queue
    ///
    /// The store owns the receiver. Tests use this to observe what a
    /// middleware dispatches without building a whole store.
    pub fn channel() -> (Self, Receiver<A>) {
        let (action_tx, action_rx) = mpsc::channel();
        (Self { action_tx }, action_rx)
    }

    /// Queue an action to be processed through the middleware chain
    ///
    /// If the owning store is gone the action is dropped and an error is logged.
    pub fn dispatch(&self, action: A) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            action_tx: self.action_tx.clone(),
        }
    }
}

impl<A> std::fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_queues_in_order() {
        let (dispatcher, rx) = Dispatcher::channel();

        dispatcher.dispatch(1);
        dispatcher.clone().dispatch(2);

        assert_eq!(rx.try_recv(), Ok(1));
        assert_eq!(rx.try_recv(), Ok(2));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (dispatcher, rx) = Dispatcher::channel();
        drop(rx);

        dispatcher.dispatch("lost");
    }

    #[test]
    fn test_dispatch_from_another_thread() {
        let (dispatcher, rx) = Dispatcher::channel();
        let remote = dispatcher.clone();

        std::thread::spawn(move || remote.dispatch(42))
            .join()
            .unwrap();

        assert_eq!(rx.recv(), Ok(42));
    }
}
