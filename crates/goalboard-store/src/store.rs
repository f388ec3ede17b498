use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use std::sync::mpsc::Receiver;

/// Callback invoked with the new state after every reduced action
pub type Listener<S> = Box<dyn FnMut(&S) + Send>;

type Reducer<S, A> = Box<dyn Fn(S, &A) -> S + Send>;

/// Handle identifying a subscribed listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Store - holds application state and manages the Redux loop
///
/// - `state()` reads the current state
/// - `subscribe()` registers a listener, `unsubscribe()` removes it
/// - `dispatch()` runs an action through middleware, reducer and listeners
///
/// Actions queued through the `Dispatcher` while an action is being
/// processed are handled afterwards, in order, before `dispatch` returns.
/// Actions queued from other threads are picked up by `process_pending`.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription_id: u64,
    dispatcher: Dispatcher<A>,
    pending: Receiver<A>,
}

impl<S: Clone, A> Store<S, A> {
    pub fn new<R>(initial_state: S, reducer: R) -> Self
    where
        R: Fn(S, &A) -> S + Send + 'static,
    {
        let (dispatcher, pending) = Dispatcher::channel();
        Self {
            state: initial_state,
            reducer: Box::new(reducer),
            middleware: Vec::new(),
            listeners: Vec::new(),
            next_subscription_id: 0,
            dispatcher,
            pending,
        }
    }

    /// Create a store starting from the default state
    pub fn with_default<R>(reducer: R) -> Self
    where
        S: Default,
        R: Fn(S, &A) -> S + Send + 'static,
    {
        Self::new(S::default(), reducer)
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware<S, A> + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a dispatcher that feeds back into this store
    pub fn dispatcher(&self) -> Dispatcher<A> {
        self.dispatcher.clone()
    }

    /// Register a listener, called after every action that reached the reducer
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener
    ///
    /// Returns `false` if the id is unknown or was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Process an action through middleware chain and reducer,
    /// then everything it queued
    pub fn dispatch(&mut self, action: A) {
        self.dispatch_one(action);
        self.process_pending();
    }

    /// Process actions queued through the dispatcher
    ///
    /// Returns how many actions were processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.pending.try_recv() {
            self.dispatch_one(action);
            processed += 1;
        }
        processed
    }

    /// Returns `true` if the action reached the reducer
    fn dispatch_one(&mut self, action: A) -> bool {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return false;
            }
        }

        self.state = (self.reducer)(self.state.clone(), &action);

        for middleware in &mut self.middleware {
            middleware.after_reduce(&action, &self.state);
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }
}
