//! Redux-style state container
//!
//! This crate provides:
//! - `Store`: a single state slot updated by a pure reducer
//! - `Middleware`: hooks interposed between dispatch and the reducer
//! - `Dispatcher`: cloneable handle for queueing actions from anywhere
//! - `Thunk`: deferred action creators, run by `ThunkMiddleware`
//!
//! ```text
//! dispatch(Action) → Middleware Chain → Reducer → State → Listeners
//!                         │
//!                         └── Dispatcher (queued, re-enters the chain)
//! ```

pub mod dispatcher;
pub mod middleware;
pub mod store;
pub mod thunk;

pub use dispatcher::Dispatcher;
pub use middleware::{LoggingMiddleware, Middleware, ThunkMiddleware};
pub use store::{Listener, Store, SubscriptionId};
pub use thunk::{AsThunk, Thunk};
