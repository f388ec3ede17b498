//! Application middleware
//!
//! Generic middleware (thunks, logging) lives in `goalboard_store`.
//! These are the ones that know about todos, goals and the keyboard.

pub mod checker_middleware;
pub mod keyboard_middleware;
