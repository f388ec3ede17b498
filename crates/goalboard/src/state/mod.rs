//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod status_bar;
mod ui;

pub use app::AppState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use ui::{Panel, UiState};
