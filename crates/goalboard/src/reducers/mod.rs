//! Reducers - pure functions producing new state from current state + action

pub mod app_reducer;
pub mod goals_reducer;
pub mod loading_reducer;
pub mod status_bar_reducer;
pub mod todos_reducer;
pub mod ui_reducer;
