//! Application State

use super::{StatusBarState, UiState};
use crate::domain_models::{Goal, Todo};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// True until the initial todos and goals have been received
    pub loading: bool,
    pub todos: Vec<Todo>,
    pub goals: Vec<Goal>,
    pub ui: UiState,
    pub status_bar: StatusBarState,
}

impl AppState {
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.ui.todo_selected)
    }

    pub fn selected_goal(&self) -> Option<&Goal> {
        self.goals.get(self.ui.goal_selected)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            loading: true,
            todos: Vec::new(),
            goals: Vec::new(),
            ui: UiState::default(),
            status_bar: StatusBarState::default(),
        }
    }
}
