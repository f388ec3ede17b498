use crate::domain_models::{Goal, Todo};

/// Actions carrying data fetched from the API
#[derive(Debug, Clone)]
pub enum DataAction {
    /// Initial todos and goals arrived, replaces both lists and ends loading
    Received { todos: Vec<Todo>, goals: Vec<Goal> },
}
