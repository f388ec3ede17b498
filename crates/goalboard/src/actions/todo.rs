use crate::domain_models::Todo;

/// Actions for the todo list
#[derive(Debug, Clone)]
pub enum TodoAction {
    Add(Todo),
    /// Remove the todo with this id
    Remove(String),
    /// Flip `complete` on the todo with this id
    Toggle(String),
}
