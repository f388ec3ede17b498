use crate::domain_models::Goal;

/// Actions for the goal list
#[derive(Debug, Clone)]
pub enum GoalAction {
    Add(Goal),
    /// Remove the goal with this id
    Remove(String),
}
