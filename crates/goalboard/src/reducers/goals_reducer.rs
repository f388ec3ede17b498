use crate::actions::{Action, DataAction, GoalAction};
use crate::domain_models::Goal;

/// Reducer for the goal list
pub fn reduce_goals(mut goals: Vec<Goal>, action: &Action) -> Vec<Goal> {
    match action {
        Action::Goal(GoalAction::Add(goal)) => {
            goals.push(goal.clone());
            goals
        }
        Action::Goal(GoalAction::Remove(id)) => {
            goals.retain(|goal| &goal.id != id);
            goals
        }
        Action::Data(DataAction::Received { goals, .. }) => goals.clone(),
        _ => goals,
    }
}
