use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    goals_reducer, loading_reducer, status_bar_reducer, todos_reducer, ui_reducer,
};
use crate::state::AppState;

/// Root reducer - every slice reducer sees every action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    state.todos = todos_reducer::reduce_todos(state.todos, action);
    state.goals = goals_reducer::reduce_goals(state.goals, action);
    state.loading = loading_reducer::reduce_loading(state.loading, action);
    state.ui = ui_reducer::reduce_ui(state.ui, action, state.todos.len(), state.goals.len());

    if let Action::StatusBar(status_action) = action {
        state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, status_action);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{DataAction, GoalAction, TodoAction};
    use crate::domain_models::{Goal, Todo};

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_receive_data_fills_both_lists() {
        let state = reduce(
            AppState::default(),
            &Action::Data(DataAction::Received {
                todos: vec![Todo::new("t1", "Walk the dog")],
                goals: vec![Goal::new("g1", "Learn Redux")],
            }),
        );

        assert!(!state.loading);
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.goals.len(), 1);
    }

    #[test]
    fn test_slices_are_independent() {
        let mut state = AppState::default();
        state.todos = vec![Todo::new("x", "todo x")];
        state.goals = vec![Goal::new("x", "goal x")];

        let state = reduce(state, &Action::Goal(GoalAction::Remove("x".into())));
        assert_eq!(state.todos.len(), 1);
        assert!(state.goals.is_empty());

        let state = reduce(state, &Action::Todo(TodoAction::Toggle("x".into())));
        assert!(state.todos[0].complete);
    }

    #[test]
    fn test_selection_follows_removed_items() {
        let mut state = AppState::default();
        state.todos = vec![Todo::new("a", "a"), Todo::new("b", "b")];
        state.ui.todo_selected = 1;

        let state = reduce(state, &Action::Todo(TodoAction::Remove("b".into())));

        assert_eq!(state.ui.todo_selected, 0);
    }
}
