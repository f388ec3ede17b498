//! Thunk action creators
//!
//! Each function returns an `Action::Thunk` that talks to the API on a
//! spawned tokio task and reports back through the dispatcher. Removals
//! and toggles are optimistic: the store is updated first and the change
//! is reverted if the API call fails.
//!
//! Dispatching these requires a tokio runtime context.

use crate::actions::{Action, DataAction, GoalAction, StatusBarAction, TodoAction, UiAction};
use crate::api::Api;
use crate::domain_models::{Goal, Todo};
use crate::state::Panel;

/// Fetch todos and goals concurrently and hand both to the store
pub fn handle_initial_data(api: &Api) -> Action {
    let api = api.clone();
    Action::thunk(move |dispatcher, _state| {
        let api = api.clone();
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            match tokio::try_join!(api.fetch_todos(), api.fetch_goals()) {
                Ok((todos, goals)) => {
                    let message =
                        format!("Loaded {} todos and {} goals", todos.len(), goals.len());
                    log::info!("{}", message);
                    dispatcher.dispatch(Action::Data(DataAction::Received { todos, goals }));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        message, "load",
                    )));
                }
                Err(e) => {
                    log::error!("Initial data load failed: {}", e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Loading failed: {}", e),
                        "load",
                    )));
                }
            }
        });
    })
}

/// Save a todo, then add it to the store
///
/// Nothing changes in the store if saving fails.
pub fn handle_add_todo(api: &Api, name: impl Into<String>) -> Action {
    let api = api.clone();
    let name = name.into();
    Action::thunk(move |dispatcher, _state| {
        let api = api.clone();
        let dispatcher = dispatcher.clone();
        let name = name.clone();
        tokio::spawn(async move {
            match api.save_todo(&name).await {
                Ok(todo) => {
                    // status first, so a checker rejection of the add ends up on top
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("Added {:?}", todo.name),
                        "add todo",
                    )));
                    dispatcher.dispatch(Action::Todo(TodoAction::Add(todo)));
                    dispatcher.dispatch(Action::Ui(UiAction::InputSubmitted(Panel::Todos)));
                }
                Err(e) => {
                    log::error!("Adding todo {:?} failed: {}", name, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        "There was an error adding the todo. Try again.",
                        "add todo",
                    )));
                }
            }
        });
    })
}

/// Save a goal, then add it to the store
pub fn handle_add_goal(api: &Api, name: impl Into<String>) -> Action {
    let api = api.clone();
    let name = name.into();
    Action::thunk(move |dispatcher, _state| {
        let api = api.clone();
        let dispatcher = dispatcher.clone();
        let name = name.clone();
        tokio::spawn(async move {
            match api.save_goal(&name).await {
                Ok(goal) => {
                    // status first, so a checker rejection of the add ends up on top
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("Added {:?}", goal.name),
                        "add goal",
                    )));
                    dispatcher.dispatch(Action::Goal(GoalAction::Add(goal)));
                    dispatcher.dispatch(Action::Ui(UiAction::InputSubmitted(Panel::Goals)));
                }
                Err(e) => {
                    log::error!("Adding goal {:?} failed: {}", name, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        "There was an error adding the goal. Try again.",
                        "add goal",
                    )));
                }
            }
        });
    })
}

/// Remove a todo right away, put it back if the API refuses
pub fn handle_delete_todo(api: &Api, todo: Todo) -> Action {
    let api = api.clone();
    Action::thunk(move |dispatcher, _state| {
        dispatcher.dispatch(Action::Todo(TodoAction::Remove(todo.id.clone())));

        let api = api.clone();
        let dispatcher = dispatcher.clone();
        let todo = todo.clone();
        tokio::spawn(async move {
            if let Err(e) = api.delete_todo(&todo.id).await {
                log::error!("Deleting todo {} failed: {}", todo.id, e);
                dispatcher.dispatch(Action::Todo(TodoAction::Add(todo)));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    "There was an error removing the todo. It was added back.",
                    "delete todo",
                )));
            }
        });
    })
}

/// Remove a goal right away, put it back if the API refuses
pub fn handle_delete_goal(api: &Api, goal: Goal) -> Action {
    let api = api.clone();
    Action::thunk(move |dispatcher, _state| {
        dispatcher.dispatch(Action::Goal(GoalAction::Remove(goal.id.clone())));

        let api = api.clone();
        let dispatcher = dispatcher.clone();
        let goal = goal.clone();
        tokio::spawn(async move {
            if let Err(e) = api.delete_goal(&goal.id).await {
                log::error!("Deleting goal {} failed: {}", goal.id, e);
                dispatcher.dispatch(Action::Goal(GoalAction::Add(goal)));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    "There was an error removing the goal. It was added back.",
                    "delete goal",
                )));
            }
        });
    })
}

/// Toggle a todo right away, toggle it back if the API refuses
pub fn handle_toggle_todo(api: &Api, id: impl Into<String>) -> Action {
    let api = api.clone();
    let id = id.into();
    Action::thunk(move |dispatcher, _state| {
        dispatcher.dispatch(Action::Todo(TodoAction::Toggle(id.clone())));

        let api = api.clone();
        let dispatcher = dispatcher.clone();
        let id = id.clone();
        tokio::spawn(async move {
            if let Err(e) = api.save_todo_toggle(&id).await {
                log::error!("Toggling todo {} failed: {}", id, e);
                dispatcher.dispatch(Action::Todo(TodoAction::Toggle(id)));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    "There was an error toggling the todo. It was reverted.",
                    "toggle todo",
                )));
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use crate::state::{AppState, StatusKind};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crate::store::{create_store, AppStore};
    use goalboard_config::AppConfig;
    use std::time::Duration;

    fn api(failure_rate: f64) -> Api {
        Api::new(Duration::ZERO, Duration::ZERO, failure_rate)
    }

    fn store(api: &Api) -> AppStore {
        let config = AppConfig {
            log_actions: false,
            ..AppConfig::default()
        };
        create_store(&config, api.clone())
    }

    /// Let spawned tasks finish and feed their actions into the store
    async fn settle(store: &mut AppStore, until: impl Fn(&AppState) -> bool) {
        for _ in 0..200 {
            store.process_pending();
            if until(store.state()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("store did not settle: {:?}", store.state());
    }

    fn last_status_kind(state: &AppState) -> Option<StatusKind> {
        state.status_bar.latest().map(|m| m.kind)
    }

    #[tokio::test]
    async fn test_initial_data_ends_loading() {
        let api = api(0.0);
        api.save_todo("Walk the dog").await.unwrap();
        api.save_goal("Learn Redux").await.unwrap();
        let mut store = store(&api);

        store.dispatch(handle_initial_data(&api));
        assert!(store.state().loading);

        settle(&mut store, |s| !s.loading).await;
        assert_eq!(store.state().todos[0].name, "Walk the dog");
        assert_eq!(store.state().goals[0].name, "Learn Redux");
    }

    #[tokio::test]
    async fn test_reload_replaces_running_status() {
        let api = api(0.0);
        api.save_todo("Walk the dog").await.unwrap();
        let mut store = store(&api);
        store.dispatch(Action::Data(DataAction::Received {
            todos: Vec::new(),
            goals: Vec::new(),
        }));

        store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::NONE,
        ))));
        assert_eq!(last_status_kind(store.state()), Some(StatusKind::Running));

        settle(&mut store, |s| !s.todos.is_empty()).await;
        let latest = store.state().status_bar.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Success);
        assert_eq!(latest.message, "Loaded 1 todos and 0 goals");
    }

    #[tokio::test]
    async fn test_add_todo_failure_leaves_store_untouched() {
        let api = api(1.0);
        let mut store = store(&api);

        store.dispatch(handle_add_todo(&api, "Learn Rust"));

        settle(&mut store, |s| last_status_kind(s) == Some(StatusKind::Error)).await;
        assert!(store.state().todos.is_empty());
        assert_eq!(
            store.state().status_bar.latest().map(|m| m.message.as_str()),
            Some("There was an error adding the todo. Try again.")
        );
    }

    #[tokio::test]
    async fn test_add_todo_after_save() {
        let api = api(0.0);
        let mut store = store(&api);

        store.dispatch(handle_add_todo(&api, "Learn Rust"));
        // nothing until the API answers
        assert!(store.state().todos.is_empty());

        settle(&mut store, |s| !s.todos.is_empty()).await;
        assert_eq!(store.state().todos[0].name, "Learn Rust");
        assert_eq!(api.fetch_todos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_goal_failure_leaves_store_untouched() {
        let api = api(1.0);
        let mut store = store(&api);

        store.dispatch(handle_add_goal(&api, "Run a marathon"));

        settle(&mut store, |s| last_status_kind(s) == Some(StatusKind::Error)).await;
        assert!(store.state().goals.is_empty());
    }

    #[tokio::test]
    async fn test_delete_todo_is_optimistic_and_rolls_back() {
        let api = api(1.0);
        let mut store = store(&api);
        let todo = Todo::new("t1", "Wash the car");
        store.dispatch(Action::Data(DataAction::Received {
            todos: vec![todo.clone()],
            goals: Vec::new(),
        }));

        store.dispatch(handle_delete_todo(&api, todo.clone()));
        assert!(store.state().todos.is_empty());

        settle(&mut store, |s| !s.todos.is_empty()).await;
        assert_eq!(store.state().todos, vec![todo]);
        assert_eq!(last_status_kind(store.state()), Some(StatusKind::Error));
    }

    #[tokio::test]
    async fn test_delete_goal_success_stays_removed() {
        let api = api(0.0);
        let goal = api.save_goal("Read 50 books").await.unwrap();
        let mut store = store(&api);
        store.dispatch(Action::Data(DataAction::Received {
            todos: Vec::new(),
            goals: vec![goal.clone()],
        }));

        store.dispatch(handle_delete_goal(&api, goal));
        assert!(store.state().goals.is_empty());

        for _ in 0..200 {
            if api.fetch_goals().await.unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        store.process_pending();

        assert!(api.fetch_goals().await.unwrap().is_empty());
        assert!(store.state().goals.is_empty());
        assert!(store.state().status_bar.latest().is_none());
    }

    #[tokio::test]
    async fn test_delete_goal_rolls_back_on_failure() {
        let api = api(1.0);
        let mut store = store(&api);
        let goal = Goal::new("g1", "Learn Redux");
        store.dispatch(Action::Data(DataAction::Received {
            todos: Vec::new(),
            goals: vec![goal.clone()],
        }));

        store.dispatch(handle_delete_goal(&api, goal.clone()));
        assert!(store.state().goals.is_empty());

        settle(&mut store, |s| !s.goals.is_empty()).await;
        assert_eq!(store.state().goals, vec![goal]);
        assert_eq!(
            store.state().status_bar.latest().map(|m| m.message.as_str()),
            Some("There was an error removing the goal. It was added back.")
        );
    }

    #[tokio::test]
    async fn test_toggle_todo_rolls_back_on_failure() {
        let api = api(1.0);
        let mut store = store(&api);
        store.dispatch(Action::Data(DataAction::Received {
            todos: vec![Todo::new("t1", "Do laundry")],
            goals: Vec::new(),
        }));

        store.dispatch(handle_toggle_todo(&api, "t1"));
        assert!(store.state().todos[0].complete);

        settle(&mut store, |s| last_status_kind(s) == Some(StatusKind::Error)).await;
        assert!(!store.state().todos[0].complete);
    }
}
