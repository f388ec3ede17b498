use crate::actions::{Action, DataAction, TodoAction};
use crate::domain_models::Todo;

/// Reducer for the todo list
pub fn reduce_todos(mut todos: Vec<Todo>, action: &Action) -> Vec<Todo> {
    match action {
        Action::Todo(TodoAction::Add(todo)) => {
            todos.push(todo.clone());
            todos
        }
        Action::Todo(TodoAction::Remove(id)) => {
            todos.retain(|todo| &todo.id != id);
            todos
        }
        Action::Todo(TodoAction::Toggle(id)) => todos
            .into_iter()
            .map(|todo| if &todo.id == id { todo.toggled() } else { todo })
            .collect(),
        Action::Data(DataAction::Received { todos, .. }) => todos.clone(),
        _ => todos,
    }
}
