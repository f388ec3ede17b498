//! CheckerMiddleware - rejects todos and goals with banned names

use crate::actions::{Action, GoalAction, StatusBarAction, TodoAction};
use crate::state::AppState;
use goalboard_store::{Dispatcher, Middleware};

const REJECTION_MESSAGE: &str = "Nope. That's a bad idea.";

pub struct CheckerMiddleware {
    /// Lowercased, never empty
    banned_words: Vec<String>,
}

impl CheckerMiddleware {
    pub fn new(banned_words: Vec<String>) -> Self {
        Self {
            banned_words: banned_words
                .into_iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// First banned word contained in `name`, ignoring case
    fn offending_word(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.banned_words
            .iter()
            .find(|word| name.contains(word.as_str()))
            .map(String::as_str)
    }
}

impl Middleware<AppState, Action> for CheckerMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher<Action>) -> bool {
        let (kind, name) = match action {
            Action::Todo(TodoAction::Add(todo)) => ("todo", &todo.name),
            Action::Goal(GoalAction::Add(goal)) => ("goal", &goal.name),
            _ => return true,
        };

        match self.offending_word(name) {
            Some(word) => {
                log::warn!("CheckerMiddleware: rejected {} {:?} (contains {:?})", kind, name, word);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    REJECTION_MESSAGE,
                    "checker",
                )));
                false
            }
            None => true,
        }
    }
}
