//! KeyboardMiddleware - translates key presses into actions
//!
//! Raw `GlobalAction::KeyPressed` never reaches the reducer. Depending on
//! the state it becomes:
//! - input field editing while the field is open
//! - quit only, while the initial data is loading
//! - list navigation and thunks (add, delete, toggle, reload) otherwise

use crate::actions::{Action, GlobalAction, StatusBarAction, UiAction};
use crate::api::Api;
use crate::state::{AppState, Panel};
use crate::thunks;
use goalboard_store::{Dispatcher, Middleware};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware {
    api: Api,
}

impl KeyboardMiddleware {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher<Action>) {
        // Ctrl+C: Emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if let Some(input) = &state.ui.input {
            self.handle_input_key(key, input, state.ui.focus, dispatcher);
        } else if state.loading {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            }
        } else {
            self.handle_list_key(key, state, dispatcher);
        }
    }

    fn handle_input_key(
        &self,
        key: KeyEvent,
        input: &str,
        focus: Panel,
        dispatcher: &Dispatcher<Action>,
    ) {
        let action = match key.code {
            KeyCode::Esc => Action::Ui(UiAction::InputCancel),
            KeyCode::Enter => {
                let name = input.trim();
                if name.is_empty() {
                    return;
                }
                log::debug!("KeyboardMiddleware: submitting {:?} to {:?}", name, focus);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
                    format!("Saving {:?}...", name),
                    focus.placeholder(),
                )));
                match focus {
                    Panel::Todos => thunks::handle_add_todo(&self.api, name),
                    Panel::Goals => thunks::handle_add_goal(&self.api, name),
                }
            }
            KeyCode::Backspace => Action::Ui(UiAction::InputBackspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::Ui(UiAction::InputClear)
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Action::Ui(UiAction::InputChar(c))
            }
            _ => return,
        };
        dispatcher.dispatch(action);
    }

    fn handle_list_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher<Action>) {
        let focus = state.ui.focus;
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Global(GlobalAction::Quit),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => Action::Ui(UiAction::FocusNext),
            KeyCode::Down | KeyCode::Char('j') => Action::Ui(UiAction::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Action::Ui(UiAction::SelectPrevious),
            KeyCode::Char('a') | KeyCode::Char('i') => Action::Ui(UiAction::InputStart),
            KeyCode::Char('r') => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
                    "Reloading todos and goals...",
                    "reload",
                )));
                thunks::handle_initial_data(&self.api)
            }
            KeyCode::Char('x') | KeyCode::Delete => match focus {
                Panel::Todos => match state.selected_todo() {
                    Some(todo) => thunks::handle_delete_todo(&self.api, todo.clone()),
                    None => return,
                },
                Panel::Goals => match state.selected_goal() {
                    Some(goal) => thunks::handle_delete_goal(&self.api, goal.clone()),
                    None => return,
                },
            },
            KeyCode::Char(' ') | KeyCode::Enter if focus == Panel::Todos => {
                match state.selected_todo() {
                    Some(todo) => thunks::handle_toggle_todo(&self.api, todo.id.clone()),
                    None => return,
                }
            }
            _ => return,
        };
        dispatcher.dispatch(action);
    }
}

impl Middleware<AppState, Action> for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher<Action>) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                self.handle_key(*key, state, dispatcher);
                false
            }
            _ => true,
        }
    }
}
