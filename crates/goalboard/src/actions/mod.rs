//! Actions module
//!
//! Actions are tagged by the slice of state they target. `Thunk` actions
//! carry a deferred action creator instead of data and are consumed by
//! the thunk middleware before they reach any reducer.

pub mod data;
pub mod global;
pub mod goal;
pub mod status_bar;
pub mod todo;
pub mod ui;

pub use data::DataAction;
pub use global::GlobalAction;
pub use goal::GoalAction;
pub use status_bar::StatusBarAction;
pub use todo::TodoAction;
pub use ui::UiAction;

use crate::state::AppState;
use goalboard_store::{AsThunk, Thunk};

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (key input, quit)
    Global(GlobalAction),
    /// Todo list actions
    Todo(TodoAction),
    /// Goal list actions
    Goal(GoalAction),
    /// Data loaded from the API
    Data(DataAction),
    /// Panel focus, selection and input field
    Ui(UiAction),
    /// User feedback messages
    StatusBar(StatusBarAction),
    /// Deferred action creator, see `crate::thunks`
    Thunk(Thunk<AppState, Action>),
}

impl Action {
    /// Wrap a closure as a thunk action
    pub fn thunk<F>(f: F) -> Self
    where
        F: Fn(&goalboard_store::Dispatcher<Action>, &AppState) + Send + Sync + 'static,
    {
        Action::Thunk(Thunk::new(f))
    }

    /// Per-keystroke edits of the input field, too frequent to be worth logging
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            Action::Ui(UiAction::InputChar(_) | UiAction::InputBackspace)
        )
    }
}

impl AsThunk<AppState, Action> for Action {
    fn as_thunk(&self) -> Option<&Thunk<AppState, Action>> {
        match self {
            Action::Thunk(thunk) => Some(thunk),
            _ => None,
        }
    }
}
