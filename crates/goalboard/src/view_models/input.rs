use crate::state::AppState;
use crate::theme::Theme;
use ratatui::style::Style;

/// The input line below the lists: either the field being edited or key hints
#[derive(Debug, Clone, PartialEq)]
pub struct InputViewModel {
    pub title: String,
    pub text: String,
    pub editing: bool,
    pub style: Style,
    /// Cursor column inside the field, `None` when not editing
    pub cursor: Option<u16>,
}

const KEY_HINTS: &str =
    "a add  x delete  space toggle  tab switch  j/k move  r reload  q quit";

impl InputViewModel {
    pub fn from_state(state: &AppState, theme: &Theme) -> Self {
        let focus = state.ui.focus;
        match &state.ui.input {
            Some(input) if input.is_empty() => Self {
                title: format!(" {} ", focus.placeholder()),
                text: format!("{}...", focus.placeholder()),
                editing: true,
                style: theme.muted(),
                cursor: Some(0),
            },
            Some(input) => Self {
                title: format!(" {} ", focus.placeholder()),
                text: input.clone(),
                editing: true,
                style: theme.text(),
                cursor: Some(input.chars().count() as u16),
            },
            None => Self {
                title: " Keys ".to_string(),
                text: KEY_HINTS.to_string(),
                editing: false,
                style: theme.muted(),
                cursor: None,
            },
        }
    }
}
