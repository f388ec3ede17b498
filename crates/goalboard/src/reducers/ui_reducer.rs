use crate::actions::{Action, UiAction};
use crate::state::UiState;

/// Reducer for focus, selection and the input field
///
/// List lengths are the ones after this action was applied to the lists,
/// so selections never point past the end.
pub fn reduce_ui(mut ui: UiState, action: &Action, todos_len: usize, goals_len: usize) -> UiState {
    if let Action::Ui(ui_action) = action {
        let focused_len = match ui.focus {
            crate::state::Panel::Todos => todos_len,
            crate::state::Panel::Goals => goals_len,
        };

        match ui_action {
            UiAction::FocusNext => ui.focus = ui.focus.other(),
            UiAction::SelectNext => {
                let selected = ui.selected_mut(ui.focus);
                if *selected + 1 < focused_len {
                    *selected += 1;
                }
            }
            UiAction::SelectPrevious => {
                let selected = ui.selected_mut(ui.focus);
                *selected = selected.saturating_sub(1);
            }
            UiAction::InputStart => {
                if ui.input.is_none() {
                    ui.input = Some(String::new());
                }
            }
            UiAction::InputChar(c) => {
                if let Some(input) = ui.input.as_mut() {
                    input.push(*c);
                }
            }
            UiAction::InputBackspace => {
                if let Some(input) = ui.input.as_mut() {
                    input.pop();
                }
            }
            UiAction::InputClear => {
                if let Some(input) = ui.input.as_mut() {
                    input.clear();
                }
            }
            UiAction::InputCancel => ui.input = None,
            UiAction::InputSubmitted(panel) => {
                if ui.focus == *panel {
                    ui.input = None;
                }
            }
        }
    }

    ui.clamp_selection(todos_len, goals_len);
    ui
}
