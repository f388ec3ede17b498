use crate::state::Panel;

/// Actions for panel focus, list selection and the input field
#[derive(Debug, Clone)]
pub enum UiAction {
    /// Move focus to the other panel
    FocusNext,
    /// Move the selection down in the focused panel
    SelectNext,
    /// Move the selection up in the focused panel
    SelectPrevious,
    /// Open the input field for the focused panel
    InputStart,
    InputChar(char),
    InputBackspace,
    /// Clear the whole input line (Ctrl+U)
    InputClear,
    /// Close the input field, discarding its content
    InputCancel,
    /// The entered item was saved - clear and close the input field
    InputSubmitted(Panel),
}
