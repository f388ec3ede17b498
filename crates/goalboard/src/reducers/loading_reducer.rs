use crate::actions::{Action, DataAction};

/// Loading stays true until the initial data arrives
pub fn reduce_loading(loading: bool, action: &Action) -> bool {
    match action {
        Action::Data(DataAction::Received { .. }) => false,
        _ => loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::UiAction;

    #[test]
    fn test_received_ends_loading() {
        let action = Action::Data(DataAction::Received {
            todos: Vec::new(),
            goals: Vec::new(),
        });
        assert!(!reduce_loading(true, &action));
        assert!(!reduce_loading(false, &action));
    }

    #[test]
    fn test_other_actions_keep_loading() {
        assert!(reduce_loading(true, &Action::Ui(UiAction::FocusNext)));
    }
}
