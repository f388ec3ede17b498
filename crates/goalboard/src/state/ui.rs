/// The two lists on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Todos,
    Goals,
}

impl Panel {
    pub fn other(self) -> Self {
        match self {
            Panel::Todos => Panel::Goals,
            Panel::Goals => Panel::Todos,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Todos => "Todo List",
            Panel::Goals => "Goal List",
        }
    }

    /// Placeholder shown in an empty input field
    pub fn placeholder(self) -> &'static str {
        match self {
            Panel::Todos => "Add Todo",
            Panel::Goals => "Add Goal",
        }
    }
}

/// Focus, selection and input field state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Panel,
    pub todo_selected: usize,
    pub goal_selected: usize,
    /// Input field content, `None` when the field is closed
    pub input: Option<String>,
}

impl UiState {
    pub fn selected(&self, panel: Panel) -> usize {
        match panel {
            Panel::Todos => self.todo_selected,
            Panel::Goals => self.goal_selected,
        }
    }

    pub fn selected_mut(&mut self, panel: Panel) -> &mut usize {
        match panel {
            Panel::Todos => &mut self.todo_selected,
            Panel::Goals => &mut self.goal_selected,
        }
    }

    /// Keep selections inside the lists after items were removed
    pub fn clamp_selection(&mut self, todos_len: usize, goals_len: usize) {
        self.todo_selected = self.todo_selected.min(todos_len.saturating_sub(1));
        self.goal_selected = self.goal_selected.min(goals_len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_selection() {
        let mut ui = UiState {
            todo_selected: 5,
            goal_selected: 1,
            ..Default::default()
        };

        ui.clamp_selection(3, 0);

        assert_eq!(ui.todo_selected, 2);
        assert_eq!(ui.goal_selected, 0);
    }

    #[test]
    fn test_panel_other() {
        assert_eq!(Panel::Todos.other(), Panel::Goals);
        assert_eq!(Panel::Goals.other(), Panel::Todos);
    }
}
