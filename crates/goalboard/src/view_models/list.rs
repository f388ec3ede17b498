//! List View Model
//!
//! Todos and goals share the same list presentation. Completed todos are
//! struck through. Goals never are.

use crate::state::{AppState, Panel};
use crate::theme::Theme;
use ratatui::style::{Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct ListRowViewModel {
    pub label: String,
    pub style: Style,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    pub title: String,
    pub focused: bool,
    pub rows: Vec<ListRowViewModel>,
    /// Shown instead of rows when the list is empty
    pub empty_hint: &'static str,
    pub border_style: Style,
    pub title_style: Style,
    pub selected_bg: ratatui::style::Color,
}

impl ListViewModel {
    pub fn todos(state: &AppState, theme: &Theme) -> Self {
        let selected = state.ui.selected(Panel::Todos);
        let rows = state
            .todos
            .iter()
            .enumerate()
            .map(|(i, todo)| {
                let style = if todo.complete {
                    theme.muted().add_modifier(Modifier::CROSSED_OUT)
                } else {
                    theme.text()
                };
                let check = if todo.complete { "[x]" } else { "[ ]" };
                ListRowViewModel {
                    label: format!("{} {}", check, todo.name),
                    style,
                    selected: i == selected,
                }
            })
            .collect();
        Self::build(state, theme, Panel::Todos, rows, "No todos yet - press a to add one")
    }

    pub fn goals(state: &AppState, theme: &Theme) -> Self {
        let selected = state.ui.selected(Panel::Goals);
        let rows = state
            .goals
            .iter()
            .enumerate()
            .map(|(i, goal)| ListRowViewModel {
                label: goal.name.clone(),
                style: theme.text(),
                selected: i == selected,
            })
            .collect();
        Self::build(state, theme, Panel::Goals, rows, "No goals yet - press a to add one")
    }

    fn build(
        state: &AppState,
        theme: &Theme,
        panel: Panel,
        rows: Vec<ListRowViewModel>,
        empty_hint: &'static str,
    ) -> Self {
        let focused = state.ui.focus == panel;
        let title = format!(" {} ({}) ", panel.title(), rows.len());
        Self {
            title,
            focused,
            // only the focused list shows its cursor
            rows: rows
                .into_iter()
                .map(|row| ListRowViewModel {
                    selected: row.selected && focused,
                    ..row
                })
                .collect(),
            empty_hint,
            border_style: theme.panel_border(focused),
            title_style: theme.panel_title(focused),
            selected_bg: theme.selected_bg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Goal, Todo};

    fn state() -> AppState {
        AppState {
            loading: false,
            todos: vec![
                Todo::new("1", "Walk the dog"),
                Todo {
                    complete: true,
                    ..Todo::new("2", "Do laundry")
                },
            ],
            goals: vec![Goal::new("g", "Learn Redux")],
            ..AppState::default()
        }
    }

    #[test]
    fn test_todos_view_model() {
        let mut state = state();
        state.ui.todo_selected = 1;
        let vm = ListViewModel::todos(&state, &Theme::default());

        assert!(vm.focused);
        assert_eq!(vm.title, " Todo List (2) ");
        assert_eq!(vm.rows[0].label, "[ ] Walk the dog");
        assert_eq!(vm.rows[1].label, "[x] Do laundry");
        assert!(vm.rows[1].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!vm.rows[0].selected);
        assert!(vm.rows[1].selected);
    }

    #[test]
    fn test_unfocused_list_hides_cursor() {
        let vm = ListViewModel::goals(&state(), &Theme::default());

        assert!(!vm.focused);
        assert_eq!(vm.rows[0].label, "Learn Redux");
        assert!(!vm.rows[0].selected);
    }
}
