use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{InputViewModel, ListViewModel, StatusBarViewModel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub mod input_view;
pub mod list_view;
pub mod loading_view;
pub mod status_bar;

/// Render the entire application UI
pub fn render(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    if state.loading {
        loading_view::render(theme, rows[0], f);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        list_view::render(&ListViewModel::todos(state, theme), columns[0], f);
        list_view::render(&ListViewModel::goals(state, theme), columns[1], f);
    }

    input_view::render(&InputViewModel::from_state(state, theme), theme, rows[1], f);
    f.render_widget(
        status_bar::StatusBarWidget(&StatusBarViewModel::from_state(state, theme)),
        rows[2],
    );
}
