use crate::theme::Theme;
use crate::view_models::InputViewModel;
use ratatui::{
    layout::{Position, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(vm: &InputViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(vm.title.as_str())
        .borders(Borders::ALL)
        .border_style(theme.panel_border(vm.editing))
        .title_style(theme.panel_title(vm.editing));

    f.render_widget(Paragraph::new(vm.text.as_str()).style(vm.style).block(block), area);

    if let Some(cursor) = vm.cursor {
        let x = (area.x + 1)
            .saturating_add(cursor)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
