use crate::view_models::ListViewModel;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render a todo or goal list
pub fn render(vm: &ListViewModel, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(vm.title.as_str())
        .borders(Borders::ALL)
        .border_style(vm.border_style)
        .title_style(vm.title_style);

    if vm.rows.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            vm.empty_hint,
            vm.border_style,
        )))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = vm
        .rows
        .iter()
        .map(|row| ListItem::new(Line::from(Span::styled(row.label.as_str(), row.style))))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(vm.rows.iter().position(|row| row.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(vm.selected_bg))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut list_state);
}
