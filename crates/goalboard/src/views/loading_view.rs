use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown until the initial todos and goals arrive
pub fn render(theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(false));

    let text = Paragraph::new("Loading todos and goals...")
        .style(theme.muted())
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(text, area);
}
