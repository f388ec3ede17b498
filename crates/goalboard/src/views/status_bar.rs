//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts_str, vm.metadata_style);
            x += ts_str.len() as u16;
        }

        // emoji usually renders two cells wide
        buf.set_string(x, area.y, vm.emoji, vm.message_style);
        x += 3;

        let source_width = if vm.source.is_empty() {
            0
        } else {
            vm.source.chars().count() + 3
        };

        let available_width = area
            .width
            .saturating_sub((x - area.x) + source_width as u16 + 2) as usize;

        if vm.message.chars().count() > available_width {
            let truncated: String = vm
                .message
                .chars()
                .take(available_width.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if !vm.source.is_empty() {
            let source_str = format!("[{}]", vm.source);
            let source_x = (area.x + area.width)
                .saturating_sub(source_str.chars().count() as u16 + 1);
            buf.set_string(source_x, area.y, &source_str, vm.metadata_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::theme::Theme;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_renders_welcome_message() {
        let vm = StatusBarViewModel::from_state(&AppState::default(), &Theme::default());
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBarWidget(&vm).render(area, &mut buf);

        assert!(row_text(&buf, 60).contains("Welcome to goalboard"));
    }

    #[test]
    fn test_narrow_area_does_not_panic() {
        let vm = StatusBarViewModel::from_state(&AppState::default(), &Theme::default());
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        StatusBarWidget(&vm).render(area, &mut buf);
    }
}
