use ratatui::style::{Color, Modifier, Style};

/// Colors used across all views
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub selected_bg: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub status_running: Color,
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_primary: Color::Rgb(24, 26, 33),
            text_primary: Color::Rgb(220, 223, 228),
            text_muted: Color::Rgb(110, 118, 129),
            accent: Color::Rgb(97, 175, 239),
            selected_bg: Color::Rgb(44, 49, 60),
            border_focused: Color::Rgb(97, 175, 239),
            border_unfocused: Color::Rgb(62, 68, 81),
            status_running: Color::Rgb(229, 192, 123),
            status_success: Color::Rgb(152, 195, 121),
            status_warning: Color::Rgb(209, 154, 102),
            status_error: Color::Rgb(224, 108, 117),
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border_unfocused)
        }
    }

    pub fn panel_title(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.accent);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
