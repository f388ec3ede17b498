//! Status Bar View Model

use crate::state::{AppState, StatusKind};
use crate::theme::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Formatted for display (e.g., "14:32:05"), empty for the welcome line
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState, theme: &Theme) -> Self {
        if let Some(msg) = state.status_bar.latest() {
            let fg_color = match msg.kind {
                StatusKind::Running => theme.status_running,
                StatusKind::Success => theme.status_success,
                StatusKind::Warning => theme.status_warning,
                StatusKind::Error => theme.status_error,
            };

            Self {
                emoji: msg.kind.emoji(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.clone(),
                message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style: theme.muted(),
            }
        } else {
            Self {
                emoji: "👋",
                message: "Welcome to goalboard".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: theme.muted().add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: theme.muted(),
            }
        }
    }
}
