use ratatui::crossterm::event::KeyEvent;

/// Global actions - not tied to a list
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
}
