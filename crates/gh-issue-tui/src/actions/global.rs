//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation by the keyboard middleware)
    KeyPressed(KeyEvent),
    /// Return to the repository list screen
    Back,
    /// Quit the application
    Quit,
}
