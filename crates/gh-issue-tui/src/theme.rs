use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_error: Color,
    pub status_busy: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Issue labels
    pub label_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_error: tailwind::RED.c400,
            status_busy: tailwind::YELLOW.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            label_fg: tailwind::AMBER.c400,
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for the active border of a focused widget
    pub fn focused_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row in a list
    pub fn selection(&self) -> Style {
        Style::default().bg(self.selected_bg).fg(self.selected_fg)
    }

    /// Style for muted hint text
    pub fn hint(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for error text
    pub fn error(&self) -> Style {
        Style::default().fg(self.status_error)
    }
}
