// Color theme for the TUI
//
// Components never hardcode colors; they read them from the Theme passed in
// through RenderContext.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Colors and border style shared by every component
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    pub title: Color,
    pub status_bar: Color,

    /// Selected option in the category selector
    pub selection_fg: Color,

    // Form
    pub placeholder: Color,
    pub error: Color,
    pub button: Color,
    pub button_fg: Color,
    pub disabled: Color,

    // Toasts
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,

            selection_fg: Color::Yellow,

            placeholder: Color::DarkGray,
            error: Color::Red,
            button: Color::Cyan,
            button_fg: Color::Black,
            disabled: Color::DarkGray,

            success: Color::Green,
        }
    }
}
