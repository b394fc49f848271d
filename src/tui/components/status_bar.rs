// Status bar component
//
// Renders keybind hints for the focused form element plus the global keys.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLOBAL_HINT: &str = "Esc:quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let text = match app.focus_hint() {
        Some(hint) => format!(" {} │ {}", hint, GLOBAL_HINT),
        None => format!(" {}", GLOBAL_HINT),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
