// Screen layout - called on every frame
//
// ┌ title ─────────────────────────┐
// │ form                           │
// └ status ────────────────────────┘
//
// Diagnostics never reach this screen; they go to the log file.

use super::app::App;
use super::components::{status_bar, title_bar};
use super::traits::Component;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    let ctx = app.render_context();
    app.form_panel.render(f, chunks[1], &ctx);

    status_bar::render(f, chunks[2], app);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
