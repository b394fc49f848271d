// Title bar component
//
// Renders the app name, the API it talks to and a spinner while background
// work (category fetch, contact creation) is pending.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let ctx = app.render_context();

    let activity = if app.form_panel.form().is_loading_categories() {
        format!(" {} carregando categorias", ctx.spinner_char())
    } else if app.pending_submissions() > 0 {
        format!(" {} enviando", ctx.spinner_char())
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" 📇 MyContacts{}", activity))
        .style(
            Style::default()
                .fg(ctx.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.theme.title))
                .title_top(Line::from(format!(" {} ", app.api_url)).right_aligned()),
        );

    f.render_widget(title, area);
}
