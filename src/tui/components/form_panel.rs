//! Contact form panel
//!
//! Terminal rendition of the contact form: three text inputs, the category
//! selector and the submit button. The panel owns the `ContactForm` and turns
//! keystrokes into field edits; every edit runs the form's rules before the
//! next frame is drawn.
//!
//! Submitting is a request, not an action: Enter on the button raises a flag
//! that App picks up and forwards to `ContactForm::submit` together with the
//! submission handler. The key is always consumed, so it never falls through
//! to the global handlers.

use crate::form::format::PHONE_MAX_LEN;
use crate::form::{ContactForm, Field};
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Maximum width of the form column
const FORM_WIDTH: u16 = 60;

/// Which part of the form receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            Self::Field(Field::Name) => Self::Field(Field::Email),
            Self::Field(Field::Email) => Self::Field(Field::Phone),
            Self::Field(Field::Phone) => Self::Field(Field::CategoryId),
            Self::Field(Field::CategoryId) => Self::Submit,
            Self::Submit => Self::Field(Field::Name),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Field(Field::Name) => Self::Submit,
            Self::Field(Field::Email) => Self::Field(Field::Name),
            Self::Field(Field::Phone) => Self::Field(Field::Email),
            Self::Field(Field::CategoryId) => Self::Field(Field::Phone),
            Self::Submit => Self::Field(Field::CategoryId),
        }
    }
}

pub struct FormPanel {
    form: ContactForm,
    focus: FormFocus,
    submit_requested: bool,
}

impl FormPanel {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            focus: FormFocus::Field(Field::Name),
            submit_requested: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Consume a pending submit request (Enter on the button)
    pub fn take_submit_request(&mut self) -> bool {
        std::mem::take(&mut self.submit_requested)
    }

    // ─── Editing ────────────────────────────────────────────────────────────

    fn type_char(&mut self, field: Field, c: char) {
        let mut value = self.form.values().get(field).to_string();

        // The phone input stops accepting keystrokes once the masked value is full
        if field == Field::Phone && value.chars().count() >= PHONE_MAX_LEN {
            return;
        }

        value.push(c);
        self.form.set_field(field, &value);
    }

    fn delete_char(&mut self, field: Field) {
        let value = if field == Field::Phone {
            // Drop the last digit, not the last mask character
            let mut digits: String = self
                .form
                .values()
                .phone
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            digits.pop();
            digits
        } else {
            let mut value = self.form.values().get(field).to_string();
            value.pop();
            value
        };

        self.form.set_field(field, &value);
    }

    /// Move the category selection; disabled while the options are loading
    fn cycle_category(&mut self, forward: bool) {
        if self.form.is_loading_categories() {
            return;
        }

        let options = self.form.category_options();
        let current = options
            .iter()
            .position(|o| o.value == self.form.values().category_id)
            .unwrap_or(0);

        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };

        self.form.set_category_id(options[next].value.clone());
    }

    // ─── Rendering ──────────────────────────────────────────────────────────

    fn render_text_input(&self, f: &mut Frame, area: Rect, field: Field, ctx: &RenderContext) {
        let theme = ctx.theme;
        let value = self.form.values().get(field);
        let focused = self.focus == FormFocus::Field(field);

        let border_color = if self.form.error_message(field).is_some() {
            theme.error
        } else if focused {
            theme.border_focused
        } else {
            theme.border
        };

        // Floating label: placeholder inside while empty, title once filled
        let (content, title) = if value.is_empty() {
            (
                Line::from(Span::styled(
                    field.placeholder(),
                    Style::default().fg(theme.placeholder),
                )),
                String::new(),
            )
        } else {
            (
                Line::from(Span::styled(value, Style::default().fg(theme.foreground))),
                format!(" {} ", field.placeholder()),
            )
        };

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );
        f.render_widget(input, area);

        if focused {
            let max_x = area.right().saturating_sub(2);
            let x = (area.x + 1 + value.width() as u16).min(max_x);
            f.set_cursor_position((x, area.y + 1));
        }
    }

    fn render_category_select(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = self.focus == FormFocus::Field(Field::CategoryId);

        let (content, border_color) = if self.form.is_loading_categories() {
            (
                Span::styled(
                    format!("{} Carregando...", ctx.spinner_char()),
                    Style::default().fg(theme.disabled),
                ),
                theme.disabled,
            )
        } else {
            let style = if focused {
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            let border = if focused {
                theme.border_focused
            } else {
                theme.border
            };
            (
                Span::styled(format!("‹ {} ›", self.form.selected_category_label()), style),
                border,
            )
        };

        let select = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", Field::CategoryId.placeholder())),
        );
        f.render_widget(select, area);
    }

    fn render_error(&self, f: &mut Frame, area: Rect, field: Field, ctx: &RenderContext) {
        if let Some(message) = self.form.error_message(field) {
            let error = Paragraph::new(format!(" {}", message))
                .style(Style::default().fg(ctx.theme.error));
            f.render_widget(error, area);
        }
    }

    fn render_button(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = self.focus == FormFocus::Submit;
        let enabled = self.form.can_submit();

        let label_style = match (enabled, focused) {
            (true, true) => Style::default()
                .fg(theme.button_fg)
                .bg(theme.button)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(theme.button)
                .add_modifier(Modifier::BOLD),
            (false, _) => Style::default()
                .fg(theme.disabled)
                .add_modifier(Modifier::DIM),
        };

        let border_color = if focused {
            theme.border_focused
        } else if enabled {
            theme.button
        } else {
            theme.disabled
        };

        let button = Paragraph::new(Span::styled(self.form.button_label(), label_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(border_color)),
            );
        f.render_widget(button, area);
    }
}

impl Component for FormPanel {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.border))
            .title(" Novo contato ");
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(FORM_WIDTH.min(inner.width)),
                Constraint::Fill(1),
            ])
            .split(inner)[1];

        // Each field: 3-line input + 1-line error slot
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(column);

        for (i, field) in Field::all().iter().enumerate() {
            let input_area = rows[i * 2];
            if *field == Field::CategoryId {
                self.render_category_select(f, input_area, ctx);
            } else {
                self.render_text_input(f, input_area, *field, ctx);
            }
            self.render_error(f, rows[i * 2 + 1], *field, ctx);
        }

        self.render_button(f, rows[8], ctx);
    }
}

impl Interactive for FormPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match (key.code, self.focus) {
            (KeyCode::Tab | KeyCode::Down, _) => self.focus = self.focus.next(),
            (KeyCode::BackTab | KeyCode::Up, _) => self.focus = self.focus.prev(),

            (KeyCode::Enter, FormFocus::Submit) => self.submit_requested = true,
            (KeyCode::Enter, FormFocus::Field(_)) => self.focus = self.focus.next(),

            (KeyCode::Left, FormFocus::Field(Field::CategoryId)) => self.cycle_category(false),
            (KeyCode::Right | KeyCode::Char(' '), FormFocus::Field(Field::CategoryId)) => {
                self.cycle_category(true)
            }

            (KeyCode::Backspace, FormFocus::Field(field)) if field != Field::CategoryId => {
                self.delete_char(field)
            }
            (KeyCode::Char(c), FormFocus::Field(field))
                if field != Field::CategoryId && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.type_char(field, c)
            }

            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            FormFocus::Field(Field::CategoryId) => Some("←→:category  Tab:next"),
            FormFocus::Field(_) => Some("type to edit  Tab/↓:next  Shift+Tab/↑:prev"),
            FormFocus::Submit => Some("Enter:submit  Tab:next"),
        }
    }
}
