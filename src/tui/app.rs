// TUI application state
//
// App is the orchestrator: it owns the form panel, routes keys to it and
// applies the messages background tasks send to the UI loop.

use super::components::{FormPanel, Toast};
use super::theme::Theme;
use super::traits::{Handled, Interactive, RenderContext};
use crate::events::AppEvent;
use crate::form::ContactForm;
use crate::models::ContactSubmission;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

pub struct App {
    pub form_panel: FormPanel,
    pub theme: Theme,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    pub should_quit: bool,

    /// Shown in the title bar
    pub api_url: String,

    /// Animation frame counter for spinners
    animation_frame: usize,

    /// Submission handler target: the contact-creation worker
    submissions: mpsc::Sender<ContactSubmission>,

    /// Submissions queued but not yet answered by the API
    pending: usize,
}

impl App {
    pub fn new(
        form: ContactForm,
        api_url: impl Into<String>,
        submissions: mpsc::Sender<ContactSubmission>,
    ) -> Self {
        Self {
            form_panel: FormPanel::new(form),
            theme: Theme::default(),
            toast: None,
            should_quit: false,
            api_url: api_url.into(),
            animation_frame: 0,
            submissions,
            pending: 0,
        }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.theme, self.animation_frame)
    }

    /// Advance spinners and drop an expired toast
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn pending_submissions(&self) -> usize {
        self.pending
    }

    pub fn focus_hint(&self) -> Option<&'static str> {
        self.form_panel.focus_hint()
    }

    /// Route a key to the form panel
    ///
    /// A submit request raised by the form is served here, before the next
    /// frame, so the gate sees exactly the state the user saw.
    pub fn dispatch_key(&mut self, key: KeyEvent) -> Handled {
        let handled = self.form_panel.handle_key(key);
        if self.form_panel.take_submit_request() {
            self.submit_form();
        }
        handled
    }

    /// Run the form's submit with the worker channel as handler
    ///
    /// Returns whether the gate let the submission through.
    pub fn submit_form(&mut self) -> bool {
        let tx = &self.submissions;
        let mut queued = None;

        let called = self.form_panel.form().submit(|submission| {
            tracing::info!("Submitting contact '{}'", submission.name);
            queued = Some(tx.try_send(submission));
        });

        match queued {
            Some(Ok(())) => self.pending += 1,
            Some(Err(e)) => {
                tracing::error!("Failed to queue contact: {}", e);
                self.toast = Some(Toast::error("Não foi possível enviar o contato"));
            }
            None => {}
        }

        called
    }

    /// Apply a message from a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CategoriesSettled(settled) => {
                self.form_panel.form_mut().settle_categories(settled);
            }
            AppEvent::ContactCreated { name } => {
                self.pending = self.pending.saturating_sub(1);
                self.toast = Some(Toast::success(format!("Contato {} cadastrado", name)));
            }
            AppEvent::ContactFailed { name, error } => {
                self.pending = self.pending.saturating_sub(1);
                tracing::debug!("Toast for failed contact '{}': {}", name, error);
                self.toast = Some(Toast::error(format!("Falha ao cadastrar {}", name)));
            }
        }
    }
}
