//! Contact form controller
//!
//! Owns the field values, the validation registry and the category options of
//! one form instance. Every edit runs synchronously on the UI loop; the only
//! asynchronous piece is the category fetch started by `activate()`.
//!
//! ```text
//! activate() ──► Activation ──► categories::spawn ──► AppEvent::CategoriesSettled
//!                                                            │
//!                        settle_categories() ◄───────────────┘
//! ```
//!
//! The submit flag is never stored: `can_submit()` derives it from the name
//! and the error count on every call.

pub mod categories;
mod errors;
mod fields;
pub mod format;

pub use categories::{Activation, CategoriesSettled};
pub use errors::{ValidationRegistry, EMAIL_INVALID, NAME_REQUIRED};
pub use fields::{Field, FieldValues};

use crate::models::{Category, ContactSubmission};
use format::{format_phone, is_email_valid};

/// Label of the always-present "no category" option
pub const NO_CATEGORY_LABEL: &str = "Sem categoria";

/// One entry of the category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Empty for the "no category" entry
    pub value: String,
    pub label: String,
}

/// State of one contact form instance
#[derive(Debug)]
pub struct ContactForm {
    button_label: String,
    values: FieldValues,
    errors: ValidationRegistry,
    categories: Vec<Category>,
    is_loading_categories: bool,
    /// Activation whose effects are currently live
    live: Option<Activation>,
    activations: u64,
}

impl ContactForm {
    pub fn new(button_label: impl Into<String>) -> Self {
        Self {
            button_label: button_label.into(),
            values: FieldValues::default(),
            errors: ValidationRegistry::new(),
            categories: Vec::new(),
            is_loading_categories: true,
            live: None,
            activations: 0,
        }
    }

    // ─── Lifecycle ──────────────────────────────────────────────────────────

    /// Start an activation and return its token for the category loader
    ///
    /// Returns `None` if the form is already active: the fetch runs once per
    /// activation. Re-activating after `deactivate()` starts over with an
    /// empty category list and the loading flag set.
    pub fn activate(&mut self) -> Option<Activation> {
        if self.live.is_some() {
            return None;
        }

        self.activations += 1;
        let activation = Activation(self.activations);
        self.live = Some(activation);
        self.categories.clear();
        self.is_loading_categories = true;

        tracing::debug!("Contact form activated ({:?})", activation);
        Some(activation)
    }

    /// End the current activation; pending fetch results will be discarded
    pub fn deactivate(&mut self) {
        if let Some(activation) = self.live.take() {
            tracing::debug!("Contact form deactivated ({:?})", activation);
        }
    }

    /// Apply a settled category fetch
    ///
    /// Returns `false` (and changes nothing) when the outcome belongs to an
    /// activation that is no longer live. Otherwise the list is replaced on
    /// success, kept empty on failure, and the loading flag is cleared.
    pub fn settle_categories(&mut self, settled: CategoriesSettled) -> bool {
        if self.live != Some(settled.activation) {
            tracing::debug!(
                "Discarding categories for stale activation {:?}",
                settled.activation
            );
            return false;
        }

        if let Some(categories) = settled.categories {
            self.categories = categories;
        }
        self.is_loading_categories = false;
        true
    }

    // ─── Field edits ────────────────────────────────────────────────────────

    /// Set the name and re-run the required-field rule
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.values.name = value.into();

        if self.values.name.is_empty() {
            self.errors.set_error(Field::Name, NAME_REQUIRED);
        } else {
            self.errors.remove_error(Field::Name);
        }
    }

    /// Set the email and re-run the format rule (empty is valid)
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.values.email = value.into();

        if !self.values.email.is_empty() && !is_email_valid(&self.values.email) {
            self.errors.set_error(Field::Email, EMAIL_INVALID);
        } else {
            self.errors.remove_error(Field::Email);
        }
    }

    /// Store the masked form of the raw phone input
    pub fn set_phone(&mut self, raw: &str) {
        self.values.phone = format_phone(raw);
    }

    pub fn set_category_id(&mut self, value: impl Into<String>) {
        self.values.category_id = value.into();
    }

    /// Route a raw edit to the matching setter
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.set_name(value),
            Field::Email => self.set_email(value),
            Field::Phone => self.set_phone(value),
            Field::CategoryId => self.set_category_id(value),
        }
    }

    // ─── Submission gate ────────────────────────────────────────────────────

    pub fn can_submit(&self) -> bool {
        !self.values.name.is_empty() && self.errors.is_empty()
    }

    /// Forward the current values to `on_submit` if the gate is open
    ///
    /// Returns whether the handler was called.
    pub fn submit<F>(&self, on_submit: F) -> bool
    where
        F: FnOnce(ContactSubmission),
    {
        if !self.can_submit() {
            let blocking: Vec<&str> = self
                .errors
                .errors()
                .iter()
                .map(|e| e.field.key())
                .collect();
            tracing::debug!(
                "Submit blocked (name empty: {}, errors: {:?})",
                self.values.name.is_empty(),
                blocking
            );
            return false;
        }

        on_submit(self.values.to_submission());
        true
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error_message(&self, field: Field) -> Option<&str> {
        self.errors.get_error_message_by_field_name(field)
    }

    pub fn is_loading_categories(&self) -> bool {
        self.is_loading_categories
    }

    /// Selector options: "Sem categoria" followed by the loaded categories
    pub fn category_options(&self) -> Vec<CategoryOption> {
        std::iter::once(CategoryOption {
            value: String::new(),
            label: NO_CATEGORY_LABEL.to_string(),
        })
        .chain(self.categories.iter().map(|c| CategoryOption {
            value: c.id.clone(),
            label: c.name.clone(),
        }))
        .collect()
    }

    /// Display label of the selected category
    pub fn selected_category_label(&self) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == self.values.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or(NO_CATEGORY_LABEL)
    }
}
