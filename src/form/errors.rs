//! Validation registry - named field errors with at most one entry per field

use super::fields::Field;

/// Error message shown when the required name field is empty
pub const NAME_REQUIRED: &str = "Nome é obrigatório!";

/// Error message shown when a non-empty email fails the format check
pub const EMAIL_INVALID: &str = "E-mail inválido";

/// A single inline validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Collection of field errors, keyed by field
///
/// Keeps insertion order so errors render in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct ValidationRegistry {
    errors: Vec<FieldError>,
}

impl ValidationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an error for `field`, replacing any existing one
    pub fn set_error(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.errors.push(FieldError { field, message }),
        }
    }

    /// Remove the error for `field` (no-op if absent)
    pub fn remove_error(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }

    /// Message for `field`, if it currently has an error
    pub fn get_error_message_by_field_name(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
