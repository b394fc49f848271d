//! Field identifiers and the current values held by a form instance

use crate::models::ContactSubmission;

/// One named input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    CategoryId,
}

impl Field {
    /// All fields in display order
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Phone, Field::CategoryId]
    }

    /// Stable key used in logs and error lookups
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::CategoryId => "categoryId",
        }
    }

    /// Placeholder shown when the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Nome *",
            Field::Email => "E-mail",
            Field::Phone => "Telefone",
            Field::CategoryId => "Categoria",
        }
    }
}

/// Current values of the four inputs, all starting empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category_id: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::CategoryId => &self.category_id,
        }
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            category_id: self.category_id.clone(),
        }
    }
}
