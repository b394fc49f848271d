// Messages delivered from background tasks to the UI loop
//
// The UI loop is the only owner of form state. Background work (category
// fetch, contact creation) reports back through an mpsc channel of AppEvent.

use crate::form::CategoriesSettled;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A category fetch finished (successfully or not)
    CategoriesSettled(CategoriesSettled),

    /// The API accepted a submitted contact
    ContactCreated { name: String },

    /// The API rejected a submitted contact, or could not be reached
    ContactFailed { name: String, error: String },
}
