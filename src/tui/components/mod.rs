// Components module - UI building blocks
//
// Shell components rendered around the form:
// - Title bar: app name, API URL, activity spinner
// - Status bar: keybind hints
// - Toast: transient submission outcome

pub mod form_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use form_panel::FormPanel;
pub use toast::Toast;
