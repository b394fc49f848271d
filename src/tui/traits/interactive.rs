//! Interactive trait for components that handle keyboard input
//!
//! The App routes keys to the form panel first; anything it does not
//! consume bubbles up to the global handlers.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Focused Component (handle_key)
///    │
///    │ Handled::No
///    ▼
/// App (global handlers: Esc, Ctrl+C)
/// ```
pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
