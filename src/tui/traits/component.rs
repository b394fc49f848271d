//! Core component trait
//!
//! Every panel that can be rendered implements `Component`.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components only see what they need; rendering never mutates app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Animation frame counter (spinners)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, animation_frame: usize) -> Self {
        Self {
            theme,
            animation_frame,
        }
    }

    /// Spinner character for the current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
pub trait Component {
    /// Render the component into `area`
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
