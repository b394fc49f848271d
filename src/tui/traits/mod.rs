//! Component trait system for the TUI
//!
//! Components declare their own capabilities through traits instead of App
//! knowing how to render and route input for every panel.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                  App                    │
//! │   (orchestrator: routes keys, events)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!               ┌──────────┐
//!               │   Form   │
//!               │  Panel   │
//!               └──────────┘
//! ```
//!
//! - [`Component`] - render
//! - [`Interactive`] - keyboard input

mod component;
mod interactive;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Interactive};
