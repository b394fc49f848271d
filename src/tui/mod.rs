// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, background task messages)
// - Rendering the form and the shell around it

pub mod app;
pub mod components;
pub mod theme;
pub mod traits;
mod ui;

use crate::events::AppEvent;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::Handled;

/// Spinner and toast-expiry cadence; the only wake-up while idle
const TICK_RATE: Duration = Duration::from_millis(120);

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal even
/// when the loop fails.
pub async fn run_tui(app: &mut App, event_rx: &mut mpsc::Receiver<AppEvent>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, app, event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Sleeps until something happens and redraws after every wake-up, so each
/// field edit is visible on the next frame. Wakes on:
/// 1. Terminal input (keys, resize)
/// 2. Timer ticks (spinners, toast expiry)
/// 3. Messages from background tasks (categories, contact outcomes)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut terminal_events = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_RATE);

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(Event::Key(key_event))) => handle_key_event(app, key_event),
                // Resize and the rest only need the redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(app_event) = event_rx.recv() => {
                app.handle_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Ctrl+C → form panel → global fallbacks
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Some terminals also report releases
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    if app.dispatch_key(key_event) == Handled::Yes {
        return;
    }

    if key_event.code == KeyCode::Esc {
        app.should_quit = true;
    }
}
