// MyContacts - terminal contact form
//
// Registers contacts in a MyContacts API. The form validates as the user
// types, loads its category options in the background and hands finished
// submissions to a worker that creates the contact.
//
// Architecture:
// - Form (form::ContactForm): field values, validation, submit gate
// - Services (reqwest): category listing and contact creation
// - TUI (ratatui): renders the form, routes keys, shows outcomes
// - Event system: mpsc channels carry background results to the UI loop

mod cli;
mod config;
mod events;
mod form;
mod models;
mod services;
mod submitter;
mod tui;

use anyhow::{Context, Result};
use config::{Config, LogRotation, VERSION};
use form::ContactForm;
use services::{CategoriesService, CategorySource, ContactsService};
use std::sync::Arc;
use std::time::Duration;
use submitter::ContactSubmitter;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --path)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // The guard must live until exit so buffered file logs get flushed
    let _file_guard = init_tracing(&config);

    tracing::info!("mycontacts v{} using API at {}", VERSION, config.api_url);

    let client = services::build_client(&config).context("Failed to build HTTP client")?;
    let categories: Arc<dyn CategorySource> =
        Arc::new(CategoriesService::new(client.clone(), config.api_url.clone()));
    let contacts = ContactsService::new(client, config.api_url.clone());

    let form = ContactForm::new(config.button_label.clone());

    if !config.enable_tui {
        run_headless(form, categories).await;
        return Ok(());
    }

    // Background tasks report to the UI loop through this channel
    let (event_tx, mut event_rx) = mpsc::channel(100);

    // Submission handler → contact-creation worker
    let (submission_tx, submission_rx) = mpsc::channel(16);
    let submitter =
        tokio::spawn(ContactSubmitter::new(contacts, submission_rx, event_tx.clone()).run());

    let mut app = tui::app::App::new(form, config.api_url.clone(), submission_tx);

    if let Some(activation) = app.form_panel.form_mut().activate() {
        form::categories::spawn(categories, activation, event_tx);
    }

    let result = tui::run_tui(&mut app, &mut event_rx).await;

    // A late category fetch is discarded from here on
    app.form_panel.form_mut().deactivate();

    // Dropping the app closes the submission channel; let in-flight requests finish
    drop(app);
    let grace = Duration::from_secs(config.request_timeout_secs);
    if tokio::time::timeout(grace, submitter).await.is_err() {
        tracing::warn!("Contact submitter did not finish within {:?}", grace);
    }

    result
}

/// Headless mode: load the category options once, log them and exit
async fn run_headless(mut form: ContactForm, categories: Arc<dyn CategorySource>) {
    let Some(activation) = form.activate() else {
        return;
    };

    let settled = form::categories::load(categories.as_ref(), activation).await;
    form.settle_categories(settled);

    for option in form.category_options() {
        if option.value.is_empty() {
            tracing::info!("Category option: {}", option.label);
        } else {
            tracing::info!("Category option: {} (id {})", option.label, option.value);
        }
    }

    form.deactivate();
}

/// Initialize tracing with conditional output
///
/// Headless mode logs to stdout. In TUI mode the terminal belongs to the form,
/// so nothing is written there: the JSON rolling file is the only sink and is
/// always on. Headless mode adds the file only when `file_enabled` is set.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("mycontacts={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let stdout_layer = (!config.enable_tui).then(tracing_subscriber::fmt::layer);

    let (file_layer, guard) = if config.logging.writes_file(config.enable_tui) {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Writes happen on a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
