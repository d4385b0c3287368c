//! Countdown timer TUI
//!
//! A terminal countdown timer: type a duration in seconds, start it, pause,
//! resume or reset it. The display flickers when time is running low.
//! Run with: countdown-tui [-d <SECONDS>] [--start]

mod app;
mod config;
mod constants;
mod event;
mod logging;
mod ticker;
mod timer;
mod ui;
mod validation;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::event::EventHandler;

/// Entry point for the application.
///
/// Parses the command line, sets up logging, then hands the terminal to the
/// UI until the user quits.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    info!("Starting countdown-tui v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the terminal
    let terminal = ratatui::init();

    // Create the application (with optional preset duration)
    let app = App::from_config(&config);

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    info!("Shutdown complete");
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Apply pending countdown ticks
/// 3. Handle user input events
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    loop {
        app.pump_ticks();

        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Use different event handling for input mode vs control mode
        let event = if app.is_input_mode() {
            event_handler.next_input()
        } else {
            event_handler.next()
        }
        .context("Failed to read terminal events")?;

        if let Some(action) = event {
            // Process the event and check if we should quit
            if app.handle_event(action) {
                break;
            }
        }
    }

    app.shutdown();
    Ok(())
}
