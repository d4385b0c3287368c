//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each part of the screen is rendered by a separate submodule for clarity.

mod backdrop;
mod colors;
mod controls;
mod display;
mod header;
mod help;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

// Re-export submodule draw functions for internal use
use backdrop::draw_backdrop;
use controls::draw_controls;
use display::draw_display;
use header::draw_header;
use help::draw_help_overlay;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - lays out the single timer screen.
pub fn draw(frame: &mut Frame, app: &App) {
    // Header, countdown, controls, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Countdown
            Constraint::Length(layout::CONTROLS_HEIGHT),
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    // Backdrop first, the countdown is drawn on top of it
    draw_backdrop(frame, chunks[1], app);
    draw_display(frame, chunks[1], app);

    draw_controls(frame, chunks[2], app);
    draw_commands_bar(frame, chunks[3], app);
    draw_status_bar(frame, chunks[4], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::Theme;
    use crate::event::Action;
    use crate::timer::FlickerPolicy;

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn idle_app(duration: &str) -> App {
        let mut app = App::new(Theme::Battle, FlickerPolicy::Literal);
        for c in duration.chars() {
            app.handle_event(Action::Char(c));
        }
        app
    }

    #[test]
    fn test_idle_screen_shows_input_and_start() {
        let screen = render(&idle_app(""), 80, 24);
        assert!(screen.contains("Set time (in seconds)"));
        assert!(screen.contains("Start Timer"));
        assert!(!screen.contains("Pause Timer"));
        assert!(!screen.contains("Reset Timer"));
    }

    #[test]
    fn test_typed_duration_is_previewed() {
        let screen = render(&idle_app("3661"), 80, 24);
        assert!(screen.contains("3661"));
        assert!(screen.contains("= 1:01:01"));
    }

    #[tokio::test]
    async fn test_started_screen_shows_buttons() {
        let mut app = idle_app("90");
        app.handle_event(Action::Start);

        let screen = render(&app, 80, 24);
        assert!(screen.contains("Pause Timer"));
        assert!(screen.contains("Resume Timer"));
        assert!(screen.contains("Reset Timer"));
        assert!(!screen.contains("Start Timer"));
        assert!(screen.contains("RUNNING"));
    }

    #[test]
    fn test_small_terminal_falls_back_to_spaced_text() {
        // Too short for block digits
        let screen = render(&idle_app("65"), 40, 14);
        assert!(screen.contains("1 : 0 5"));
    }

    #[test]
    fn test_large_terminal_uses_block_digits() {
        let screen = render(&idle_app("65"), 80, 24);
        assert!(screen.contains("███"));
        assert!(!screen.contains("1 : 0 5"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = idle_app("");
        app.handle_event(Action::Help);
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Pause the countdown"));
    }
}
