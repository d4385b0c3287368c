//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::timer::Phase;

use super::colors;

/// Draws the commands bar showing available actions for the current phase.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands_for_phase(app.timer().phase());

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available in a given phase.
fn get_commands_for_phase(phase: Phase) -> Vec<(&'static str, &'static str)> {
    match phase {
        Phase::Idle => vec![
            ("0-9", "seconds"),
            ("Enter", "start"),
            ("Esc", "clear"),
            ("F1", "help"),
            ("q", "quit"),
        ],
        Phase::Running => vec![
            ("p", "pause"),
            ("Space", "toggle"),
            ("x", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Phase::Paused => vec![
            ("r", "resume"),
            ("Space", "toggle"),
            ("x", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
