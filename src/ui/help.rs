//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

fn section(title: &'static str) -> Line<'static> {
    let section_style = Style::default().fg(colors::PRIMARY).bold();
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(title, section_style),
    ])
}

fn entry(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(format!("{key:<10}"), Style::default().fg(colors::KEY).bold()),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        section("SETTING THE TIME"),
        Line::from(""),
        entry("0-9", "Type the duration in seconds"),
        entry("Backspace", "Remove the last digit"),
        entry("Esc", "Clear the duration"),
        entry("Enter", "Start the countdown"),
        Line::from(""),
        section("WHILE COUNTING"),
        Line::from(""),
        entry("p", "Pause the countdown"),
        entry("r", "Resume a paused countdown"),
        entry("Space", "Pause / resume"),
        entry("x", "Reset to an empty timer"),
        Line::from(""),
        section("GENERAL"),
        Line::from(""),
        entry("? or F1", "Show this help"),
        entry("q", "Quit application"),
        entry("Ctrl+C", "Quit application"),
        Line::from(""),
    ])
}
