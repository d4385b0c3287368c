//! Controls rendering: the duration field with its start button while idle,
//! the pause / resume / reset buttons once started.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Control, ControlState};
use crate::timer::format_time;
use crate::validation::parse_duration;

use super::colors;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Input field prompt indicator.
pub(crate) const INPUT_INDICATOR: &str = "› ";

/// Shown in the empty duration field.
pub(crate) const PLACEHOLDER: &str = "Set time (in seconds)";

/// Draws the controls for the current phase.
pub fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = button_line(&app.controls());

    let content = if app.is_input_mode() {
        vec![input_line(app), Line::from(""), buttons]
    } else {
        vec![Line::from(""), buttons]
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED);

    let controls = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(controls, area);
}

/// The duration field with a live preview of the formatted time.
fn input_line(app: &App) -> Line<'_> {
    let mut spans = vec![Span::styled(
        INPUT_INDICATOR,
        Style::default().fg(colors::MUTED),
    )];

    if app.input_buffer.is_empty() {
        spans.push(Span::styled(
            BLOCK_CURSOR,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(colors::MUTED).italic(),
        ));
    } else {
        spans.push(Span::styled(
            app.input_buffer.as_str(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            BLOCK_CURSOR,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
        spans.push(Span::styled(
            format!("  = {}", format_time(parse_duration(&app.input_buffer))),
            Style::default().fg(colors::MUTED),
        ));
    }

    Line::from(spans)
}

/// Background color of an enabled button.
fn button_color(control: Control) -> Color {
    match control {
        Control::Start => colors::SUCCESS,
        Control::Pause => colors::WARNING,
        Control::Resume => colors::PRIMARY,
        Control::Reset => colors::ERROR,
    }
}

fn button_line(controls: &[ControlState]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, state) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }

        let (key_style, label_style) = if state.enabled {
            (
                Style::default().fg(colors::KEY).bold(),
                Style::default()
                    .fg(Color::Black)
                    .bg(button_color(state.control))
                    .bold(),
            )
        } else {
            (
                Style::default().fg(colors::MUTED),
                Style::default()
                    .fg(colors::MUTED)
                    .bg(colors::DISABLED)
                    .add_modifier(Modifier::DIM),
            )
        };

        spans.push(Span::styled(format!("[{}] ", state.control.key()), key_style));
        spans.push(Span::styled(
            format!(" {} ", state.control.label()),
            label_style,
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_visible() {
        assert_eq!(BLOCK_CURSOR, "█");
    }

    #[test]
    fn test_disabled_button_is_greyed() {
        let line = button_line(&[ControlState {
            control: Control::Resume,
            enabled: false,
        }]);
        let label = &line.spans[1];
        assert_eq!(label.content, " Resume Timer ");
        assert_eq!(label.style.bg, Some(colors::DISABLED));
    }

    #[test]
    fn test_enabled_button_uses_its_color() {
        let line = button_line(&[ControlState {
            control: Control::Reset,
            enabled: true,
        }]);
        assert_eq!(line.spans[1].style.bg, Some(colors::ERROR));
    }
}
