//! Countdown display: large block digits, letter-spaced text when the
//! terminal is too small.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::colors;

/// Rows in a glyph.
pub(crate) const GLYPH_HEIGHT: u16 = 5;

/// Block-character glyph for a display character.
fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT as usize] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" ██", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "▀", " ", "▀", " "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}

/// Renders `text` as rows of block glyphs separated by one column.
pub(crate) fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Puts a space between every character, e.g. `1:05` becomes `1 : 0 5`.
pub(crate) fn letter_spaced(text: &str) -> String {
    text.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draws the remaining time centered in `area`.
pub fn draw_display(frame: &mut Frame, area: Rect, app: &App) {
    let palette = colors::palette(app.theme);
    let text = app.timer().display();

    let style = if app.display_flicker() {
        Style::default()
            .fg(palette.flicker)
            .bold()
            .add_modifier(Modifier::RAPID_BLINK)
    } else {
        Style::default().fg(palette.digits).bold()
    };

    let rows = big_text(&text);
    let width = rows
        .first()
        .map(|r| r.chars().count() as u16)
        .unwrap_or_default();

    let (lines, height): (Vec<Line>, u16) = if area.width >= width && area.height >= GLYPH_HEIGHT
    {
        (rows.into_iter().map(Line::from).collect(), GLYPH_HEIGHT)
    } else {
        (vec![Line::from(letter_spaced(&text))], 1)
    };

    // Center vertically
    let top = area.height.saturating_sub(height) / 2;
    let target = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: height.min(area.height),
    };

    let display = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(display, target);
}
