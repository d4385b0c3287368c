//! Static backdrop drawn behind the countdown.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::config::Theme;

use super::colors;

/// Builds the battle-field pattern: scattered embers above, ridges below.
pub(crate) fn battle_pattern(width: u16, height: u16) -> Vec<String> {
    let ridge_start = height - height / 3;
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let (x, y) = (x as u32, y as u32);
                    if y >= ridge_start as u32 {
                        match (x + y * 3) % 7 {
                            0 | 1 => '▓',
                            2 | 3 | 4 => '▒',
                            _ => '░',
                        }
                    } else if (x * 7 + y * 13) % 23 == 0 {
                        '·'
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect()
}

/// Fills `area` with the theme's backdrop. The classic theme has none.
pub fn draw_backdrop(frame: &mut Frame, area: Rect, app: &App) {
    if app.theme != Theme::Battle || area.height == 0 {
        return;
    }

    let palette = colors::palette(app.theme);
    let lines: Vec<Line> = battle_pattern(area.width, area.height)
        .into_iter()
        .map(Line::from)
        .collect();

    let backdrop = Paragraph::new(lines).style(Style::default().fg(palette.backdrop));
    frame.render_widget(backdrop, area);
}
