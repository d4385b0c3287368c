//! Header rendering with title and phase badge.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::config::Theme;
use crate::timer::Phase;

use super::colors;

/// Draws the header with the title, the current phase and the theme.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = colors::palette(app.theme);
    let border_style = Style::default().fg(colors::BORDER);

    let (badge, badge_style) = match app.timer().phase() {
        Phase::Idle => ("IDLE", Style::default().fg(colors::MUTED).bold()),
        Phase::Running if app.is_ticking() => (
            "RUNNING",
            Style::default()
                .fg(colors::SUCCESS)
                .bold()
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        // Running with nothing left on the clock
        Phase::Running => ("DONE", Style::default().fg(colors::ERROR).bold()),
        Phase::Paused => ("PAUSED", Style::default().fg(colors::WARNING).bold()),
    };

    let theme_name = match app.theme {
        Theme::Battle => "battle",
        Theme::Classic => "classic",
    };

    let line = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(palette.accent)),
        Span::styled("COUNTDOWN", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", Style::default().fg(colors::MUTED)),
        Span::styled("TIMER", Style::default().fg(colors::KEY).bold()),
        Span::styled("  ┃ ", border_style),
        Span::styled("◈ ", badge_style),
        Span::styled(badge, badge_style),
        Span::styled(" ┃ ", border_style),
        Span::styled(theme_name, Style::default().fg(colors::MUTED)),
        Span::styled(
            format!(" ┃ v{}", env!("CARGO_PKG_VERSION")),
            border_style,
        ),
    ]);

    let header = Paragraph::new(vec![Line::from(""), line]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border_style),
    );
    frame.render_widget(header, area);
}
