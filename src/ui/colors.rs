//! Color theme definitions for the UI.
//!
//! Shared color constants live here, plus the per-theme palette for the
//! timer display and backdrop.

use ratatui::style::Color;

use crate::config::Theme;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Secondary accent color (used for active elements)
pub const SECONDARY: Color = Color::Rgb(52, 211, 153); // Bright emerald
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Warning color
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple
/// Background of a disabled button
pub const DISABLED: Color = Color::Rgb(107, 114, 128); // Gray

/// Colors that differ between themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Countdown digits
    pub digits: Color,
    /// Countdown digits while flickering
    pub flicker: Color,
    /// Backdrop pattern
    pub backdrop: Color,
    /// Title and decorations
    pub accent: Color,
}

/// Returns the palette for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Battle => Palette {
            digits: Color::White,
            flicker: ERROR,
            backdrop: Color::Rgb(75, 85, 99),
            accent: ACCENT,
        },
        Theme::Classic => Palette {
            digits: PRIMARY,
            flicker: WARNING,
            backdrop: Color::Rgb(31, 41, 55),
            accent: SECONDARY,
        },
    }
}
