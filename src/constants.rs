//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Interval between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Maximum number of digits accepted in the duration field.
pub const MAX_INPUT_DIGITS: usize = 9;

/// Remaining-time thresholds for the low-time flicker.
pub mod flicker {
    /// Upper bound (inclusive) of the low-time window.
    pub const LOW_TIME_SECS: u64 = 10;
    /// Cutoff between the two clauses of the literal predicate.
    pub const LONG_TIMER_SECS: u64 = 100;
    /// Upper bound (inclusive) of the second clause.
    pub const EXTENDED_SECS: u64 = 30;
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height.
    pub const HEADER_HEIGHT: u16 = 3;
    /// Controls area height (input field or buttons).
    pub const CONTROLS_HEIGHT: u16 = 5;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 55;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 65;
}
