//! Countdown state machine.
//!
//! Holds the remaining seconds and the lifecycle phase, and derives the
//! display string and the low-time flag from them. Nothing in here knows
//! about time passing: a tick is applied by whoever owns the timer.

use clap::ValueEnum;

use crate::constants::flicker;

/// Lifecycle phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Never started, or reset. The duration can be edited.
    #[default]
    Idle,
    /// Counting down once per tick.
    Running,
    /// Started but holding its remaining time.
    Paused,
}

/// How the low-time flicker is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FlickerPolicy {
    /// Flicker for 1..=10 seconds remaining. The long-timer clause
    /// (`> 100 && <= 30`) can never hold and is kept as written.
    #[default]
    Literal,
    /// Flicker for 1..=30 seconds remaining.
    Extended,
}

impl FlickerPolicy {
    /// Returns true when the display should flicker for the given time left.
    pub fn should_flicker(self, remaining: u64) -> bool {
        match self {
            FlickerPolicy::Literal => {
                let short = remaining <= flicker::LONG_TIMER_SECS
                    && remaining > 0
                    && remaining <= flicker::LOW_TIME_SECS;
                #[allow(clippy::impossible_comparisons)]
                let long = remaining > flicker::LONG_TIMER_SECS
                    && remaining <= flicker::EXTENDED_SECS;
                short || long
            }
            FlickerPolicy::Extended => remaining > 0 && remaining <= flicker::EXTENDED_SECS,
        }
    }
}

/// A single countdown timer.
///
/// Every transition is a silent no-op when the current phase does not allow
/// it; the returned `bool` tells whether anything changed.
#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    remaining_seconds: u64,
    phase: Phase,
}

impl CountdownTimer {
    /// Creates an idle timer with nothing on the clock.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the timer has left `Idle` (until the next reset).
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Sets the duration. Only honoured while idle.
    pub fn set_duration(&mut self, seconds: u64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.remaining_seconds = seconds;
        true
    }

    /// Starts counting down if there is time on the clock.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle || self.remaining_seconds == 0 {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Returns to idle with an empty clock, whatever the current phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining_seconds = 0;
    }

    /// Applies one tick. Reaching zero does not change the phase.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running || self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        true
    }

    /// Whether a tick source is needed right now.
    pub fn needs_ticks(&self) -> bool {
        self.phase == Phase::Running && self.remaining_seconds > 0
    }

    /// Formatted remaining time, see [`format_time`].
    pub fn display(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

/// Formats seconds as `H:MM:SS` when there are hours, `M:SS` otherwise.
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
