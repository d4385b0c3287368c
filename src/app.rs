//! Application state and logic.
//!
//! This module contains the application state (the countdown, its tick
//! subscription and the duration field) and the event handling logic.

use tracing::{debug, info};

use crate::config::{Config, Theme};
use crate::constants::TICK_PERIOD;
use crate::event::Action;
use crate::ticker::TickSubscription;
use crate::timer::{CountdownTimer, FlickerPolicy, Phase};
use crate::validation::{accepts_duration_char, parse_duration};

/// A clickable-looking control on the timer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
    Resume,
    Reset,
}

impl Control {
    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "Start Timer",
            Control::Pause => "Pause Timer",
            Control::Resume => "Resume Timer",
            Control::Reset => "Reset Timer",
        }
    }

    /// Key that triggers the control.
    pub fn key(self) -> &'static str {
        match self {
            Control::Start => "Enter",
            Control::Pause => "p",
            Control::Resume => "r",
            Control::Reset => "x",
        }
    }
}

/// A visible control and whether it currently does anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub control: Control,
    pub enabled: bool,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The countdown itself
    timer: CountdownTimer,
    /// Live tick source, present only while the countdown needs ticks
    ticker: Option<TickSubscription>,
    /// Current contents of the duration field
    pub input_buffer: String,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Colour theme
    pub theme: Theme,
    /// Low-time flicker rule
    pub flicker: FlickerPolicy,
    // --- Help visibility ---
    pub show_help: bool,
}

impl App {
    /// Creates an idle application with an empty duration field.
    pub fn new(theme: Theme, flicker: FlickerPolicy) -> Self {
        Self {
            timer: CountdownTimer::new(),
            ticker: None,
            input_buffer: String::new(),
            status: None,
            theme,
            flicker,
            show_help: false,
        }
    }

    /// Creates the application from command line options, applying a preset
    /// duration and auto-start if requested.
    ///
    /// Must be called from within a tokio runtime when auto-starting.
    pub fn from_config(config: &Config) -> Self {
        let mut app = Self::new(config.theme, config.flicker);
        if let Some(seconds) = config.duration {
            app.input_buffer = seconds.to_string();
            app.timer.set_duration(seconds);
        }
        if config.start {
            app.start();
        }
        app
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// True while the duration is being typed in.
    pub fn is_input_mode(&self) -> bool {
        self.timer.phase() == Phase::Idle
    }

    /// True while a tick subscription is held.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Whether the display should flicker. Only a started timer flickers.
    pub fn display_flicker(&self) -> bool {
        self.timer.is_started() && self.flicker.should_flicker(self.timer.remaining_seconds())
    }

    /// Controls visible in the current phase.
    pub fn controls(&self) -> Vec<ControlState> {
        let phase = self.timer.phase();
        match phase {
            Phase::Idle => vec![ControlState {
                control: Control::Start,
                enabled: true,
            }],
            Phase::Running | Phase::Paused => vec![
                ControlState {
                    control: Control::Pause,
                    enabled: phase != Phase::Paused,
                },
                ControlState {
                    control: Control::Resume,
                    enabled: phase == Phase::Paused,
                },
                ControlState {
                    control: Control::Reset,
                    enabled: true,
                },
            ],
        }
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Apply ticks that fired before this key press
        self.pump_ticks();

        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        let quit = if self.is_input_mode() {
            self.handle_input_action(action)
        } else {
            self.handle_control_action(action)
        };

        self.sync_ticker();
        quit
    }

    /// Handles actions while the duration is being entered.
    fn handle_input_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit | Action::Char('q') => return true,
            Action::Start => self.start(),
            Action::Back => {
                self.input_buffer.clear();
                self.apply_input();
            }
            Action::Char(c) => {
                if accepts_duration_char(&self.input_buffer, c) {
                    self.input_buffer.push(c);
                    self.apply_input();
                }
            }
            Action::Backspace => {
                self.input_buffer.pop();
                self.apply_input();
            }
            _ => {}
        }
        false
    }

    /// Handles actions once the countdown has been started.
    fn handle_control_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Pause => self.pause(),
            Action::Resume => self.resume(),
            Action::TogglePause => {
                if self.timer.phase() == Phase::Paused {
                    self.resume();
                } else {
                    self.pause();
                }
            }
            Action::Reset => self.reset(),
            _ => {}
        }
        false
    }

    /// Applies every tick delivered since the last call.
    pub fn pump_ticks(&mut self) {
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };

        let pending = ticker.drain();
        if pending == 0 {
            return;
        }

        for _ in 0..pending {
            self.timer.tick();
        }
        debug!(
            "Applied {} tick(s), {}s remaining",
            pending,
            self.timer.remaining_seconds()
        );

        if self.timer.remaining_seconds() == 0 {
            info!("Countdown finished");
            self.set_status("Time's up!", false);
        }
        self.sync_ticker();
    }

    /// Releases the tick subscription. Nothing ticks the timer afterwards.
    pub fn shutdown(&mut self) {
        self.ticker = None;
    }

    // --- Timer operations ---

    fn apply_input(&mut self) {
        let seconds = parse_duration(&self.input_buffer);
        self.timer.set_duration(seconds);
    }

    fn start(&mut self) {
        if self.timer.start() {
            info!("Timer started at {}s", self.timer.remaining_seconds());
            self.input_buffer.clear();
            let text = format!("Counting down from {}", self.timer.display());
            self.set_status(&text, false);
            self.sync_ticker();
        }
    }

    fn pause(&mut self) {
        if self.timer.pause() {
            info!("Timer paused at {}s", self.timer.remaining_seconds());
            self.set_status("Timer paused", false);
        }
    }

    fn resume(&mut self) {
        if self.timer.resume() {
            info!("Timer resumed at {}s", self.timer.remaining_seconds());
            self.set_status("Timer resumed", false);
        }
    }

    fn reset(&mut self) {
        self.timer.reset();
        self.input_buffer.clear();
        info!("Timer reset");
        self.set_status("Timer reset", false);
    }

    /// Holds a tick subscription exactly while the countdown needs one.
    fn sync_ticker(&mut self) {
        match (self.timer.needs_ticks(), self.ticker.is_some()) {
            (true, false) => self.ticker = Some(TickSubscription::spawn(TICK_PERIOD)),
            (false, true) => self.ticker = None,
            _ => {}
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }
}
