//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start the countdown
    Start,
    /// Pause a running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    /// Reset back to an empty, idle timer
    Reset,
    /// Clear the duration field
    Back,
    /// Show help
    Help,
    /// Character input (for the duration field)
    Char(char),
    /// Backspace key (for the duration field)
    Backspace,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next control-mode event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    /// Returns Ok(Some(action)) if a key event was converted to an action.
    pub fn next(&self) -> io::Result<Option<Action>> {
        Ok(self.poll_key()?.and_then(|key| self.key_to_action(key)))
    }

    /// Polls for input-mode events (while the duration is being entered).
    pub fn next_input(&self) -> io::Result<Option<Action>> {
        Ok(self.poll_key()?.and_then(|key| self.key_to_input_action(key)))
    }

    /// Waits up to the poll timeout for a key press.
    fn poll_key(&self) -> io::Result<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(Some(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an input-mode action.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        if is_ctrl_c(&key) {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Start),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to a control-mode action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        if is_ctrl_c(&key) {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('p') => Some(Action::Pause),
            KeyCode::Char('r') => Some(Action::Resume),
            KeyCode::Char(' ') => Some(Action::TogglePause),
            KeyCode::Char('x') | KeyCode::Delete => Some(Action::Reset),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_timer_control_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('p'))),
            Some(Action::Pause)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('r'))),
            Some(Action::Resume)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char(' '))),
            Some(Action::TogglePause)
        );
    }

    #[test]
    fn test_reset_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('x'))),
            Some(Action::Reset)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Delete)),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
        // Digits mean nothing once the timer is started
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('5'))),
            None
        );
    }

    #[test]
    fn test_input_mode_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Start)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('7'))),
            Some(Action::Char('7'))
        );
        // Control keys are plain characters while typing
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('p'))),
            Some(Action::Char('p'))
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }
}
