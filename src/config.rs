//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::timer::FlickerPolicy;

/// Colour palette for the timer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Dark backdrop with a battle-field pattern
    #[default]
    Battle,
    /// Plain backdrop, calmer colours
    Classic,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-tui")]
#[command(about = "A terminal countdown timer")]
#[command(version)]
pub struct Config {
    /// Preset duration in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: Option<u64>,

    /// Start the countdown immediately
    #[arg(short, long, requires = "duration")]
    pub start: bool,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = Theme::Battle)]
    pub theme: Theme,

    /// When the display flickers: `literal` for the last 10 seconds,
    /// `extended` for the last 30
    #[arg(long, value_enum, default_value_t = FlickerPolicy::Literal)]
    pub flicker: FlickerPolicy,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("countdown-tui").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.duration, None);
        assert!(!config.start);
        assert_eq!(config.theme, Theme::Battle);
        assert_eq!(config.flicker, FlickerPolicy::Literal);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_all_options() {
        let config = parse(&[
            "-d", "90", "--start", "--theme", "classic", "--flicker", "extended", "--log-file",
            "timer.log", "-v",
        ])
        .unwrap();
        assert_eq!(config.duration, Some(90));
        assert!(config.start);
        assert_eq!(config.theme, Theme::Classic);
        assert_eq!(config.flicker, FlickerPolicy::Extended);
        assert_eq!(config.log_file, Some(PathBuf::from("timer.log")));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(parse(&["--duration", "-5"]).is_err());
        assert!(parse(&["--duration", "ten"]).is_err());
    }

    #[test]
    fn test_start_requires_duration() {
        assert!(parse(&["--start"]).is_err());
    }
}
