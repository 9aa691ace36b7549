//! Runtime configuration
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults ([`Config::default`])
//! 2. an optional TOML file passed with `--config`
//! 3. command-line flags ([`Cli`])
//!
//! ```toml
//! tick_rate_ms = 50
//! animations = true
//! start_slide = 1
//!
//! [demo]
//! grace_ms = 400
//! speed = 1.0
//!
//! [prompt]
//! type_interval_ms = 30
//!
//! [transition]
//! duration_ms = 250
//!
//! [log]
//! level = "info"
//! file = "quinn-deck.log"
//! ```

use crate::anim::Timing;
use crate::error::{DeckError, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Slowest accepted demo speed; the full script then takes about 16 minutes
pub const MIN_DEMO_SPEED: f64 = 0.01;

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "quinn-deck", version, about = "QUINN scheduling assistant: terminal slide deck")]
pub struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Slide to open on (1-based)
    #[arg(short, long, value_name = "N")]
    pub slide: Option<usize>,

    /// Demo speed multiplier (2.0 runs twice as fast)
    #[arg(long, value_name = "F")]
    pub speed: Option<f64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable transitions, staggered reveals and typing
    #[arg(long)]
    pub no_animation: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub grace_ms: u64,
    pub speed: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            grace_ms: 400,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub type_interval_ms: u64,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig { type_interval_ms: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    pub duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig { duration_ms: 250 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
    /// No file means no logging at all; the terminal belongs to the TUI
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: String::from("info"),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Event loop poll interval
    pub tick_rate_ms: u64,
    pub animations: bool,
    /// 1-based
    pub start_slide: usize,
    pub demo: DemoConfig,
    pub prompt: PromptConfig,
    pub transition: TransitionConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_rate_ms: 50,
            animations: true,
            start_slide: 1,
            demo: DemoConfig::default(),
            prompt: PromptConfig::default(),
            transition: TransitionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DeckError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Parse TOML text; `origin` is only used in error messages
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| DeckError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the `--config` file if any, then the CLI flags
    pub fn resolve(cli: &Cli, slide_count: usize) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate(slide_count)?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(slide) = cli.slide {
            self.start_slide = slide;
        }
        if let Some(speed) = cli.speed {
            self.demo.speed = speed;
        }
        if let Some(file) = &cli.log_file {
            self.log.file = Some(file.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log.level = level.clone();
        }
        if cli.no_animation {
            self.animations = false;
        }
    }

    /// Reject values the deck cannot run with
    pub fn validate(&self, slide_count: usize) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(DeckError::InvalidConfig(
                "tick_rate_ms must be greater than 0".to_string(),
            ));
        }
        if !(self.demo.speed.is_finite() && self.demo.speed >= MIN_DEMO_SPEED) {
            return Err(DeckError::InvalidConfig(format!(
                "demo speed must be a number of at least {}, got {}",
                MIN_DEMO_SPEED, self.demo.speed
            )));
        }
        if self.start_slide == 0 || self.start_slide > slide_count {
            return Err(DeckError::InvalidConfig(format!(
                "start slide must be between 1 and {}, got {}",
                slide_count, self.start_slide
            )));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.demo.grace_ms)
    }

    /// 0-based index of the opening slide
    pub fn start_index(&self) -> usize {
        self.start_slide.saturating_sub(1)
    }

    /// Animation timings with the configured overrides applied
    pub fn timing(&self) -> Timing {
        if !self.animations {
            return Timing::disabled();
        }
        Timing {
            transition: Duration::from_millis(self.transition.duration_ms),
            type_interval: Duration::from_millis(self.prompt.type_interval_ms),
            ..Timing::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.grace(), Duration::from_millis(400));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let text = r#"
            tick_rate_ms = 20

            [demo]
            speed = 2.5

            [log]
            file = "deck.log"
        "#;
        let config = Config::from_toml(text, Path::new("deck.toml")).unwrap();

        assert_eq!(config.tick_rate_ms, 20);
        assert_eq!(config.demo.speed, 2.5);
        assert_eq!(config.demo.grace_ms, 400);
        assert_eq!(config.log.file, Some(PathBuf::from("deck.log")));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("tick_rate = 5", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, DeckError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = Config::default();
        let cli = Cli::try_parse_from([
            "quinn-deck",
            "--slide",
            "3",
            "--speed",
            "4",
            "--log-level",
            "debug",
            "--no-animation",
        ])
        .unwrap();
        config.apply_cli(&cli);

        assert_eq!(config.start_slide, 3);
        assert_eq!(config.start_index(), 2);
        assert_eq!(config.demo.speed, 4.0);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.timing(), Timing::disabled());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.tick_rate_ms = 0;
        assert!(matches!(config.validate(6), Err(DeckError::InvalidConfig(_))));

        let mut config = Config::default();
        config.demo.speed = 0.0;
        assert!(config.validate(6).is_err());
        config.demo.speed = f64::NAN;
        assert!(config.validate(6).is_err());
        config.demo.speed = f64::INFINITY;
        assert!(config.validate(6).is_err());
        config.demo.speed = 1e-20;
        assert!(config.validate(6).is_err());
        config.demo.speed = MIN_DEMO_SPEED;
        assert!(config.validate(6).is_ok());

        let mut config = Config::default();
        config.start_slide = 7;
        assert!(config.validate(6).is_err());
        config.start_slide = 0;
        assert!(config.validate(6).is_err());
        config.start_slide = 6;
        assert!(config.validate(6).is_ok());
    }

    #[test]
    fn test_timing_uses_configured_durations() {
        let mut config = Config::default();
        config.transition.duration_ms = 100;
        config.prompt.type_interval_ms = 5;
        let timing = config.timing();

        assert_eq!(timing.transition, Duration::from_millis(100));
        assert_eq!(timing.type_interval, Duration::from_millis(5));
        assert_eq!(timing.stagger_step, Timing::default().stagger_step);
    }
}
