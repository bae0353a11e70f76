//! Configuration file loading for the console.
//!
//! Settings come from a TOML file (`chess.toml` by default). A missing file
//! yields the defaults; command-line flags are applied on top by the binary.

use chess_core::Color;
use chess_engine::{Game, GameError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The custom layout could not start a game.
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] GameError),
    /// The log level is not one of off, error, warn, info, debug, trace.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// The side that moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Console settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Maximum level of log events written to stderr. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print each player's captured pieces after every move. Defaults to true.
    #[serde(default = "default_show_captures")]
    pub show_captures: bool,
    /// Starting placement text; the standard arrangement when absent.
    #[serde(default)]
    pub layout: Option<String>,
    /// Side to move first on a custom layout.
    #[serde(default)]
    pub first: Side,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_show_captures() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            log_level: default_log_level(),
            show_captures: default_show_captures(),
            layout: None,
            first: Side::default(),
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// See [`Self::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `chess.toml` in the working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Parses [`Self::log_level`].
    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Starts a game from the configured layout.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        match &self.layout {
            Some(layout) => Ok(Game::from_placement(layout, self.first.into())?),
            None => Ok(Game::new()),
        }
    }
}
