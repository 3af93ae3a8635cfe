//! Runtime configuration.
//!
//! Loaded from a TOML file; every field has a default so the file may be
//! partial or absent.

use std::fs;
use std::path::{Path, PathBuf};

use patrolbot_foundation::{Error, ErrorContext, ErrorKind, Result};
use serde::Deserialize;

/// Configuration for the patrol bot runtime.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// The bot's own chat name. Messages from this name are ignored.
    pub username: String,

    /// Chat name used for lines typed at the console.
    pub operator: String,

    /// Console prompt.
    pub prompt: String,

    /// Maximum console history entries.
    pub history_size: usize,

    /// Default `tracing` filter, used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Optional TOML grammar file merged over the standard grammar.
    pub grammar: Option<PathBuf>,

    /// Distance at which a patrol point counts as reached.
    pub arrival_radius: f64,

    /// Whether a patrol restarts from the first point after the last.
    pub loop_patrol: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            username: "PatrolBot".to_string(),
            operator: "console".to_string(),
            prompt: "patrol> ".to_string(),
            history_size: 1000,
            log_filter: "info".to_string(),
            grammar: None,
            arrival_radius: 1.0,
            loop_patrol: true,
        }
    }
}

impl RuntimeConfig {
    /// Parses configuration from TOML source.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the source is not valid configuration.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::new(ErrorKind::Config(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read, or a `Config` error if
    /// it is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let context = || ErrorContext::new().with_source(path.display().to_string());
        let source = fs::read_to_string(path).map_err(|e| Error::from(e).with_context(context()))?;
        Self::from_toml(&source).map_err(|e| e.with_context(context()))
    }

    fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "username must not be empty".to_string(),
            )));
        }
        if !(self.arrival_radius.is_finite() && self.arrival_radius > 0.0) {
            return Err(Error::new(ErrorKind::Config(format!(
                "arrival_radius must be positive, got {}",
                self.arrival_radius
            ))));
        }
        Ok(())
    }

    /// Builder method to set the bot username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Builder method to set the console operator name.
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Builder method to set the grammar file.
    #[must_use]
    pub fn with_grammar(mut self, path: impl Into<PathBuf>) -> Self {
        self.grammar = Some(path.into());
        self
    }

    /// Builder method to set the arrival radius.
    #[must_use]
    pub fn with_arrival_radius(mut self, radius: f64) -> Self {
        self.arrival_radius = radius;
        self
    }

    /// Builder method to enable/disable patrol looping.
    #[must_use]
    pub fn with_loop_patrol(mut self, looping: bool) -> Self {
        self.loop_patrol = looping;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
