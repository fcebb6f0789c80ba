
//! Configuration model for the `cog.json` file.
//!
//! The file is optional: an absent file is equivalent to `{}`, and both yield
//! the built-in defaults. A present but malformed file is the one fatal
//! startup condition in the crate. Parsed values are merged field-by-field
//! over the defaults, so unspecified fields keep their default value.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::severity::Severity;

/// Conventional configuration file name, resolved from the working directory.
pub const CONFIG_FILE_NAME: &str = "cog.json";

/// Default timestamp display pattern: time only, no date.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Raw shape of `cog.json`. The top-level `log` string is a legacy alias for
/// `logging.file` and is folded in during resolution.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub log: Option<String>,
    pub logging: Option<LoggingConfig>,
}

/// The `logging` object of `cog.json`. All fields optional; `mongo` is an
/// accepted alias for `db`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub console: Option<bool>,
    pub file: Option<String>,
    #[serde(alias = "mongo")]
    pub db: Option<Value>,
    pub timestamp_format: Option<String>,
}

/// Fully resolved settings: every field concrete, defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct LogSettings {
    pub level: Severity,
    pub console: bool,
    pub file: Option<String>,
    pub db: Option<Value>,
    pub timestamp_format: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: Severity::Info,
            console: true,
            file: None,
            db: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Read a configuration file. A missing file yields the default config;
    /// a file that exists but is not valid JSON is a hard error.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("could not parse {} file", path.display()))
    }

    /// Merge this config over the defaults.
    pub fn resolve(&self) -> LogSettings {
        let mut settings = LogSettings::default();
        let logging = self.logging.clone().unwrap_or_default();

        if let Some(level) = &logging.level {
            // A bad level name is a runtime anomaly, not a fatal one; keep
            // the default threshold.
            if let Ok(level) = level.parse() {
                settings.level = level;
            }
        }

        if let Some(console) = logging.console {
            settings.console = console;
        }

        // Legacy shim: a bare top-level `log` path means `logging.file`.
        // An explicit `logging.file` wins.
        settings.file = logging.file.or_else(|| self.log.clone());
        settings.file = settings.file.filter(|path| !path.is_empty());

        settings.db = logging.db;

        if let Some(format) = logging.timestamp_format {
            settings.timestamp_format = format;
        }

        settings
    }
}
