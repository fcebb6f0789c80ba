
//! Message and line formatting.
//!
//! A formatted line has the shape `[<timestamp>] <level>: <message>`. String
//! messages pass through unmodified; structured messages render as the
//! literal marker `[object Object]` followed by a newline and a 2-space
//! indented JSON rendering. The colorized variant used by the console sink
//! wraps only the level token in the severity's ANSI style.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::config::DEFAULT_TIMESTAMP_FORMAT;
use crate::severity::Severity;

/// A message handed to the facade: either a plain string or a structured
/// JSON value.
#[derive(Clone, Debug)]
pub enum LogMessage {
    Text(String),
    Structured(Value),
}

impl LogMessage {
    /// Render the message body. Structured values get the marker text the
    /// legacy callers expect, then a pretty-printed JSON rendering.
    pub fn render(&self) -> String {
        match self {
            LogMessage::Text(text) => text.clone(),
            LogMessage::Structured(value) => {
                let json = serde_json::to_string_pretty(value)
                    .unwrap_or_else(|_| value.to_string());
                format!("[object Object]\n{json}")
            }
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

/// JSON strings stay plain text; any other JSON value is structured.
impl From<Value> for LogMessage {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => LogMessage::Text(text),
            other => LogMessage::Structured(other),
        }
    }
}

/// Per-sink formatting choices: a chrono strftime timestamp pattern and
/// whether the level token is colorized.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFormat {
    timestamp_format: String,
    colorize: bool,
}

impl LineFormat {
    pub fn new(timestamp_format: &str, colorize: bool) -> Self {
        LineFormat {
            timestamp_format: timestamp_format.to_string(),
            colorize,
        }
    }

    /// Assemble the line for the current instant.
    pub fn format(&self, severity: Severity, body: &str) -> String {
        self.format_at(Local::now(), severity, body)
    }

    pub fn format_at(&self, now: DateTime<Local>, severity: Severity, body: &str) -> String {
        let timestamp = render_timestamp(now, &self.timestamp_format);
        let level = if self.colorize {
            let style = severity_style(severity);
            format!("{}{}{}", style.render(), severity, style.render_reset())
        } else {
            severity.to_string()
        };

        format!("[{timestamp}] {level}: {body}")
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        LineFormat::new(DEFAULT_TIMESTAMP_FORMAT, false)
    }
}

/// Render a timestamp with the given pattern, falling back to the default
/// pattern if chrono cannot render it. A bad pattern must not panic a
/// write call.
fn render_timestamp(now: DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

/// Winston's default level palette: error red, warn yellow, info green,
/// debug blue.
fn severity_style(severity: Severity) -> anstyle::Style {
    let color = match severity {
        Severity::Error => anstyle::AnsiColor::Red,
        Severity::Warn => anstyle::AnsiColor::Yellow,
        Severity::Info => anstyle::AnsiColor::Green,
        Severity::Debug => anstyle::AnsiColor::Blue,
    };

    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(color)))
}
