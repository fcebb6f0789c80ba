
//! Severity levels and their legacy aliases.
//!
//! This module defines the ordered `Severity` enum used for threshold filtering
//! and the `LevelSpec` type that normalizes the two legacy ways callers may name
//! a level: a lowercase severity name or a numeric index (0=error .. 3=debug).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity names in legacy index order: index 0 is the most critical.
pub const SEVERITY_NAMES: [&str; 4] = ["error", "warn", "info", "debug"];

/// An ordered log severity. `Error` is the most critical; the derived ordering
/// means `s <= threshold` is "at least as critical as the threshold".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    /// Legacy numeric index of this severity (0=error .. 3=debug).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a severity by its legacy numeric index. Indices outside
    /// [0, 4) return `None`; the mapping is a fixed table, never inferred.
    pub fn from_index(index: i64) -> Option<Severity> {
        match index {
            0 => Some(Severity::Error),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Info),
            3 => Some(Severity::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        SEVERITY_NAMES[self.index()]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ();

    /// Case-insensitive name lookup. Unrecognized names are an error so that
    /// callers can degrade gracefully rather than guess.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(()),
        }
    }
}

/// A level as callers of the legacy entry points may express it: either a
/// severity name or a numeric index into the severity table.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelSpec {
    Name(String),
    Index(i64),
}

impl LevelSpec {
    /// Normalize to a severity. Out-of-range indices and unrecognized names
    /// resolve to `None`; callers treat that as a silent no-op.
    pub fn resolve(&self) -> Option<Severity> {
        match self {
            LevelSpec::Name(name) => name.parse().ok(),
            LevelSpec::Index(index) => Severity::from_index(*index),
        }
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        LevelSpec::Name(name)
    }
}

impl From<Severity> for LevelSpec {
    fn from(severity: Severity) -> Self {
        LevelSpec::Index(severity.index() as i64)
    }
}

impl From<i64> for LevelSpec {
    fn from(index: i64) -> Self {
        LevelSpec::Index(index)
    }
}

impl From<i32> for LevelSpec {
    fn from(index: i32) -> Self {
        LevelSpec::Index(index as i64)
    }
}

impl From<usize> for LevelSpec {
    fn from(index: usize) -> Self {
        LevelSpec::Index(index as i64)
    }
}
