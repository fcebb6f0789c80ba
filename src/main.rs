
//! Main entry point for the coglog demo binary.
//!
//! This file handles command-line parsing, builds a `Logger` from the
//! requested configuration file, and logs the given message at the given
//! severity. It exists to exercise the facade from a shell; the crate's real
//! surface is the library API.

use anyhow::{Context, Result};
use clap::Parser;

use coglog::cli::Cli;
use coglog::severity::LevelSpec;
use coglog::Logger;

/// Interpret a command-line level as either a legacy numeric index or a
/// severity name.
fn level_spec(raw: &str) -> LevelSpec {
    match raw.parse::<i64>() {
        Ok(index) => LevelSpec::Index(index),
        Err(_) => LevelSpec::Name(raw.to_string()),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut logger = Logger::from_file(&args.config)?;

    if let Some(level) = &args.set_level {
        logger.set_log_level(level_spec(level));
    }

    let message = args.message.join(" ");
    if args.json {
        let value: serde_json::Value = serde_json::from_str(&message)
            .context("message is not valid JSON")?;
        logger.log_expression(value, level_spec(&args.level));
    } else {
        logger.log_expression(message, level_spec(&args.level));
    }

    Ok(())
}
