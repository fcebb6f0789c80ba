
//! Command-line interface definition for the coglog demo binary.
//!
//! This file defines the `Cli` struct using the `clap` crate to parse and
//! validate command-line arguments: the configuration file to load, the level
//! to log at, an optional threshold override, and the message itself. The CLI
//! output is styled using the `anstyle` crate for improved readability.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CONFIG_FILE_NAME;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(styles=get_styles())]
#[command(disable_help_subcommand = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Message to log; multiple words are joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Configuration file to load
    #[arg(short, long, default_value = CONFIG_FILE_NAME, value_parser = clap::value_parser!(PathBuf))]
    pub config: PathBuf,

    /// Severity to log the message at (name or legacy numeric index)
    #[arg(short, long, default_value = "info")]
    pub level: String,

    /// Override the configured threshold before logging (name or index)
    #[arg(short, long)]
    pub set_level: Option<String>,

    /// Parse the message as a JSON value and log it as a structured object
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}

#[test]
fn test_verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
