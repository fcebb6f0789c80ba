
//! # coglog
//!
//! A configurable logging facade. A `Logger` reads an optional `cog.json`
//! configuration file, merges it over built-in defaults, and dispatches
//! formatted lines to one or more sinks (console, file, database). The API
//! keeps the legacy entry points older callers rely on: numeric level
//! aliases (0=error .. 3=debug), `set_log_level`, and `log_expression`.
//!
//! ```no_run
//! use coglog::{Logger, Severity};
//!
//! let logger = Logger::new()?;
//! logger.info("service started");
//! logger.write("disk full", Severity::Error);
//! logger.log_expression("legacy caller", 1); // warn, by index
//! # anyhow::Ok(())
//! ```
//!
//! An absent configuration file means all defaults (console sink, threshold
//! info). A present but malformed file is the one fatal condition; every
//! runtime anomaly degrades silently, because logging must never crash the
//! caller.

pub mod cli;
pub mod config;
pub mod format;
pub mod logger;
pub mod severity;
pub mod sink;
pub mod transport;

pub use config::{Config, LogSettings};
pub use format::{LineFormat, LogMessage};
pub use logger::Logger;
pub use severity::{LevelSpec, Severity};
pub use sink::Sink;
pub use transport::{ConsoleTransport, FileTransport, MemoryTransport, Transport};
