
//! The logging facade.
//!
//! A `Logger` is constructed once: it resolves configuration, builds one sink
//! per enabled destination, and then serves write calls for the remainder of
//! the process. Writes are synchronous and best-effort per sink; a failure
//! delivering to one sink never blocks delivery to the others and never
//! surfaces an error to the logging caller.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};

use crate::config::{CONFIG_FILE_NAME, Config, LogSettings};
use crate::format::{LineFormat, LogMessage};
use crate::severity::{LevelSpec, Severity};
use crate::sink::Sink;
use crate::transport::{ConsoleTransport, FileTransport, Transport};

pub struct Logger {
    level: Severity,
    sinks: Vec<Sink>,
}

impl Logger {
    /// Construct from the conventional `cog.json` in the working directory.
    /// A missing file yields the defaults: console sink, threshold info.
    pub fn new() -> Result<Logger> {
        Logger::from_file(Path::new(CONFIG_FILE_NAME))
    }

    /// Construct from a specific configuration file path. No database
    /// capability is available on this path, so a config requesting a db
    /// sink fails fast.
    pub fn from_file(path: &Path) -> Result<Logger> {
        let settings = Config::load(path)?.resolve();
        Logger::from_settings(settings, None)
    }

    /// Construct from resolved settings, with an optional database transport
    /// capability for configs that request a db sink.
    pub fn from_settings(
        settings: LogSettings,
        db_transport: Option<Arc<dyn Transport>>,
    ) -> Result<Logger> {
        let mut sinks = Vec::new();

        // Unless explicitly asked not to, log to the console.
        if settings.console {
            sinks.push(Sink::new(
                Arc::new(ConsoleTransport),
                LineFormat::new(&settings.timestamp_format, true),
            ));
        }

        if let Some(file) = &settings.file {
            let transport = FileTransport::create(Path::new(file))?;
            sinks.push(Sink::new(
                Arc::new(transport),
                LineFormat::new(&settings.timestamp_format, false),
            ));
        }

        if settings.db.is_some() {
            match db_transport {
                Some(transport) => sinks.push(Sink::new(
                    transport,
                    LineFormat::new(&settings.timestamp_format, false),
                )),
                None => bail!("config requests database logging but no database transport is available"),
            }
        }

        Ok(Logger {
            level: settings.level,
            sinks,
        })
    }

    /// Attach an additional sink, e.g. one with explicit severity bounds.
    pub fn add_sink(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    /// Current global severity threshold.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Format the message and forward it to every sink whose bounds admit
    /// the severity. Delivery is independent per sink; a transport failure
    /// is reported on stderr and otherwise ignored.
    pub fn write(&self, message: impl Into<LogMessage>, severity: Severity) {
        let admitted: Vec<&Sink> = self
            .sinks
            .iter()
            .filter(|sink| sink.admits(severity, self.level))
            .collect();
        if admitted.is_empty() {
            return;
        }

        let body = message.into().render();
        for sink in admitted {
            let line = sink.format().format(severity, &body);
            if let Err(err) = sink.transport().deliver(&line, severity) {
                eprintln!("coglog: log delivery failed: {err:#}");
            }
        }
    }

    pub fn log(&self, message: impl Into<LogMessage>) {
        self.write(message, Severity::Info);
    }

    pub fn info(&self, message: impl Into<LogMessage>) {
        self.write(message, Severity::Info);
    }

    pub fn warn(&self, message: impl Into<LogMessage>) {
        self.write(message, Severity::Warn);
    }

    pub fn error(&self, message: impl Into<LogMessage>) {
        self.write(message, Severity::Error);
    }

    pub fn debug(&self, message: impl Into<LogMessage>) {
        self.write(message, Severity::Debug);
    }

    /// Update the global threshold. Accepts a severity name or a legacy
    /// numeric index; out-of-range indices and unrecognized names leave the
    /// threshold unchanged. Announces itself with a warn-level line, which
    /// is filtered under the threshold in effect before the change.
    pub fn set_log_level(&mut self, level: impl Into<LevelSpec>) {
        self.warn("setLogLevel");

        if let Some(severity) = level.into().resolve() {
            self.level = severity;
        }
    }

    /// Normalize a name-or-index level and, if it resolves to a known
    /// severity, forward the message to `write`. An unrecognized level
    /// silently drops the message.
    pub fn log_expression(&self, message: impl Into<LogMessage>, level: impl Into<LevelSpec>) {
        if let Some(severity) = level.into().resolve() {
            self.write(message, severity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{read_to_string, write};
    use serde_json::json;
    use tempfile::tempdir;

    use crate::transport::MemoryTransport;

    /// Logger with a single in-memory sink and no console output.
    fn memory_logger(level: Severity) -> (Logger, MemoryTransport) {
        let transport = MemoryTransport::new();
        let settings = LogSettings {
            level,
            console: false,
            ..LogSettings::default()
        };
        let mut logger = Logger::from_settings(settings, None).unwrap();
        logger.add_sink(Sink::new(
            Arc::new(transport.clone()),
            LineFormat::new("%H:%M:%S", false),
        ));
        (logger, transport)
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn deliver(&self, _line: &str, _severity: Severity) -> Result<()> {
            bail!("connection refused")
        }
    }

    #[test]
    fn test_threshold_filters_writes() {
        let (logger, transport) = memory_logger(Severity::Warn);

        logger.write("disk full", Severity::Error);
        logger.write("cache hit", Severity::Debug);
        logger.write("startup", Severity::Info);

        let lines = transport.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Severity::Error);
        assert!(lines[0].1.ends_with("error: disk full"));
    }

    #[test]
    fn test_aliases_fix_severity() {
        let (logger, transport) = memory_logger(Severity::Debug);

        logger.log("a");
        logger.info("b");
        logger.warn("c");
        logger.error("d");
        logger.debug("e");

        let severities: Vec<Severity> =
            transport.lines().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Info,
                Severity::Info,
                Severity::Warn,
                Severity::Error,
                Severity::Debug
            ]
        );
    }

    #[test]
    fn test_structured_message_rendering() {
        let (logger, transport) = memory_logger(Severity::Info);

        logger.info(json!({"msg": "important"}));

        let lines = transport.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0]
            .1
            .contains("info: [object Object]\n{\n  \"msg\": \"important\"\n}"));
    }

    #[test]
    fn test_failed_sink_does_not_block_others() {
        let (mut logger, transport) = memory_logger(Severity::Info);
        logger.add_sink(Sink::new(
            Arc::new(FailingTransport),
            LineFormat::default(),
        ));

        logger.error("disk full");

        assert_eq!(transport.lines().len(), 1);
    }

    #[test]
    fn test_set_log_level_by_index_emits_warn_line() {
        let (mut logger, transport) = memory_logger(Severity::Info);

        logger.set_log_level(1);

        assert_eq!(logger.level(), Severity::Warn);
        let lines = transport.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Severity::Warn);
        assert!(lines[0].1.ends_with("warn: setLogLevel"));
    }

    #[test]
    fn test_set_log_level_by_name() {
        let (mut logger, _transport) = memory_logger(Severity::Info);

        logger.set_log_level("DEBUG");

        assert_eq!(logger.level(), Severity::Debug);
    }

    #[test]
    fn test_set_log_level_out_of_range_is_noop() {
        let (mut logger, _transport) = memory_logger(Severity::Info);

        logger.set_log_level(-1);
        logger.set_log_level(4);
        logger.set_log_level("loud");

        assert_eq!(logger.level(), Severity::Info);
    }

    #[test]
    fn test_log_expression_numeric_matches_name() {
        let (logger, by_index) = memory_logger(Severity::Debug);
        logger.log_expression("by index", 1);

        let (logger, by_name) = memory_logger(Severity::Debug);
        logger.log_expression("by name", "warn");

        assert_eq!(by_index.lines()[0].0, by_name.lines()[0].0);
    }

    #[test]
    fn test_log_expression_drops_unrecognized_level() {
        let (logger, transport) = memory_logger(Severity::Debug);

        logger.log_expression("lost", "verbose");
        logger.log_expression("lost too", 12);

        assert!(transport.lines().is_empty());
    }

    #[test]
    fn test_db_requested_without_capability_is_fatal() {
        let settings = LogSettings {
            console: false,
            db: Some(json!({"host": "localhost"})),
            ..LogSettings::default()
        };

        assert!(Logger::from_settings(settings, None).is_err());
    }

    #[test]
    fn test_db_capability_receives_writes() {
        let transport = MemoryTransport::new();
        let settings = LogSettings {
            console: false,
            db: Some(json!({"host": "localhost"})),
            ..LogSettings::default()
        };
        let logger =
            Logger::from_settings(settings, Some(Arc::new(transport.clone()))).unwrap();

        logger.error("disk full");

        assert_eq!(transport.lines().len(), 1);
    }

    #[test]
    fn test_config_file_drives_file_sink() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("logs").join("app.log");
        let config_path = dir.path().join("cog.json");
        write(
            &config_path,
            format!(
                r#"{{"logging":{{"console":false,"file":"{}"}}}}"#,
                log_path.display()
            ),
        )?;

        let logger = Logger::from_file(&config_path)?;
        logger.error("disk full");

        let contents = read_to_string(&log_path)?;
        assert!(contents.ends_with("error: disk full\n"));
        Ok(())
    }

    #[test]
    fn test_bounded_sink_filters_independently() {
        let (mut logger, _inherit) = memory_logger(Severity::Error);
        let bounded = MemoryTransport::new();
        logger.add_sink(
            Sink::new(
                Arc::new(bounded.clone()),
                LineFormat::default(),
            )
            .with_bounds(Severity::Warn, Severity::Info),
        );

        // below the global threshold, but inside the sink's own bounds
        logger.write("cache miss", Severity::Info);
        logger.write("boom", Severity::Error);

        let severities: Vec<Severity> = bounded.lines().iter().map(|(s, _)| *s).collect();
        assert_eq!(severities, vec![Severity::Info]);
    }
}
