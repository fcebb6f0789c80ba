
//! A sink pairs a transport with its formatting and filtering choices.
//!
//! Sinks built from configuration carry no explicit bounds and inherit the
//! facade's global threshold. Sinks given explicit `min`/`max` bounds filter
//! independently of the global threshold.

use std::sync::Arc;

use crate::format::LineFormat;
use crate::severity::Severity;
use crate::transport::Transport;

pub struct Sink {
    transport: Arc<dyn Transport>,
    bounds: Option<(Severity, Severity)>,
    format: LineFormat,
}

impl Sink {
    pub fn new(transport: Arc<dyn Transport>, format: LineFormat) -> Sink {
        Sink {
            transport,
            bounds: None,
            format,
        }
    }

    /// Attach independent severity bounds. `min` is the most critical
    /// admitted severity and `max` the least critical.
    pub fn with_bounds(mut self, min: Severity, max: Severity) -> Sink {
        self.bounds = Some((min, max));
        self
    }

    /// Whether this sink admits a message of the given severity under the
    /// facade's current global threshold.
    pub fn admits(&self, severity: Severity, threshold: Severity) -> bool {
        match self.bounds {
            Some((min, max)) => min <= severity && severity <= max,
            None => severity <= threshold,
        }
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    fn sink() -> Sink {
        Sink::new(Arc::new(MemoryTransport::new()), LineFormat::default())
    }

    #[test]
    fn test_unbounded_sink_inherits_threshold() {
        let sink = sink();
        assert!(sink.admits(Severity::Error, Severity::Info));
        assert!(sink.admits(Severity::Info, Severity::Info));
        assert!(!sink.admits(Severity::Debug, Severity::Info));
    }

    #[test]
    fn test_bounded_sink_ignores_threshold() {
        let sink = sink().with_bounds(Severity::Warn, Severity::Info);
        // more critical than min is rejected, unlike the global policy
        assert!(!sink.admits(Severity::Error, Severity::Debug));
        assert!(sink.admits(Severity::Warn, Severity::Error));
        assert!(sink.admits(Severity::Info, Severity::Error));
        assert!(!sink.admits(Severity::Debug, Severity::Debug));
    }
}
