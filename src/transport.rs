
//! Transport implementations for log delivery.
//!
//! A `Transport` accepts a formatted line plus its severity and records it.
//! Console and file transports preserve the order of writes issued in
//! sequence; a database transport may buffer or drop independently, which is
//! why the trait reports delivery failure as a `Result` the facade treats as
//! best-effort. `MemoryTransport` captures lines for inspection in tests and
//! embedding callers.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

use crate::severity::Severity;

/// A log destination capability. Implementations must tolerate being shared
/// across threads; delivery takes `&self`.
pub trait Transport: Send + Sync {
    fn deliver(&self, line: &str, severity: Severity) -> Result<()>;
}

/// Writes lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleTransport;

impl Transport for ConsoleTransport {
    fn deliver(&self, line: &str, _severity: Severity) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}")?;
        Ok(())
    }
}

/// Appends lines to a file. Construction resolves the path to an absolute
/// one and creates missing ancestor directories.
pub struct FileTransport {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileTransport {
    pub fn create(path: &Path) -> Result<FileTransport> {
        let path = absolute_path(path)?;

        if let Some(parent) = path.parent() {
            // create_dir_all is idempotent and tolerates another process
            // creating the same directories concurrently
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create log directory {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("could not open log file {}", path.display()))?;

        Ok(FileTransport {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for FileTransport {
    fn deliver(&self, line: &str, _severity: Severity) -> Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow::anyhow!("log file lock poisoned"))?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// Captures delivered lines in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    lines: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MemoryTransport {
    pub fn new() -> MemoryTransport {
        MemoryTransport::default()
    }

    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Transport for MemoryTransport {
    fn deliver(&self, line: &str, severity: Severity) -> Result<()> {
        self.lines
            .lock()
            .map_err(|_| anyhow::anyhow!("memory transport lock poisoned"))?
            .push((severity, line.to_string()));
        Ok(())
    }
}

/// Resolve a path against the process working directory.
fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
