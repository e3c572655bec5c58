//! Structured logging for the reduction loop.
//!
//! The reduction algorithm itself has no notion of logging; this module is
//! the ambient instrumentation layer the engine calls into at run start,
//! cache hits, reductions, granularity escalation, and termination. It uses
//! a plain `serde`-serializable record type rather than a `log`/`tracing`
//! facade, so a consumer can route entries anywhere without pulling in a
//! logging framework.

use std::io::Write;
use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
}

/// One structured log record. Serializes to a single JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// `pretty()`-formatted config id, when the entry is about a specific probe.
    pub config_id: Option<String>,
    pub fields: serde_json::Value,
}

/// Receives log entries as the engine emits them.
pub trait Emitter {
    fn emit(&self, entry: LogEntry);
}

/// The default: discards everything, at zero cost.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEmitter;

impl Emitter for NullEmitter {
    fn emit(&self, _entry: LogEntry) {}
}

/// Writes one JSON object per line to any `Write` sink (a file, stdout, an
/// in-memory buffer for tests).
pub struct JsonlEmitter<W> {
    writer: Mutex<W>,
}

impl<W: Write> JsonlEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write> Emitter for JsonlEmitter<W> {
    fn emit(&self, entry: LogEntry) {
        let Ok(line) = serde_json::to_string(&entry) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
        }
    }
}
