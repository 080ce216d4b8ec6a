//! Human-readable progress output of the decomposition.
//!
//! Output goes through an optional [`DiagnosticSink`]. The sink never
//! influences numbering or validation; a decomposition without one behaves
//! identically.

use parking_lot::Mutex;
use std::fmt;

/// Receiver of diagnostic lines. Fire-and-forget: no back-pressure, no errors.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Forwards every line to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, line: &str) {
        log::debug!(target: "mesh_multiscale", "{line}");
    }
}

/// Keeps every line in memory, mostly for tests and reports.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

/// Borrowed sink plus line prefix for one `add`/`finalize` call.
#[derive(Clone, Copy)]
pub(crate) struct Diagnostics<'a> {
    sink: Option<&'a dyn DiagnosticSink>,
    prefix: &'a str,
}

impl<'a> Diagnostics<'a> {
    pub(crate) fn new(sink: Option<&'a dyn DiagnosticSink>, prefix: &'a str) -> Self {
        Self { sink, prefix }
    }

    /// Formats only when a sink is attached.
    pub(crate) fn line(&self, args: fmt::Arguments<'_>) {
        if let Some(sink) = self.sink {
            sink.emit(&format!("{}{}", self.prefix, args));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_prepended() {
        let sink = MemorySink::new();
        let diag = Diagnostics::new(Some(&sink as &dyn DiagnosticSink), "[ms] ");
        diag.line(format_args!("subdomain {}", 3));
        assert_eq!(sink.lines(), vec!["[ms] subdomain 3".to_string()]);
        sink.clear();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn absent_sink_is_silent() {
        let diag = Diagnostics::new(None, "x");
        diag.line(format_args!("dropped"));
    }
}
