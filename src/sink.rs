//! Diagnostic sink seam between the loader and process logging.
//!
//! The loader reports every lookup outcome through an injected
//! [`DiagnosticSink`] instead of a global logger, so it stays testable
//! without a tracing subscriber. Production code passes [`TracingSink`].

use std::cell::RefCell;

use tracing::{debug, warn};

/// Receiver for per-lookup diagnostics.
///
/// Entries carry the group, key, and the underlying store or conversion
/// message; the rendered form is `"[{group}] {key}: {message}"` for both
/// severities.
pub trait DiagnosticSink {
    /// Benign absence: the group or key is not configured.
    fn debug(&self, group: &str, key: &str, message: &str);

    /// Malformed value or store failure, worth an operator's attention.
    fn warning(&self, group: &str, key: &str, message: &str);
}

/// Production sink forwarding to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn debug(&self, group: &str, key: &str, message: &str) {
        debug!("[{group}] {key}: {message}");
    }

    fn warning(&self, group: &str, key: &str, message: &str) {
        warn!("[{group}] {key}: {message}");
    }
}

/// Severity of a recorded sink entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warning,
}

/// One captured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEntry {
    pub severity: Severity,
    pub group: String,
    pub key: String,
    pub message: String,
}

/// Sink that records every entry, for asserting on diagnostics in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: RefCell<Vec<SinkEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.entries.borrow().clone()
    }

    /// Number of recorded entries with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.severity == severity)
            .count()
    }

    fn record(&self, severity: Severity, group: &str, key: &str, message: &str) {
        self.entries.borrow_mut().push(SinkEntry {
            severity,
            group: group.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for RecordingSink {
    fn debug(&self, group: &str, key: &str, message: &str) {
        self.record(Severity::Debug, group, key, message);
    }

    fn warning(&self, group: &str, key: &str, message: &str) {
        self.record(Severity::Warning, group, key, message);
    }
}
