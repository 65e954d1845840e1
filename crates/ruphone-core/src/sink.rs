//! Diagnostic sinks for extraction reports.

use std::error::Error;
use std::sync::Mutex;

/// Receiver for the reports an extraction run emits.
pub trait DiagnosticSink {
    /// Informational message, e.g. the final count.
    fn info(&self, message: &str);

    /// Error without further detail.
    fn error(&self, message: &str);

    /// Error carrying the underlying cause.
    fn exception(&self, message: &str, error: &dyn Error);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn exception(&self, message: &str, error: &dyn Error) {
        (**self).exception(message, error);
    }
}

/// Forwards reports to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn exception(&self, message: &str, error: &dyn Error) {
        tracing::error!(cause = %error_chain(error), "{}", message);
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn exception(&self, _message: &str, _error: &dyn Error) {}
}

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
    Exception,
}

/// A report captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    /// Rendered cause chain, only set for exceptions.
    pub detail: Option<String>,
}

/// Keeps reports in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn push(&self, level: Level, message: &str, detail: Option<String>) {
        if let Ok(mut records) = self.records.lock() {
            records.push(Diagnostic {
                level,
                message: message.to_string(),
                detail,
            });
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message, None);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message, None);
    }

    fn exception(&self, message: &str, error: &dyn Error) {
        self.push(Level::Exception, message, Some(error_chain(error)));
    }
}

/// Render an error and its sources as `outer: inner: ...`.
fn error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut current = error.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        // thiserror messages often embed their source already
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        current = cause.source();
    }
    rendered
}
