use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::ReportError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (read failed).
    Error,
    /// Critical error (missing files and other I/O failures).
    Critical,
}

impl SourceSeverity {
    /// Classify a read failure.
    pub fn for_error(e: &ReportError) -> Self {
        match e {
            ReportError::Io(_) | ReportError::ResourceNotFound { .. } => Self::Critical,
            ReportError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            _ => Self::Error,
        }
    }
}

/// Context about a single file read.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// The input path being read.
    pub path: PathBuf,
}

/// Stats reported on a successful read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceStats {
    /// Number of rows read from the file.
    pub rows: usize,
}

/// Observer interface for per-file read outcomes.
pub trait SourceObserver: Send + Sync {
    /// Called when a file was read.
    fn on_success(&self, _ctx: &SourceContext, _stats: SourceStats) {}

    /// Called when a file could not be validated or read.
    fn on_failure(&self, _ctx: &SourceContext, _severity: SourceSeverity, _error: &ReportError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ReportError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SourceObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn SourceObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SourceObserver for CompositeObserver {
    fn on_success(&self, ctx: &SourceContext, stats: SourceStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ReportError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ReportError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards read events to the `log` facade.
///
/// Failures are logged at `debug` and alerts at `warn`; the caller still owns the final error.
#[derive(Debug, Default)]
pub struct LogObserver;

impl SourceObserver for LogObserver {
    fn on_success(&self, ctx: &SourceContext, stats: SourceStats) {
        info!("[source][ok] path={} rows={}", ctx.path.display(), stats.rows);
    }

    fn on_failure(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ReportError) {
        debug!(
            "[source][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ReportError) {
        warn!(
            "[ALERT][source][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}
