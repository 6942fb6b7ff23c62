//! # Status Reporting
//!
//! The ceremonies report progress to an injected sink rather than to any
//! particular UI: an append-only log stream plus a one-line status display
//! that is styled as success or error. Whatever renders those lines (page,
//! terminal, test recorder) lives outside this crate.

/// Collaborator-facing sink for ceremony progress.
///
/// Implementations must tolerate calls from async contexts; both methods
/// take `&self` so a reporter can be shared across an attempt.
pub trait StatusReporter: Send + Sync {
    /// Append a line to the running log.
    fn log(&self, line: &str);

    /// Replace the one-line status display.
    fn set_status(&self, line: &str, is_error: bool);
}

impl<R: StatusReporter + ?Sized> StatusReporter for std::sync::Arc<R> {
    fn log(&self, line: &str) {
        (**self).log(line);
    }

    fn set_status(&self, line: &str, is_error: bool) {
        (**self).set_status(line, is_error);
    }
}

/// Default reporter that forwards everything to `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn log(&self, line: &str) {
        tracing::info!("{line}");
    }

    fn set_status(&self, line: &str, is_error: bool) {
        if is_error {
            tracing::error!(status = %line, "ceremony status");
        } else {
            tracing::info!(status = %line, "ceremony status");
        }
    }
}
