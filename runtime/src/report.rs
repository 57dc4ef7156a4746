//! Error-reporting collaborator.
//!
//! Failures never reach the user. They are handed to an [`ErrorReporter`],
//! which makes them observable (logs, tests) without changing page behavior.

use crate::error::FrontendError;
use tracing::error;

/// Receives every failure the page does not recover from.
pub trait ErrorReporter {
    /// Record one failure.
    fn report(&self, error: &FrontendError);
}

/// Reporter that writes failures to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, err: &FrontendError) {
        error!(kind = err.kind(), "{err}");
    }
}
