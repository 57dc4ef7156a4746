//! Failure taxonomy for the detector shell.
//!
//! Nothing here is recovered locally. Failures travel to an
//! [`ErrorReporter`](crate::report::ErrorReporter) and the page stays silent.

use thiserror::Error;

/// Every way a page operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// The inference module could not be set up. Analysis stays disabled
    /// for the rest of the page's lifetime.
    #[error("inference module initialization failed: {0}")]
    Initialization(String),

    /// The dropped file's contents could not be read.
    #[error("failed to read dropped file {file}: {reason}")]
    Read { file: String, reason: String },

    /// A drop event carried no file.
    #[error("drop event carried no file")]
    EmptySelection,

    /// The inference entry point failed or returned an undecodable record.
    #[error("analysis failed: {0}")]
    Analysis(String),

    /// A required page element is absent.
    #[error("page element not found: #{0}")]
    ElementMissing(String),

    /// The background caching worker could not be registered.
    #[error("failed to register caching worker {script}: {reason}")]
    Registration { script: String, reason: String },
}

impl FrontendError {
    /// Short machine-readable tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Initialization(_) => "initialization",
            Self::Read { .. } => "read",
            Self::EmptySelection => "empty_selection",
            Self::Analysis(_) => "analysis",
            Self::ElementMissing(_) => "element_missing",
            Self::Registration { .. } => "registration",
        }
    }
}
