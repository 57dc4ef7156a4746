//! Module Loader: one-time initialization of the inference module and the
//! readiness state the ingestion pipeline is gated on.

pub mod loader;
pub mod result;
pub mod state;

pub use loader::ModuleLoader;
pub use result::AnalysisResult;
pub use state::{status_cell, ModuleState, StatusPublisher, StatusReader};

use crate::error::FrontendError;
use async_trait::async_trait;

/// Contract of the externally supplied inference module.
///
/// Both entry points run on the page's single thread, so the trait is not
/// `Send`.
#[async_trait(?Send)]
pub trait InferenceModule {
    /// Perform the module's required setup. Resolves once it is operable.
    async fn initialize(&self) -> Result<(), FrontendError>;

    /// Classify one image given its raw bytes.
    fn analyze(&self, bytes: &[u8]) -> Result<AnalysisResult, FrontendError>;
}
