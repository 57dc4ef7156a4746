//! Drive the inference module's initialization and publish readiness.

use super::state::{status_cell, StatusPublisher, StatusReader};
use super::InferenceModule;
use crate::error::FrontendError;
use std::rc::Rc;
use tracing::{debug, info};

/// Owns the only writer of the module state.
///
/// [`ModuleLoader::initialize`] consumes the loader, so initialization can be
/// attempted at most once and the state is never reset.
pub struct ModuleLoader {
    module: Rc<dyn InferenceModule>,
    publisher: StatusPublisher,
}

impl ModuleLoader {
    /// Create a loader and the reader side of its status cell.
    pub fn new(module: Rc<dyn InferenceModule>) -> (Self, StatusReader) {
        let (publisher, reader) = status_cell();
        (Self { module, publisher }, reader)
    }

    /// Another reader of this loader's state.
    pub fn status(&self) -> StatusReader {
        self.publisher.subscribe()
    }

    /// Initialize the module.
    ///
    /// On success the state becomes `Ready`. On failure it becomes `Failed`
    /// and the error is returned unchanged; no retry is attempted.
    pub async fn initialize(self) -> Result<(), FrontendError> {
        debug!("initializing inference module");
        match self.module.initialize().await {
            Ok(()) => {
                self.publisher.mark_ready();
                info!("inference module ready");
                Ok(())
            }
            Err(e) => {
                self.publisher.mark_failed();
                Err(e)
            }
        }
    }
}
