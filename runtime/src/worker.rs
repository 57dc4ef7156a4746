//! Background caching worker registration.
//!
//! Independent of the loader and the pipeline: a failed registration is
//! reported and changes nothing else on the page.

use crate::error::FrontendError;
use async_trait::async_trait;
use tracing::{debug, info};

/// Host facility able to register a caching worker script.
#[async_trait(?Send)]
pub trait WorkerRegistrar {
    async fn register(&self, script: &str) -> Result<(), FrontendError>;
}

/// Register `script` if the host offers a registrar.
pub async fn register_cache_worker(
    registrar: Option<&dyn WorkerRegistrar>,
    script: &str,
) -> Result<(), FrontendError> {
    let Some(registrar) = registrar else {
        debug!("caching workers unsupported, skipping {script}");
        return Ok(());
    };
    registrar.register(script).await?;
    info!("registered caching worker {script}");
    Ok(())
}
