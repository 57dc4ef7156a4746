//! Page wiring: start order and event dispatch.
//!
//! Initialization is submitted to the scheduler but not awaited, so drop
//! events can reach [`Page::handle_drop`] before the module is ready. Those
//! drops are discarded by the readiness gate, never queued.

use crate::config::ShellConfig;
use crate::module::{InferenceModule, ModuleLoader, StatusReader};
use crate::pipeline::{DragEvent, IngestionPipeline, ResultDisplay};
use crate::report::ErrorReporter;
use crate::scheduler::{Scheduler, Task, TaskQueue};
use crate::worker::{register_cache_worker, WorkerRegistrar};
use std::rc::Rc;
use tracing::{debug, warn};

/// What happened to one drop event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropDisposition {
    /// The readiness gate was closed.
    Discarded,
    /// Analysis was queued.
    Queued,
    /// The event was unusable (no file) and the failure was reported.
    Rejected,
}

/// The detector page.
pub struct Page {
    config: ShellConfig,
    pipeline: IngestionPipeline,
    loader: Option<ModuleLoader>,
    status: StatusReader,
    registrar: Option<Rc<dyn WorkerRegistrar>>,
    reporter: Rc<dyn ErrorReporter>,
    queue: TaskQueue,
}

impl Page {
    /// Assemble a page and the scheduler that will run its tasks.
    pub fn new(
        config: ShellConfig,
        module: Rc<dyn InferenceModule>,
        display: Rc<dyn ResultDisplay>,
        registrar: Option<Rc<dyn WorkerRegistrar>>,
        reporter: Rc<dyn ErrorReporter>,
    ) -> (Self, Scheduler) {
        let (scheduler, queue) = Scheduler::new(Rc::clone(&reporter));
        let (loader, status) = ModuleLoader::new(Rc::clone(&module));
        let pipeline = IngestionPipeline::new(status.clone(), module, display, &config.unit_label);

        let page = Self {
            config,
            pipeline,
            loader: Some(loader),
            status,
            registrar,
            reporter,
            queue,
        };
        (page, scheduler)
    }

    /// Readiness of the inference module.
    pub fn status(&self) -> StatusReader {
        self.status.clone()
    }

    /// Submit module initialization. Only the first call has an effect.
    pub fn begin_initialization(&mut self) -> bool {
        let Some(loader) = self.loader.take() else {
            warn!("inference module initialization already started");
            return false;
        };
        self.queue
            .submit(Task::new("initialize", loader.initialize()))
    }

    /// Submit caching worker registration, if configured.
    pub fn register_worker(&self) {
        let Some(script) = self.config.worker_script.clone() else {
            debug!("no caching worker configured");
            return;
        };
        let registrar = self.registrar.clone();
        self.queue.submit(Task::new("register-worker", async move {
            register_cache_worker(registrar.as_deref(), &script).await
        }));
    }

    /// Begin initialization and worker registration.
    pub fn start(&mut self) {
        self.begin_initialization();
        self.register_worker();
    }

    pub fn handle_drag_over(&self, event: &dyn DragEvent) {
        self.pipeline.on_drag_over(event);
    }

    pub fn handle_drop(&self, event: &dyn DragEvent) -> DropDisposition {
        match self.pipeline.on_drop(event) {
            Ok(None) => DropDisposition::Discarded,
            Ok(Some(task)) => {
                self.queue.submit(Task::new("analyze", async move {
                    task.run().await.map(|_| ())
                }));
                DropDisposition::Queued
            }
            Err(e) => {
                self.reporter.report(&e);
                DropDisposition::Rejected
            }
        }
    }
}
