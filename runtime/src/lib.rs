//! Browser shell for the image detector.
//!
//! Loads the inference module once, accepts a dropped image, submits its
//! bytes for classification, and shows the resulting probability. The
//! analysis itself belongs to the external module; this crate owns the
//! readiness lifecycle and the drop-to-score pipeline.
//!
//! All host objects are reached through traits ([`InferenceModule`],
//! [`DragEvent`], [`DroppedFile`], [`ResultDisplay`], [`WorkerRegistrar`]),
//! so the same [`Page`] runs in the browser (see the `web` module on
//! `wasm32`) and natively against in-memory doubles.

pub mod config;
pub mod error;
pub mod logging;
pub mod module;
pub mod page;
pub mod pipeline;
pub mod report;
pub mod scheduler;
pub mod worker;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ShellConfig;
pub use error::FrontendError;
pub use module::{AnalysisResult, InferenceModule, ModuleLoader, ModuleState, StatusReader};
pub use page::{DropDisposition, Page};
pub use pipeline::{DragEvent, DroppedFile, IngestionPipeline, ResultDisplay};
pub use report::{ErrorReporter, TracingReporter};
pub use scheduler::{Scheduler, SchedulerStats, Task, TaskQueue};
pub use worker::WorkerRegistrar;
