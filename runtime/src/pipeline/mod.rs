//! Ingestion Pipeline: drag-and-drop events in, score text out.
//!
//! The page objects involved are reached through the traits below so the
//! pipeline runs the same against the DOM and against in-memory doubles.

pub mod display;
pub mod ingest;
pub mod memory;

pub use display::format_score;
pub use ingest::{DropTask, IngestionPipeline};
pub use memory::{InMemoryDropEvent, InMemoryFile, TextDisplay};

use crate::error::FrontendError;
use async_trait::async_trait;

/// A `dragover` or `drop` event delivered to the drop target.
pub trait DragEvent {
    /// Suppress the platform's default handling (opening the file).
    fn prevent_default(&self);

    /// Files carried by the event, in order.
    fn files(&self) -> Vec<Box<dyn DroppedFile>>;
}

/// One user-supplied file.
#[async_trait(?Send)]
pub trait DroppedFile {
    fn name(&self) -> String;

    /// Size in bytes as reported by the host.
    fn size(&self) -> u64;

    /// Declared MIME type. Not validated.
    fn mime_type(&self) -> String;

    /// Read the full contents.
    async fn read_bytes(&self) -> Result<Vec<u8>, FrontendError>;
}

/// Text sink showing the score.
pub trait ResultDisplay {
    fn set_text(&self, text: &str);
}
