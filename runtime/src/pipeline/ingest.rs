//! Gate drop events on module readiness and turn accepted drops into tasks.

use super::display::format_score;
use super::{DragEvent, DroppedFile, ResultDisplay};
use crate::error::FrontendError;
use crate::module::{AnalysisResult, InferenceModule, ModuleState, StatusReader};
use std::rc::Rc;
use tracing::{debug, warn};

/// Bridges drop-target events to the inference entry point and the display.
pub struct IngestionPipeline {
    status: StatusReader,
    module: Rc<dyn InferenceModule>,
    display: Rc<dyn ResultDisplay>,
    unit_label: Rc<str>,
}

impl IngestionPipeline {
    pub fn new(
        status: StatusReader,
        module: Rc<dyn InferenceModule>,
        display: Rc<dyn ResultDisplay>,
        unit_label: &str,
    ) -> Self {
        Self {
            status,
            module,
            display,
            unit_label: Rc::from(unit_label),
        }
    }

    /// Keep the drop target interactive.
    pub fn on_drag_over(&self, event: &dyn DragEvent) {
        event.prevent_default();
    }

    /// Handle a drop.
    ///
    /// Returns `Ok(None)` when the readiness gate is closed: nothing is read,
    /// analyzed, or displayed. Otherwise returns the task that reads the first
    /// file, analyzes it, and renders the score. Files past the first are
    /// ignored.
    pub fn on_drop(&self, event: &dyn DragEvent) -> Result<Option<DropTask>, FrontendError> {
        event.prevent_default();

        match self.status.current() {
            ModuleState::Ready => {}
            ModuleState::Uninitialized | ModuleState::Failed => {
                debug!("module not ready, drop discarded");
                return Ok(None);
            }
        }

        let mut files = event.files().into_iter();
        let file = files.next().ok_or(FrontendError::EmptySelection)?;
        let ignored = files.count();
        if ignored > 0 {
            debug!(ignored, "only the first dropped file is analyzed");
        }

        Ok(Some(DropTask {
            file,
            module: Rc::clone(&self.module),
            display: Rc::clone(&self.display),
            unit_label: Rc::clone(&self.unit_label),
        }))
    }
}

/// An accepted drop waiting to be read, analyzed, and rendered.
pub struct DropTask {
    file: Box<dyn DroppedFile>,
    module: Rc<dyn InferenceModule>,
    display: Rc<dyn ResultDisplay>,
    unit_label: Rc<str>,
}

impl DropTask {
    /// Name of the file this task will analyze.
    pub fn file_name(&self) -> String {
        self.file.name()
    }

    /// Run to completion. On failure the display keeps its previous text.
    pub async fn run(self) -> Result<AnalysisResult, FrontendError> {
        let name = self.file.name();
        debug!(
            file = %name,
            size = self.file.size(),
            mime = %self.file.mime_type(),
            "reading dropped file"
        );

        let bytes = self.file.read_bytes().await?;
        let result = self.module.analyze(&bytes)?;

        if let Some(message) = &result.message {
            warn!(file = %name, "engine reported: {message}");
        }

        let text = format_score(result.ai_probability, &self.unit_label);
        debug!(file = %name, score = %text, "rendering score");
        self.display.set_text(&text);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::status_cell;
    use crate::pipeline::{InMemoryDropEvent, InMemoryFile, TextDisplay};
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingModule {
        calls: RefCell<Vec<Vec<u8>>>,
    }

    #[async_trait(?Send)]
    impl InferenceModule for RecordingModule {
        async fn initialize(&self) -> Result<(), FrontendError> {
            Ok(())
        }

        fn analyze(&self, bytes: &[u8]) -> Result<AnalysisResult, FrontendError> {
            self.calls.borrow_mut().push(bytes.to_vec());
            Ok(AnalysisResult::with_probability(0.873))
        }
    }

    fn png(name: &str, len: usize) -> InMemoryFile {
        InMemoryFile::new(name, "image/png", (0..len as u8).collect())
    }

    #[test]
    fn test_drag_over_prevents_default() {
        let (_publisher, status) = status_cell();
        let pipeline = IngestionPipeline::new(
            status,
            Rc::new(RecordingModule::default()),
            Rc::new(TextDisplay::default()),
            "% AI probability",
        );
        let event = InMemoryDropEvent::new(vec![png("a.png", 4)]);
        pipeline.on_drag_over(&event);
        assert!(event.default_prevented());
    }

    #[test]
    fn test_drop_discarded_while_uninitialized() {
        let (_publisher, status) = status_cell();
        let module = Rc::new(RecordingModule::default());
        let display = Rc::new(TextDisplay::default());
        let pipeline =
            IngestionPipeline::new(status, module.clone(), display.clone(), "% AI probability");

        let event = InMemoryDropEvent::new(vec![png("a.png", 4)]);
        assert!(pipeline.on_drop(&event).unwrap().is_none());
        assert!(event.default_prevented());
        assert!(module.calls.borrow().is_empty());
        assert_eq!(display.writes(), 0);
    }

    #[test]
    fn test_drop_discarded_after_failure() {
        let (publisher, status) = status_cell();
        publisher.mark_failed();
        let pipeline = IngestionPipeline::new(
            status,
            Rc::new(RecordingModule::default()),
            Rc::new(TextDisplay::default()),
            "% AI probability",
        );
        let event = InMemoryDropEvent::new(vec![png("a.png", 4)]);
        assert!(pipeline.on_drop(&event).unwrap().is_none());
    }

    #[test]
    fn test_empty_selection() {
        let (publisher, status) = status_cell();
        publisher.mark_ready();
        let display = Rc::new(TextDisplay::default());
        let pipeline = IngestionPipeline::new(
            status,
            Rc::new(RecordingModule::default()),
            display.clone(),
            "% AI probability",
        );
        let err = pipeline
            .on_drop(&InMemoryDropEvent::new(vec![]))
            .err()
            .unwrap();
        assert_eq!(err, FrontendError::EmptySelection);
        assert_eq!(display.writes(), 0);
    }

    #[tokio::test]
    async fn test_ready_drop_analyzes_first_file_only() {
        let (publisher, status) = status_cell();
        publisher.mark_ready();
        let module = Rc::new(RecordingModule::default());
        let display = Rc::new(TextDisplay::default());
        let pipeline =
            IngestionPipeline::new(status, module.clone(), display.clone(), "% AI probability");

        let event = InMemoryDropEvent::new(vec![png("first.png", 10), png("second.png", 3)]);
        let task = pipeline.on_drop(&event).unwrap().unwrap();
        assert_eq!(task.file_name(), "first.png");

        let result = task.run().await.unwrap();
        assert_eq!(result.ai_probability, 0.873);

        let calls = module.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (0..10u8).collect::<Vec<_>>());
        assert_eq!(display.text().as_deref(), Some("87.3% AI probability"));
    }

    #[tokio::test]
    async fn test_read_failure_leaves_display_unchanged() {
        let (publisher, status) = status_cell();
        publisher.mark_ready();
        let module = Rc::new(RecordingModule::default());
        let display = Rc::new(TextDisplay::default());
        display.set_text("previous");
        let pipeline =
            IngestionPipeline::new(status, module.clone(), display.clone(), "% AI probability");

        let event = InMemoryDropEvent::new(vec![InMemoryFile::unreadable("x.png", "aborted")]);
        let task = pipeline.on_drop(&event).unwrap().unwrap();
        let err = task.run().await.unwrap_err();

        assert_eq!(err.kind(), "read");
        assert!(module.calls.borrow().is_empty());
        assert_eq!(display.text().as_deref(), Some("previous"));
        assert_eq!(display.writes(), 1);
    }
}
