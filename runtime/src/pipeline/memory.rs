//! Headless implementations of the page objects, for native hosts and tests.

use super::{DragEvent, DroppedFile, ResultDisplay};
use crate::error::FrontendError;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

/// A file held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
    read_error: Option<String>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
            read_error: None,
        }
    }

    /// A file whose read fails with `reason`.
    pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            read_error: Some(reason.into()),
            ..Self::new(name, "application/octet-stream", Vec::new())
        }
    }
}

#[async_trait(?Send)]
impl DroppedFile for InMemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FrontendError> {
        match &self.read_error {
            Some(reason) => Err(FrontendError::Read {
                file: self.name.clone(),
                reason: reason.clone(),
            }),
            None => Ok(self.bytes.clone()),
        }
    }
}

/// A drag event carrying in-memory files.
#[derive(Debug, Default)]
pub struct InMemoryDropEvent {
    files: Vec<InMemoryFile>,
    default_prevented: Cell<bool>,
}

impl InMemoryDropEvent {
    pub fn new(files: Vec<InMemoryFile>) -> Self {
        Self {
            files,
            default_prevented: Cell::new(false),
        }
    }

    /// Whether a handler suppressed the default action.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl DragEvent for InMemoryDropEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn files(&self) -> Vec<Box<dyn DroppedFile>> {
        self.files
            .iter()
            .cloned()
            .map(|f| Box::new(f) as Box<dyn DroppedFile>)
            .collect()
    }
}

/// A text sink that remembers what was written.
#[derive(Debug, Default)]
pub struct TextDisplay {
    text: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl TextDisplay {
    /// Last text written, if any.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ResultDisplay for TextDisplay {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_string());
        self.writes.set(self.writes.get() + 1);
    }
}
