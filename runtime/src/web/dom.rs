//! DOM implementations of the page traits.

use super::describe;
use crate::error::FrontendError;
use crate::pipeline::{DragEvent, DroppedFile, ResultDisplay};
use crate::worker::WorkerRegistrar;
use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, ServiceWorkerContainer, Window};

/// Look up a required element by id.
pub fn element(document: &Document, id: &str) -> Result<Element, FrontendError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FrontendError::ElementMissing(id.to_string()))
}

/// A `dragover`/`drop` event from the drop target.
pub struct DomDragEvent(web_sys::DragEvent);

impl DomDragEvent {
    pub fn new(event: web_sys::DragEvent) -> Self {
        Self(event)
    }
}

impl DragEvent for DomDragEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn files(&self) -> Vec<Box<dyn DroppedFile>> {
        let Some(list) = self.0.data_transfer().and_then(|dt| dt.files()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|file| Box::new(DomFile(file)) as Box<dyn DroppedFile>)
            .collect()
    }
}

/// A dropped `File`.
pub struct DomFile(web_sys::File);

#[async_trait(?Send)]
impl DroppedFile for DomFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FrontendError> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| FrontendError::Read {
                file: self.0.name(),
                reason: describe(&e),
            })?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Writes the score as an element's text content.
pub struct ElementDisplay(Element);

impl ElementDisplay {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl ResultDisplay for ElementDisplay {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// `navigator.serviceWorker`.
pub struct ServiceWorkerRegistrar {
    container: ServiceWorkerContainer,
}

impl ServiceWorkerRegistrar {
    /// `None` when the browser has no service worker support.
    pub fn from_window(window: &Window) -> Option<Self> {
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        supported.then(|| Self {
            container: navigator.service_worker(),
        })
    }
}

#[async_trait(?Send)]
impl WorkerRegistrar for ServiceWorkerRegistrar {
    async fn register(&self, script: &str) -> Result<(), FrontendError> {
        JsFuture::from(self.container.register(script))
            .await
            .map(|_| ())
            .map_err(|e| FrontendError::Registration {
                script: script.to_string(),
                reason: describe(&e),
            })
    }
}
