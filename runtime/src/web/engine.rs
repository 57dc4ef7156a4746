//! Bindings to the inference engine's JavaScript module.

use super::describe;
use crate::error::FrontendError;
use crate::module::{AnalysisResult, InferenceModule};
use async_trait::async_trait;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(raw_module = "/pkg/image_detector.js")]
extern "C" {
    /// The engine package's default export: fetches and instantiates its
    /// wasm binary.
    #[wasm_bindgen(js_name = "default", catch)]
    async fn init_engine() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "analyze_image", catch)]
    fn analyze_image(bytes: &[u8]) -> Result<JsValue, JsValue>;
}

/// The engine package loaded from `/pkg/image_detector.js`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineModule;

#[async_trait(?Send)]
impl InferenceModule for EngineModule {
    async fn initialize(&self) -> Result<(), FrontendError> {
        init_engine()
            .await
            .map(|_| ())
            .map_err(|e| FrontendError::Initialization(describe(&e)))
    }

    fn analyze(&self, bytes: &[u8]) -> Result<AnalysisResult, FrontendError> {
        let record = analyze_image(bytes).map_err(|e| FrontendError::Analysis(describe(&e)))?;
        serde_wasm_bindgen::from_value(record)
            .map_err(|e| FrontendError::Analysis(format!("decoding result: {e}")))
    }
}
