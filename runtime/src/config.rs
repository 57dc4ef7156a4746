//! Page configuration.
//!
//! Every field has a default matching the stock page, so an empty JSON
//! object (or no configuration at all) yields a working shell.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element the browser entry
/// point reads its configuration from.
pub const CONFIG_ELEMENT_ID: &str = "detector-config";

/// Configuration of the detector page shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Element receiving `dragover`/`drop` events.
    pub drop_target_id: String,
    /// Element whose text content shows the score.
    pub result_display_id: String,
    /// Appended after the percentage.
    pub unit_label: String,
    /// Caching worker script path. `None` skips registration.
    pub worker_script: Option<String>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            drop_target_id: "dropzone".to_string(),
            result_display_id: "score".to_string(),
            unit_label: "% AI probability".to_string(),
            worker_script: Some("sw.js".to_string()),
            log_filter: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing shell configuration")
    }

    /// Read a configuration file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = ShellConfig::default();
        assert_eq!(config.drop_target_id, "dropzone");
        assert_eq!(config.result_display_id, "score");
        assert_eq!(config.unit_label, "% AI probability");
        assert_eq!(config.worker_script.as_deref(), Some("sw.js"));
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let config = ShellConfig::from_json("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            ShellConfig::from_json(r#"{"result_display_id": "verdict", "worker_script": null}"#)
                .unwrap();
        assert_eq!(config.result_display_id, "verdict");
        assert_eq!(config.drop_target_id, "dropzone");
        assert!(config.worker_script.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ShellConfig::from_json(r#"{"dropzone": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("parsing shell configuration"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_filter": "detector_runtime=debug"}}"#).unwrap();
        let config = ShellConfig::from_path(file.path()).unwrap();
        assert_eq!(config.log_filter, "detector_runtime=debug");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().starts_with("reading "));
    }
}
