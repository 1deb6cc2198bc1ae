// Copyright 2025 Cowboy AI, LLC.

//! Render configuration
//!
//! Controls where diagrams are written and how the Graphviz backend is
//! invoked. Every field has a default, so a partial JSON document is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{RenderError, RenderResult};

const RANK_DIRECTIONS: [&str; 4] = ["LR", "RL", "TB", "BT"];

/// Settings shared by the diagram renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory receiving rendered files
    pub output_dir: PathBuf,
    /// File stem used when no explicit name is given
    pub filename: String,
    /// Graphviz output format passed as `-T<format>`
    pub format: String,
    /// Graphviz executable
    pub engine: String,
    /// Layout direction
    pub rankdir: String,
    /// Open the rendered file with the system viewer
    pub view: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            filename: "category_structure".to_string(),
            format: "pdf".to_string(),
            engine: "dot".to_string(),
            rankdir: "LR".to_string(),
            view: false,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    /// Use a different output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Use a different output format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Use a different Graphviz executable
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Reject settings the renderers cannot act on
    pub fn validate(&self) -> RenderResult<()> {
        if self.filename.trim().is_empty() {
            return Err(RenderError::InvalidConfig("filename must not be empty".to_string()));
        }
        if self.filename.contains(['/', '\\']) {
            return Err(RenderError::InvalidConfig(format!(
                "filename must not contain path separators: {}",
                self.filename
            )));
        }
        if self.format.trim().is_empty() {
            return Err(RenderError::InvalidConfig("format must not be empty".to_string()));
        }
        if self.engine.trim().is_empty() {
            return Err(RenderError::InvalidConfig("engine must not be empty".to_string()));
        }
        if !RANK_DIRECTIONS.contains(&self.rankdir.as_str()) {
            return Err(RenderError::InvalidConfig(format!(
                "rankdir must be one of {:?}, got {}",
                RANK_DIRECTIONS, self.rankdir
            )));
        }
        Ok(())
    }

    /// Path of the DOT source for `name`
    pub fn dot_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.dot"))
    }

    /// Path of the rendered artifact for `name`
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.{}", self.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults_render_category_structure_pdf() {
        let config = RenderConfig::default();
        assert_eq!(config.filename, "category_structure");
        assert_eq!(config.format, "pdf");
        assert_eq!(config.engine, "dot");
        assert_eq!(config.rankdir, "LR");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RenderConfig::from_json_str(r#"{ "format": "svg", "view": true }"#).unwrap();
        assert_eq!(config.format, "svg");
        assert!(config.view);
        assert_eq!(config.engine, "dot");
        assert_eq!(config.output_path("h"), PathBuf::from("./h.svg"));
    }

    #[test_case(r#"{ "filename": "" }"# ; "empty filename")]
    #[test_case(r#"{ "filename": "a/b" }"# ; "filename with separator")]
    #[test_case(r#"{ "format": " " }"# ; "blank format")]
    #[test_case(r#"{ "engine": "" }"# ; "empty engine")]
    #[test_case(r#"{ "rankdir": "XY" }"# ; "unknown rankdir")]
    fn test_invalid_config_rejected(json: &str) {
        let err = RenderConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig(_)), "{err:?}");
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = RenderConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RenderError::SerializationError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RenderConfig::from_file("/definitely/not/here/render.json").unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }

    #[test]
    fn test_paths() {
        let config = RenderConfig::default()
            .with_output_dir("/tmp/diagrams")
            .with_format("png");
        assert_eq!(config.dot_path("h"), PathBuf::from("/tmp/diagrams/h.dot"));
        assert_eq!(config.output_path("h"), PathBuf::from("/tmp/diagrams/h.png"));
    }
}
