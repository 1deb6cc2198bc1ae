// Copyright 2025 Cowboy AI, LLC.

//! Error types for composition and rendering

use std::path::PathBuf;

use thiserror::Error;

/// Raised when two morphisms cannot be composed as `outer ∘ inner`
///
/// Composition requires the target of `inner` to be the source of `outer`,
/// compared by object name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "cannot compose {outer_label} after {inner_label}: target({inner_target}) ≠ source({outer_source})"
)]
pub struct CompositionTypeError {
    /// Label of the morphism applied second
    pub outer_label: String,
    /// Label of the morphism applied first
    pub inner_label: String,
    /// Name of the inner morphism's target object
    pub inner_target: String,
    /// Name of the outer morphism's source object
    pub outer_source: String,
}

impl CompositionTypeError {
    /// Both object names involved in the mismatch, inner target first
    pub fn mismatched_objects(&self) -> (&str, &str) {
        (self.inner_target.as_str(), self.outer_source.as_str())
    }
}

/// Errors produced by diagram renderers
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The rendering backend is not installed or could not be started
    #[error("Renderer unavailable: {engine} - {reason}")]
    Unavailable {
        /// Name of the backend executable
        engine: String,
        /// Why it could not be used
        reason: String,
    },

    /// The backend ran but reported failure
    #[error("Renderer failed: {engine} exited with {status}: {stderr}")]
    Failed {
        /// Name of the backend executable
        engine: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// Writing the diagram description failed
    #[error("I/O error writing {}: {message}", .path.display())]
    Io {
        /// File that could not be written
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Render configuration was rejected
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl RenderError {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Check if this error means the backend is missing rather than broken
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RenderError::Unavailable { .. })
    }
}
