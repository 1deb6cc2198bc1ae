// Copyright 2025 Cowboy AI, LLC.

//! Diagram renderers
//!
//! Rendering is best effort. [`Morphism::visualize`] logs a warning and
//! carries on when a renderer fails, so a missing Graphviz install never
//! breaks the caller.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use super::config::RenderConfig;
use super::diagram::Diagram;
use crate::category::Morphism;
use crate::errors::{RenderError, RenderResult};

/// Files produced by a render request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    /// DOT source written to disk
    pub source: PathBuf,
    /// Rendered artifact, when a backend produced one
    pub output: Option<PathBuf>,
}

/// Something that can draw nodes and edges
pub trait DiagramRenderer {
    /// Render `diagram` under the file stem `name`
    fn render(&self, diagram: &Diagram, name: &str) -> RenderResult<RenderedDiagram>;

    /// File stem used by [`Morphism::visualize`]
    fn default_name(&self) -> String;
}

/// Writes DOT source only; needs no external tools
#[derive(Debug, Clone, Default)]
pub struct DotFileRenderer {
    config: RenderConfig,
}

impl DotFileRenderer {
    /// Create a renderer using `config`
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl DiagramRenderer for DotFileRenderer {
    fn render(&self, diagram: &Diagram, name: &str) -> RenderResult<RenderedDiagram> {
        let source = write_dot(&self.config, diagram, name)?;
        Ok(RenderedDiagram {
            source,
            output: None,
        })
    }

    fn default_name(&self) -> String {
        self.config.filename.clone()
    }
}

/// Writes DOT source and runs the Graphviz executable on it
#[derive(Debug, Clone, Default)]
pub struct GraphvizRenderer {
    config: RenderConfig,
}

impl GraphvizRenderer {
    /// Create a renderer using `config`
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Whether the configured engine can be started
    pub fn is_available(&self) -> bool {
        Command::new(&self.config.engine)
            .arg("-V")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn open_viewer(&self, path: &Path) {
        let mut cmd = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        } else {
            Command::new("xdg-open")
        };
        // Fire and forget; the viewer outlives this call and is never awaited
        if let Err(e) = cmd.arg(path).spawn() {
            warn!(path = %path.display(), "Could not open viewer: {}", e);
        }
    }
}

impl DiagramRenderer for GraphvizRenderer {
    fn render(&self, diagram: &Diagram, name: &str) -> RenderResult<RenderedDiagram> {
        let source = write_dot(&self.config, diagram, name)?;
        let output = self.config.output_path(name);

        debug!(engine = %self.config.engine, format = %self.config.format, "Invoking Graphviz");
        let result = Command::new(&self.config.engine)
            .arg(format!("-T{}", self.config.format))
            .arg(&source)
            .arg("-o")
            .arg(&output)
            .output()
            .map_err(|e| {
                // Nothing will consume the source without the engine
                if let Err(rm) = std::fs::remove_file(&source) {
                    debug!(path = %source.display(), "Could not remove DOT source: {}", rm);
                }
                RenderError::Unavailable {
                    engine: self.config.engine.clone(),
                    reason: e.to_string(),
                }
            })?;

        if !result.status.success() {
            return Err(RenderError::Failed {
                engine: self.config.engine.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if self.config.view {
            self.open_viewer(&output);
        }

        Ok(RenderedDiagram {
            source,
            output: Some(output),
        })
    }

    fn default_name(&self) -> String {
        self.config.filename.clone()
    }
}

fn write_dot(config: &RenderConfig, diagram: &Diagram, name: &str) -> RenderResult<PathBuf> {
    config.validate()?;
    if name.trim().is_empty() || name.contains(['/', '\\']) {
        return Err(RenderError::InvalidConfig(format!("invalid diagram name: {name:?}")));
    }

    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| RenderError::io(&config.output_dir, e))?;

    let path = config.dot_path(name);
    let dot = diagram.clone().with_rankdir(config.rankdir.clone()).to_dot();
    std::fs::write(&path, dot).map_err(|e| RenderError::io(&path, e))?;
    Ok(path)
}

impl<A, B> Morphism<A, B> {
    /// Render this morphism's source → target edge
    ///
    /// Never fails the caller: renderer errors are logged as warnings and
    /// yield `None`.
    pub fn visualize(&self, renderer: &dyn DiagramRenderer) -> Option<RenderedDiagram> {
        self.visualize_as(renderer, &renderer.default_name())
    }

    /// Like [`Morphism::visualize`] with an explicit file stem
    pub fn visualize_as(
        &self,
        renderer: &dyn DiagramRenderer,
        name: &str,
    ) -> Option<RenderedDiagram> {
        let diagram = self.diagram();
        match renderer.render(&diagram, name) {
            Ok(rendered) => {
                let shown = rendered.output.as_ref().unwrap_or(&rendered.source);
                info!(morphism = %self.label(), "Rendering structure to {}", shown.display());
                Some(rendered)
            }
            Err(e) if e.is_unavailable() => {
                warn!(
                    morphism = %self.label(),
                    "Renderer not found, visualization disabled: {}",
                    e
                );
                None
            }
            Err(e) => {
                warn!(morphism = %self.label(), "Visualization skipped: {}", e);
                None
            }
        }
    }
}
