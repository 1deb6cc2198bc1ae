//! Optional diagram rendering
//!
//! A morphism can describe itself as a small directed graph and hand it to a
//! [`DiagramRenderer`]. Rendering never fails the caller; see
//! [`crate::Morphism::visualize`].

pub mod config;
pub mod diagram;
pub mod renderer;

pub use config::RenderConfig;
pub use diagram::{Diagram, DiagramEdge, DiagramNode, DIAGRAM_COMMENT};
pub use renderer::{DiagramRenderer, DotFileRenderer, GraphvizRenderer, RenderedDiagram};
