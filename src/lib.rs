//! # CIM Morphism
//!
//! Category theory primitives for the Composable Information Machine.
//!
//! This crate models two ideas as runtime values and one operation on them:
//! - **Object**: a named marker standing for a type
//! - **Morphism**: a labelled arrow between objects wrapping a unary transform
//! - **Composition**: `g ∘ f`, legal only when `f`'s target is `g`'s source
//!
//! ## Design Principles
//!
//! 1. **Name Identity**: objects are compared by name, not by reference
//! 2. **Immutability**: objects and morphisms never change after construction
//! 3. **Typed Transforms**: carrier types are checked by the compiler, object
//!    names at composition time
//! 4. **Best-Effort Rendering**: visualization failures are logged, never raised
//!
//! ```
//! use cim_morphism::{compose, Morphism, Object};
//!
//! let f = Morphism::new(
//!     Object::<i64>::new("Int"),
//!     Object::<String>::new("String"),
//!     |x: i64| format!("Value: {x}"),
//!     "f",
//! );
//! let g = Morphism::new(
//!     Object::<String>::new("String"),
//!     Object::<bool>::new("Bool"),
//!     |s: String| s.contains('0'),
//!     "g",
//! );
//!
//! let h = compose(&g, &f).unwrap();
//! assert_eq!(h.label(), "g ∘ f");
//! assert!(h.apply(100));
//! ```

#![warn(missing_docs)]

pub mod category;
mod errors;
pub mod visualization;

pub use category::{
    compose, CompositionTrace, Morphism, Object, TraceStep, Transform, COMPOSITION_SYMBOL,
};
pub use errors::{CompositionTypeError, RenderError, RenderResult};
pub use visualization::{
    Diagram, DiagramEdge, DiagramNode, DiagramRenderer, DotFileRenderer, GraphvizRenderer,
    RenderConfig, RenderedDiagram,
};
