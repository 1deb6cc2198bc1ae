//! Category theory primitives
//!
//! Objects stand for types, morphisms are labelled arrows wrapping a unary
//! transform, and composition chains arrows whose endpoints agree by name.

pub mod composition;
pub mod morphism;
pub mod object;
pub mod trace;

pub use composition::{compose, COMPOSITION_SYMBOL};
pub use morphism::{Morphism, Transform};
pub use object::Object;
pub use trace::{CompositionTrace, TraceStep};
