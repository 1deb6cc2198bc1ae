// Copyright 2025 Cowboy AI, LLC.

//! Morphisms between objects
//!
//! A morphism is an arrow `f: A → B` wrapping a unary transform and a
//! human-readable label. Morphisms are immutable once built; cloning one
//! shares its objects and transform.

use std::fmt;
use std::sync::Arc;

use super::object::Object;
use super::trace::CompositionTrace;

/// Shared unary transform from `A` to `B`
pub type Transform<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// An arrow from `Object<A>` to `Object<B>`
pub struct Morphism<A, B> {
    pub(crate) source: Arc<Object<A>>,
    pub(crate) target: Arc<Object<B>>,
    pub(crate) transform: Transform<A, B>,
    pub(crate) label: String,
    pub(crate) trace: CompositionTrace,
}

impl<A, B> Morphism<A, B> {
    /// Create a new primitive morphism
    ///
    /// Nothing is validated: the transform is trusted to map values of the
    /// source's domain into the target's domain.
    ///
    /// # Arguments
    /// * `source` - Object the morphism starts from (shared, not copied)
    /// * `target` - Object the morphism ends at (shared, not copied)
    /// * `transform` - The unary function this arrow stands for
    /// * `label` - Human-readable name
    pub fn new<F>(
        source: impl Into<Arc<Object<A>>>,
        target: impl Into<Arc<Object<B>>>,
        transform: F,
        label: impl Into<String>,
    ) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let source = source.into();
        let target = target.into();
        let label = label.into();
        let trace = CompositionTrace::primitive(label.clone(), source.name(), target.name());
        Self {
            source,
            target,
            transform: Arc::new(transform),
            label,
            trace,
        }
    }

    /// Apply the morphism to a value
    ///
    /// Calls the transform and returns its result. A panicking transform
    /// unwinds through this call untouched.
    pub fn apply(&self, value: A) -> B {
        (self.transform)(value)
    }

    /// Source object
    pub fn source(&self) -> &Arc<Object<A>> {
        &self.source
    }

    /// Target object
    pub fn target(&self) -> &Arc<Object<B>> {
        &self.target
    }

    /// Label, or the `outer ∘ inner` history for composites
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Structured composition history
    pub fn trace(&self) -> &CompositionTrace {
        &self.trace
    }

    /// Whether this morphism was produced by composition
    pub fn is_composite(&self) -> bool {
        !self.trace.is_primitive()
    }

    /// The wrapped transform as a shared handle
    pub fn transform(&self) -> Transform<A, B> {
        Arc::clone(&self.transform)
    }
}

impl<A, B> Clone for Morphism<A, B> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            target: Arc::clone(&self.target),
            transform: Arc::clone(&self.transform),
            label: self.label.clone(),
            trace: self.trace.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Morphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Morphism")
            .field("label", &self.label)
            .field("source", &self.source.name())
            .field("target", &self.target.name())
            .finish_non_exhaustive()
    }
}

impl<A, B> fmt::Display for Morphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} → {}",
            self.label,
            self.source.name(),
            self.target.name()
        )
    }
}
