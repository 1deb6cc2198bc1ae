// Copyright 2025 Cowboy AI, LLC.

//! Composition of morphisms
//!
//! `compose(g, f)` reads "g after f": apply `f`, then `g`. It is legal only
//! when `f`'s target and `g`'s source name the same object.

use std::sync::Arc;

use tracing::debug;

use super::morphism::Morphism;
use super::trace::CompositionTrace;
use crate::errors::CompositionTypeError;

/// Symbol joining outer and inner labels
pub const COMPOSITION_SYMBOL: &str = "∘";

/// Compose two morphisms as `outer ∘ inner`
///
/// The result starts at `inner`'s source and ends at `outer`'s target, both
/// shared rather than copied. Its transform captures both constituent
/// transforms as they are now. Its label is `"<outer> ∘ <inner>"` with no
/// grouping parentheses.
///
/// # Errors
/// [`CompositionTypeError`] when `outer.source` and `inner.target` have
/// different names. No morphism is built in that case.
pub fn compose<A, B, C>(
    outer: &Morphism<B, C>,
    inner: &Morphism<A, B>,
) -> Result<Morphism<A, C>, CompositionTypeError>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    if !outer.source.same_as(&*inner.target) {
        let err = CompositionTypeError {
            outer_label: outer.label.clone(),
            inner_label: inner.label.clone(),
            inner_target: inner.target.name().to_string(),
            outer_source: outer.source.name().to_string(),
        };
        debug!(
            outer = %outer.label,
            inner = %inner.label,
            "Rejected composition: {}",
            err
        );
        return Err(err);
    }

    let first = Arc::clone(&inner.transform);
    let second = Arc::clone(&outer.transform);
    let label = format!("{} {} {}", outer.label, COMPOSITION_SYMBOL, inner.label);

    debug!(
        label = %label,
        source = inner.source.name(),
        target = outer.target.name(),
        "Composed morphisms"
    );

    Ok(Morphism {
        source: Arc::clone(&inner.source),
        target: Arc::clone(&outer.target),
        transform: Arc::new(move |x: A| second(first(x))),
        label,
        trace: CompositionTrace::composite(outer.trace.clone(), inner.trace.clone()),
    })
}

impl<B, C> Morphism<B, C>
where
    B: 'static,
    C: 'static,
{
    /// `self ∘ inner`: apply `inner` first, then `self`
    pub fn composed_after<A: 'static>(
        &self,
        inner: &Morphism<A, B>,
    ) -> Result<Morphism<A, C>, CompositionTypeError> {
        compose(self, inner)
    }

    /// `outer ∘ self`: apply `self` first, then `outer`
    ///
    /// Pipeline order for building chains left to right.
    pub fn then<D: 'static>(
        &self,
        outer: &Morphism<C, D>,
    ) -> Result<Morphism<B, D>, CompositionTypeError> {
        compose(outer, self)
    }
}
