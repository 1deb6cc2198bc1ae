// Copyright 2025 Cowboy AI, LLC.

//! Structured composition history
//!
//! A morphism's label is a flat `g ∘ f` string that forgets grouping. The
//! trace keeps the same history as a tree of labels and object names. It
//! never holds the constituent morphisms or their transforms.

use serde::{Deserialize, Serialize};

/// How a morphism came to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompositionTrace {
    /// A morphism built directly by a caller
    Primitive {
        /// Label given at construction
        label: String,
        /// Source object name
        source: String,
        /// Target object name
        target: String,
    },

    /// `outer ∘ inner`
    Composite {
        /// History of the morphism applied second
        outer: Box<CompositionTrace>,
        /// History of the morphism applied first
        inner: Box<CompositionTrace>,
    },
}

/// One primitive arrow in a composition chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep<'a> {
    /// Label of the primitive morphism
    pub label: &'a str,
    /// Source object name
    pub source: &'a str,
    /// Target object name
    pub target: &'a str,
}

impl CompositionTrace {
    /// Trace for a caller-constructed morphism
    pub fn primitive(
        label: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        CompositionTrace::Primitive {
            label: label.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Trace for `outer ∘ inner`
    pub fn composite(outer: CompositionTrace, inner: CompositionTrace) -> Self {
        CompositionTrace::Composite {
            outer: Box::new(outer),
            inner: Box::new(inner),
        }
    }

    /// Whether this trace is a single primitive arrow
    pub fn is_primitive(&self) -> bool {
        matches!(self, CompositionTrace::Primitive { .. })
    }

    /// Primitive arrows in application order (first applied first)
    pub fn steps(&self) -> Vec<TraceStep<'_>> {
        let mut steps = Vec::new();
        self.collect_steps(&mut steps);
        steps
    }

    fn collect_steps<'a>(&'a self, steps: &mut Vec<TraceStep<'a>>) {
        match self {
            CompositionTrace::Primitive {
                label,
                source,
                target,
            } => steps.push(TraceStep {
                label,
                source,
                target,
            }),
            CompositionTrace::Composite { outer, inner } => {
                inner.collect_steps(steps);
                outer.collect_steps(steps);
            }
        }
    }

    /// Number of primitive arrows
    pub fn len(&self) -> usize {
        match self {
            CompositionTrace::Primitive { .. } => 1,
            CompositionTrace::Composite { outer, inner } => outer.len() + inner.len(),
        }
    }

    /// Always false; a trace holds at least one arrow
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Nesting depth, 0 for a primitive
    pub fn depth(&self) -> usize {
        match self {
            CompositionTrace::Primitive { .. } => 0,
            CompositionTrace::Composite { outer, inner } => 1 + outer.depth().max(inner.depth()),
        }
    }

    /// Label with explicit grouping, e.g. `(h ∘ g) ∘ f`
    ///
    /// Primitive labels are used as given, even when they themselves contain
    /// `∘`.
    pub fn grouped_label(&self) -> String {
        match self {
            CompositionTrace::Primitive { label, .. } => label.clone(),
            CompositionTrace::Composite { outer, inner } => {
                format!("{} ∘ {}", outer.grouped_operand(), inner.grouped_operand())
            }
        }
    }

    fn grouped_operand(&self) -> String {
        if self.is_primitive() {
            self.grouped_label()
        } else {
            format!("({})", self.grouped_label())
        }
    }
}
