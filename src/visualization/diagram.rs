// Copyright 2025 Cowboy AI, LLC.

//! Renderable directed-graph descriptions

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::category::Morphism;

/// Comment written at the top of every generated graph
pub const DIAGRAM_COMMENT: &str = "Category Structure";

/// A node in a diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramNode {
    /// Identifier used by edges
    pub id: String,
    /// Text shown on the node
    pub label: String,
}

/// A directed, labelled edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramEdge {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Text shown on the edge
    pub label: String,
}

/// Nodes and edges to hand to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    /// Free text comment
    pub comment: String,
    /// Layout direction (`LR`, `RL`, `TB` or `BT`)
    pub rankdir: String,
    /// Nodes in insertion order
    pub nodes: Vec<DiagramNode>,
    /// Edges in insertion order
    pub edges: Vec<DiagramEdge>,
}

impl Default for Diagram {
    fn default() -> Self {
        Self {
            comment: DIAGRAM_COMMENT.to_string(),
            rankdir: "LR".to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl Diagram {
    /// Create an empty left-to-right diagram
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node labelled with its id; repeated ids are ignored
    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if !self.nodes.iter().any(|n| n.id == id) {
            self.nodes.push(DiagramNode {
                label: id.clone(),
                id,
            });
        }
        self
    }

    /// Add an edge, creating its endpoint nodes if needed
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Self {
        let from = from.into();
        let to = to.into();
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.edges.push(DiagramEdge {
            from,
            to,
            label: label.into(),
        });
        self
    }

    /// Set the layout direction
    pub fn with_rankdir(mut self, rankdir: impl Into<String>) -> Self {
        self.rankdir = rankdir.into();
        self
    }

    /// Graphviz DOT text for this diagram
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        let _ = writeln!(dot, "// {}", self.comment);
        dot.push_str("digraph {\n");
        let _ = writeln!(dot, "  rankdir={};", self.rankdir);

        for node in &self.nodes {
            let _ = writeln!(
                dot,
                "  \"{}\" [label=\"{}\"];",
                escape(&node.id),
                escape(&node.label)
            );
        }
        for edge in &self.edges {
            let _ = writeln!(
                dot,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(&edge.from),
                escape(&edge.to),
                escape(&edge.label)
            );
        }

        dot.push_str("}\n");
        dot
    }

    /// Pretty JSON description of this diagram
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

impl<A, B> Morphism<A, B> {
    /// Two nodes and one edge: `source --label--> target`
    ///
    /// An endo-morphism draws a single node with a loop.
    pub fn diagram(&self) -> Diagram {
        let mut diagram = Diagram::new();
        diagram.add_edge(self.source().name(), self.target().name(), self.label());
        diagram
    }

    /// One edge per primitive arrow the composite was built from
    pub fn chain_diagram(&self) -> Diagram {
        let mut diagram = Diagram::new();
        for step in self.trace().steps() {
            diagram.add_edge(step.source, step.target, step.label);
        }
        diagram
    }
}
