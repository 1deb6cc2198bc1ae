// Copyright 2025 Cowboy AI, LLC.

use std::path::PathBuf;

use cim_morphism::{
    compose, Diagram, DiagramRenderer, DotFileRenderer, GraphvizRenderer, Morphism, Object,
    RenderConfig, RenderError, RenderResult, RenderedDiagram,
};
use mockall::mock;

mock! {
    Renderer {}

    impl DiagramRenderer for Renderer {
        fn render(&self, diagram: &Diagram, name: &str) -> RenderResult<RenderedDiagram>;
        fn default_name(&self) -> String;
    }
}

fn h() -> Morphism<i64, bool> {
    let f = Morphism::new(
        Object::<i64>::new("Int"),
        Object::<String>::new("String"),
        |x: i64| format!("Value: {x}"),
        "f",
    );
    let g = Morphism::new(
        Object::<String>::new("String"),
        Object::<bool>::new("Bool"),
        |s: String| s.contains('0'),
        "g",
    );
    compose(&g, &f).unwrap()
}

#[test]
fn visualize_requests_two_nodes_and_one_edge() {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_default_name()
        .return_const("category_structure".to_string());
    renderer
        .expect_render()
        .withf(|diagram, name| {
            name == "category_structure"
                && diagram.nodes.len() == 2
                && diagram.nodes[0].label == "Int"
                && diagram.nodes[1].label == "Bool"
                && diagram.edges.len() == 1
                && diagram.edges[0].from == "Int"
                && diagram.edges[0].to == "Bool"
                && diagram.edges[0].label == "g ∘ f"
        })
        .times(1)
        .returning(|_, name| {
            Ok(RenderedDiagram {
                source: PathBuf::from(format!("{name}.dot")),
                output: Some(PathBuf::from(format!("{name}.pdf"))),
            })
        });

    let rendered = h().visualize(&renderer).unwrap();
    assert_eq!(rendered.output, Some(PathBuf::from("category_structure.pdf")));
}

#[test]
fn unavailable_renderer_is_skipped() {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .withf(|_, name| name == "h")
        .times(1)
        .returning(|_, _| {
            Err(RenderError::Unavailable {
                engine: "dot".to_string(),
                reason: "No such file or directory".to_string(),
            })
        });

    assert!(h().visualize_as(&renderer, "h").is_none());
}

#[test]
fn failing_renderer_is_skipped() {
    let mut renderer = MockRenderer::new();
    renderer.expect_default_name().return_const("broken".to_string());
    renderer.expect_render().times(1).returning(|_, _| {
        Err(RenderError::Failed {
            engine: "dot".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "syntax error".to_string(),
        })
    });

    assert!(h().visualize(&renderer).is_none());
}

#[test]
fn dot_file_renderer_writes_renderable_graph() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = DotFileRenderer::new(RenderConfig::default().with_output_dir(dir.path()));

    let rendered = h().visualize_as(&renderer, "h").unwrap();
    let dot = std::fs::read_to_string(&rendered.source).unwrap();

    assert!(dot.starts_with("// Category Structure\ndigraph {"));
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains("\"Int\" -> \"Bool\" [label=\"g ∘ f\"];"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn chain_diagram_lists_every_step() {
    let chain = h().chain_diagram();
    let edges: Vec<(&str, &str, &str)> = chain
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str(), e.label.as_str()))
        .collect();
    assert_eq!(edges, vec![("Int", "String", "f"), ("String", "Bool", "g")]);
}

#[test]
fn graphviz_renderer_produces_output_when_installed() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = GraphvizRenderer::new(
        RenderConfig::default()
            .with_output_dir(dir.path())
            .with_format("svg"),
    );

    match h().visualize_as(&renderer, "h") {
        Some(rendered) => {
            let output = rendered.output.expect("graphviz output path");
            assert!(output.exists());
            assert!(rendered.source.exists());
        }
        None => assert!(!renderer.is_available()),
    }
}
