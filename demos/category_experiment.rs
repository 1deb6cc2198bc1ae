// Copyright 2025 Cowboy AI, LLC.

//! Category experiment
//!
//! Builds `h = g ∘ f` over Int → String → Bool, runs it, and asks Graphviz
//! for a drawing of the result. Set `RUST_LOG=debug` to see composition
//! logging, or pass a JSON render configuration path as the first argument.

use std::sync::Arc;

use cim_morphism::{compose, GraphvizRenderer, Morphism, Object, RenderConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    println!(">>> Initializing Category Theory Environment...");

    // Objects
    let int_type = Arc::new(Object::<i64>::new("Int"));
    let str_type = Arc::new(Object::<String>::new("String"));
    let bool_type = Arc::new(Object::<bool>::new("Bool"));

    // f: Int -> String
    let f = Morphism::new(
        Arc::clone(&int_type),
        Arc::clone(&str_type),
        |x: i64| format!("Value: {x}"),
        "f",
    );

    // g: String -> Bool
    let g = Morphism::new(
        Arc::clone(&str_type),
        Arc::clone(&bool_type),
        |s: String| s.contains('0'),
        "g",
    );

    println!("   Composing: {} after {}", g.label(), f.label());
    let h = compose(&g, &f)?;

    let input = 100;
    let result = h.apply(input);

    println!("   Input: {input} ({int_type})");
    println!("   Output: {result} ({bool_type})");
    println!("   Structure: {}", h.label());

    h.visualize(&GraphvizRenderer::new(config));

    // A mismatched pair stops here
    let f2 = Morphism::new(
        Object::<String>::new("Bool"),
        Object::<String>::new("X"),
        |s: String| s,
        "f2",
    );
    match compose(&f2, &f) {
        Ok(m) => println!("   Unexpectedly composed {}", m.label()),
        Err(e) => println!("   Rejected: {e}"),
    }

    Ok(())
}
