//! Render symbol graphs for display.
//!
//! # Module Structure
//!
//! - [`types`]: direction, backend and render options
//! - [`dot`]: DOT builder and the static Graphviz backend
//! - [`vis`]: vis-network JSON backend
//! - [`render`]: the shared renderer contract and backend dispatch

pub mod dot;
pub mod render;
pub mod types;
pub mod vis;

use tracing::info;

use symviz_core::{ShapeMap, SymbolGraph, VizGraph};
use symviz_error::Result;

pub use dot::{DotBuilder, DotRenderer};
pub use render::{Rendered, Renderer, render};
pub use types::{Backend, Direction, RenderOptions};
pub use vis::{VisDocument, VisRenderer};

// ============================================================================
// Public API
// ============================================================================

/// Build the display graph of `symbol` and render it.
///
/// When `shapes` is given, edges are labeled with the shape of the tensor
/// their source node produces.
pub fn visualize(
    symbol: &SymbolGraph,
    shapes: Option<&ShapeMap>,
    options: &RenderOptions,
) -> Result<Rendered> {
    let graph = VizGraph::build(symbol, shapes);
    if graph.nodes.is_empty() {
        info!("symbol has no visible nodes");
    }
    render(&graph, options)
}

/// Decode symbol JSON and render it.
pub fn visualize_json(
    json: &str,
    shapes: Option<&ShapeMap>,
    options: &RenderOptions,
) -> Result<Rendered> {
    let symbol = SymbolGraph::from_json(json)?;
    visualize(&symbol, shapes, options)
}
