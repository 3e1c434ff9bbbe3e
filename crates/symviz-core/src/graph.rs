//! Display graph: the node and edge tables handed to a renderer.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, info};

use crate::classify::{NodeShape, classify};
use crate::label::build_label;
use crate::shape::{ShapeMap, format_dims};
use crate::symbol::{NodeRecord, SymbolGraph};

/// A visible node, numbered for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    /// Dense 1-based display id.
    pub id: usize,
    /// Id of the record this node was built from.
    pub source_id: usize,
    pub label: String,
    pub shape: NodeShape,
    pub color: &'static str,
}

/// Directed edge between two display ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEdge {
    pub from: usize,
    pub to: usize,
    /// Inferred shape of the tensor flowing along the edge.
    pub label: Option<String>,
}

/// Mapping from record id to display id for visible records.
#[derive(Debug, Clone, Default)]
pub struct IdRemap {
    map: HashMap<usize, usize>,
}

impl IdRemap {
    /// Number the visible records `1..=N` in their given order.
    pub fn from_visible(visible: &[&NodeRecord]) -> Self {
        let map = visible
            .iter()
            .enumerate()
            .map(|(rank, node)| (node.id, rank + 1))
            .collect();
        Self { map }
    }

    pub fn display_id(&self, source_id: usize) -> Option<usize> {
        self.map.get(&source_id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Records that will be drawn, in record order. Placeholders are skipped.
pub fn visible_nodes(nodes: &[NodeRecord]) -> Vec<&NodeRecord> {
    nodes.iter().filter(|node| !node.is_placeholder()).collect()
}

/// Rebuild edges between visible records.
///
/// Inputs produced by placeholders are dropped. Every remaining input entry
/// yields its own edge, so a producer referenced twice gives two edges.
pub fn resolve_edges(
    symbol: &SymbolGraph,
    visible: &[&NodeRecord],
    remap: &IdRemap,
    shapes: Option<&ShapeMap>,
) -> Vec<DisplayEdge> {
    let mut edges = Vec::new();
    for node in visible {
        let Some(to) = remap.display_id(node.id) else {
            continue;
        };
        for &producer in &node.inputs {
            let Some(from) = remap.display_id(producer) else {
                continue;
            };
            let label = shapes.and_then(|shapes| {
                let source = symbol.node(producer)?;
                shapes.output_shape(&source.name).map(format_dims)
            });
            edges.push(DisplayEdge { from, to, label });
        }
    }
    edges
}

/// Node and edge tables ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VizGraph {
    pub nodes: Vec<DisplayNode>,
    pub edges: Vec<DisplayEdge>,
}

impl VizGraph {
    /// Run the full transformation: promote output placeholders, style and
    /// label the visible records, then resolve edges.
    pub fn build(symbol: &SymbolGraph, shapes: Option<&ShapeMap>) -> Self {
        let build_start = Instant::now();

        let mut symbol = symbol.clone();
        let promoted = symbol.promote_heads();

        let visible = visible_nodes(symbol.nodes());
        let remap = IdRemap::from_visible(&visible);

        let nodes: Vec<DisplayNode> = visible
            .iter()
            .enumerate()
            .map(|(rank, node)| {
                let style = classify(&node.operator);
                DisplayNode {
                    id: rank + 1,
                    source_id: node.id,
                    label: build_label(node),
                    shape: style.shape,
                    color: style.color,
                }
            })
            .collect();

        let edges = resolve_edges(&symbol, &visible, &remap, shapes);

        debug!(
            promoted,
            dropped = symbol.len() - nodes.len(),
            "filtered placeholder nodes"
        );

        let graph = Self { nodes, edges };
        info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            labeled_edges = graph.labeled_edge_count(),
            "display graph built in {:.3}s",
            build_start.elapsed().as_secs_f64()
        );
        graph
    }

    pub fn labeled_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.label.is_some()).count()
    }

    pub fn node(&self, display_id: usize) -> Option<&DisplayNode> {
        display_id
            .checked_sub(1)
            .and_then(|idx| self.nodes.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mlp() -> SymbolGraph {
        SymbolGraph::new(
            vec![
                NodeRecord::new("null", "data"),
                NodeRecord::new("null", "fc1_weight"),
                NodeRecord::new("FullyConnected", "fc1")
                    .with_attr("num_hidden", "128")
                    .with_inputs([0, 1]),
                NodeRecord::new("Activation", "relu1")
                    .with_attr("act_type", "relu")
                    .with_inputs([2]),
                NodeRecord::new("null", "fc2_weight"),
                NodeRecord::new("FullyConnected", "fc2")
                    .with_attr("num_hidden", "10")
                    .with_inputs([3, 4]),
                NodeRecord::new("null", "softmax_label"),
                NodeRecord::new("SoftmaxOutput", "softmax").with_inputs([5, 6]),
            ],
            vec![7],
        )
    }

    #[test]
    fn test_visible_nodes_skip_placeholders() {
        let symbol = mlp();
        let visible = visible_nodes(symbol.nodes());
        let ids: Vec<usize> = visible.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_remap_is_dense() {
        let symbol = mlp();
        let visible = visible_nodes(symbol.nodes());
        let remap = IdRemap::from_visible(&visible);
        assert_eq!(remap.len(), 4);
        assert_eq!(remap.display_id(2), Some(1));
        assert_eq!(remap.display_id(7), Some(4));
        assert_eq!(remap.display_id(0), None);
        assert_eq!(remap.display_id(99), None);
    }

    #[test]
    fn test_build_mlp() {
        let graph = VizGraph::build(&mlp(), None);

        let ids: Vec<usize> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(graph.nodes[0].label, "FullyConnected\nfc1\n128");
        assert_eq!(graph.nodes[0].color, "#fb8072");
        assert_eq!(graph.nodes[1].label, "Activation\nrelu1\nrelu");
        assert_eq!(graph.nodes[3].shape, NodeShape::Box);

        let pairs: Vec<(usize, usize)> = graph.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
        assert!(graph.edges.iter().all(|e| e.label.is_none()));
    }

    #[test]
    fn test_build_with_shapes() {
        let mut shapes = ShapeMap::new();
        shapes.insert("fc1_output", vec![1, 128]);
        shapes.insert("relu1_output", vec![1, 128]);

        let graph = VizGraph::build(&mlp(), Some(&shapes));
        let labels: Vec<Option<&str>> = graph.edges.iter().map(|e| e.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("1x128"), Some("1x128"), None]);
        assert_eq!(graph.labeled_edge_count(), 2);
    }

    #[test]
    fn test_promoted_head_is_visible() {
        let symbol = SymbolGraph::new(
            vec![
                NodeRecord::new("null", "data"),
                NodeRecord::new("FullyConnected", "fc").with_inputs([0]),
                NodeRecord::new("null", "fc_output"),
            ],
            vec![2],
        );
        let graph = VizGraph::build(&symbol, None);
        assert_eq!(graph.nodes.len(), 2);
        let promoted = graph.node(2).unwrap();
        assert_eq!(promoted.source_id, 2);
        assert_eq!(promoted.label, "fc_output\nfc_output");
        assert_eq!(promoted.color, "#fccde5");
        // The input graph itself is not modified.
        assert!(symbol.node(2).unwrap().is_placeholder());
    }

    #[test]
    fn test_repeated_input_keeps_every_edge() {
        let symbol = SymbolGraph::new(
            vec![
                NodeRecord::new("null", "data"),
                NodeRecord::new("SliceChannel", "split").with_inputs([0]),
                NodeRecord::new("elemwise_add", "sum").with_inputs([1, 1]),
            ],
            vec![2],
        );
        let mut shapes = ShapeMap::new();
        shapes.insert("split_output", vec![1, 32]);

        let graph = VizGraph::build(&symbol, Some(&shapes));
        let pairs: Vec<(usize, usize)> = graph.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 2)]);
        assert_eq!(graph.labeled_edge_count(), 2);
    }

    #[test]
    fn test_node_lookup_bounds() {
        let graph = VizGraph::build(&mlp(), None);
        assert!(graph.node(0).is_none());
        assert!(graph.node(5).is_none());
        assert_eq!(graph.node(4).unwrap().label, "SoftmaxOutput\nsoftmax");
    }
}
