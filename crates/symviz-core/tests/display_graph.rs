use std::collections::HashSet;

use pretty_assertions::assert_eq;
use symviz_core::{NodeShape, ShapeMap, SymbolGraph, VizGraph};

const LENET: &str = r#"{
  "nodes": [
    {"op": "null", "name": "data", "inputs": []},
    {"op": "null", "name": "conv1_weight", "inputs": []},
    {"op": "null", "name": "conv1_bias", "inputs": []},
    {
      "op": "Convolution",
      "name": "conv1",
      "attrs": {"kernel": "(5, 5)", "num_filter": "20"},
      "inputs": [[0, 0, 0], [1, 0, 0], [2, 0, 0]]
    },
    {
      "op": "Activation",
      "name": "tanh1",
      "attrs": {"act_type": "tanh"},
      "inputs": [[3, 0, 0]]
    },
    {
      "op": "Pooling",
      "name": "pool1",
      "attrs": {"kernel": "(2, 2)", "pool_type": "max", "stride": "(2, 2)"},
      "inputs": [[4, 0, 0]]
    },
    {"op": "Flatten", "name": "flatten", "inputs": [[5, 0, 0]]},
    {"op": "null", "name": "fc1_weight", "inputs": []},
    {"op": "null", "name": "fc1_bias", "inputs": []},
    {
      "op": "FullyConnected",
      "name": "fc1",
      "attrs": {"num_hidden": "500"},
      "inputs": [[6, 0, 0], [7, 0, 0], [8, 0, 0]]
    },
    {"op": "null", "name": "softmax_label", "inputs": []},
    {"op": "SoftmaxOutput", "name": "softmax", "inputs": [[9, 0, 0], [10, 0, 0]]}
  ],
  "arg_nodes": [0, 1, 2, 7, 8, 10],
  "node_row_ptr": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
  "heads": [[11, 0, 0]],
  "attrs": {"mxnet_version": ["int", 10600]}
}"#;

fn lenet() -> SymbolGraph {
    SymbolGraph::from_json(LENET).expect("lenet decodes")
}

#[test]
fn lenet_nodes_are_labeled_and_styled() {
    let graph = VizGraph::build(&lenet(), None);

    let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Convolution\nconv1\n5X5 / , 20",
            "Activation\ntanh1\ntanh",
            "Pooling\npool1\nmax2X2 / 2X2",
            "Flatten\nflatten",
            "FullyConnected\nfc1\n500",
            "SoftmaxOutput\nsoftmax",
        ]
    );

    let shapes: Vec<NodeShape> = graph.nodes.iter().map(|n| n.shape).collect();
    assert_eq!(
        shapes,
        vec![
            NodeShape::Box,
            NodeShape::Box,
            NodeShape::Oval,
            NodeShape::Oval,
            NodeShape::Box,
            NodeShape::Box,
        ]
    );
}

#[test]
fn display_ids_are_dense_and_placeholders_hidden() {
    let symbol = lenet();
    let graph = VizGraph::build(&symbol, None);

    let ids: Vec<usize> = graph.nodes.iter().map(|n| n.id).collect();
    let expected: Vec<usize> = (1..=graph.nodes.len()).collect();
    assert_eq!(ids, expected);

    for node in &graph.nodes {
        let record = symbol.node(node.source_id).unwrap();
        assert!(!record.is_placeholder(), "{} should be hidden", record.name);
    }
}

#[test]
fn edges_only_reference_visible_nodes() {
    let graph = VizGraph::build(&lenet(), None);
    let ids: HashSet<usize> = graph.nodes.iter().map(|n| n.id).collect();

    let pairs: Vec<(usize, usize)> = graph.edges.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
    for edge in &graph.edges {
        assert!(ids.contains(&edge.from) && ids.contains(&edge.to));
    }
}

#[test]
fn edges_carry_inferred_shapes() {
    let shapes = ShapeMap::from_json(
        r#"{
            "out_shapes": {
                "data": [1, 1, 28, 28],
                "conv1_output": [1, 20, 24, 24],
                "tanh1_output": [1, 20, 24, 24],
                "pool1_output": [1, 20, 12, 12],
                "flatten_output": [1, 2880]
            }
        }"#,
    )
    .unwrap();

    let graph = VizGraph::build(&lenet(), Some(&shapes));
    let labels: Vec<Option<&str>> = graph.edges.iter().map(|e| e.label.as_deref()).collect();
    assert_eq!(
        labels,
        vec![
            Some("1x20x24x24"),
            Some("1x20x24x24"),
            Some("1x20x12x12"),
            Some("1x2880"),
            None,
        ]
    );
}

#[test]
fn placeholder_head_is_promoted() {
    let symbol = SymbolGraph::from_json(
        r#"{
            "nodes": [
                {"op": "null", "name": "data", "inputs": []},
                {"op": "FullyConnected", "name": "fc", "attrs": {"num_hidden": "10"}, "inputs": [[0, 0]]},
                {"op": "null", "name": "fc_output", "inputs": []}
            ],
            "heads": [[2]]
        }"#,
    )
    .unwrap();

    let graph = VizGraph::build(&symbol, None);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[1].label, "fc_output\nfc_output");
    assert_eq!(graph.nodes[1].id, 2);
}

#[test]
fn all_placeholder_graph_is_empty() {
    let symbol = SymbolGraph::from_json(
        r#"{"nodes": [{"op": "null", "name": "data", "inputs": []}], "heads": []}"#,
    )
    .unwrap();
    let graph = VizGraph::build(&symbol, None);
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}
