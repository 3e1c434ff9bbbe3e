//! vis-network backend.
//!
//! Produces a JSON document with `nodes`, `edges` and `options` that can be
//! handed straight to `new vis.Network(container, {nodes, edges}, options)`.

use serde::Serialize;

use symviz_core::{NodeShape, VizGraph};
use symviz_error::{Error, Result};

use crate::dot::FONT_NAME;
use crate::render::Renderer;
use crate::types::RenderOptions;

#[derive(Debug, Serialize)]
pub struct VisDocument<'a> {
    pub nodes: Vec<VisNode<'a>>,
    pub edges: Vec<VisEdge<'a>>,
    pub options: VisOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisNode<'a> {
    pub id: usize,
    pub label: &'a str,
    pub shape: &'static str,
    pub color: VisColor,
    pub border_width: u32,
    pub font: VisFont,
}

#[derive(Debug, Serialize)]
pub struct VisColor {
    pub background: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VisFont {
    pub face: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VisEdge<'a> {
    pub from: usize,
    pub to: usize,
    pub arrows: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct VisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    pub layout: VisLayout,
}

#[derive(Debug, Serialize)]
pub struct VisLayout {
    pub hierarchical: VisHierarchical,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisHierarchical {
    pub enabled: bool,
    pub direction: &'static str,
    pub sort_method: &'static str,
}

fn vis_shape(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Oval => "ellipse",
        NodeShape::Box => "box",
    }
}

impl<'a> VisDocument<'a> {
    pub fn new(graph: &'a VizGraph, options: &RenderOptions) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| VisNode {
                id: node.id,
                label: &node.label,
                shape: vis_shape(node.shape),
                color: VisColor {
                    background: node.color,
                    border: node.color,
                },
                border_width: 2,
                font: VisFont {
                    face: FONT_NAME,
                    color: "black",
                },
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .map(|edge| VisEdge {
                from: edge.from,
                to: edge.to,
                arrows: "to",
                color: "black",
                label: edge.label.as_deref(),
            })
            .collect();

        let px = |value: u32| format!("{value}px");
        Self {
            nodes,
            edges,
            options: VisOptions {
                width: options.width.map(px),
                height: options.height.map(px),
                layout: VisLayout {
                    hierarchical: VisHierarchical {
                        enabled: true,
                        direction: options.direction.vis_direction(),
                        sort_method: "directed",
                    },
                },
            },
        }
    }
}

/// Interactive hierarchical rendering.
pub struct VisRenderer;

impl Renderer for VisRenderer {
    fn render(&self, graph: &VizGraph, options: &RenderOptions) -> Result<String> {
        let document = VisDocument::new(graph, options);
        serde_json::to_string_pretty(&document)
            .map_err(|e| Error::serialization("vis document", e).with_operation("vis::render"))
    }
}
