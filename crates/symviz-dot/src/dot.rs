//! DOT format utilities and the Graphviz backend.

use std::fmt::Write;

use symviz_core::VizGraph;
use symviz_error::Result;

use crate::render::Renderer;
use crate::types::RenderOptions;

/// Graphviz measures `size` in inches.
const PX_PER_INCH: f64 = 72.0;

pub const FONT_NAME: &str = "Helvetica";

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add node defaults.
    pub fn node_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        self.defaults("node", attrs)
    }

    /// Add edge defaults.
    pub fn edge_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        self.defaults("edge", attrs)
    }

    fn defaults(&mut self, target: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{target} [");
        self.write_attrs(attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with full attributes.
    pub fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id} [");
        self.write_attrs(attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} -> {to};");
        self
    }

    /// Add an edge with attributes.
    pub fn edge_with_attrs(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -> {to} [");
        self.write_attrs(attrs);
        self.output.push_str("];\n");
        self
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// Graphviz `size` value for a pixel box. A single side bounds both.
fn size_attr(width: Option<u32>, height: Option<u32>) -> Option<String> {
    let inches = |px: u32| format!("{:.2}", f64::from(px) / PX_PER_INCH);
    match (width, height) {
        (Some(w), Some(h)) => Some(format!("{},{}!", inches(w), inches(h))),
        (Some(side), None) | (None, Some(side)) => Some(inches(side)),
        (None, None) => None,
    }
}

/// Static Graphviz rendering.
pub struct DotRenderer;

impl Renderer for DotRenderer {
    fn render(&self, graph: &VizGraph, options: &RenderOptions) -> Result<String> {
        let mut dot = DotBuilder::new("symbol");
        dot.attr("layout", "dot")
            .attr("rankdir", options.direction.rankdir());
        if let Some(size) = size_attr(options.width, options.height) {
            dot.attr("size", &size);
        }
        dot.blank()
            .node_style(&[
                ("style", "filled"),
                ("penwidth", "2"),
                ("fontname", FONT_NAME),
                ("fontcolor", "black"),
            ])
            .edge_style(&[("color", "black"), ("fontcolor", "black"), ("fontname", FONT_NAME)])
            .blank();

        for node in &graph.nodes {
            dot.node_full(
                &node.id.to_string(),
                &[
                    ("label", node.label.as_str()),
                    ("shape", node.shape.as_str()),
                    ("color", node.color),
                    ("fillcolor", node.color),
                ],
            );
        }

        if !graph.edges.is_empty() {
            dot.blank();
        }
        for edge in &graph.edges {
            let from = edge.from.to_string();
            let to = edge.to.to_string();
            match &edge.label {
                Some(label) => dot.edge_with_attrs(&from, &to, &[("label", label.as_str())]),
                None => dot.edge(&from, &to),
            };
        }

        Ok(dot.build())
    }
}
