//! Operator → display style lookup.

use strum_macros::{Display, IntoStaticStr};

/// Color used for any operator without an entry of its own.
pub const DEFAULT_COLOR: &str = "#fccde5";

/// Outline of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NodeShape {
    Oval,
    Box,
}

impl NodeShape {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Fill color and outline of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub color: &'static str,
    pub shape: NodeShape,
}

/// Map an operator tag to its fill color.
pub fn color_for_operator(operator: &str) -> &'static str {
    match operator {
        "data" => "#8dd3c7",
        "FullyConnected" | "Convolution" => "#fb8072",
        "LeakyReLU" | "Activation" => "#ffffb3",
        "BatchNorm" => "#bebada",
        "Pooling" => "#80b1d3",
        "Flatten" | "Reshape" | "Concat" => "#fdb462",
        _ => DEFAULT_COLOR,
    }
}

/// Map an operator tag to its outline.
pub fn shape_for_operator(operator: &str) -> NodeShape {
    match operator {
        "data" | "Pooling" | "Flatten" | "Reshape" | "Concat" => NodeShape::Oval,
        _ => NodeShape::Box,
    }
}

pub fn classify(operator: &str) -> NodeStyle {
    NodeStyle {
        color: color_for_operator(operator),
        shape: shape_for_operator(operator),
    }
}
