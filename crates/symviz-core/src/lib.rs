//! Turn a neural-network symbol graph into display tables.
//!
//! The pipeline is linear:
//!
//! 1. [`symbol`]: decode the JSON symbol and promote output placeholders
//! 2. [`classify`] / [`label`]: style and label each node from its record
//! 3. [`graph`]: drop placeholders, number the survivors `1..=N` and
//!    resolve edges, optionally labeled from a [`shape::ShapeMap`]

pub mod classify;
pub mod graph;
pub mod label;
pub mod shape;
pub mod symbol;

pub use classify::{DEFAULT_COLOR, NodeShape, NodeStyle, classify};
pub use graph::{DisplayEdge, DisplayNode, IdRemap, VizGraph};
pub use label::build_label;
pub use shape::{Dims, ShapeMap, format_dims};
pub use symbol::{NodeRecord, PLACEHOLDER_OP, SymbolGraph};
pub use symviz_error::{Error, ErrorKind, Result};
