//! Symbol graph decoding and head promotion.
//!
//! A symbol is the JSON description of a computation graph: a flat `nodes`
//! array where each node names its producers by position, plus a `heads`
//! array naming the graph outputs.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use symviz_error::{Error, Result};

/// Operator tag of placeholder (variable / input) nodes.
pub const PLACEHOLDER_OP: &str = "null";

/// Attribute values are kept as decoded JSON; `None` marks an explicit `null`.
pub type Attributes = BTreeMap<String, Option<Value>>;

#[derive(Debug, Deserialize)]
struct RawSymbol {
    nodes: Vec<RawNode>,
    #[serde(default)]
    heads: Vec<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    op: String,
    name: String,
    // Older exports call this `attr` or `param`.
    #[serde(default, alias = "attr", alias = "param")]
    attrs: Option<Attributes>,
    #[serde(default)]
    inputs: Vec<Vec<usize>>,
}

/// One decoded node of the symbol graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    /// 0-based position in the `nodes` array.
    pub id: usize,
    pub operator: String,
    pub name: String,
    pub attributes: Attributes,
    /// Producer ids, in declaration order.
    pub inputs: Vec<usize>,
}

impl NodeRecord {
    /// Create a record with no attributes and no inputs. The id is assigned
    /// when the record is placed into a [`SymbolGraph`].
    pub fn new(operator: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            operator: operator.into(),
            name: name.into(),
            attributes: Attributes::new(),
            inputs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), Some(value.into()));
        self
    }

    pub fn with_inputs(mut self, inputs: impl IntoIterator<Item = usize>) -> Self {
        self.inputs = inputs.into_iter().collect();
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.operator == PLACEHOLDER_OP
    }

    /// Textual form of an attribute, or `None` when absent or null.
    ///
    /// Strings are returned verbatim; numbers, arrays and other values use
    /// their JSON rendering.
    pub fn attr_text(&self, key: &str) -> Option<String> {
        match self.attributes.get(key)? {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Decoded computation graph: an arena of nodes indexed by their id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolGraph {
    nodes: Vec<NodeRecord>,
    heads: Vec<usize>,
}

impl SymbolGraph {
    /// Build a graph from records in decode order. Ids are reassigned from
    /// each record's position.
    pub fn new(nodes: Vec<NodeRecord>, heads: Vec<usize>) -> Self {
        let nodes = nodes
            .into_iter()
            .enumerate()
            .map(|(id, node)| NodeRecord { id, ..node })
            .collect();
        Self { nodes, heads }
    }

    /// Decode a symbol from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSymbol = serde_json::from_str(json)
            .map_err(|e| Error::deserialization("symbol", e).with_operation("symbol::decode"))?;
        Self::from_raw(raw)
    }

    /// Decode a symbol from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawSymbol = serde_json::from_value(value)
            .map_err(|e| Error::deserialization("symbol", e).with_operation("symbol::decode"))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSymbol) -> Result<Self> {
        let mut nodes = Vec::with_capacity(raw.nodes.len());
        for (id, node) in raw.nodes.into_iter().enumerate() {
            let mut inputs = Vec::with_capacity(node.inputs.len());
            for entry in &node.inputs {
                let Some(&producer) = entry.first() else {
                    return Err(Error::invalid_format("input entry has no producer id")
                        .with_operation("symbol::decode")
                        .with_context("node", node.name.clone()));
                };
                inputs.push(producer);
            }
            nodes.push(NodeRecord {
                id,
                operator: node.op,
                name: node.name,
                attributes: node.attrs.unwrap_or_default(),
                inputs,
            });
        }

        let heads = raw
            .heads
            .iter()
            .filter_map(|entry| entry.first().copied())
            .collect::<Vec<_>>();

        debug!(nodes = nodes.len(), heads = heads.len(), "decoded symbol");
        Ok(Self { nodes, heads })
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn node(&self, id: usize) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    /// Ids of the graph outputs.
    pub fn heads(&self) -> &[usize] {
        &self.heads
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rename placeholder heads after themselves so they render as outputs
    /// instead of being filtered out. Heads that already carry an operator,
    /// and ids past the end of the graph, are left alone.
    ///
    /// Returns the number of promoted nodes.
    pub fn promote_heads(&mut self) -> usize {
        let mut promoted = 0;
        for &head in &self.heads {
            let Some(node) = self.nodes.get_mut(head) else {
                continue;
            };
            if node.is_placeholder() {
                debug!(id = head, name = %node.name, "promoting output placeholder");
                node.operator = node.name.clone();
                promoted += 1;
            }
        }
        promoted
    }
}
