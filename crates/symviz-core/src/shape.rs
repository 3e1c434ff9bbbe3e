//! Tensor shapes used to label edges.
//!
//! Shape inference itself lives outside this crate. Its result arrives as a
//! precomputed [`ShapeMap`] of output name to dimensions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use symviz_error::{Error, Result};

pub type Dims = Vec<usize>;

/// Suffix the shape map uses for a node's output name.
pub const OUTPUT_SUFFIX: &str = "_output";

/// Inferred output shapes keyed by output name (e.g. `conv1_output`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeMap(BTreeMap<String, Dims>);

impl ShapeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, dims: Dims) -> Option<Dims> {
        self.0.insert(name.into(), dims)
    }

    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shape produced by the node called `node_name`.
    ///
    /// Outputs are keyed `<name>_output`, except the graph input which the
    /// inference step reports under its bare name `data`.
    pub fn output_shape(&self, node_name: &str) -> Option<&[usize]> {
        let key = format!("{node_name}{OUTPUT_SUFFIX}");
        self.get(&key).or_else(|| {
            if key == "data_output" {
                self.get("data")
            } else {
                None
            }
        })
    }

    /// Parse a shape document: either the map itself or an object carrying
    /// it under `out_shapes`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::deserialization("shapes", e).with_operation("shape::decode"))?;
        let value = match value {
            Value::Object(mut map) if map.contains_key("out_shapes") => {
                map.remove("out_shapes").unwrap_or(Value::Null)
            }
            other => other,
        };
        serde_json::from_value(value)
            .map_err(|e| Error::deserialization("shapes", e).with_operation("shape::decode"))
    }
}

impl FromIterator<(String, Dims)> for ShapeMap {
    fn from_iter<I: IntoIterator<Item = (String, Dims)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Join dimensions with `x`, e.g. `1x64x28x28`.
pub fn format_dims(dims: &[usize]) -> String {
    dims.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dims() {
        assert_eq!(format_dims(&[1, 64, 28, 28]), "1x64x28x28");
        assert_eq!(format_dims(&[10]), "10");
        assert_eq!(format_dims(&[]), "");
    }

    #[test]
    fn test_output_shape_lookup() {
        let shapes: ShapeMap = [
            ("data".to_string(), vec![1, 1, 28, 28]),
            ("conv1_output".to_string(), vec![1, 20, 24, 24]),
        ]
        .into_iter()
        .collect();

        assert_eq!(shapes.output_shape("conv1"), Some(&[1, 20, 24, 24][..]));
        assert_eq!(shapes.output_shape("data"), Some(&[1, 1, 28, 28][..]));
        assert_eq!(shapes.output_shape("conv2"), None);
        assert_eq!(shapes.output_shape("conv1_output"), None);
    }

    #[test]
    fn test_from_json_variants() {
        let bare = ShapeMap::from_json(r#"{"fc1_output": [1, 128]}"#).unwrap();
        let wrapped =
            ShapeMap::from_json(r#"{"out_shapes": {"fc1_output": [1, 128]}}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.get("fc1_output"), Some(&[1, 128][..]));
    }

    #[test]
    fn test_from_json_rejects_bad_dims() {
        let err = ShapeMap::from_json(r#"{"fc1_output": "1x128"}"#).unwrap_err();
        assert_eq!(err.kind(), symviz_error::ErrorKind::DeserializationFailed);
    }
}
