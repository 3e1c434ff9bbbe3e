//! Loading the symbol and shape files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use symviz_core::{Error, Result, ShapeMap, SymbolGraph};

fn read_file(path: &str, operation: &'static str) -> Result<String> {
    if !Path::new(path).exists() {
        return Err(Error::file_not_found(path).with_operation(operation));
    }
    fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation(operation)
            .with_context("path", path)
    })
}

/// Read and decode a symbol JSON file.
pub fn load_symbol(path: &str) -> Result<SymbolGraph> {
    let text = read_file(path, "input::load_symbol")?;
    let symbol = SymbolGraph::from_json(&text).map_err(|e| e.with_context("path", path))?;
    info!(path, nodes = symbol.len(), "loaded symbol");
    Ok(symbol)
}

/// Read a precomputed shapes file. Without one there are no edge labels.
pub fn load_shapes(path: Option<&str>) -> Result<Option<ShapeMap>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = read_file(path, "input::load_shapes")?;
    let shapes = ShapeMap::from_json(&text).map_err(|e| e.with_context("path", path))?;
    debug!(path, outputs = shapes.len(), "loaded shapes");
    Ok(Some(shapes))
}
