//! symviz command-line interface.
//!
//! Loads a symbol file and an optional precomputed shapes file, renders the
//! display graph with the chosen backend, and writes the result.

pub mod input;
pub mod options;
pub mod output;

use std::time::Instant;

use tracing::info;

use symviz_core::Result;
use symviz_dot::{RenderOptions, Rendered, visualize};

pub use options::{RenderArgs, ShapeArgs};
pub use output::write_output;

/// Options for running symviz.
pub struct SymvizOptions {
    /// Path of the symbol JSON file.
    pub symbol: String,
    /// Path of a precomputed shapes file.
    pub shapes: Option<String>,
    pub render: RenderOptions,
    /// Output file path; stdout when unset.
    pub output: Option<String>,
}

/// Main entry point: load inputs and render the symbol.
pub fn run_main(opts: &SymvizOptions) -> Result<Rendered> {
    let start = Instant::now();

    let symbol = input::load_symbol(&opts.symbol)?;
    let shapes = input::load_shapes(opts.shapes.as_deref())?;
    let rendered = visualize(&symbol, shapes.as_ref(), &opts.render)?;

    info!(
        "symbol rendered: {:.2}s",
        start.elapsed().as_secs_f64()
    );
    Ok(rendered)
}
