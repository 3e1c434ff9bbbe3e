//! Command-line options shared by the `symviz` binary and its tests.

use clap::Args;

use symviz_core::Result;
use symviz_dot::{Backend, Direction, RenderOptions};

/// Options controlling how the graph is rendered.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Layout direction: 'TD' (top-down) or 'LR' (left-right)
    #[arg(short = 'd', long, value_name = "DIR", default_value = "TD")]
    pub direction: String,

    /// Rendering backend: 'graph' (Graphviz DOT) or 'vis' (vis-network JSON)
    #[arg(short = 'b', long, value_name = "BACKEND", default_value = "graph")]
    pub backend: String,

    /// Output width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            direction: Direction::default().to_string(),
            backend: Backend::default().to_string(),
            width: None,
            height: None,
        }
    }
}

impl RenderArgs {
    /// Validate the textual options. Unknown names are configuration errors.
    pub fn to_render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions::parse(&self.direction, &self.backend)?
            .with_width(self.width)
            .with_height(self.height))
    }
}

/// Options supplying tensor shapes for edge labels.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeArgs {
    /// JSON file of inferred output shapes (`{"conv1_output": [1, 20, 24, 24], ...}`,
    /// optionally wrapped in an `out_shapes` object)
    #[arg(short = 's', long = "shapes", value_name = "FILE")]
    pub shapes: Option<String>,
}
