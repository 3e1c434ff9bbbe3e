//! Backend dispatch.

use std::fmt;
use std::time::Instant;

use tracing::info;

use symviz_core::VizGraph;
use symviz_error::Result;

use crate::dot::DotRenderer;
use crate::types::{Backend, RenderOptions};
use crate::vis::VisRenderer;

/// A rendering strategy turning display tables into a document.
pub trait Renderer {
    fn render(&self, graph: &VizGraph, options: &RenderOptions) -> Result<String>;
}

/// Rendered document together with the backend that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    backend: Backend,
    content: String,
}

impl Rendered {
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Render `graph` with the backend selected in `options`.
pub fn render(graph: &VizGraph, options: &RenderOptions) -> Result<Rendered> {
    let render_start = Instant::now();

    let content = match options.backend {
        Backend::Graph => DotRenderer.render(graph, options)?,
        Backend::Vis => VisRenderer.render(graph, options)?,
    };

    info!(
        backend = options.backend.as_str(),
        direction = %options.direction,
        bytes = content.len(),
        "rendered in {:.3}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(Rendered {
        backend: options.backend,
        content,
    })
}
