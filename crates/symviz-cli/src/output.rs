//! Writing the rendered document.

use std::fs;
use std::io::{self, Write};

use tracing::info;

use symviz_core::{Error, Result};
use symviz_dot::Rendered;

/// Write `rendered` to `path`, or to stdout when no path is given.
pub fn write_output(rendered: &Rendered, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered.content()).map_err(|e| {
                Error::from(e)
                    .with_operation("output::write")
                    .with_context("path", path)
            })?;
            info!(path, backend = rendered.backend().as_str(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")
                .map_err(|e| Error::from(e).with_operation("output::stdout"))?;
        }
    }
    Ok(())
}
