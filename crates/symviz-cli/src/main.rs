use std::time::Instant;

use clap::Parser;

use symviz::{RenderArgs, ShapeArgs, SymvizOptions, run_main, write_output};
use symviz_core::Result;

#[derive(Parser, Debug)]
#[command(
    name = "symviz",
    about = "symviz: draw neural-network symbol graphs",
    version
)]
pub struct Cli {
    /// Symbol JSON file (e.g. model-symbol.json)
    #[arg(value_name = "SYMBOL")]
    symbol: String,

    #[command(flatten)]
    shapes: ShapeArgs,

    #[command(flatten)]
    render: RenderArgs,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

fn options_from(args: &Cli) -> Result<SymvizOptions> {
    Ok(SymvizOptions {
        symbol: args.symbol.clone(),
        shapes: args.shapes.shapes.clone(),
        render: args.render.to_render_options()?,
        output: args.output.clone(),
    })
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let result = options_from(&args).and_then(|opts| {
        let rendered = run_main(&opts)?;
        write_output(&rendered, opts.output.as_deref())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        tracing::error!(error = %e, "execution failed");
        std::process::exit(if e.kind().is_config() { 2 } else { 1 });
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
