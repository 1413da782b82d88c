//! Lattice EDA - command-line entry point.
//!
//! Runs the full analysis over one lattice-physics CSV and shows or saves
//! the resulting charts.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lattice_eda::{Pipeline, RenderConfig, RenderTarget};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Where the charts are sent.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTarget {
    /// Open one window per chart, each blocking until closed
    Interactive,
    /// Write PNG files to the output directory
    File,
}

impl From<CliTarget> for RenderTarget {
    fn from(cli: CliTarget) -> Self {
        match cli {
            CliTarget::Interactive => RenderTarget::InteractiveDisplay,
            CliTarget::File => RenderTarget::FileOutput,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lattice-eda")]
#[command(about = "Exploratory analysis of a fuel-rod lattice physics dataset")]
#[command(version)]
struct Args {
    /// Headerless CSV: enrichment columns, then k-inf, then PPPF
    #[arg(default_value = "data/lattice_physics_dataset.csv")]
    input: PathBuf,

    /// Chart destination (overrides the render config file)
    #[arg(short, long, value_enum)]
    target: Option<CliTarget>,

    /// Directory for PNG output (overrides the render config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JSON render config, e.g. {"target": "file-output", "output-directory": "charts"}
    #[arg(long)]
    render_config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.render_config {
            Some(path) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };
        if let Some(target) = self.target {
            config.target = target.into();
        }
        if let Some(dir) = &self.output_dir {
            config.output_directory = dir.clone();
        }
        Ok(config)
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.render_config()?;
    debug!(?config, "render config");

    let outcome = Pipeline::new(config).run(&args.input)?;

    for path in &outcome.written {
        println!("Saved {}", path.display());
    }
    info!(
        rows = outcome.analysis.shape.0,
        columns = outcome.analysis.shape.1,
        "analysis complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
