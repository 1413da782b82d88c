//! Analysis Pipeline
//! load -> assign schema -> validate -> enrich -> analyze -> render, with the
//! dataset passed explicitly from stage to stage.

use crate::charts::{self, Figure, RenderError};
use crate::config::RenderConfig;
use crate::data::{
    assign_column_names, load_csv, LatticeDataset, LoaderError, SchemaError, ValidationError,
    ValidationReport,
};
use crate::report;
use crate::stats::{
    add_enrichment_range, grouped_means, ColumnSummary, CorrelationMatrix, GroupMeans,
    QuartileBins, StatsCalculator, StatsError, TargetCorrelation, TargetStats,
};
use polars::prelude::PolarsError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Everything computed from a validated, bucketed dataset.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub validation: ValidationReport,
    pub summaries: Vec<ColumnSummary>,
    pub targets: Vec<TargetStats>,
    pub bins: QuartileBins,
    pub grouped: Vec<GroupMeans>,
    pub correlations: CorrelationMatrix,
    pub target_correlations: Vec<TargetCorrelation>,
    /// Shape after `enrichment_range` was appended.
    pub shape: (usize, usize),
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub dataset: LatticeDataset,
    pub analysis: Analysis,
    /// Chart files written; empty for interactive display.
    pub written: Vec<PathBuf>,
}

/// Runs the whole analysis once for an input file.
pub struct Pipeline {
    config: RenderConfig,
}

impl Pipeline {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Run every stage. The first failing stage ends the run.
    #[instrument(skip(self), fields(target = ?self.config.target))]
    pub fn run(&self, input: &Path) -> Result<PipelineOutcome, PipelineError> {
        let dataset = load(input)?;
        let (dataset, analysis) = analyze(dataset)?;

        let figures = Figure::build_all(&dataset, &analysis.grouped)?;
        let written = charts::render_all(&figures, &self.config)?;
        info!(charts = figures.len(), files = written.len(), "pipeline finished");

        Ok(PipelineOutcome {
            dataset,
            analysis,
            written,
        })
    }
}

/// Load the CSV and assign the lattice schema.
pub fn load(input: &Path) -> Result<LatticeDataset, PipelineError> {
    let df = load_csv(input)?;
    let df = assign_column_names(df)?;
    Ok(LatticeDataset::new(df))
}

/// Print the structural summary and stop on any missing cell.
pub fn validate(dataset: &LatticeDataset) -> Result<ValidationReport, PipelineError> {
    let report = ValidationReport::inspect(dataset.dataframe())?;
    println!("{report}");

    if let Err(err) = report.ensure_complete() {
        warn!(missing = report.missing_total(), "missing-value check failed");
        return Err(err.into());
    }
    Ok(report)
}

/// Validate, describe, bucket and correlate. Returns the dataset with
/// `enrichment_range` appended.
pub fn analyze(dataset: LatticeDataset) -> Result<(LatticeDataset, Analysis), PipelineError> {
    let validation = validate(&dataset)?;

    let summaries = StatsCalculator::describe(&dataset)?;
    println!("{}", report::describe_table(&summaries));

    let targets = StatsCalculator::target_stats(&dataset)?;
    println!("{}", report::target_table(&targets));

    let (dataset, bins) = add_enrichment_range(dataset)?;
    let shape = dataset.shape();
    println!("Dataset shape: ({}, {})", shape.0, shape.1);

    let grouped = grouped_means(&dataset)?;
    println!("{}", report::grouped_table(&grouped, &bins));

    let correlations = CorrelationMatrix::compute(&dataset)?;
    let target_correlations = correlations.target_view()?;
    println!("{}", report::correlation_table(&target_correlations));

    Ok((
        dataset,
        Analysis {
            validation,
            summaries,
            targets,
            bins,
            grouped,
            correlations,
            target_correlations,
            shape,
        },
    ))
}
