//! Stats module - Descriptive statistics, binning, correlation and density

mod binning;
mod calculator;
mod correlation;
mod density;

pub use binning::{
    add_enrichment_range, grouped_means, BinningError, GroupMeans, QuartileBins, QUARTILES,
};
pub use calculator::{ColumnSummary, StatsCalculator, TargetStats};
pub use correlation::{pearson, CorrelationMatrix, TargetCorrelation};
pub use density::{GaussianKde, HistogramBins};

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error(transparent)]
    Binning(#[from] BinningError),
    #[error("Column {0} is not present in the dataset")]
    MissingColumn(String),
}
