//! Figure Module
//! Backend-independent descriptions of the four exploratory charts.

use crate::data::{LatticeDataset, K_INF, PPPF, PRIMARY_ENRICHMENT};
use crate::stats::{GaussianKde, GroupMeans, HistogramBins};
use polars::prelude::PolarsResult;

/// Samples along the density overlay.
const DENSITY_POINTS: usize = 200;
/// Scatter point opacity.
pub const SCATTER_ALPHA: f32 = 0.6;

/// `enrichment_1` vs `k-inf` in row order, markers joined by a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFigure {
    pub points: Vec<(f64, f64)>,
}

/// Mean PPPF per enrichment bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFigure {
    pub bars: Vec<(u32, f64)>,
}

/// k-inf histogram with a KDE curve scaled to bin counts.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramFigure {
    pub bins: Option<HistogramBins>,
    pub density: Vec<(f64, f64)>,
}

/// k-inf vs PPPF, semi-transparent points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Line(LineFigure),
    Bar(BarFigure),
    Histogram(HistogramFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    /// The four charts, in display order.
    pub fn build_all(dataset: &LatticeDataset, grouped: &[GroupMeans]) -> PolarsResult<Vec<Self>> {
        let enrichment = dataset.values(PRIMARY_ENRICHMENT)?;
        let k_inf = dataset.values(K_INF)?;
        let pppf = dataset.values(PPPF)?;

        Ok(vec![
            Figure::Line(LineFigure {
                points: zip_points(&enrichment, &k_inf),
            }),
            Figure::Bar(BarFigure {
                bars: grouped.iter().map(|g| (g.label, g.pppf)).collect(),
            }),
            Figure::Histogram(HistogramFigure::from_values(&k_inf)),
            Figure::Scatter(ScatterFigure {
                points: zip_points(&k_inf, &pppf),
            }),
        ])
    }

    pub fn title(&self) -> &'static str {
        match self {
            Figure::Line(_) => "Trend of k-inf vs. Fuel Rod Enrichment",
            Figure::Bar(_) => "Mean PPPF by Enrichment Range",
            Figure::Histogram(_) => "Distribution of k-inf",
            Figure::Scatter(_) => "Relationship between k-inf and PPPF",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            Figure::Line(_) => "Enrichment (w/o U-235)",
            Figure::Bar(_) => "Enrichment Range (w/o U-235)",
            Figure::Histogram(_) | Figure::Scatter(_) => "k-inf",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Figure::Line(_) => "k-inf",
            Figure::Bar(_) => "Mean PPPF",
            Figure::Histogram(_) => "Frequency",
            Figure::Scatter(_) => "PPPF",
        }
    }

    /// File name (without extension) used for file output.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Figure::Line(_) => "k_inf_vs_enrichment",
            Figure::Bar(_) => "mean_pppf_by_enrichment_range",
            Figure::Histogram(_) => "k_inf_distribution",
            Figure::Scatter(_) => "k_inf_vs_pppf",
        }
    }
}

impl HistogramFigure {
    pub fn from_values(values: &[f64]) -> Self {
        let bins = HistogramBins::auto(values);
        let density = match (&bins, GaussianKde::new(values)) {
            (Some(bins), Some(kde)) => {
                let scale = bins.total() as f64 * bins.width;
                let (lo, hi) = finite_range(values).unwrap_or((bins.start, bins.end()));
                kde.curve(lo, hi, DENSITY_POINTS, scale)
            }
            _ => Vec::new(),
        };
        Self { bins, density }
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

/// Min and max over finite values.
pub(crate) fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
