//! Quartile Binning Module
//! Equal-frequency bucketing of `enrichment_1` and per-bucket target means.

use super::calculator::StatsCalculator;
use super::StatsError;
use crate::data::{LatticeDataset, ENRICHMENT_RANGE, K_INF, PPPF, PRIMARY_ENRICHMENT};
use polars::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Number of equal-frequency buckets.
pub const QUARTILES: usize = 4;

#[derive(Error, Debug)]
pub enum BinningError {
    #[error("Cannot compute quantile bins of an empty column")]
    Empty,
    #[error("Bin edges must be unique: {edges:?}")]
    DuplicateEdges { edges: [f64; QUARTILES + 1] },
}

/// Quantile edges at 0, 25, 50, 75 and 100 percent.
///
/// Bucket `i` covers `(edges[i], edges[i + 1]]`; the lowest edge is inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct QuartileBins {
    pub edges: [f64; QUARTILES + 1],
}

impl QuartileBins {
    pub fn from_values(values: &[f64]) -> Result<Self, BinningError> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return Err(BinningError::Empty);
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mut edges = [0.0; QUARTILES + 1];
        for (i, edge) in edges.iter_mut().enumerate() {
            *edge = StatsCalculator::percentile(&sorted, 100.0 * i as f64 / QUARTILES as f64);
        }

        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BinningError::DuplicateEdges { edges });
        }
        Ok(Self { edges })
    }

    /// Rank label of the bucket containing `value`, or `None` outside the edges.
    pub fn label(&self, value: f64) -> Option<u32> {
        if value.is_nan() || value < self.edges[0] {
            return None;
        }
        self.edges[1..]
            .iter()
            .position(|&upper| value <= upper)
            .map(|i| i as u32)
    }

    pub fn labels(&self, values: &[f64]) -> Vec<Option<u32>> {
        values.iter().map(|&v| self.label(v)).collect()
    }

    /// Edge interval `(low, high]` of a bucket.
    pub fn interval(&self, label: u32) -> Option<(f64, f64)> {
        let i = label as usize;
        (i < QUARTILES).then(|| (self.edges[i], self.edges[i + 1]))
    }
}

/// Mean targets over the rows of one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeans {
    pub label: u32,
    pub count: usize,
    pub k_inf: f64,
    pub pppf: f64,
}

/// Append `enrichment_range` (quartile rank of `enrichment_1`) to the table.
pub fn add_enrichment_range(
    dataset: LatticeDataset,
) -> Result<(LatticeDataset, QuartileBins), StatsError> {
    if !dataset.has_column(PRIMARY_ENRICHMENT) {
        return Err(StatsError::MissingColumn(PRIMARY_ENRICHMENT.to_string()));
    }
    let values = dataset.values(PRIMARY_ENRICHMENT)?;
    let bins = QuartileBins::from_values(&values)?;
    debug!(edges = ?bins.edges, "quartile edges");

    let labels = bins.labels(&values);
    let dataset = dataset.with_column(Column::new(ENRICHMENT_RANGE.into(), labels))?;
    Ok((dataset, bins))
}

/// Mean `k-inf` and `PPPF` per `enrichment_range` bucket, ascending by label.
pub fn grouped_means(dataset: &LatticeDataset) -> Result<Vec<GroupMeans>, StatsError> {
    if !dataset.has_enrichment_range() {
        return Err(StatsError::MissingColumn(ENRICHMENT_RANGE.to_string()));
    }

    let labels = dataset.values(ENRICHMENT_RANGE)?;
    let k_inf = dataset.values(K_INF)?;
    let pppf = dataset.values(PPPF)?;

    let mut groups: BTreeMap<u32, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for ((label, k), p) in labels.iter().zip(&k_inf).zip(&pppf) {
        if label.is_nan() {
            continue;
        }
        let entry = groups.entry(*label as u32).or_default();
        entry.0.push(*k);
        entry.1.push(*p);
    }

    Ok(groups
        .into_iter()
        .map(|(label, (k, p))| GroupMeans {
            label,
            count: k.len(),
            k_inf: StatsCalculator::mean(&k),
            pppf: StatsCalculator::mean(&p),
        })
        .collect())
}
