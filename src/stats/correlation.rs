//! Correlation Module
//! Pairwise Pearson correlation over every numeric column.

use super::StatsError;
use crate::data::{LatticeDataset, K_INF, PPPF};
use polars::prelude::*;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Pearson correlation coefficient of two equally long samples.
///
/// Returns NaN when either sample has zero variance or fewer than two values.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let (x, y) = (&x[..n], &y[..n]);

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || denom.is_nan() {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

/// Correlation of one column with both targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCorrelation {
    pub column: String,
    pub k_inf: f64,
    pub pppf: f64,
}

/// Symmetric correlation matrix, stored row-major.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Correlate every pair of numeric columns in parallel.
    pub fn compute(dataset: &LatticeDataset) -> PolarsResult<Self> {
        let columns = dataset.numeric_columns();
        let data = columns
            .iter()
            .map(|name| dataset.values(name))
            .collect::<PolarsResult<Vec<_>>>()?;

        let n = columns.len();
        let pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect();

        let results: Vec<(usize, usize, f64)> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let r = if i == j {
                    Self::self_correlation(&data[i])
                } else {
                    pearson(&data[i], &data[j])
                };
                (i, j, r)
            })
            .collect();

        let mut values = vec![f64::NAN; n * n];
        for (i, j, r) in results {
            values[i * n + j] = r;
            values[j * n + i] = r;
        }

        Ok(Self { columns, values })
    }

    /// Exactly 1.0 for a column with spread, NaN for a constant one.
    fn self_correlation(values: &[f64]) -> f64 {
        if values.windows(2).any(|w| w[0] != w[1]) {
            1.0
        } else {
            f64::NAN
        }
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let n = self.columns.len();
        Some(self.values[self.index_of(row)? * n + self.index_of(column)?])
    }

    /// Every column's correlation with `k-inf` and `PPPF`, sorted descending by
    /// the `k-inf` correlation with NaN last.
    pub fn target_view(&self) -> Result<Vec<TargetCorrelation>, StatsError> {
        let n = self.columns.len();
        let k = self
            .index_of(K_INF)
            .ok_or_else(|| StatsError::MissingColumn(K_INF.to_string()))?;
        let p = self
            .index_of(PPPF)
            .ok_or_else(|| StatsError::MissingColumn(PPPF.to_string()))?;

        let mut view: Vec<TargetCorrelation> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| TargetCorrelation {
                column: column.clone(),
                k_inf: self.values[i * n + k],
                pppf: self.values[i * n + p],
            })
            .collect();

        view.sort_by(|a, b| match (a.k_inf.is_nan(), b.k_inf.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.k_inf.partial_cmp(&a.k_inf).unwrap_or(Ordering::Equal),
        });
        Ok(view)
    }
}
