//! Statistics Calculator Module
//! Descriptive statistics per column and aggregate statistics for the targets.

use crate::data::{LatticeDataset, K_INF, PPPF};
use polars::prelude::*;
use statrs::statistics::Statistics;

/// Descriptive statistics for a single column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl Default for ColumnSummary {
    fn default() -> Self {
        Self {
            name: String::new(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            median: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl ColumnSummary {
    /// Compute count, mean, sample std, min, quartiles and max.
    /// NaN cells are skipped.
    pub fn compute(name: &str, values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return Self {
                name: name.to_string(),
                ..Self::default()
            };
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            name: name.to_string(),
            count: sorted.len(),
            mean: StatsCalculator::mean(&sorted),
            std: StatsCalculator::sample_std(&sorted),
            min: sorted[0],
            p25: StatsCalculator::percentile(&sorted, 25.0),
            median: StatsCalculator::percentile(&sorted, 50.0),
            p75: StatsCalculator::percentile(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Mean, median and standard deviation of one target column.
#[derive(Debug, Clone)]
pub struct TargetStats {
    pub name: String,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

/// Handles statistical calculations over the lattice table.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Arithmetic mean; NaN for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        values.iter().mean()
    }

    /// Sample standard deviation (n - 1 denominator); NaN below two values.
    pub fn sample_std(values: &[f64]) -> f64 {
        values.iter().std_dev()
    }

    /// Median of unsorted values.
    pub fn median(values: &[f64]) -> f64 {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Self::percentile(&sorted, 50.0)
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Describe every numeric column of the table, in column order.
    pub fn describe(dataset: &LatticeDataset) -> PolarsResult<Vec<ColumnSummary>> {
        dataset
            .numeric_columns()
            .iter()
            .map(|name| Ok(ColumnSummary::compute(name, &dataset.values(name)?)))
            .collect()
    }

    /// Mean, median and std for `k-inf` and `PPPF`.
    pub fn target_stats(dataset: &LatticeDataset) -> PolarsResult<Vec<TargetStats>> {
        [K_INF, PPPF]
            .iter()
            .map(|&name| {
                let values = dataset.values(name)?;
                Ok(TargetStats {
                    name: name.to_string(),
                    mean: Self::mean(&values),
                    median: Self::median(&values),
                    std: Self::sample_std(&values),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summary_matches_hand_computed_values() {
        let s = ColumnSummary::compute("k-inf", &[4.0, 1.0, 3.0, 2.0]);

        assert_eq!(s.count, 4);
        assert!(close(s.mean, 2.5));
        assert!(close(s.std, (5.0f64 / 3.0).sqrt()));
        assert_eq!(s.min, 1.0);
        assert!(close(s.p25, 1.75));
        assert!(close(s.median, 2.5));
        assert!(close(s.p75, 3.25));
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn single_value_has_undefined_std() {
        let s = ColumnSummary::compute("PPPF", &[1.4]);

        assert_eq!(s.count, 1);
        assert_eq!(s.median, 1.4);
        assert!(s.std.is_nan());
    }

    #[test]
    fn empty_column_summary_is_nan() {
        let s = ColumnSummary::compute("PPPF", &[]);

        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.max.is_nan());
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted = [10.0, 20.0, 30.0, 40.0, 50.0];

        assert!(close(StatsCalculator::percentile(&sorted, 0.0), 10.0));
        assert!(close(StatsCalculator::percentile(&sorted, 10.0), 14.0));
        assert!(close(StatsCalculator::percentile(&sorted, 100.0), 50.0));
    }

    #[test]
    fn describe_covers_every_column() {
        let df = df!(
            "enrichment_1" => [3.1, 3.5, 2.9],
            "k-inf" => [1.21, 1.23, 1.19],
            "PPPF" => [1.45, 1.40, 1.48]
        )
        .unwrap();
        let dataset = LatticeDataset::new(df);

        let summaries = StatsCalculator::describe(&dataset).unwrap();

        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["enrichment_1", "k-inf", "PPPF"]);
        assert!(summaries.iter().all(|s| s.count == 3));
    }

    #[test]
    fn target_stats_report_k_inf_then_pppf() {
        let df = df!(
            "enrichment_1" => [3.1, 3.5, 2.9, 3.0],
            "k-inf" => [1.0, 2.0, 3.0, 10.0],
            "PPPF" => [1.5, 1.5, 1.5, 1.5]
        )
        .unwrap();
        let dataset = LatticeDataset::new(df);

        let stats = StatsCalculator::target_stats(&dataset).unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "k-inf");
        assert!(close(stats[0].mean, 4.0));
        assert!(close(stats[0].median, 2.5));
        assert_eq!(stats[1].name, "PPPF");
        assert!(close(stats[1].std, 0.0));
    }
}
