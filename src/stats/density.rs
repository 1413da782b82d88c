//! Density Module
//! Histogram binning and Gaussian kernel density estimation for the k-inf
//! distribution chart.

use super::calculator::StatsCalculator;
use statrs::distribution::{Continuous, Normal};

/// Equal-width histogram over the data range.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub start: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

impl HistogramBins {
    /// Bin with the finer of the Sturges and Freedman-Diaconis widths
    /// (NumPy's "auto" rule). Returns `None` for an empty sample.
    pub fn auto(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let (min, max) = (sorted[0], sorted[n - 1]);
        if max == min {
            return Some(Self::with_bins(&sorted, min - 0.5, max + 0.5, 1));
        }

        let range = max - min;
        let sturges = range / ((n as f64).log2() + 1.0);
        let iqr = StatsCalculator::percentile(&sorted, 75.0)
            - StatsCalculator::percentile(&sorted, 25.0);
        let fd = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
        // A tiny non-zero IQR collapses the FD width; never use more bins than samples.
        let width = if fd > 0.0 && fd < sturges && range / fd <= n as f64 {
            fd
        } else {
            sturges
        };
        let bins = ((range / width).ceil() as usize).max(1);

        Some(Self::with_bins(&sorted, min, max, bins))
    }

    fn with_bins(values: &[f64], start: f64, end: f64, bins: usize) -> Self {
        let width = (end - start) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - start) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self {
            start,
            width,
            counts,
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.width * self.counts.len() as f64
    }

    /// `(low, high, count)` for every bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let low = self.start + self.width * i as f64;
            (low, low + self.width, count)
        })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Gaussian kernel density estimate with Scott's bandwidth.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
    kernel: Normal,
}

impl GaussianKde {
    /// `None` when the bandwidth is undefined (fewer than two samples or no spread).
    pub fn new(values: &[f64]) -> Option<Self> {
        let samples: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let n = samples.len() as f64;
        let bandwidth = StatsCalculator::sample_std(&samples) * n.powf(-0.2);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return None;
        }
        let kernel = Normal::new(0.0, 1.0).ok()?;
        Some(Self {
            samples,
            bandwidth,
            kernel,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Probability density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self
            .samples
            .iter()
            .map(|&s| self.kernel.pdf((x - s) / h))
            .sum();
        sum / (self.samples.len() as f64 * h)
    }

    /// Density sampled at `points` evenly spaced positions over `[start, end]`,
    /// multiplied by `scale` (use `n * bin_width` to overlay on counts).
    pub fn curve(&self, start: f64, end: f64, points: usize, scale: f64) -> Vec<(f64, f64)> {
        if points < 2 {
            return Vec::new();
        }
        let step = (end - start) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = start + step * i as f64;
                (x, self.evaluate(x) * scale)
            })
            .collect()
    }
}
