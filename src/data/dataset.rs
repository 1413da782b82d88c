//! Lattice Dataset Module
//! The simulation table threaded through every pipeline stage.

use polars::prelude::*;

/// Prefix of the per-rod enrichment columns (`enrichment_1`, `enrichment_2`, ...).
pub const ENRICHMENT_PREFIX: &str = "enrichment_";
/// Enrichment column used for quartile bucketing and the trend chart.
pub const PRIMARY_ENRICHMENT: &str = "enrichment_1";
/// Infinite-medium multiplication factor.
pub const K_INF: &str = "k-inf";
/// Pin power peaking factor.
pub const PPPF: &str = "PPPF";
/// Derived quartile rank of `enrichment_1`.
pub const ENRICHMENT_RANGE: &str = "enrichment_range";

/// One row per simulation: enrichment columns followed by `k-inf` and `PPPF`,
/// plus `enrichment_range` once the table has been bucketed.
#[derive(Debug, Clone)]
pub struct LatticeDataset {
    df: DataFrame,
}

impl LatticeDataset {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        self.df.shape()
    }


    /// Get list of column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get list of numeric column names.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| {
                matches!(
                    col.dtype(),
                    DataType::Float32
                        | DataType::Float64
                        | DataType::Int8
                        | DataType::Int16
                        | DataType::Int32
                        | DataType::Int64
                        | DataType::UInt8
                        | DataType::UInt16
                        | DataType::UInt32
                        | DataType::UInt64
                )
            })
            .map(|col| col.name().to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    pub fn has_enrichment_range(&self) -> bool {
        self.has_column(ENRICHMENT_RANGE)
    }

    /// Values of a column as f64, with missing cells mapped to NaN.
    pub fn values(&self, name: &str) -> PolarsResult<Vec<f64>> {
        let column = self.df.column(name)?;
        Ok(column_values(column)?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Append a column, returning the updated table.
    pub fn with_column(mut self, column: Column) -> PolarsResult<Self> {
        self.df.with_column(column)?;
        Ok(self)
    }
}

/// Cast a column to f64 and collect its cells, keeping nulls.
pub fn column_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}
