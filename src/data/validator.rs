//! Validator Module
//! Structural summary of the loaded table and the missing-value gate.

use super::dataset::column_values;
use polars::prelude::*;
use std::fmt;
use thiserror::Error;

/// Rows shown in the preview.
pub const HEAD_ROWS: usize = 5;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("There are missing values in the dataset!")]
    MissingValues { total: usize },
}

/// Per-column structure: dtype plus populated/missing cell counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub non_missing: usize,
    pub missing: usize,
}

/// Everything the validator prints about a table before gating it.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub head: DataFrame,
    pub columns: Vec<ColumnInfo>,
    pub shape: (usize, usize),
}

impl ValidationReport {
    /// Inspect a table. Null cells and NaN cells both count as missing.
    pub fn inspect(df: &DataFrame) -> PolarsResult<Self> {
        let columns = df
            .get_columns()
            .iter()
            .map(|col| {
                let missing = column_values(col)?
                    .into_iter()
                    .filter(|v| v.map_or(true, f64::is_nan))
                    .count();
                Ok(ColumnInfo {
                    name: col.name().to_string(),
                    dtype: col.dtype().to_string(),
                    non_missing: col.len() - missing,
                    missing,
                })
            })
            .collect::<PolarsResult<Vec<_>>>()?;

        Ok(Self {
            head: df.head(Some(HEAD_ROWS)),
            columns,
            shape: df.shape(),
        })
    }

    /// Sum of the is-missing indicator over every cell.
    pub fn missing_total(&self) -> usize {
        self.columns.iter().map(|c| c.missing).sum()
    }

    /// Hard stop on any missing cell.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        match self.missing_total() {
            0 => Ok(()),
            total => Err(ValidationError::MissingValues { total }),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.shape;
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let name_width = names.iter().map(|n| n.len()).max().unwrap_or(0).max(6);

        writeln!(f, "{}", self.head)?;
        writeln!(f, "Columns in DataFrame: {names:?}")?;

        writeln!(f, "Table: {rows} entries, {cols} columns")?;
        writeln!(
            f,
            " #   {:<name_width$}  Non-Null Count  Dtype",
            "Column"
        )?;
        for (i, c) in self.columns.iter().enumerate() {
            writeln!(
                f,
                " {:<3} {:<name_width$}  {:>5} non-null  {}",
                i, c.name, c.non_missing, c.dtype
            )?;
        }

        writeln!(f, "Dataset shape: ({rows}, {cols})")?;

        for c in &self.columns {
            writeln!(f, "{:<name_width$}  {}", c.name, c.dtype)?;
        }

        writeln!(f, "Missing values:")?;
        for c in &self.columns {
            writeln!(f, "{:<name_width$}  {}", c.name, c.missing)?;
        }
        Ok(())
    }
}
