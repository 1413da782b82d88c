//! CSV Data Loader Module
//! Reads the headerless lattice CSV into a Float64 DataFrame using Polars.

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Rows scanned for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file was not found. Please check the file path: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("An error occurred while loading the dataset: {0}")]
    LoadFailure(#[from] PolarsError),
    #[error("An error occurred while loading the dataset: column {column} is not numeric ({source})")]
    NonNumericColumn { column: String, source: PolarsError },
}

/// Load a headerless CSV file.
///
/// Columns keep Polars' positional labels (`column_1 .. column_N`) and are
/// strictly cast to Float64.
pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    let raw = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    debug!(dtypes = ?raw.dtypes(), "raw CSV schema");

    let columns = raw
        .get_columns()
        .iter()
        .map(|col| {
            col.as_materialized_series()
                .strict_cast(&DataType::Float64)
                .map(Column::from)
                .map_err(|source| LoaderError::NonNumericColumn {
                    column: col.name().to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let df = DataFrame::new(columns)?;
    info!(
        rows = df.height(),
        columns = df.width(),
        "Dataset loaded successfully!"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_headerless_rows_as_float_columns() {
        let file = csv_file("3.1,4.2,1.21,1.45\n3.5,4.0,1.23,1.40\n2.9,4.4,1.19,1.48\n");

        let df = load_csv(file.path()).unwrap();

        assert_eq!(df.shape(), (3, 4));
        assert!(df.dtypes().iter().all(|dt| *dt == DataType::Float64));
    }

    #[test]
    fn integer_cells_are_widened_to_float() {
        let file = csv_file("3,1.2,1.4\n4,1.3,1.5\n");

        let df = load_csv(file.path()).unwrap();

        assert_eq!(df.dtypes()[0], DataType::Float64);
    }

    #[test]
    fn missing_path_is_file_not_found() {
        let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();

        assert!(matches!(err, LoaderError::FileNotFound(_)));
        assert!(err
            .to_string()
            .starts_with("The file was not found. Please check the file path"));
    }

    #[test]
    fn text_column_is_rejected() {
        let file = csv_file("abc,1.2,1.4\ndef,1.3,1.5\n");

        let err = load_csv(file.path()).unwrap_err();

        match err {
            LoaderError::NonNumericColumn { column, .. } => assert_eq!(column, "column_1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_fails_to_load() {
        let file = csv_file("");

        assert!(load_csv(file.path()).is_err());
    }
}
