//! Schema Assigner Module
//! Replaces positional CSV labels with enrichment and target column names.

use super::dataset::{column_values, ENRICHMENT_PREFIX, K_INF, PPPF};
use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

/// The two target columns always occupy the last two positions.
pub const MIN_COLUMNS: usize = 2;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error(
        "Dataset has {found} column(s) but at least {minimum} are required (enrichment columns followed by k-inf and PPPF)"
    )]
    TooFewColumns { found: usize, minimum: usize },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Build the label sequence for a table with `num_columns` columns:
/// `enrichment_1 .. enrichment_{num_columns-2}`, then `k-inf` and `PPPF`.
pub fn column_names(num_columns: usize) -> Result<Vec<String>, SchemaError> {
    if num_columns < MIN_COLUMNS {
        return Err(SchemaError::TooFewColumns {
            found: num_columns,
            minimum: MIN_COLUMNS,
        });
    }

    let mut names: Vec<String> = (1..=num_columns - MIN_COLUMNS)
        .map(|i| format!("{ENRICHMENT_PREFIX}{i}"))
        .collect();
    names.push(K_INF.to_string());
    names.push(PPPF.to_string());
    Ok(names)
}

/// Relabel a freshly loaded table, overwriting the positional defaults.
pub fn assign_column_names(df: DataFrame) -> Result<DataFrame, SchemaError> {
    let num_columns = df.width();
    println!("Number of columns: {num_columns}");

    let names = column_names(num_columns)?;
    debug!(?names, "assigning column names");

    let columns = df
        .get_columns()
        .iter()
        .zip(&names)
        .map(|(col, name)| Ok(Column::new(name.as_str().into(), column_values(col)?)))
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_columns_get_three_enrichments_and_two_targets() {
        let names = column_names(5).unwrap();

        assert_eq!(
            names,
            vec!["enrichment_1", "enrichment_2", "enrichment_3", "k-inf", "PPPF"]
        );
    }

    #[test]
    fn label_count_matches_column_count() {
        for count in 2..20 {
            let names = column_names(count).unwrap();
            assert_eq!(names.len(), count);
            assert_eq!(names[count - 2], K_INF);
            assert_eq!(names[count - 1], PPPF);
            for (i, name) in names[..count - 2].iter().enumerate() {
                assert_eq!(name, &format!("enrichment_{}", i + 1));
            }
        }
    }

    #[test]
    fn two_columns_are_targets_only() {
        assert_eq!(column_names(2).unwrap(), vec!["k-inf", "PPPF"]);
    }

    #[test]
    fn fewer_than_two_columns_fails_fast() {
        for count in 0..MIN_COLUMNS {
            match column_names(count) {
                Err(SchemaError::TooFewColumns { found, minimum }) => {
                    assert_eq!(found, count);
                    assert_eq!(minimum, 2);
                }
                other => panic!("expected TooFewColumns, got {other:?}"),
            }
        }
    }

    #[test]
    fn assign_overwrites_positional_labels() {
        let df = df!(
            "column_1" => [3.1, 3.5],
            "column_2" => [1.21, 1.23],
            "column_3" => [1.45, 1.40]
        )
        .unwrap();

        let df = assign_column_names(df).unwrap();

        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["enrichment_1", "k-inf", "PPPF"]);
        assert_eq!(df.shape(), (2, 3));
    }

    #[test]
    fn assign_rejects_single_column_table() {
        let df = df!("column_1" => [1.0, 2.0]).unwrap();

        assert!(matches!(
            assign_column_names(df),
            Err(SchemaError::TooFewColumns { found: 1, .. })
        ));
    }
}
