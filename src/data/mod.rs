//! Data module - CSV loading, schema assignment and validation

mod dataset;
mod loader;
mod schema;
mod validator;

pub use dataset::{
    column_values, LatticeDataset, ENRICHMENT_PREFIX, ENRICHMENT_RANGE, K_INF, PPPF,
    PRIMARY_ENRICHMENT,
};
pub use loader::{load_csv, LoaderError};
pub use schema::{assign_column_names, column_names, SchemaError, MIN_COLUMNS};
pub use validator::{ColumnInfo, ValidationError, ValidationReport, HEAD_ROWS};
