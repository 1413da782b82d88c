use lattice_eda::data::{SchemaError, ENRICHMENT_RANGE, K_INF, PPPF};
use lattice_eda::pipeline::{self, PipelineError};
use lattice_eda::{Pipeline, RenderConfig};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const LATTICE_CSV: &str = "\
4.4,2.0,3.9,1.30,1.60
1.1,2.5,3.1,1.05,1.30
3.3,3.0,2.4,1.22,1.50
2.2,3.5,4.6,1.12,1.40
4.0,4.0,1.8,1.28,1.58
1.5,4.5,2.9,1.07,1.32
2.8,2.2,3.3,1.16,1.44
3.6,2.7,4.1,1.25,1.52
";

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_and_names_lattice_columns() {
    let file = csv_file(LATTICE_CSV);

    let dataset = pipeline::load(file.path()).unwrap();

    assert_eq!(dataset.shape(), (8, 5));
    assert_eq!(
        dataset.column_names(),
        vec!["enrichment_1", "enrichment_2", "enrichment_3", K_INF, PPPF]
    );
}

#[test]
fn analysis_buckets_rows_evenly() {
    let file = csv_file(LATTICE_CSV);
    let dataset = pipeline::load(file.path()).unwrap();

    let (dataset, analysis) = pipeline::analyze(dataset).unwrap();

    assert_eq!(analysis.shape, (8, 6));
    assert_eq!(dataset.column_names().last().unwrap(), ENRICHMENT_RANGE);
    assert_eq!(
        dataset.values(ENRICHMENT_RANGE).unwrap(),
        vec![3.0, 0.0, 2.0, 1.0, 3.0, 0.0, 1.0, 2.0]
    );

    let labels: Vec<u32> = analysis.grouped.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![0, 1, 2, 3]);
    assert!(analysis.grouped.iter().all(|g| g.count == 2));
    // lowest bucket holds rows 1.1 and 1.5
    assert!((analysis.grouped[0].k_inf - 1.06).abs() < 1e-9);
    assert!((analysis.grouped[0].pppf - 1.31).abs() < 1e-9);
}

#[test]
fn targets_correlate_perfectly_with_themselves() {
    let file = csv_file(LATTICE_CSV);
    let dataset = pipeline::load(file.path()).unwrap();

    let (_, analysis) = pipeline::analyze(dataset).unwrap();

    assert_eq!(analysis.correlations.get(K_INF, K_INF), Some(1.0));
    assert_eq!(analysis.correlations.get(PPPF, PPPF), Some(1.0));
    let first = &analysis.target_correlations[0];
    assert_eq!(first.column, K_INF);
    assert_eq!(first.k_inf, 1.0);
}

#[test]
fn missing_file_fails_before_any_analysis() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("lattice_physics_dataset.csv");

    let err = Pipeline::new(RenderConfig::file_output(dir.path().join("charts")))
        .run(&missing)
        .unwrap_err();

    assert!(matches!(err, PipelineError::Load(_)));
    assert!(err.to_string().contains("The file was not found"));
    assert!(!dir.path().join("charts").exists());
}

#[test]
fn missing_cell_is_a_validation_error() {
    let file = csv_file("3.1,4.2,1.21,1.45\n3.5,,1.23,1.40\n2.9,4.4,1.19,1.48\n");
    let dataset = pipeline::load(file.path()).unwrap();

    let err = pipeline::analyze(dataset).unwrap_err();

    assert!(matches!(err, PipelineError::Validation(_)));
    assert_eq!(err.to_string(), "There are missing values in the dataset!");
}

#[test]
fn single_column_cannot_take_the_schema() {
    let file = csv_file("1.0\n2.0\n3.0\n");

    let err = pipeline::load(file.path()).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Schema(SchemaError::TooFewColumns { found: 1, .. })
    ));
}

#[test]
#[ignore = "needs a system sans-serif font for plotters text rendering"]
fn file_output_writes_four_charts() {
    let file = csv_file(LATTICE_CSV);
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts");

    let outcome = Pipeline::new(RenderConfig::file_output(&out))
        .run(file.path())
        .unwrap();

    assert_eq!(outcome.written.len(), 4);
    for path in &outcome.written {
        assert!(path.starts_with(&out));
        assert!(path.is_file(), "missing {}", path.display());
    }
}
