//! Tests for segment data file reading:
//! - unknown-segment check before any file I/O
//! - table population and replace semantics
//! - blank-line row counting quirk

use std::fs;
use std::path::{Path, PathBuf};

use extractrs::error::DataError;
use extractrs::geometry::MeshGeometry;
use extractrs::params::Parameters;
use extractrs::parser::segment_data::SegmentDataReader;
use extractrs::parser::solver_file::SolverFileParser;

const SOLVER_FILE: &str = "\
MODEL demo
NODE 0 0.0 0.0 0.0
NODE 1 1.0 0.0 0.0
SEGMENT seg0 0 10.0 50 0 1
SOLVEROPTIONS 0.01 2 10
";

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("extractrs_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

fn cleanup_dir(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

// Helper to parse the standard fixture and return (params, model)
fn parsed_fixture(dir: &Path, data_names: &[&str]) -> (Parameters, extractrs::database::SolverModel) {
    fs::write(dir.join("solver.in"), SOLVER_FILE).expect("Failed to write solver file");
    let mut params = Parameters {
        results_directory: dir.to_string_lossy().to_string(),
        solver_file_name: "solver.in".to_string(),
        data_names: data_names.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    let mut geometry = MeshGeometry::new();
    let model =
        SolverFileParser::parse_file(&mut params, &mut geometry).expect("Failed to parse");
    (params, model)
}

#[test]
fn test_unknown_segment_fails_before_io() {
    let dir = test_dir("unknown_segment");
    let (params, mut model) = parsed_fixture(&dir, &["flow"]);

    // No data files exist; the lookup must fail before any file is opened,
    // so the error is UnknownSegment rather than IoError.
    let result = SegmentDataReader::read(&params, &mut model, "nope");

    assert!(matches!(result, Err(DataError::UnknownSegment(_))));

    cleanup_dir(&dir);
}

#[test]
fn test_read_populates_quantity_tables() {
    let dir = test_dir("read_tables");
    let (params, mut model) = parsed_fixture(&dir, &["flow", "pressure"]);

    // Data file names: model_name + segment_name + "_" + quantity + ".dat"
    fs::write(dir.join("demoseg0_flow.dat"), "1.0 2.0 3.0\n4.0 5.0 6.0\n")
        .expect("Failed to write data file");
    fs::write(dir.join("demoseg0_pressure.dat"), "10.0 20.0 30.0\n")
        .expect("Failed to write data file");

    SegmentDataReader::read(&params, &mut model, "seg0").expect("Failed to read segment data");

    let segment = model.segment("seg0").expect("seg0 not registered");
    assert_eq!(
        segment.data.get("flow"),
        Some(&vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
    );
    assert_eq!(segment.data.get("pressure"), Some(&vec![vec![10.0, 20.0, 30.0]]));

    cleanup_dir(&dir);
}

#[test]
fn test_missing_data_file_is_io_error() {
    let dir = test_dir("missing_data_file");
    let (params, mut model) = parsed_fixture(&dir, &["flow"]);

    // Segment exists but its data file does not
    let result = SegmentDataReader::read(&params, &mut model, "seg0");

    assert!(matches!(result, Err(DataError::IoError(_))));

    cleanup_dir(&dir);
}

#[test]
fn test_malformed_value_in_data_file() {
    let dir = test_dir("malformed_value");
    let (params, mut model) = parsed_fixture(&dir, &["flow"]);

    fs::write(dir.join("demoseg0_flow.dat"), "1.0 abc 3.0\n").expect("Failed to write data file");

    let result = SegmentDataReader::read(&params, &mut model, "seg0");

    assert!(matches!(result, Err(DataError::NumberParseError(_))));

    cleanup_dir(&dir);
}

#[test]
fn test_blank_line_counts_as_row_but_stores_nothing() {
    let dir = test_dir("blank_line_quirk");
    let file = dir.join("values.dat");
    fs::write(&file, "1.0 2.0\n\n3.0 4.0\n5.0 6.0\n").expect("Failed to write data file");

    let (table, num_rows, num_cols) =
        SegmentDataReader::read_data_file(&file.to_string_lossy()).expect("Failed to read");

    // The blank line increments the counter without adding a row
    assert_eq!(num_rows, 4);
    assert_eq!(table.len(), 3);
    assert_ne!(num_rows, table.len());
    assert_eq!(num_cols, 2);

    cleanup_dir(&dir);
}

#[test]
fn test_column_count_follows_last_nonempty_row() {
    let dir = test_dir("ragged_columns");
    let file = dir.join("values.dat");
    // Ragged rows are not rejected; the column count tracks the last one
    fs::write(&file, "1.0 2.0 3.0\n4.0 5.0\n").expect("Failed to write data file");

    let (table, _, num_cols) =
        SegmentDataReader::read_data_file(&file.to_string_lossy()).expect("Failed to read");

    assert_eq!(table.len(), 2);
    assert_eq!(num_cols, 2);

    cleanup_dir(&dir);
}

#[test]
fn test_repeated_read_overwrites_table() {
    let dir = test_dir("last_write_wins");
    let (params, mut model) = parsed_fixture(&dir, &["flow"]);

    fs::write(dir.join("demoseg0_flow.dat"), "1.0 2.0\n").expect("Failed to write data file");
    SegmentDataReader::read(&params, &mut model, "seg0").expect("Failed to read");

    fs::write(dir.join("demoseg0_flow.dat"), "7.0 8.0\n9.0 10.0\n")
        .expect("Failed to rewrite data file");
    SegmentDataReader::read(&params, &mut model, "seg0").expect("Failed to re-read");

    // Only the most recent table survives
    let segment = model.segment("seg0").expect("seg0 not registered");
    assert_eq!(
        segment.data.get("flow"),
        Some(&vec![vec![7.0, 8.0], vec![9.0, 10.0]])
    );

    cleanup_dir(&dir);
}
