use colocation_io::{load_config, load_dataset, render_report, DatasetError};
use std::io::Write;

#[test]
fn dataset_round_trips_through_a_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Feature,Instance,LocX,LocY").unwrap();
    writeln!(file, "A,1,1.0,1.0").unwrap();
    writeln!(file, "B,1,1.2,1.1").unwrap();
    file.flush().unwrap();

    let instances = load_dataset(file.path()).unwrap();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].id.as_str(), "A1");
}

#[test]
fn dataset_reports_line_number_on_bad_coordinate() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Feature,Instance,LocX,LocY").unwrap();
    writeln!(file, "A,1,1.0,1.0").unwrap();
    writeln!(file, "B,1,nope,1.1").unwrap();
    file.flush().unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidNumber { line: 3, .. }));
}

#[test]
fn config_round_trips_through_a_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "neighbor_distance=5.0").unwrap();
    writeln!(file, "min_prevalence=0.2").unwrap();
    file.flush().unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.neighbor_distance, 5.0);
    assert_eq!(config.min_prevalence, 0.2);
}

#[test]
fn report_formatting_matches_canonical_layout() {
    let result = colocation_core::mine(
        &[
            colocation_core::Instance::new("A", "A1", 1.0, 1.0),
            colocation_core::Instance::new("B", "B1", 1.2, 1.1),
        ],
        2.0,
        0.5,
    );
    let rendered = render_report(&result);
    assert_eq!(rendered, "{A, B}: 1.000\n{A}: 1.000\n{B}: 1.000\n");
}
