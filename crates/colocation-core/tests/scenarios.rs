//! End-to-end mining scenarios mirroring the documented test vectors.

use colocation_core::{mine, FeatureType, Instance, PatternSignature};

fn signature(features: &[&str]) -> PatternSignature {
    PatternSignature::from_features(features.iter().map(|f| FeatureType::new(*f)).collect())
}

#[test]
fn s1_tight_triangle() {
    let instances = vec![
        Instance::new("A", "A1", 1.0, 1.0),
        Instance::new("B", "B1", 1.2, 1.1),
        Instance::new("C", "C1", 1.1, 1.3),
    ];
    let result = mine(&instances, 2.0, 0.3);

    for pattern in [
        signature(&["A"]),
        signature(&["B"]),
        signature(&["C"]),
        signature(&["A", "B"]),
        signature(&["A", "C"]),
        signature(&["B", "C"]),
        signature(&["A", "B", "C"]),
    ] {
        assert_eq!(result.get(&pattern), Some(&1.0), "missing or wrong PI for {pattern}");
    }
}

#[test]
fn s2_partial_pair_lowers_pi_of_the_joint_triple() {
    let instances = vec![
        Instance::new("A", "A1", 1.0, 1.0),
        Instance::new("B", "B1", 1.2, 1.1),
        Instance::new("C", "C1", 1.1, 1.3),
        Instance::new("A", "A2", 5.0, 5.0),
        Instance::new("B", "B2", 5.1, 5.2),
    ];
    let result = mine(&instances, 2.0, 0.3);

    assert_eq!(result.get(&signature(&["A", "B"])), Some(&1.0));
    let pi_abc = result.get(&signature(&["A", "B", "C"])).copied().unwrap_or(0.0);
    assert!((pi_abc - 0.5).abs() < 1e-9);
}

#[test]
fn s3_noise_instances_still_report_full_self_participation() {
    let instances = vec![
        Instance::new("A", "A1", 1.0, 1.0),
        Instance::new("B", "B1", 1.2, 1.1),
        Instance::new("C", "C1", 1.1, 1.3),
        Instance::new("A", "A2", 5.0, 5.0),
        Instance::new("B", "B2", 5.1, 5.2),
        Instance::new("A", "A3", 20.0, 20.0),
        Instance::new("D", "D1", 50.0, 50.0),
    ];
    let result = mine(&instances, 2.0, 0.3);

    assert_eq!(result.get(&signature(&["A"])), Some(&1.0));
    assert_eq!(result.get(&signature(&["D"])), Some(&1.0));
}

#[test]
fn s4_sub_threshold_pruning_still_resolves_direct_subsets() {
    let instances = vec![
        Instance::new("A", "A1", 1.0, 1.0),
        Instance::new("B", "B1", 1.2, 1.1),
        Instance::new("C", "C1", 1.1, 1.3),
        Instance::new("A", "A2", 5.0, 5.0),
        Instance::new("B", "B2", 5.1, 5.2),
    ];
    let result = mine(&instances, 2.0, 0.9);

    assert!(!result.contains_key(&signature(&["A", "B", "C"])));
    assert_eq!(result.get(&signature(&["A", "B"])), Some(&1.0));
    assert!(!result.contains_key(&signature(&["A", "C"])));
    assert!(!result.contains_key(&signature(&["B", "C"])));
}

#[test]
fn s5_empty_input_is_not_an_error() {
    let result = mine(&[], 2.0, 0.5);
    assert!(result.is_empty());
}

#[test]
fn s6_identical_coordinates_are_neighbors() {
    let instances = vec![Instance::new("A", "A1", 3.0, 3.0), Instance::new("B", "B1", 3.0, 3.0)];
    let result = mine(&instances, 2.0, 0.5);
    assert_eq!(result.get(&signature(&["A", "B"])), Some(&1.0));
}

#[test]
fn determinism_across_repeated_runs() {
    let instances = vec![
        Instance::new("A", "A1", 1.0, 1.0),
        Instance::new("B", "B1", 1.2, 1.1),
        Instance::new("C", "C1", 1.1, 1.3),
        Instance::new("A", "A2", 5.0, 5.0),
        Instance::new("B", "B2", 5.1, 5.2),
    ];
    let first = mine(&instances, 2.0, 0.3);
    let second = mine(&instances, 2.0, 0.3);
    assert_eq!(first, second);
}
