//! Spatial co-location pattern mining.
//!
//! Given a set of georeferenced feature instances, discovers which
//! combinations of feature types are prevalent neighbors of one another,
//! quantified by a participation index (PI) threshold.
//!
//! The pipeline is a pure function of its inputs: grid index, neighbor
//! materialization, maximal clique enumeration, candidate hashing, and
//! prevalence filtering. No component performs I/O or logging; that is the
//! responsibility of callers such as a CLI driver.

pub mod chash;
pub mod grid;
pub mod ids;
pub mod instance;
pub mod neighborhood;
pub mod pi;
pub mod prevalence;

pub use chash::{CHash, PatternSignature};
pub use instance::{FeatureType, Instance, InstanceId, InstanceIdx};
pub use pi::GlobalCount;

use std::collections::BTreeMap;

/// Runs the full pipeline: grid, neighborhood materialization, clique
/// mining, C-Hash construction, and prevalence filtering.
///
/// `d_min` must be strictly positive and `min_prev` must lie in `[0, 1]`;
/// validating those constraints against user-supplied configuration is the
/// caller's responsibility (see `colocation-io`), not this function's.
pub fn mine(instances: &[Instance], d_min: f64, min_prev: f64) -> BTreeMap<PatternSignature, f64> {
    if instances.is_empty() {
        return BTreeMap::new();
    }

    let grid = grid::Grid::build(instances, d_min);
    let neighbors = neighborhood::materialize(instances, &grid, d_min);
    let cliques = ids::mine_cliques(instances.len(), &neighbors);
    let chash = chash::build_chash(&cliques, instances);
    let global_count = pi::count_by_feature(instances);
    prevalence::filter_prevalent(&chash, min_prev, &global_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(mine(&[], 2.0, 0.5).is_empty());
    }

    #[test]
    fn end_to_end_tight_triangle() {
        let instances = vec![
            Instance::new("A", "A1", 1.0, 1.0),
            Instance::new("B", "B1", 1.2, 1.1),
            Instance::new("C", "C1", 1.1, 1.3),
        ];
        let result = mine(&instances, 2.0, 0.3);
        let triangle = PatternSignature::from_features(vec![
            FeatureType::new("A"),
            FeatureType::new("B"),
            FeatureType::new("C"),
        ]);
        assert_eq!(result.get(&triangle), Some(&1.0));
    }
}
