//! Participation index (PI) calculation.

use crate::chash::{CHash, PatternSignature};
use crate::instance::FeatureType;
use std::collections::{BTreeMap, BTreeSet};

/// Total population of each feature type across the whole instance set,
/// not just instances that ended up in some clique.
pub type GlobalCount = BTreeMap<FeatureType, usize>;

pub fn count_by_feature(instances: &[crate::instance::Instance]) -> GlobalCount {
    let mut counts = GlobalCount::new();
    for inst in instances {
        *counts.entry(inst.feature.clone()).or_insert(0) += 1;
    }
    counts
}

/// `PI(P) = min_{f in P} |Ins[f]| / globalCount[f]`, where `Ins[f]` is the
/// set of distinct instances of type `f` participating in any clique whose
/// signature is a superset of `P`.
///
/// Returns 0.0 for an empty pattern, or if any feature in the pattern is
/// absent from `global_count`.
pub fn participation_index(pattern: &PatternSignature, chash: &CHash, global_count: &GlobalCount) -> f64 {
    if pattern.is_empty() {
        return 0.0;
    }

    let supersets: Vec<&PatternSignature> = chash
        .keys()
        .filter(|key| pattern.is_subset_of(key))
        .collect();

    let mut min_pr = f64::INFINITY;
    for feature in pattern.features() {
        let Some(&total) = global_count.get(feature) else {
            return 0.0;
        };
        if total == 0 {
            return 0.0;
        }

        let mut participants: BTreeSet<usize> = BTreeSet::new();
        for key in &supersets {
            if let Some(bucket) = chash.get(*key).and_then(|b| b.get(feature)) {
                participants.extend(bucket.iter().copied());
            }
        }

        let pr = participants.len() as f64 / total as f64;
        min_pr = min_pr.min(pr);
    }

    if min_pr.is_infinite() {
        0.0
    } else {
        min_pr
    }
}
