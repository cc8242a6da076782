//! Candidate hash: indexes cliques by their sorted, deduplicated feature-type
//! signature.

use crate::instance::{FeatureType, Instance, InstanceIdx};
use std::collections::BTreeMap;

/// The sorted, duplicate-free sequence of feature types present in a clique.
/// Always constructed sorted; equality and ordering follow `Vec`'s
/// lexicographic rules, which is the order a `BTreeMap<PatternSignature, _>`
/// iterates in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternSignature(Vec<FeatureType>);

impl PatternSignature {
    pub fn from_features(mut features: Vec<FeatureType>) -> Self {
        features.sort();
        features.dedup();
        Self(features)
    }

    pub fn features(&self) -> &[FeatureType] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, feature: &FeatureType) -> bool {
        self.0.binary_search(feature).is_ok()
    }

    /// `self ⊆ other`, as sets of feature types.
    pub fn is_subset_of(&self, other: &PatternSignature) -> bool {
        self.0.iter().all(|f| other.contains(f))
    }

    /// Every non-empty proper subset of this signature, as fresh signatures.
    pub fn proper_subsets(&self) -> Vec<PatternSignature> {
        let n = self.0.len();
        if n == 0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for mask in 1..(1u32 << n) - 1 {
            let subset = (0..n)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| self.0[bit].clone())
                .collect();
            out.push(PatternSignature(subset));
        }
        out
    }

    /// Every subset obtained by removing exactly one feature type.
    pub fn direct_subsets(&self) -> Vec<PatternSignature> {
        (0..self.0.len())
            .map(|skip| {
                let subset = self
                    .0
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, f)| f.clone())
                    .collect();
                PatternSignature(subset)
            })
            .collect()
    }
}

impl std::fmt::Display for PatternSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, feature) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{feature}")?;
        }
        write!(f, "}}")
    }
}

/// `signature -> feature type -> instances of that type seen in a clique
/// with that signature`. Instances may repeat within a bucket if they
/// participate in more than one clique sharing the signature.
pub type CHash = BTreeMap<PatternSignature, BTreeMap<FeatureType, Vec<InstanceIdx>>>;

/// Builds the C-Hash from the cliques IDS emitted.
pub fn build_chash(cliques: &[Vec<InstanceIdx>], instances: &[Instance]) -> CHash {
    let mut hash: CHash = BTreeMap::new();
    for clique in cliques {
        let features: Vec<FeatureType> = clique.iter().map(|&i| instances[i].feature.clone()).collect();
        let signature = PatternSignature::from_features(features);
        let bucket = hash.entry(signature).or_default();
        for &idx in clique {
            bucket.entry(instances[idx].feature.clone()).or_default().push(idx);
        }
    }
    hash
}
