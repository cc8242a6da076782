//! Prevalence filter: top-down lattice traversal with subset-shortcut and
//! direct-subset-expansion pruning.

use crate::chash::{CHash, PatternSignature};
use crate::pi::{participation_index, GlobalCount};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Orders candidates by size descending, then lexicographically on the
/// signature for a fully deterministic work order.
fn candidate_order(a: &PatternSignature, b: &PatternSignature) -> std::cmp::Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

fn cached_pi(
    pattern: &PatternSignature,
    chash: &CHash,
    global_count: &GlobalCount,
    cache: &mut HashMap<PatternSignature, f64>,
) -> f64 {
    if let Some(&cached) = cache.get(pattern) {
        return cached;
    }
    let pi = participation_index(pattern, chash, global_count);
    cache.insert(pattern.clone(), pi);
    pi
}

/// Finds every pattern signature whose participation index meets
/// `min_prev`, mapped to its PI.
pub fn filter_prevalent(chash: &CHash, min_prev: f64, global_count: &GlobalCount) -> BTreeMap<PatternSignature, f64> {
    let mut candidates: Vec<PatternSignature> = chash.keys().cloned().collect();
    candidates.sort_by(candidate_order);

    let mut queued: HashSet<PatternSignature> = candidates.iter().cloned().collect();
    let mut prevalent: BTreeMap<PatternSignature, f64> = BTreeMap::new();
    let mut pi_cache: HashMap<PatternSignature, f64> = HashMap::new();

    while !candidates.is_empty() {
        let cur = candidates.remove(0);
        queued.remove(&cur);
        let pi = cached_pi(&cur, chash, global_count, &mut pi_cache);

        if pi >= min_prev {
            prevalent.insert(cur.clone(), pi);

            for sub in cur.proper_subsets() {
                if prevalent.contains_key(&sub) {
                    continue;
                }
                let sub_pi = cached_pi(&sub, chash, global_count, &mut pi_cache);
                prevalent.insert(sub.clone(), sub_pi);
                if queued.remove(&sub) {
                    if let Some(pos) = candidates.iter().position(|c| c == &sub) {
                        candidates.remove(pos);
                    }
                }
            }
        } else {
            for sub in cur.direct_subsets() {
                if sub.is_empty() || prevalent.contains_key(&sub) || queued.contains(&sub) {
                    continue;
                }
                let pos = candidates
                    .iter()
                    .position(|c| candidate_order(&sub, c) == std::cmp::Ordering::Less)
                    .unwrap_or(candidates.len());
                candidates.insert(pos, sub.clone());
                queued.insert(sub);
            }
        }
    }

    prevalent
}
