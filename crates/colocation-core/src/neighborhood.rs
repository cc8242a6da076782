//! Neighborhood manager: materializes the directional BN/SN neighbor graph.

use crate::grid::Grid;
use crate::instance::{instance_order, Instance, InstanceIdx};
use std::cmp::Ordering;

/// Per-instance big-neighbor / small-neighbor lists, in canonical order.
#[derive(Debug, Clone)]
pub struct NeighborLists {
    bn: Vec<Vec<InstanceIdx>>,
    sn: Vec<Vec<InstanceIdx>>,
}

impl NeighborLists {
    pub fn bn(&self, idx: InstanceIdx) -> &[InstanceIdx] {
        &self.bn[idx]
    }

    pub fn sn(&self, idx: InstanceIdx) -> &[InstanceIdx] {
        &self.sn[idx]
    }

    pub fn len(&self) -> usize {
        self.bn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bn.is_empty()
    }
}

/// Builds the exact `d_min`-disc neighbor graph, split by canonical order.
///
/// For each pair within `d_min` of each other and of distinct feature
/// types, the edge is recorded once: into the lower-ordered instance's `BN`
/// and the higher-ordered instance's `SN`.
pub fn materialize(instances: &[Instance], grid: &Grid, d_min: f64) -> NeighborLists {
    let d_min_sq = d_min * d_min;
    let mut bn = vec![Vec::new(); instances.len()];
    let mut sn = vec![Vec::new(); instances.len()];

    for (gx, gy) in grid.cell_coords_iter() {
        for &s in grid.cell(gx, gy) {
            for (nx, ny) in grid.neighbor_cells(gx, gy) {
                for &s_prime in grid.cell(nx, ny) {
                    if s == s_prime {
                        continue;
                    }
                    let a = &instances[s];
                    let b = &instances[s_prime];
                    if a.feature == b.feature {
                        continue;
                    }
                    if a.dist_sq(b) > d_min_sq {
                        continue;
                    }
                    match instance_order(a, b) {
                        Ordering::Less => bn[s].push(s_prime),
                        Ordering::Greater => sn[s].push(s_prime),
                        Ordering::Equal => unreachable!("distinct instances never compare equal"),
                    }
                }
            }
        }
    }

    for list in bn.iter_mut().chain(sn.iter_mut()) {
        list.sort_by(|&a, &b| instance_order(&instances[a], &instances[b]));
        list.dedup();
    }

    NeighborLists { bn, sn }
}
