//! Pass 3: minimum-spacing enforcement within each generation.

use kindred_core::{Generations, Relations};
use std::collections::BTreeMap;

use crate::{LayoutConfig, Placement};

/// Walks each generation left to right and pushes any character closer than
/// `min_spacing` to its left neighbour out to exactly `min_spacing`,
/// carrying the same delta to everything further right so no later gap
/// collapses as a side effect.
pub fn resolve_overlap(
    rel: &Relations,
    gens: &Generations,
    cfg: &LayoutConfig,
    placement: &mut Placement,
) {
    let mut tiers: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for ix in 0..rel.len() {
        tiers.entry(gens.tier(ix)).or_default().push(ix);
    }

    for members in tiers.values_mut() {
        members.sort_by(|&a, &b| {
            placement.x[a]
                .total_cmp(&placement.x[b])
                .then_with(|| rel.id(a).cmp(rel.id(b)))
        });

        let mut shift = 0.0;
        for i in 1..members.len() {
            let left = members[i - 1];
            let right = members[i];
            placement.x[right] += shift;
            let gap = placement.x[right] - placement.x[left];
            if gap < cfg.min_spacing {
                let delta = cfg.min_spacing - gap;
                placement.x[right] += delta;
                shift += delta;
            }
        }
    }
}
