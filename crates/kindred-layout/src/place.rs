//! Pass 1: grid placement by generation and house.

use indexmap::IndexMap;
use kindred_core::{Character, Generations};
use std::collections::BTreeMap;

use crate::{LayoutConfig, Placement};

/// Places every character on a grid: `y` from its generation, `x` from an
/// ordered walk over house groups.
///
/// Within a generation, houses appear in first-encounter (record) order and
/// members of a house are sorted by id for determinism. Characters without a
/// main house share one unnamed group. Each group's start is the running
/// total of the widths of the groups placed before it plus the inter-house
/// padding.
pub fn place(records: &[Character], gens: &Generations, cfg: &LayoutConfig) -> Placement {
    let mut placement = Placement::zeroed(records.len());

    let mut tiers: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for ix in 0..records.len() {
        tiers.entry(gens.tier(ix)).or_default().push(ix);
    }

    for (tier, members) in &tiers {
        let mut houses: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for &ix in members {
            houses
                .entry(records[ix].main_house.as_deref().unwrap_or(""))
                .or_default()
                .push(ix);
        }

        let y = cfg.base_offset + f64::from(*tier) * cfg.generation_spacing;
        let mut cursor = 0.0;
        for group in houses.values_mut() {
            group.sort_by(|&a, &b| records[a].id.cmp(&records[b].id));
            for (i, &ix) in group.iter().enumerate() {
                placement.x[ix] = cursor + i as f64 * cfg.sibling_spacing;
                placement.y[ix] = y;
            }
            cursor += group.len() as f64 * cfg.sibling_spacing + cfg.house_padding;
        }
    }

    placement
}
