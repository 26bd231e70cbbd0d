//! Graph materialization: the node/edge arrays consumed by the rendering
//! surface.

use kindred_core::{Character, Generations, Relations};

use crate::{ChartEdge, ChartModel, ChartNode, EdgeKind, LayoutConfig, Placement};

/// Builds the final node array (one entry per character, all computed fields
/// attached) and the deduplicated edge array.
pub fn materialize(
    records: &[Character],
    rel: &Relations,
    gens: &Generations,
    placement: &Placement,
    cfg: &LayoutConfig,
) -> ChartModel {
    let mut nodes = Vec::with_capacity(records.len());
    for (ix, c) in records.iter().enumerate() {
        nodes.push(ChartNode {
            id: c.id.clone(),
            name: c.name.clone(),
            display_name: c.display_name(cfg.display_name_limit),
            main_house: c.main_house.clone(),
            secondary_house: c.secondary_house.clone(),
            birth_year: c.birth_year,
            death_year: c.death_year,
            title: c.title.clone(),
            aliases: c.aliases.clone(),
            description: c.description.clone(),
            portrait: c.portrait.clone(),
            generation: gens.tier(ix),
            x: placement.x[ix],
            y: placement.y[ix],
        });
    }

    let mut edges = Vec::new();
    for ix in 0..records.len() {
        for &p in rel.parents(ix) {
            edges.push(ChartEdge::new(EdgeKind::Parent, rel.id(p), rel.id(ix)));
        }
    }
    for (a, b) in rel.partner_pairs() {
        edges.push(ChartEdge::new(EdgeKind::Marriage, rel.id(a), rel.id(b)));
    }
    for (a, b) in rel.betrothal_pairs() {
        edges.push(ChartEdge::new(EdgeKind::Betrothal, rel.id(a), rel.id(b)));
    }

    ChartModel { nodes, edges }
}
