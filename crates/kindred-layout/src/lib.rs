#![forbid(unsafe_code)]

//! Deterministic chart layout and graph materialization.
//!
//! Three corrective passes produce the final coordinates:
//!
//! 1. grid placement by generation and house ([`place`])
//! 2. partnership centering ([`center`])
//! 3. minimum-spacing enforcement within each generation ([`overlap`])
//!
//! Each pass fixes what the previous one ignores: house grouping alone
//! ignores marriages, partner centering alone ignores congestion from
//! unrelated branches. The result is a readable heuristic layout, not a
//! crossing-minimal one.

pub mod center;
pub mod config;
pub mod materialize;
pub mod model;
pub mod overlap;
pub mod place;

pub use config::LayoutConfig;
pub use model::{ChartEdge, ChartModel, ChartNode, EdgeKind, Placement};

use kindred_core::{Character, Generations, Relations};

/// Runs all three passes and materializes the node/edge arrays handed to the
/// rendering surface.
pub fn layout(
    records: &[Character],
    rel: &Relations,
    gens: &Generations,
    cfg: &LayoutConfig,
) -> ChartModel {
    let mut placement = place::place(records, gens, cfg);
    center::center_partners(rel, cfg, &mut placement);
    overlap::resolve_overlap(rel, gens, cfg, &mut placement);
    materialize::materialize(records, rel, gens, &placement, cfg)
}
