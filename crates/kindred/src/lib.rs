#![forbid(unsafe_code)]

//! Genealogical chart engine.
//!
//! One synchronous batch pipeline turns a flat character list into a laid-out
//! chart: relationship inference, generation assignment, three spatial
//! passes, graph materialization. The resulting [`Chart`] answers the
//! lineage, search and house-filter queries the UI needs.
//!
//! Queries borrow the chart immutably, so the borrow checker enforces the
//! "no queries during a re-layout" rule; any change to the underlying data
//! means building a fresh `Chart` from scratch.

pub use kindred_core::{Character, Error, Generations, Relations, Result, parse_characters};
pub use kindred_layout::{ChartEdge, ChartModel, ChartNode, EdgeKind, LayoutConfig};

use kindred_core::query;
use rustc_hash::FxHashSet as HashSet;
use tracing::{debug, warn};

/// A subset of the chart, as the rendering surface addresses it: node ids to
/// keep bright (or visible) and the edges whose both endpoints are in that
/// set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub node_ids: HashSet<String>,
    pub edge_ids: Vec<String>,
}

/// A fully laid-out chart over an immutable character list.
#[derive(Debug, Clone)]
pub struct Chart {
    records: Vec<Character>,
    relations: Relations,
    generations: Generations,
    model: ChartModel,
}

impl Chart {
    /// Runs the whole pipeline. The only error cases are malformed input
    /// (duplicate ids); unreachable characters are anchored at generation 0
    /// and reported via [`Self::unreachable`], not treated as fatal.
    pub fn layout(records: Vec<Character>, config: &LayoutConfig) -> Result<Self> {
        let relations = Relations::infer(&records)?;
        let generations = Generations::assign(&relations);
        if !generations.unreachable().is_empty() {
            warn!(
                ids = ?generations.unreachable(),
                "characters unreachable from any root; anchored at generation 0"
            );
        }
        let model = kindred_layout::layout(&records, &relations, &generations, config);
        debug!(
            nodes = model.nodes.len(),
            edges = model.edges.len(),
            "chart laid out"
        );
        Ok(Self {
            records,
            relations,
            generations,
            model,
        })
    }

    /// The input records, in load order.
    pub fn records(&self) -> &[Character] {
        &self.records
    }

    pub fn nodes(&self) -> &[ChartNode] {
        &self.model.nodes
    }

    pub fn edges(&self) -> &[ChartEdge] {
        &self.model.edges
    }

    /// Ids that could not be reached from any root (empty for well-formed
    /// data).
    pub fn unreachable(&self) -> &[String] {
        self.generations.unreachable()
    }

    /// All transitive ancestors of `id`.
    pub fn ancestors(&self, id: &str) -> Result<HashSet<String>> {
        let ix = self.resolve(id)?;
        Ok(self.to_ids(query::ancestors(&self.relations, ix)))
    }

    /// All transitive descendants of `id`.
    pub fn descendants(&self, id: &str) -> Result<HashSet<String>> {
        let ix = self.resolve(id)?;
        Ok(self.to_ids(query::descendants(&self.relations, ix)))
    }

    /// The character, its ancestors and its descendants, plus every edge
    /// fully inside that set; the highlight view dims everything else.
    pub fn compute_lineage(&self, id: &str) -> Result<Selection> {
        let ix = self.resolve(id)?;
        let node_ids = self.to_ids(query::lineage(&self.relations, ix));
        Ok(self.select(node_ids))
    }

    /// Case-insensitive substring search over character names.
    pub fn search(&self, needle: &str) -> Vec<&Character> {
        query::search(&self.records, needle)
            .into_iter()
            .map(|ix| &self.records[ix])
            .collect()
    }

    /// Visibility toggle by house: characters whose main or secondary house
    /// is selected, and the edges connecting two of them. Layout is left
    /// untouched.
    pub fn filter_by_house(&self, houses: &[&str]) -> Selection {
        let ixs = query::filter_by_house(&self.records, houses);
        self.select(ixs.into_iter().map(|ix| self.records[ix].id.clone()).collect())
    }

    /// `{ "nodes": [...], "edges": [...] }` for the rendering surface.
    pub fn to_render_json(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes": self.model.nodes,
            "edges": self.model.edges,
        })
    }

    fn resolve(&self, id: &str) -> Result<usize> {
        self.relations.ix(id).ok_or_else(|| Error::CharacterNotFound {
            id: id.to_string(),
        })
    }

    fn to_ids(&self, ixs: HashSet<usize>) -> HashSet<String> {
        ixs.into_iter()
            .map(|ix| self.records[ix].id.clone())
            .collect()
    }

    fn select(&self, node_ids: HashSet<String>) -> Selection {
        let edge_ids = self
            .model
            .edges
            .iter()
            .filter(|e| node_ids.contains(&e.source) && node_ids.contains(&e.target))
            .map(|e| e.id.clone())
            .collect();
        Selection { node_ids, edge_ids }
    }
}
