//! Output model handed to the rendering surface.

use serde::Serialize;

/// Per-index coordinates, the mutable working state of the layout passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Placement {
    pub fn zeroed(n: usize) -> Self {
        Self {
            x: vec![0.0; n],
            y: vec![0.0; n],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Parent,
    Marriage,
    Betrothal,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Marriage => "marriage",
            Self::Betrothal => "betrothal",
        }
    }
}

/// One node per character, carrying every computed field plus the opaque
/// descriptive fields passed through from the input record.
#[derive(Debug, Clone, Serialize)]
pub struct ChartNode {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub main_house: Option<String>,
    pub secondary_house: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub title: Option<String>,
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub portrait: Option<String>,
    pub generation: i32,
    pub x: f64,
    pub y: f64,
}

/// Undirected marriage/betrothal edges are emitted once, from the
/// lexicographically smaller id; `id` is stable across reloads so query
/// selections can reference edges.
#[derive(Debug, Clone, Serialize)]
pub struct ChartEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl ChartEdge {
    pub fn new(kind: EdgeKind, source: &str, target: &str) -> Self {
        Self {
            id: format!("{}:{source}:{target}", kind.as_str()),
            source: source.to_string(),
            target: target.to_string(),
            kind,
        }
    }
}

/// The complete contract handed to the rendering surface.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartModel {
    pub nodes: Vec<ChartNode>,
    pub edges: Vec<ChartEdge>,
}
