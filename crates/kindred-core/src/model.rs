//! Input character records.
//!
//! A `Character` is exactly what the external data loader hands us: a flat
//! record with string id references to other records. Nothing here is ever
//! mutated by the pipeline; all derived state lives in [`crate::Relations`]
//! and friends, keyed by record index.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: String,
    pub name: String,

    /// References to other character ids. Unresolvable references are
    /// tolerated (the relation is dropped during inference).
    pub parent_1: Option<String>,
    pub parent_2: Option<String>,
    pub betrothed: Option<String>,

    pub main_house: Option<String>,
    pub secondary_house: Option<String>,

    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,

    // Descriptive fields, opaque to the engine; passed through to the
    // rendering surface unchanged.
    pub title: Option<String>,
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub portrait: Option<String>,
}

impl Character {
    /// Length-limited name for compact node rendering: the full name when it
    /// fits in `limit` chars, otherwise "First L.".
    pub fn display_name(&self, limit: usize) -> String {
        if self.name.chars().count() <= limit {
            return self.name.clone();
        }
        let mut words = self.name.split_whitespace();
        let Some(first) = words.next() else {
            return self.name.clone();
        };
        match words.last().and_then(|last| last.chars().next()) {
            Some(initial) => format!("{first} {initial}."),
            None => first.to_string(),
        }
    }
}

/// Parses the raw character list from its JSON array form.
pub fn parse_characters(json: &str) -> Result<Vec<Character>> {
    serde_json::from_str(json).map_err(|e| Error::InvalidInput {
        message: e.to_string(),
    })
}
