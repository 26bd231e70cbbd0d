//! Lineage and search queries over inferred relations.
//!
//! These are read-only and independent of layout; they can run any time
//! after [`crate::Relations::infer`]. Traversals carry an explicit visited
//! set so a malformed cyclic dataset cannot hang a query.

use rustc_hash::FxHashSet as HashSet;

use crate::{Character, Relations};

/// Transitive resolved parents of `ix`, excluding `ix` itself.
pub fn ancestors(rel: &Relations, ix: usize) -> HashSet<usize> {
    collect_transitive(ix, |v| rel.parents(v))
}

/// Transitive children of `ix`, excluding `ix` itself.
pub fn descendants(rel: &Relations, ix: usize) -> HashSet<usize> {
    collect_transitive(ix, |v| rel.children(v))
}

/// The character itself plus all of its ancestors and descendants; the set a
/// highlight view keeps bright while dimming everything else.
pub fn lineage(rel: &Relations, ix: usize) -> HashSet<usize> {
    let mut out = ancestors(rel, ix);
    out.extend(descendants(rel, ix));
    out.insert(ix);
    out
}

/// Case-insensitive substring match over names; results in record order, no
/// relevance ranking (callers sort as they see fit).
pub fn search(records: &[Character], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name.to_lowercase().contains(&needle))
        .map(|(ix, _)| ix)
        .collect()
}

/// Characters whose main or secondary house is in the selection, in record
/// order.
pub fn filter_by_house(records: &[Character], houses: &[&str]) -> Vec<usize> {
    let selected: HashSet<&str> = houses.iter().copied().collect();
    let in_selection = |house: &Option<String>| {
        house
            .as_deref()
            .is_some_and(|h| selected.contains(h))
    };
    records
        .iter()
        .enumerate()
        .filter(|(_, c)| in_selection(&c.main_house) || in_selection(&c.secondary_house))
        .map(|(ix, _)| ix)
        .collect()
}

fn collect_transitive<'a>(
    start: usize,
    neighbours: impl Fn(usize) -> &'a [usize],
) -> HashSet<usize> {
    let mut out: HashSet<usize> = HashSet::default();
    let mut stack: Vec<usize> = neighbours(start).to_vec();
    while let Some(v) = stack.pop() {
        if out.insert(v) {
            stack.extend_from_slice(neighbours(v));
        }
    }
    out.remove(&start);
    out
}
