//! Generation assignment.
//!
//! Depth-first traversal from each root: children land one tier below their
//! parent, partners are pulled onto the same tier even though the traversal
//! reaches them through a sibling path (married couples must render
//! side-by-side).

use rustc_hash::FxHashSet as HashSet;

use crate::Relations;

#[derive(Debug, Clone, Default)]
pub struct Generations {
    tiers: Vec<i32>,
    unreachable: Vec<String>,
}

impl Generations {
    /// Assigns every character a tier.
    ///
    /// Traversal seeds are roots whose partners are all roots themselves; a
    /// parentless spouse married into a bloodline is reached through its
    /// partner instead, so it lands on the partner's tier regardless of
    /// record order.
    ///
    /// Characters the traversal never reaches (parent cycles, partners of
    /// other unreachable characters) are anchored at tier 0 and reported in
    /// [`Self::unreachable`] rather than aborting the load.
    pub fn assign(rel: &Relations) -> Self {
        let n = rel.len();
        let mut tiers: Vec<Option<i32>> = vec![None; n];
        let mut visited: HashSet<usize> = HashSet::default();

        fn visit(
            rel: &Relations,
            ix: usize,
            tier: i32,
            visited: &mut HashSet<usize>,
            tiers: &mut [Option<i32>],
        ) {
            if !visited.insert(ix) {
                return;
            }
            tiers[ix] = Some(tier);
            // Partners first, so a spouse is levelled before either side's
            // children are descended into.
            for &p in rel.partners(ix) {
                visit(rel, p, tier, visited, tiers);
            }
            for &c in rel.children(ix) {
                visit(rel, c, tier + 1, visited, tiers);
            }
        }

        for ix in 0..n {
            if rel.is_root(ix) && rel.partners(ix).iter().all(|&p| rel.is_root(p)) {
                visit(rel, ix, 0, &mut visited, &mut tiers);
            }
        }

        let mut unreachable = Vec::new();
        let tiers = tiers
            .into_iter()
            .enumerate()
            .map(|(ix, tier)| match tier {
                Some(t) => t,
                None => {
                    unreachable.push(rel.id(ix).to_string());
                    0
                }
            })
            .collect();

        Self { tiers, unreachable }
    }

    pub fn tier(&self, ix: usize) -> i32 {
        self.tiers[ix]
    }

    pub fn tiers(&self) -> &[i32] {
        &self.tiers
    }

    /// Ids that never got a tier from the traversal, in record order. Empty
    /// for well-formed data.
    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }
}
