//! Relationship inference over raw character records.
//!
//! One batch pass derives resolved parents, children, partners (co-parents of
//! a shared child) and betrothals. All relations are stored by record index;
//! ids are resolved exactly once, here.

use rustc_hash::FxHashMap as HashMap;

use crate::{Character, Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Relations {
    index: HashMap<String, usize>,
    ids: Vec<String>,
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
    partners: Vec<Vec<usize>>,
    betrothals: Vec<Vec<usize>>,
}

impl Relations {
    /// Derives all relations from the record list.
    ///
    /// A `parent_1`/`parent_2`/`betrothed` value that does not resolve to a
    /// known id (or resolves to the record itself) is silently dropped so
    /// partially-entered data stays renderable. Duplicate ids are an error.
    pub fn infer(records: &[Character]) -> Result<Self> {
        let mut index: HashMap<String, usize> = HashMap::default();
        for (ix, c) in records.iter().enumerate() {
            if index.insert(c.id.clone(), ix).is_some() {
                return Err(Error::DuplicateId { id: c.id.clone() });
            }
        }

        let n = records.len();
        let mut rel = Self {
            index,
            ids: records.iter().map(|c| c.id.clone()).collect(),
            parents: vec![Vec::new(); n],
            children: vec![Vec::new(); n],
            partners: vec![Vec::new(); n],
            betrothals: vec![Vec::new(); n],
        };

        for (ix, c) in records.iter().enumerate() {
            for parent_ref in [&c.parent_1, &c.parent_2] {
                let Some(pid) = parent_ref else { continue };
                let Some(&pix) = rel.index.get(pid.as_str()) else {
                    continue;
                };
                if pix == ix {
                    continue;
                }
                push_unique(&mut rel.parents[ix], pix);
                push_unique(&mut rel.children[pix], ix);
            }
            // Two resolved parents of the same child are partners.
            if let [a, b] = rel.parents[ix][..] {
                push_unique(&mut rel.partners[a], b);
                push_unique(&mut rel.partners[b], a);
            }
        }

        for (ix, c) in records.iter().enumerate() {
            let Some(bid) = &c.betrothed else { continue };
            let Some(&bix) = rel.index.get(bid.as_str()) else {
                continue;
            };
            if bix == ix {
                continue;
            }
            push_unique(&mut rel.betrothals[ix], bix);
            push_unique(&mut rel.betrothals[bix], ix);
        }

        Ok(rel)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolves an id to its record index.
    pub fn ix(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id(&self, ix: usize) -> &str {
        &self.ids[ix]
    }

    /// Resolved parents, at most two, in `parent_1`/`parent_2` order.
    pub fn parents(&self, ix: usize) -> &[usize] {
        &self.parents[ix]
    }

    /// Children in record order, deduplicated across both parent links.
    pub fn children(&self, ix: usize) -> &[usize] {
        &self.children[ix]
    }

    pub fn partners(&self, ix: usize) -> &[usize] {
        &self.partners[ix]
    }

    pub fn betrothals(&self, ix: usize) -> &[usize] {
        &self.betrothals[ix]
    }

    /// A character with no resolved parent is a layout root.
    pub fn is_root(&self, ix: usize) -> bool {
        self.parents[ix].is_empty()
    }

    /// Every partnership once, lexicographically smaller id first, sorted by
    /// id pair so downstream passes are order-independent of the input.
    pub fn partner_pairs(&self) -> Vec<(usize, usize)> {
        self.undirected_pairs(&self.partners)
    }

    /// Every betrothal once, same convention as [`Self::partner_pairs`].
    pub fn betrothal_pairs(&self) -> Vec<(usize, usize)> {
        self.undirected_pairs(&self.betrothals)
    }

    /// Children both `a` and `b` are parents of, in `a`'s child order.
    pub fn common_children(&self, a: usize, b: usize) -> Vec<usize> {
        self.children[a]
            .iter()
            .copied()
            .filter(|c| self.children[b].contains(c))
            .collect()
    }

    fn undirected_pairs(&self, adjacency: &[Vec<usize>]) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for (a, others) in adjacency.iter().enumerate() {
            for &b in others {
                if self.ids[a] < self.ids[b] {
                    pairs.push((a, b));
                }
            }
        }
        pairs.sort_by(|&(a1, b1), &(a2, b2)| {
            (&self.ids[a1], &self.ids[b1]).cmp(&(&self.ids[a2], &self.ids[b2]))
        });
        pairs
    }
}

fn push_unique(list: &mut Vec<usize>, value: usize) {
    if !list.contains(&value) {
        list.push(value);
    }
}
