//! Frozen states of the automaton.

use std::collections::BTreeMap;

// Alphabets up to this size store each state's children in a direct array.
pub const DENSE_EDGES_MAX: usize = 64;

// Marks a missing child in a direct array.
const NO_CHILD: u32 = u32::MAX;

/// Children of a state, keyed by alphabet index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Edges {
    /// One slot per alphabet index.
    Dense(Box<[u32]>),

    /// `(index, child)` pairs sorted by index.
    Sparse(Box<[(u32, u32)]>),
}

impl Edges {
    pub fn from_map(edges: &BTreeMap<u32, u32>, alphabet_size: usize) -> Self {
        if alphabet_size <= DENSE_EDGES_MAX && !edges.is_empty() {
            let mut slots = vec![NO_CHILD; alphabet_size];
            for (&c, &child) in edges {
                slots[c as usize] = child;
            }
            Self::Dense(slots.into_boxed_slice())
        } else {
            Self::Sparse(edges.iter().map(|(&c, &child)| (c, child)).collect())
        }
    }

    #[inline(always)]
    pub fn get(&self, c: u32) -> Option<u32> {
        match self {
            Self::Dense(slots) => slots.get(c as usize).copied().filter(|&s| s != NO_CHILD),
            Self::Sparse(pairs) => pairs
                .binary_search_by_key(&c, |&(label, _)| label)
                .ok()
                .map(|i| pairs[i].1),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        match self {
            Self::Dense(slots) => slots.iter().filter(|&&s| s != NO_CHILD).count(),
            Self::Sparse(pairs) => pairs.len(),
        }
    }

    pub fn heap_bytes(&self) -> usize {
        match self {
            Self::Dense(slots) => slots.len() * std::mem::size_of::<u32>(),
            Self::Sparse(pairs) => pairs.len() * std::mem::size_of::<(u32, u32)>(),
        }
    }
}

/// State of the automaton.
///
/// `fail` and the children in `edges` are indices into the state arena owned by the
/// automaton. `outputs` are already merged with the outputs of the failure state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    pub(crate) edges: Edges,
    pub(crate) fail: u32,
    pub(crate) depth: u32,
    pub(crate) outputs: Box<[u32]>,
}

impl State {
    #[inline(always)]
    pub fn child(&self, c: u32) -> Option<u32> {
        self.edges.get(c)
    }

    pub fn heap_bytes(&self) -> usize {
        self.edges.heap_bytes() + self.outputs.len() * std::mem::size_of::<u32>()
    }
}
