use std::collections::{BTreeMap, VecDeque};

use log::trace;

use crate::alphabet::Alphabet;
use crate::errors::{AcpmaError, Result};

// The root state id of the trie.
pub const ROOT_STATE_ID: u32 = 0;

/// Mapping alphabet indices to child ids using `BTreeMap`.
type EdgeMap = BTreeMap<u32, u32>;

/// State of [`NfaBuilder`].
#[derive(Clone, Default)]
pub struct NfaBuilderState {
    pub(crate) edges: EdgeMap,
    pub(crate) fail: u32,
    pub(crate) depth: u32,
    // Sorted pattern ids.
    pub(crate) outputs: Vec<u32>,
}

/// Builder of the trie, failure links and output sets.
pub struct NfaBuilder<'a, A> {
    pub(crate) alphabet: &'a A,
    pub(crate) states: Vec<NfaBuilderState>,
    pub(crate) pattern_lens: Vec<u32>,
}

impl<'a, A> NfaBuilder<'a, A>
where
    A: Alphabet,
{
    pub(crate) fn new(alphabet: &'a A) -> Self {
        Self {
            alphabet,
            states: vec![NfaBuilderState::default()],
            pattern_lens: vec![],
        }
    }

    /// Inserts `pattern` as the next pattern and returns its id.
    ///
    /// Errors leave the builder in an unspecified state; the caller drops it.
    pub(crate) fn add<I>(&mut self, pattern: I) -> Result<u32>
    where
        I: IntoIterator<Item = A::Symbol>,
    {
        let pattern_id = u32::try_from(self.pattern_lens.len())
            .ok()
            .filter(|&id| id != u32::MAX)
            .ok_or_else(|| AcpmaError::capacity("the number of patterns", u64::from(u32::MAX)))?;

        let mut state_id = ROOT_STATE_ID;
        let mut len = 0u32;
        for c in pattern {
            let code = self.alphabet.index(c).ok_or_else(|| {
                AcpmaError::unsupported_symbol(c, len as usize, Some(pattern_id as usize))
            })?;
            state_id = match self.child_id(state_id, code) {
                Some(next_state_id) => next_state_id,
                None => self.push_child(state_id, code)?,
            };
            len += 1;
        }

        // Ids grow monotonically, so pushing keeps `outputs` sorted.
        self.states[state_id as usize].outputs.push(pattern_id);
        self.pattern_lens.push(len);
        Ok(pattern_id)
    }

    fn push_child(&mut self, state_id: u32, code: u32) -> Result<u32> {
        let next_state_id = u32::try_from(self.states.len())
            .ok()
            .filter(|&id| id != u32::MAX)
            .ok_or_else(|| AcpmaError::capacity("the number of states", u64::from(u32::MAX)))?;
        let depth = self.states[state_id as usize].depth + 1;
        self.states[state_id as usize]
            .edges
            .insert(code, next_state_id);
        self.states.push(NfaBuilderState {
            depth,
            ..NfaBuilderState::default()
        });
        Ok(next_state_id)
    }

    /// Computes failure links in breadth-first order and returns that order.
    ///
    /// The returned queue does not contain the root.
    pub(crate) fn build_fails(&mut self) -> Vec<u32> {
        let mut order = Vec::with_capacity(self.states.len());
        let mut queue = VecDeque::with_capacity(self.states.len());
        let root_children: Vec<u32> = self.states[ROOT_STATE_ID as usize]
            .edges
            .values()
            .copied()
            .collect();
        for child_id in root_children {
            self.states[child_id as usize].fail = ROOT_STATE_ID;
            queue.push_back(child_id);
        }

        while let Some(state_id) = queue.pop_front() {
            order.push(state_id);
            let parent_fail = self.states[state_id as usize].fail;
            let edges: Vec<(u32, u32)> = self.states[state_id as usize]
                .edges
                .iter()
                .map(|(&c, &child_id)| (c, child_id))
                .collect();
            for (c, child_id) in edges {
                let mut fail_id = parent_fail;
                let new_fail_id = loop {
                    if let Some(child_fail_id) = self.child_id(fail_id, c) {
                        break child_fail_id;
                    }
                    if fail_id == ROOT_STATE_ID {
                        break ROOT_STATE_ID;
                    }
                    fail_id = self.states[fail_id as usize].fail;
                };
                trace!("fail[{child_id}] = {new_fail_id}");
                self.states[child_id as usize].fail = new_fail_id;
                queue.push_back(child_id);
            }
        }
        order
    }

    /// Merges the output set of each failure state into its source state.
    ///
    /// `order` must be the breadth-first order returned by [`Self::build_fails`], so that every
    /// failure state is complete before it is merged.
    pub(crate) fn build_outputs(&mut self, order: &[u32]) {
        for &state_id in order {
            let fail_id = self.states[state_id as usize].fail;
            if self.states[fail_id as usize].outputs.is_empty() {
                continue;
            }
            let inherited = self.states[fail_id as usize].outputs.clone();
            let own = std::mem::take(&mut self.states[state_id as usize].outputs);
            self.states[state_id as usize].outputs = merge_sorted(&own, &inherited);
        }
    }

    #[inline(always)]
    pub(crate) fn child_id(&self, state_id: u32, c: u32) -> Option<u32> {
        self.states[state_id as usize].edges.get(&c).copied()
    }
}

/// Merges two sorted id lists into one sorted list.
fn merge_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged.dedup();
    merged
}
