//! Iterators for [`AhoCorasick`].

use std::iter::Enumerate;

use crate::alphabet::Alphabet;
use crate::errors::{AcpmaError, Result};
use crate::nfa_builder::ROOT_STATE_ID;
use crate::{AhoCorasick, Match};

/// Iterator created by [`AhoCorasick::find_iter()`].
pub struct FindIterator<'a, A, I> {
    pma: &'a AhoCorasick<A>,
    haystack: Enumerate<I>,
    failed: bool,
}

impl<'a, A, I> FindIterator<'a, A, I>
where
    A: Alphabet,
    I: Iterator<Item = A::Symbol>,
{
    pub(crate) fn new(pma: &'a AhoCorasick<A>, haystack: I) -> Self {
        Self {
            pma,
            haystack: haystack.enumerate(),
            failed: false,
        }
    }
}

impl<'a, A, I> Iterator for FindIterator<'a, A, I>
where
    A: Alphabet,
    I: Iterator<Item = A::Symbol>,
{
    type Item = Result<Match>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut state_id = ROOT_STATE_ID;
        for (pos, c) in self.haystack.by_ref() {
            let Some(code) = self.pma.alphabet.index(c) else {
                self.failed = true;
                return Some(Err(AcpmaError::unsupported_symbol(c, pos, None)));
            };
            state_id = self.pma.next_state_id(state_id, code);
            if let Some(&pattern) = self.pma.state_outputs(state_id).first() {
                return Some(Ok(self.pma.new_match(pattern, pos + 1)));
            }
        }
        None
    }
}

/// Iterator created by [`AhoCorasick::find_overlapping_iter()`].
pub struct FindOverlappingIterator<'a, A, I> {
    pma: &'a AhoCorasick<A>,
    haystack: Enumerate<I>,
    state_id: u32,
    // End of the current report, exclusive.
    pos: usize,
    // Next entry of the current state's outputs to report.
    output_pos: usize,
    failed: bool,
}

impl<'a, A, I> FindOverlappingIterator<'a, A, I>
where
    A: Alphabet,
    I: Iterator<Item = A::Symbol>,
{
    pub(crate) fn new(pma: &'a AhoCorasick<A>, haystack: I) -> Self {
        Self {
            pma,
            haystack: haystack.enumerate(),
            state_id: ROOT_STATE_ID,
            pos: 0,
            // Outputs of the root are reported only after a symbol is read.
            output_pos: pma.state_outputs(ROOT_STATE_ID).len(),
            failed: false,
        }
    }
}

impl<'a, A, I> Iterator for FindOverlappingIterator<'a, A, I>
where
    A: Alphabet,
    I: Iterator<Item = A::Symbol>,
{
    type Item = Result<Match>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let outputs = self.pma.state_outputs(self.state_id);
        if let Some(&pattern) = outputs.get(self.output_pos) {
            self.output_pos += 1;
            return Some(Ok(self.pma.new_match(pattern, self.pos)));
        }
        for (pos, c) in self.haystack.by_ref() {
            let Some(code) = self.pma.alphabet.index(c) else {
                self.failed = true;
                return Some(Err(AcpmaError::unsupported_symbol(c, pos, None)));
            };
            self.state_id = self.pma.next_state_id(self.state_id, code);
            if let Some(&pattern) = self.pma.state_outputs(self.state_id).first() {
                self.pos = pos + 1;
                self.output_pos = 1;
                return Some(Ok(self.pma.new_match(pattern, self.pos)));
            }
        }
        None
    }
}
