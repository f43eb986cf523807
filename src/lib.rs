//! # acpma: Aho-Corasick Pattern Match Automaton
//!
//! Finds every occurrence of a set of patterns in a text in one left-to-right pass.
//!
//! Patterns are inserted into a trie, every state of the trie gets a failure link to the
//! state of its longest proper suffix that is still a prefix of some pattern, and each state
//! inherits the matches of its failure state. Scanning then never re-reads the input.
//!
//! ## Examples
//!
//! ```
//! use acpma::LowercaseAhoCorasick;
//!
//! let patterns = vec!["he", "hers", "his", "she"];
//! let pma = LowercaseAhoCorasick::new(patterns).unwrap();
//!
//! let mut it = pma.find_overlapping_iter("ushers");
//!
//! let m = it.next().unwrap().unwrap();
//! assert_eq!((0, 2, 3), (m.pattern(), m.start(), m.end()));
//!
//! let m = it.next().unwrap().unwrap();
//! assert_eq!((3, 1, 3), (m.pattern(), m.start(), m.end()));
//!
//! let m = it.next().unwrap().unwrap();
//! assert_eq!((1, 2, 5), (m.pattern(), m.start(), m.end()));
//!
//! assert!(it.next().is_none());
//! ```
//!
//! Offsets count symbols of the alphabet (characters for `char` alphabets, bytes for
//! [`alphabet::Bytes`]) and both ends are inclusive, so `start..=end` covers the match.
//!
//! ## Alphabets
//!
//! The automaton is generic over an [`Alphabet`](alphabet::Alphabet), which decides the
//! valid symbols:
//!
//! - [`alphabet::Lowercase`]: `'a'..='z'`
//! - [`alphabet::Bytes`]: every byte
//! - [`alphabet::Unicode`]: every `char`
//! - [`alphabet::CharMap`]: a user-defined set of `char`s
//!
//! A symbol outside the alphabet is an error, both in patterns and in haystacks.

pub mod alphabet;
mod builder;
pub mod errors;
mod iter;
mod nfa_builder;
mod state;


use alphabet::{Alphabet, Bytes, Lowercase, Symbols, Unicode};
use errors::{AcpmaError, Result};
use nfa_builder::ROOT_STATE_ID;
use state::State;

pub use builder::{AhoCorasickBuilder, Transitions};
pub use iter::{FindIterator, FindOverlappingIterator};

/// Automaton over the lowercase ASCII letters.
pub type LowercaseAhoCorasick = AhoCorasick<Lowercase>;

/// Automaton over bytes.
pub type ByteAhoCorasick = AhoCorasick<Bytes>;

/// Automaton over Unicode scalar values.
pub type CharAhoCorasick = AhoCorasick<Unicode>;

/// Match result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    length: usize,
    end: usize,
    pattern: usize,
}

impl Match {
    /// Starting position of the match.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.end - self.length
    }

    /// Ending position of the match, inclusive.
    ///
    /// For an empty pattern this is `start() - 1`.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end.saturating_sub(1)
    }

    /// Half-open range of the match.
    #[inline(always)]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start()..self.end
    }

    /// Pattern ID.
    #[inline(always)]
    pub const fn pattern(&self) -> usize {
        self.pattern
    }
}

/// Handle of a state in an [`AhoCorasick`].
///
/// A handle is only meaningful for the automaton that returned it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateId(u32);

impl StateId {
    /// Returns the index of the state in the automaton.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Pattern match automaton implemented with the Aho-Corasick algorithm.
///
/// The automaton is immutable once built. Scanning only borrows it, so one automaton can
/// serve any number of scans, including concurrent scans from several threads.
#[derive(Clone, Debug)]
pub struct AhoCorasick<A> {
    states: Vec<State>,
    pattern_lens: Vec<u32>,
    // Completed transitions, `states × alphabet`, when built with `Transitions::Eager`.
    table: Option<Vec<u32>>,
    alphabet: A,
}

impl<A> AhoCorasick<A>
where
    A: Alphabet,
{
    /// Creates a new [`AhoCorasick`] from input patterns.
    /// The ID `i` is associated with `patterns[i]`.
    ///
    /// # Arguments
    ///
    /// * `patterns` - List of patterns.
    ///
    /// # Errors
    ///
    /// [`AcpmaError`] is returned when
    ///   - `patterns` contains a symbol outside the alphabet,
    ///   - `patterns` contains an empty entry, or
    ///   - the scale of `patterns` exceeds the supported one.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::LowercaseAhoCorasick;
    ///
    /// let patterns = vec!["bcd", "ab", "a"];
    /// let pma = LowercaseAhoCorasick::new(patterns).unwrap();
    ///
    /// let mut it = pma.find_iter("abcd");
    ///
    /// let m = it.next().unwrap().unwrap();
    /// assert_eq!((0, 0, 2), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap().unwrap();
    /// assert_eq!((1, 3, 0), (m.start(), m.end(), m.pattern()));
    ///
    /// assert!(it.next().is_none());
    /// ```
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        A: Default,
        I: IntoIterator<Item = P>,
        P: Symbols<A::Symbol>,
    {
        AhoCorasickBuilder::new(A::default()).build(patterns)
    }

    /// Creates a new [`AhoCorasick`] over the given alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::AhoCorasick;
    /// use acpma::alphabet::CharMap;
    ///
    /// let pma = AhoCorasick::with_alphabet(CharMap::new("ACGT".chars()), ["GAT", "TAC"]).unwrap();
    /// assert_eq!(2, pma.find_overlapping("GATAC").unwrap().len());
    /// assert!(pma.find_overlapping("GAUAC").is_err());
    /// ```
    pub fn with_alphabet<I, P>(alphabet: A, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Symbols<A::Symbol>,
    {
        AhoCorasickBuilder::new(alphabet).build(patterns)
    }

    /// Returns an iterator of overlapping matches in the given haystack.
    ///
    /// Every occurrence of every pattern is reported, ordered by ending position and then by
    /// pattern ID.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    ///
    /// # Errors
    ///
    /// The iterator yields one [`AcpmaError::UnsupportedSymbol`] at the first symbol outside
    /// the alphabet and stops there.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::LowercaseAhoCorasick;
    ///
    /// let pma = LowercaseAhoCorasick::new(["aa"]).unwrap();
    ///
    /// let found: Vec<_> = pma
    ///     .find_overlapping_iter("aaa")
    ///     .map(|m| m.map(|m| (m.start(), m.end())))
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(vec![(0, 1), (1, 2)], found);
    /// ```
    pub fn find_overlapping_iter<'h, H>(
        &self,
        haystack: &'h H,
    ) -> FindOverlappingIterator<'_, A, H::Iter<'h>>
    where
        H: Symbols<A::Symbol> + ?Sized,
    {
        self.find_overlapping_iter_from_iter(haystack.symbols())
    }

    /// Returns an iterator of overlapping matches in the given symbol iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::ByteAhoCorasick;
    ///
    /// let pma = ByteAhoCorasick::new([&[0x00, 0xff][..], &[0xff][..]]).unwrap();
    ///
    /// let haystack = [0x10, 0x00, 0xff];
    /// let found: Vec<_> = pma
    ///     .find_overlapping_iter_from_iter(haystack.iter().copied())
    ///     .map(|m| m.unwrap().pattern())
    ///     .collect();
    /// assert_eq!(vec![0, 1], found);
    /// ```
    pub fn find_overlapping_iter_from_iter<I>(
        &self,
        haystack: I,
    ) -> FindOverlappingIterator<'_, A, I::IntoIter>
    where
        I: IntoIterator<Item = A::Symbol>,
    {
        FindOverlappingIterator::new(self, haystack.into_iter())
    }

    /// Returns an iterator of non-overlapping matches in the given haystack.
    ///
    /// The haystack is scanned until some pattern ends; the smallest pattern ID ending there
    /// is reported and scanning restarts from the root after it.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    pub fn find_iter<'h, H>(&self, haystack: &'h H) -> FindIterator<'_, A, H::Iter<'h>>
    where
        H: Symbols<A::Symbol> + ?Sized,
    {
        self.find_iter_from_iter(haystack.symbols())
    }

    /// Returns an iterator of non-overlapping matches in the given symbol iterator.
    pub fn find_iter_from_iter<I>(&self, haystack: I) -> FindIterator<'_, A, I::IntoIter>
    where
        I: IntoIterator<Item = A::Symbol>,
    {
        FindIterator::new(self, haystack.into_iter())
    }

    /// Collects all overlapping matches in the given haystack.
    ///
    /// # Errors
    ///
    /// [`AcpmaError::UnsupportedSymbol`] is returned when `haystack` contains a symbol outside
    /// the alphabet. The automaton stays usable.
    pub fn find_overlapping<H>(&self, haystack: &H) -> Result<Vec<Match>>
    where
        H: Symbols<A::Symbol> + ?Sized,
    {
        self.find_overlapping_iter(haystack).collect()
    }

    /// Returns the ID of the given pattern if it exists. Otherwise, None.
    ///
    /// When the pattern was given more than once, the first ID is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::LowercaseAhoCorasick;
    ///
    /// let pma = LowercaseAhoCorasick::new(["bcd", "ab", "a"]).unwrap();
    ///
    /// assert_eq!(Some(0), pma.find_pattern_id("bcd"));
    /// assert_eq!(Some(1), pma.find_pattern_id("ab"));
    /// assert_eq!(Some(2), pma.find_pattern_id("a"));
    /// assert_eq!(None, pma.find_pattern_id("abc"));
    /// assert_eq!(None, pma.find_pattern_id("A"));
    /// ```
    pub fn find_pattern_id<P>(&self, pattern: &P) -> Option<usize>
    where
        P: Symbols<A::Symbol> + ?Sized,
    {
        let mut state_id = ROOT_STATE_ID;
        for c in pattern.symbols() {
            let code = self.alphabet.index(c)?;
            state_id = self.states[state_id as usize].child(code)?;
        }
        let state = &self.states[state_id as usize];
        state
            .outputs
            .iter()
            .find(|&&id| self.pattern_lens[id as usize] == state.depth)
            .map(|&id| id as usize)
    }

    /// Returns the root state.
    pub const fn root(&self) -> StateId {
        StateId(ROOT_STATE_ID)
    }

    /// Moves from `state` by `symbol`, following failure links when `state` has no child for
    /// `symbol`. The root loops to itself on every symbol no pattern starts with.
    ///
    /// # Errors
    ///
    /// [`AcpmaError::UnsupportedSymbol`] is returned when `symbol` is outside the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `state` comes from another automaton with more states.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::LowercaseAhoCorasick;
    ///
    /// let pma = LowercaseAhoCorasick::new(["he", "she"]).unwrap();
    ///
    /// let mut state = pma.root();
    /// for c in "sh".chars() {
    ///     state = pma.step(state, c).unwrap();
    /// }
    /// assert!(pma.outputs(state).is_empty());
    ///
    /// state = pma.step(state, 'e').unwrap();
    /// assert_eq!(&[0, 1], pma.outputs(state));
    ///
    /// assert!(pma.step(state, '!').is_err());
    /// ```
    pub fn step(&self, state: StateId, symbol: A::Symbol) -> Result<StateId> {
        let code = self
            .alphabet
            .index(symbol)
            .ok_or_else(|| AcpmaError::unsupported_symbol(symbol, 0, None))?;
        Ok(StateId(self.next_state_id(state.0, code)))
    }

    /// Returns the IDs of all patterns ending at `state`, in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `state` comes from another automaton with more states.
    pub fn outputs(&self, state: StateId) -> &[u32] {
        &self.states[state.index()].outputs
    }

    /// Returns the failure state of `state`, or `None` for the root.
    ///
    /// # Panics
    ///
    /// Panics if `state` comes from another automaton with more states.
    pub fn failure(&self, state: StateId) -> Option<StateId> {
        if state.0 == ROOT_STATE_ID {
            None
        } else {
            Some(StateId(self.states[state.index()].fail))
        }
    }

    /// Returns the length of the path from the root to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` comes from another automaton with more states.
    pub fn depth(&self, state: StateId) -> usize {
        self.states[state.index()].depth as usize
    }

    /// Returns the length of the pattern with the given ID, in symbols.
    pub fn pattern_len(&self, pattern: usize) -> Option<usize> {
        self.pattern_lens.get(pattern).map(|&len| len as usize)
    }

    /// Returns the number of patterns.
    pub fn num_patterns(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Returns the total number of states this automaton has.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the alphabet of this automaton.
    pub const fn alphabet(&self) -> &A {
        &self.alphabet
    }

    /// Returns how missing transitions are resolved.
    pub const fn transitions(&self) -> Transitions {
        if self.table.is_some() {
            Transitions::Eager
        } else {
            Transitions::Lazy
        }
    }

    /// Returns the total amount of heap used by this automaton in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.states.capacity() * std::mem::size_of::<State>()
            + self.states.iter().map(State::heap_bytes).sum::<usize>()
            + self.pattern_lens.capacity() * std::mem::size_of::<u32>()
            + self
                .table
                .as_ref()
                .map_or(0, |t| t.capacity() * std::mem::size_of::<u32>())
    }

    #[inline(always)]
    pub(crate) fn next_state_id(&self, mut state_id: u32, c: u32) -> u32 {
        if let Some(table) = &self.table {
            return table[state_id as usize * self.alphabet.len() + c as usize];
        }
        loop {
            let state = &self.states[state_id as usize];
            if let Some(next_state_id) = state.child(c) {
                return next_state_id;
            }
            if state_id == ROOT_STATE_ID {
                return ROOT_STATE_ID;
            }
            state_id = state.fail;
        }
    }

    #[inline(always)]
    pub(crate) fn state_outputs(&self, state_id: u32) -> &[u32] {
        &self.states[state_id as usize].outputs
    }

    #[inline(always)]
    pub(crate) fn new_match(&self, pattern: u32, end: usize) -> Match {
        Match {
            length: self.pattern_lens[pattern as usize] as usize,
            end,
            pattern: pattern as usize,
        }
    }
}
