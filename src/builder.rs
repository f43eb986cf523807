use log::debug;

use crate::alphabet::{Alphabet, Symbols};
use crate::errors::{AcpmaError, Result};
use crate::nfa_builder::{NfaBuilder, ROOT_STATE_ID};
use crate::state::{Edges, State};
use crate::AhoCorasick;

// The largest alphabet for which a completed transition table may be built.
pub const EAGER_ALPHABET_MAX: usize = 1 << 16;

/// How the automaton resolves a missing transition.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Transitions {
    /// Follows failure links while scanning. Memory grows with the trie only.
    #[default]
    Lazy,

    /// Completes the transition function into a `states × alphabet` table at build time,
    /// so each scanned symbol costs one lookup.
    Eager,
}

/// Builder of [`AhoCorasick`].
pub struct AhoCorasickBuilder<A> {
    alphabet: A,
    allow_empty_pattern: bool,
    transitions: Transitions,
}

impl<A> Default for AhoCorasickBuilder<A>
where
    A: Alphabet + Default,
{
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A> AhoCorasickBuilder<A>
where
    A: Alphabet,
{
    /// Creates a new [`AhoCorasickBuilder`] over the given alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::AhoCorasickBuilder;
    /// use acpma::alphabet::Lowercase;
    ///
    /// let pma = AhoCorasickBuilder::new(Lowercase).build(["he", "she"]).unwrap();
    ///
    /// let matches = pma.find_overlapping("ashe").unwrap();
    /// let found: Vec<_> = matches.iter().map(|m| (m.pattern(), m.start(), m.end())).collect();
    /// assert_eq!(vec![(0, 2, 3), (1, 1, 3)], found);
    /// ```
    pub const fn new(alphabet: A) -> Self {
        Self {
            alphabet,
            allow_empty_pattern: false,
            transitions: Transitions::Lazy,
        }
    }

    /// Specifies whether empty patterns are accepted.
    ///
    /// An empty pattern matches after every symbol of the haystack. By default it is
    /// rejected with [`AcpmaError::EmptyPattern`].
    ///
    /// # Examples
    ///
    /// ```
    /// use acpma::AhoCorasickBuilder;
    /// use acpma::alphabet::Lowercase;
    ///
    /// assert!(AhoCorasickBuilder::new(Lowercase).build(["a", ""]).is_err());
    ///
    /// let pma = AhoCorasickBuilder::new(Lowercase)
    ///     .allow_empty_pattern(true)
    ///     .build(["a", ""])
    ///     .unwrap();
    /// assert_eq!(3, pma.find_overlapping("ab").unwrap().len());
    /// ```
    #[must_use]
    pub const fn allow_empty_pattern(mut self, yes: bool) -> Self {
        self.allow_empty_pattern = yes;
        self
    }

    /// Specifies how missing transitions are resolved. See [`Transitions`].
    #[must_use]
    pub const fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    /// Builds and returns a new [`AhoCorasick`] from input patterns.
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
    ///   - `patterns` contains an empty entry and empty patterns are not allowed,
    ///   - the scale of `patterns` or of the automaton exceeds the supported one, or
    ///   - eager transitions are requested for an alphabet that is too large.
    ///
    /// No automaton is returned when building fails.
    pub fn build<I, P>(self, patterns: I) -> Result<AhoCorasick<A>>
    where
        I: IntoIterator<Item = P>,
        P: Symbols<A::Symbol>,
    {
        let alphabet_size = self.alphabet.len();
        if self.transitions == Transitions::Eager && alphabet_size > EAGER_ALPHABET_MAX {
            return Err(AcpmaError::invalid_argument(
                "transitions",
                format!(
                    "eager transitions need an alphabet of at most {EAGER_ALPHABET_MAX} symbols, \
                     got {alphabet_size}"
                ),
            ));
        }

        let mut nfa = NfaBuilder::new(&self.alphabet);
        for pattern in patterns {
            let pattern_id = nfa.add(pattern.symbols())?;
            if !self.allow_empty_pattern && nfa.pattern_lens[pattern_id as usize] == 0 {
                return Err(AcpmaError::empty_pattern(pattern_id as usize));
            }
        }
        let order = nfa.build_fails();
        nfa.build_outputs(&order);

        let table = match self.transitions {
            Transitions::Lazy => None,
            Transitions::Eager => Some(build_table(&nfa, &order)?),
        };

        let NfaBuilder {
            states,
            pattern_lens,
            ..
        } = nfa;
        let states: Vec<State> = states
            .into_iter()
            .map(|s| State {
                edges: Edges::from_map(&s.edges, alphabet_size),
                fail: s.fail,
                depth: s.depth,
                outputs: s.outputs.into_boxed_slice(),
            })
            .collect();

        debug!(
            "built automaton: {} patterns, {} states, {:?} transitions",
            pattern_lens.len(),
            states.len(),
            self.transitions,
        );

        Ok(AhoCorasick {
            states,
            pattern_lens,
            table,
            alphabet: self.alphabet,
        })
    }
}

/// Completes the transition function of `nfa` into a row-major `states × alphabet` table.
fn build_table<A>(nfa: &NfaBuilder<A>, order: &[u32]) -> Result<Vec<u32>>
where
    A: Alphabet,
{
    let alphabet_size = nfa.alphabet.len();
    let table_len = nfa
        .states
        .len()
        .checked_mul(alphabet_size)
        .filter(|&len| u32::try_from(len).is_ok())
        .ok_or_else(|| {
            AcpmaError::capacity("the size of the transition table", u64::from(u32::MAX))
        })?;
    let mut table = vec![ROOT_STATE_ID; table_len];

    let root = &nfa.states[ROOT_STATE_ID as usize];
    for (&c, &child_id) in &root.edges {
        table[c as usize] = child_id;
    }
    // Failure states are shallower, so their rows are complete when visited in BFS order.
    for &state_id in order {
        let s = &nfa.states[state_id as usize];
        let row = state_id as usize * alphabet_size;
        let fail_row = s.fail as usize * alphabet_size;
        table.copy_within(fail_row..fail_row + alphabet_size, row);
        for (&c, &child_id) in &s.edges {
            table[row + c as usize] = child_id;
        }
    }
    Ok(table)
}
