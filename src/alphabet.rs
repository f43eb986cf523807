//! Alphabets mapping input symbols to dense transition indices.

use std::collections::HashMap;
use std::fmt::Debug;

const INVALID_CODE: u32 = u32::MAX;

// A `CharMap` keeps a direct lookup table while the table is at most this many times
// larger than the number of symbols.
const DENSE_TABLE_RATIO: usize = 4;
// Tables up to this length are always direct, regardless of density.
const DENSE_TABLE_MIN: usize = 256;

/// Mapping from symbols to dense indices in `0..len()`.
///
/// The automaton stores transitions by index, so the alphabet decides both the universe of
/// valid symbols and how large a completed transition row is.
pub trait Alphabet {
    /// Symbol type of patterns and haystacks.
    type Symbol: Copy + Debug;

    /// Returns the dense index of `symbol`, or `None` if it is outside the alphabet.
    fn index(&self, symbol: Self::Symbol) -> Option<u32>;

    /// Returns the number of symbols in the alphabet.
    fn len(&self) -> usize;

    /// Returns `true` if the alphabet has no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The 26 lowercase ASCII letters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Lowercase;

impl Alphabet for Lowercase {
    type Symbol = char;

    #[inline(always)]
    fn index(&self, symbol: char) -> Option<u32> {
        if symbol.is_ascii_lowercase() {
            Some(u32::from(symbol) - u32::from('a'))
        } else {
            None
        }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        26
    }
}

/// All 256 byte values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Bytes;

impl Alphabet for Bytes {
    type Symbol = u8;

    #[inline(always)]
    fn index(&self, symbol: u8) -> Option<u32> {
        Some(u32::from(symbol))
    }

    #[inline(always)]
    fn len(&self) -> usize {
        256
    }
}

/// All Unicode scalar values, indexed by code point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Unicode;

impl Alphabet for Unicode {
    type Symbol = char;

    #[inline(always)]
    fn index(&self, symbol: char) -> Option<u32> {
        Some(u32::from(symbol))
    }

    #[inline(always)]
    fn len(&self) -> usize {
        char::MAX as usize + 1
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum CodeTable {
    Dense(Vec<u32>),
    Hashed(HashMap<char, u32>),
}

/// A finite set of characters given by the user.
///
/// Indices are assigned in the order the characters are first seen. Compact sets (such as
/// `"0123456789abcdef"`) are looked up through a direct table indexed by code point;
/// sparse sets (such as a few CJK characters) fall back to a hash map.
///
/// # Examples
///
/// ```
/// use acpma::alphabet::{Alphabet, CharMap};
///
/// let dna = CharMap::new("ACGT".chars());
/// assert_eq!(dna.len(), 4);
/// assert_eq!(dna.index('G'), Some(2));
/// assert_eq!(dna.index('U'), None);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharMap {
    table: CodeTable,
    alphabet_size: u32,
}

impl CharMap {
    /// Creates a new [`CharMap`] from the given characters. Repeated characters are ignored.
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut codes = HashMap::new();
        let mut max_code = 0;
        for c in symbols {
            let next = u32::try_from(codes.len()).unwrap_or(INVALID_CODE);
            codes.entry(c).or_insert(next);
            max_code = max_code.max(c as usize);
        }
        // A char set has at most 0x110000 entries, so the count always fits.
        let alphabet_size = u32::try_from(codes.len()).unwrap_or(INVALID_CODE);

        let table_len = max_code + 1;
        let table = if codes.is_empty() {
            CodeTable::Dense(vec![])
        } else if table_len <= DENSE_TABLE_MIN || table_len <= codes.len() * DENSE_TABLE_RATIO {
            let mut table = vec![INVALID_CODE; table_len];
            for (&c, &code) in &codes {
                table[c as usize] = code;
            }
            CodeTable::Dense(table)
        } else {
            CodeTable::Hashed(codes)
        };
        Self {
            table,
            alphabet_size,
        }
    }

    /// Returns `true` if the lookup goes through a direct table.
    pub const fn is_dense(&self) -> bool {
        matches!(self.table, CodeTable::Dense(_))
    }
}

impl Alphabet for CharMap {
    type Symbol = char;

    #[inline(always)]
    fn index(&self, symbol: char) -> Option<u32> {
        match &self.table {
            CodeTable::Dense(table) => table
                .get(symbol as usize)
                .copied()
                .filter(|&code| code != INVALID_CODE),
            CodeTable::Hashed(codes) => codes.get(&symbol).copied(),
        }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.alphabet_size as usize
    }
}

impl<A> Alphabet for &A
where
    A: Alphabet + ?Sized,
{
    type Symbol = A::Symbol;

    #[inline(always)]
    fn index(&self, symbol: Self::Symbol) -> Option<u32> {
        (**self).index(symbol)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Sequences of symbols, used for both patterns and haystacks.
///
/// A `str` can be read as `char`s or as UTF-8 bytes; the alphabet of the automaton picks
/// which one.
pub trait Symbols<S> {
    /// Iterator over the symbols.
    type Iter<'a>: Iterator<Item = S>
    where
        Self: 'a;

    /// Returns an iterator over the symbols.
    fn symbols(&self) -> Self::Iter<'_>;
}

impl Symbols<char> for str {
    type Iter<'a> = std::str::Chars<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl Symbols<u8> for str {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.as_bytes().iter().copied()
    }
}

impl Symbols<char> for String {
    type Iter<'a> = std::str::Chars<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl Symbols<u8> for String {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.as_bytes().iter().copied()
    }
}

impl<S> Symbols<S> for [S]
where
    S: Copy,
{
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, S>> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

impl<S> Symbols<S> for Vec<S>
where
    S: Copy,
{
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, S>> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

impl<S, const N: usize> Symbols<S> for [S; N]
where
    S: Copy,
{
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, S>> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

impl<S, T> Symbols<S> for &T
where
    T: Symbols<S> + ?Sized,
{
    type Iter<'a> = T::Iter<'a> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        (**self).symbols()
    }
}
