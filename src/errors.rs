//! Definition of errors.

use std::error::Error;
use std::fmt;

/// Errors in acpma.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AcpmaError {
    /// Contains [`UnsupportedSymbolError`].
    UnsupportedSymbol(UnsupportedSymbolError),

    /// Contains [`EmptyPatternError`].
    EmptyPattern(EmptyPatternError),

    /// Contains [`CapacityError`].
    Capacity(CapacityError),

    /// Contains [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),
}

impl AcpmaError {
    pub(crate) fn unsupported_symbol<S>(symbol: S, position: usize, pattern: Option<usize>) -> Self
    where
        S: fmt::Debug,
    {
        Self::UnsupportedSymbol(UnsupportedSymbolError {
            symbol: format!("{symbol:?}"),
            position,
            pattern,
        })
    }

    pub(crate) const fn empty_pattern(pattern: usize) -> Self {
        Self::EmptyPattern(EmptyPatternError { pattern })
    }

    pub(crate) const fn capacity(what: &'static str, limit: u64) -> Self {
        Self::Capacity(CapacityError { what, limit })
    }

    pub(crate) fn invalid_argument(arg: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for AcpmaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnsupportedSymbol(e) => e.fmt(f),
            Self::EmptyPattern(e) => e.fmt(f),
            Self::Capacity(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
        }
    }
}

impl Error for AcpmaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedSymbol(e) => Some(e),
            Self::EmptyPattern(e) => Some(e),
            Self::Capacity(e) => Some(e),
            Self::InvalidArgument(e) => Some(e),
        }
    }
}

/// Error used when a symbol falls outside the alphabet of the automaton.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnsupportedSymbolError {
    pub(crate) symbol: String,
    pub(crate) position: usize,
    pub(crate) pattern: Option<usize>,
}

impl UnsupportedSymbolError {
    /// Debug rendering of the rejected symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Symbol offset of the rejected symbol, within the pattern or the haystack.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Pattern ID when the symbol was found while building, `None` when found while scanning.
    pub const fn pattern(&self) -> Option<usize> {
        self.pattern
    }
}

impl fmt::Display for UnsupportedSymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.pattern {
            Some(pattern) => write!(
                f,
                "UnsupportedSymbolError: {} at position {} of pattern {}",
                self.symbol, self.position, pattern
            ),
            None => write!(
                f,
                "UnsupportedSymbolError: {} at position {} of haystack",
                self.symbol, self.position
            ),
        }
    }
}

impl Error for UnsupportedSymbolError {}

/// Error used when an empty pattern is given without being allowed explicitly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EmptyPatternError {
    pub(crate) pattern: usize,
}

impl EmptyPatternError {
    /// ID of the empty pattern.
    pub const fn pattern(&self) -> usize {
        self.pattern
    }
}

impl fmt::Display for EmptyPatternError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "EmptyPatternError: pattern {} is empty; it would match at every position",
            self.pattern
        )
    }
}

impl Error for EmptyPatternError {}

/// Error used when the scale of the patterns or the automaton exceeds the supported one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CapacityError {
    pub(crate) what: &'static str,
    pub(crate) limit: u64,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: {} must be <= {}", self.what, self.limit)
    }
}

impl Error for CapacityError {}

/// Error used when the argument is invalid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// A specialized Result type for acpma.
pub type Result<T, E = AcpmaError> = core::result::Result<T, E>;
