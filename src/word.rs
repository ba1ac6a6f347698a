//! Input words.
//!
//! A [`Word`] is an explicit, length-carrying sequence of alphabet symbols.
//! Words are parsed from text tokens where each run of ASCII digits is one
//! symbol and any other character separates symbols, so `"0 1 1"`, `"0,1,1"`
//! and `"0-1-1"` all denote the same word. A token with no digits is the empty
//! word.
//!
//! ```rust
//! use dfa_reach::word::Word;
//!
//! let word: Word = "1,0,12".parse().unwrap();
//! assert_eq!(word.as_slice(), &[1, 0, 12]);
//! assert!(Word::parse("").unwrap().is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::automaton::Symbol;
use crate::numbers::{numbers_in, NumberError};

/// Errors raised while parsing a word token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    /// A digit run does not fit in a machine-sized integer.
    #[error("symbol {digits} is too large")]
    NumberTooLarge {
        /// The offending digit run
        digits: String,
    },
}

/// A finite sequence of alphabet symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word {
    symbols: Vec<Symbol>,
}

impl Word {
    /// The empty word.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a word from a text token.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::NumberTooLarge`] if a digit run overflows.
    pub fn parse(token: &str) -> Result<Self, WordError> {
        numbers_in(token)
            .map(|number| {
                number.map_err(|err| match err {
                    NumberError::TooLarge(digits) => WordError::NumberTooLarge { digits },
                    NumberError::Read(never) => match never {},
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true for the empty word.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Symbols as a slice.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl From<Vec<Symbol>> for Word {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl FromIterator<Symbol> for Word {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return f.write_str("ε");
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
