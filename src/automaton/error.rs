//! Error types for building and loading automata.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an automaton description.
///
/// A description is rejected either because the underlying stream could not be
/// read at all, or because its numeric content does not describe a valid
/// total deterministic automaton.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The description file is missing or unreadable.
    #[error("cannot read automaton description{}", display_path(path))]
    Io {
        /// Path that was being read, if the input was a file
        path: Option<PathBuf>,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The stream was read but its content is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

/// The numeric content of a description is malformed or out of range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The stream ended before a header field could be read.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof {
        /// Name of the field being read
        field: &'static str,
    },

    /// A digit run does not fit in a machine-sized integer.
    #[error("number {digits} is too large")]
    NumberTooLarge {
        /// The offending digit run
        digits: String,
    },

    /// `states_size * alphabet_size` overflows.
    #[error("automaton dimensions {states_size}x{alphabet_size} are too large")]
    DimensionOverflow {
        /// Declared number of states
        states_size: usize,
        /// Declared number of symbols
        alphabet_size: usize,
    },

    /// A state index lies outside `[0, states_size)`.
    #[error("{field} {state} is out of range (automaton has {states_size} states)")]
    StateOutOfRange {
        /// Which field held the state
        field: &'static str,
        /// The offending state
        state: usize,
        /// Declared number of states
        states_size: usize,
    },

    /// A symbol lies outside `[0, alphabet_size)`.
    #[error("symbol {symbol} is out of range (alphabet has {alphabet_size} symbols)")]
    SymbolOutOfRange {
        /// The offending symbol
        symbol: usize,
        /// Declared alphabet size
        alphabet_size: usize,
    },

    /// A `(state, symbol)` cell of the transition table was never populated.
    #[error("no transition defined for state {state} on symbol {symbol}")]
    MissingTransition {
        /// Source state of the missing cell
        state: usize,
        /// Symbol of the missing cell
        symbol: usize,
    },

    /// A table row does not have one entry per symbol.
    #[error("row for state {state} has {found} entries, expected {expected}")]
    RowLength {
        /// State whose row is malformed
        state: usize,
        /// Alphabet size
        expected: usize,
        /// Actual row length
        found: usize,
    },

    /// The transition stream holds fewer integers than the table needs.
    #[error("transition list is truncated: expected {expected} integers, found {found}")]
    TruncatedTransitions {
        /// Integers required
        expected: usize,
        /// Integers present
        found: usize,
    },

    /// The transition stream holds more integers than the table needs.
    #[error("transition list has trailing data: expected {expected} integers, found {found}")]
    TrailingTransitions {
        /// Integers required
        expected: usize,
        /// Integers present
        found: usize,
    },

    /// A triple's `(row, col)` does not match its position in the stream.
    #[error(
        "transition triple {index} is labelled ({}, {}) but sits at ({}, {})",
        found.0, found.1, expected.0, expected.1
    )]
    TransitionMismatch {
        /// Zero-based triple index
        index: usize,
        /// `(state, symbol)` implied by position
        expected: (usize, usize),
        /// `(row, col)` written in the stream
        found: (usize, usize),
    },
}
