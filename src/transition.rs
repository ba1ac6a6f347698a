//! Applying words to states.

use thiserror::Error;

use crate::automaton::{Automaton, StateId};
use crate::word::Word;

/// A state or symbol index fell outside the automaton's bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// State index outside `[0, states_size)`.
    #[error("state {state} is out of range (automaton has {states_size} states)")]
    StateOutOfRange {
        /// The offending state
        state: StateId,
        /// Number of states in the automaton
        states_size: usize,
    },

    /// Symbol outside `[0, alphabet_size)`.
    #[error("symbol {symbol} at position {position} is out of range (alphabet has {alphabet_size} symbols)")]
    SymbolOutOfRange {
        /// The offending symbol
        symbol: usize,
        /// Position of the symbol within its word
        position: usize,
        /// Alphabet size of the automaton
        alphabet_size: usize,
    },
}

/// Run `word` from `start`, returning the state it ends in.
///
/// The empty word leaves `start` unchanged.
///
/// # Errors
///
/// Returns [`IndexError`] if `start` is not a state of `automaton` or if any
/// symbol of `word` is outside its alphabet. Nothing is partially applied on
/// failure.
pub fn apply(automaton: &Automaton, start: StateId, word: &Word) -> Result<StateId, IndexError> {
    if !automaton.contains_state(start) {
        return Err(IndexError::StateOutOfRange {
            state: start,
            states_size: automaton.states_size(),
        });
    }

    word.iter()
        .enumerate()
        .try_fold(start, |state, (position, symbol)| {
            automaton
                .successors(state)
                .get(symbol)
                .copied()
                .ok_or(IndexError::SymbolOutOfRange {
                    symbol,
                    position,
                    alphabet_size: automaton.alphabet_size(),
                })
        })
}
