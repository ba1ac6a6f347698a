//! Deterministic finite automaton model.
//!
//! An [`Automaton`] is a total, deterministic transition table over a dense
//! range of states `[0, states_size)` and symbols `[0, alphabet_size)`, with a
//! designated initial state and a set of accepting states.
//!
//! Automata are validated once at construction (see [`AutomatonBuilder`]) and
//! are immutable afterwards, so every query can index the table without
//! re-checking the structural invariants.
//!
//! # Example
//!
//! ```rust
//! use dfa_reach::automaton::Automaton;
//!
//! let dfa = Automaton::builder(2, 2)
//!     .initial_state(0)
//!     .final_state(1)
//!     .transition(0, 0, 0)
//!     .transition(0, 1, 1)
//!     .transition(1, 0, 1)
//!     .transition(1, 1, 1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dfa.states_size(), 2);
//! assert!(dfa.is_final(1));
//! ```

use std::collections::BTreeSet;

pub mod error;
pub mod loader;

pub use self::error::{FormatError, LoadError};
pub use self::loader::{AutomatonLoader, TableLayout};

use crate::transition::IndexError;

/// Index of a state, valid in `[0, states_size)`.
pub type StateId = usize;

/// Alphabet symbol, valid in `[0, alphabet_size)`.
pub type Symbol = usize;

/// A total deterministic finite automaton.
///
/// The transition table is stored row-major: the successors of state `s`
/// occupy `transitions[s * alphabet_size .. (s + 1) * alphabet_size]`.
///
/// # Invariants
///
/// - `initial_state < states_size`
/// - every final state is `< states_size`
/// - `transitions.len() == states_size * alphabet_size`
/// - every transition target is `< states_size`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    alphabet_size: usize,
    states_size: usize,
    initial_state: StateId,
    final_states: BTreeSet<StateId>,
    transitions: Vec<StateId>,
}

impl Automaton {
    /// Start building an automaton with the given dimensions.
    pub fn builder(alphabet_size: usize, states_size: usize) -> AutomatonBuilder {
        AutomatonBuilder::new(alphabet_size, states_size)
    }

    /// Build an automaton from one row of targets per state.
    ///
    /// `rows[s][a]` is the successor of state `s` on symbol `a`, so
    /// `states_size` is `rows.len()` and every row must have exactly
    /// `alphabet_size` entries.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if a row has the wrong length or any state
    /// index is out of range.
    pub fn from_rows<I>(
        alphabet_size: usize,
        initial_state: StateId,
        final_states: I,
        rows: Vec<Vec<StateId>>,
    ) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut builder = Self::builder(alphabet_size, rows.len()).initial_state(initial_state);
        for state in final_states {
            builder.add_final_state(state);
        }

        for (state, row) in rows.into_iter().enumerate() {
            if row.len() != alphabet_size {
                return Err(FormatError::RowLength {
                    state,
                    expected: alphabet_size,
                    found: row.len(),
                });
            }
            for (symbol, target) in row.into_iter().enumerate() {
                builder.add_transition(state, symbol, target);
            }
        }

        builder.build()
    }

    /// Number of distinct input symbols.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of states.
    pub fn states_size(&self) -> usize {
        self.states_size
    }

    /// The initial state.
    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    /// Accepting states in ascending order.
    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.final_states.iter().copied()
    }

    /// Returns true if `state` is accepting.
    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// Returns true if `state` is a valid state index.
    pub fn contains_state(&self, state: StateId) -> bool {
        state < self.states_size
    }

    /// Successors of `state`, indexed by symbol.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range. Use [`Automaton::step`] for a
    /// checked lookup.
    pub fn successors(&self, state: StateId) -> &[StateId] {
        let start = state * self.alphabet_size;
        &self.transitions[start..start + self.alphabet_size]
    }

    /// Checked single transition `δ(state, symbol)`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `state` or `symbol` is out of range.
    pub fn step(&self, state: StateId, symbol: Symbol) -> Result<StateId, IndexError> {
        if !self.contains_state(state) {
            return Err(IndexError::StateOutOfRange {
                state,
                states_size: self.states_size,
            });
        }
        if symbol >= self.alphabet_size {
            return Err(IndexError::SymbolOutOfRange {
                symbol,
                position: 0,
                alphabet_size: self.alphabet_size,
            });
        }
        Ok(self.transitions[state * self.alphabet_size + symbol])
    }

    /// Iterate over every transition as `(state, symbol, target)` in
    /// state-major order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        let alphabet_size = self.alphabet_size;
        self.transitions
            .iter()
            .enumerate()
            .map(move |(cell, &target)| (cell / alphabet_size, cell % alphabet_size, target))
    }
}

/// Builder for an [`Automaton`].
///
/// Cells of the transition table start out empty; [`AutomatonBuilder::build`]
/// fails unless every `(state, symbol)` cell has been populated, which is what
/// makes the resulting transition function total.
#[derive(Clone, Debug)]
pub struct AutomatonBuilder {
    alphabet_size: usize,
    states_size: usize,
    initial_state: StateId,
    final_states: Vec<StateId>,
    cells: Vec<Option<StateId>>,
    // First out-of-range symbol seen by `add_transition`
    bad_symbol: Option<Symbol>,
    // First out-of-range source state seen by `add_transition`
    bad_source: Option<StateId>,
}

impl AutomatonBuilder {
    /// Create a builder for an automaton with the given dimensions.
    ///
    /// Oversized dimensions are reported by [`AutomatonBuilder::build`].
    pub fn new(alphabet_size: usize, states_size: usize) -> Self {
        let cells = states_size
            .checked_mul(alphabet_size)
            .map(|n| vec![None; n])
            .unwrap_or_default();

        Self {
            alphabet_size,
            states_size,
            initial_state: 0,
            final_states: Vec::new(),
            cells,
            bad_symbol: None,
            bad_source: None,
        }
    }

    /// Set the initial state.
    pub fn initial_state(mut self, state: StateId) -> Self {
        self.initial_state = state;
        self
    }

    /// Mark `state` as accepting.
    pub fn final_state(mut self, state: StateId) -> Self {
        self.add_final_state(state);
        self
    }

    /// Set `δ(state, symbol) = target`.
    pub fn transition(mut self, state: StateId, symbol: Symbol, target: StateId) -> Self {
        self.add_transition(state, symbol, target);
        self
    }

    /// Mark `state` as accepting.
    pub fn add_final_state(&mut self, state: StateId) {
        self.final_states.push(state);
    }

    /// Set `δ(state, symbol) = target`, overwriting any previous value.
    pub fn add_transition(&mut self, state: StateId, symbol: Symbol, target: StateId) {
        if symbol >= self.alphabet_size {
            self.bad_symbol.get_or_insert(symbol);
            return;
        }
        if state >= self.states_size {
            self.bad_source.get_or_insert(state);
            return;
        }
        if let Some(cell) = self.cells.get_mut(state * self.alphabet_size + symbol) {
            *cell = Some(target);
        }
    }

    /// Validate and freeze the automaton.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the dimensions overflow, if any state or
    /// symbol is out of range, or if a transition cell is missing.
    pub fn build(self) -> Result<Automaton, FormatError> {
        let states_size = self.states_size;
        let alphabet_size = self.alphabet_size;

        if states_size.checked_mul(alphabet_size).is_none() {
            return Err(FormatError::DimensionOverflow {
                states_size,
                alphabet_size,
            });
        }

        let check_state = |field: &'static str, state: StateId| {
            if state < states_size {
                Ok(state)
            } else {
                Err(FormatError::StateOutOfRange {
                    field,
                    state,
                    states_size,
                })
            }
        };

        if let Some(symbol) = self.bad_symbol {
            return Err(FormatError::SymbolOutOfRange {
                symbol,
                alphabet_size,
            });
        }
        if let Some(state) = self.bad_source {
            check_state("transition source", state)?;
        }

        check_state("initial state", self.initial_state)?;

        let final_states = self
            .final_states
            .into_iter()
            .map(|state| check_state("final state", state))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let transitions = self
            .cells
            .into_iter()
            .enumerate()
            .map(|(cell, target)| match target {
                Some(target) => check_state("transition target", target),
                None => Err(FormatError::MissingTransition {
                    state: cell / alphabet_size,
                    symbol: cell % alphabet_size,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Automaton {
            alphabet_size,
            states_size,
            initial_state: self.initial_state,
            final_states,
            transitions,
        })
    }
}
