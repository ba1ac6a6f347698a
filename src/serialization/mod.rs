//! Automaton serialization support.
//!
//! This module writes and reads automata in three formats:
//!
//! - [`PlainTextSerializer`]: the numeric description format understood by
//!   [`AutomatonLoader`](crate::automaton::AutomatonLoader)
//! - [`JsonSerializer`]: pretty-printed JSON, for inspection and editing
//! - [`BincodeSerializer`]: compact binary
//!
//! Deserialized automata go through the same validation as loaded ones, so a
//! serializer can never produce an automaton that violates the totality or
//! range invariants.
//!
//! # Example
//!
//! ```rust,ignore
//! use dfa_reach::serialization::{AutomatonSerializer, JsonSerializer};
//! use std::fs::File;
//!
//! let file = File::create("automaton.json")?;
//! JsonSerializer::serialize(&automaton, file)?;
//!
//! let file = File::open("automaton.json")?;
//! let loaded = JsonSerializer::deserialize(file)?;
//! assert_eq!(loaded, automaton);
//! ```

use std::io::{Read, Write};

use crate::automaton::{Automaton, FormatError, LoadError, StateId};

mod bincode_impl;
mod json_impl;
mod plaintext_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json_impl::JsonSerializer;
pub use self::plaintext_impl::PlainTextSerializer;

/// Trait for serializing and deserializing automata.
pub trait AutomatonSerializer {
    /// Serialize an automaton to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(automaton: &Automaton, writer: W) -> Result<(), SerializationError>;

    /// Deserialize an automaton from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the decoded data
    /// does not describe a valid automaton.
    fn deserialize<R: Read>(reader: R) -> Result<Automaton, SerializationError>;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// The text description could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Decoded data does not describe a valid automaton
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Format-independent representation of an automaton.
///
/// `transitions[s][a]` is the successor of state `s` on symbol `a`; the
/// number of states is the number of rows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AutomatonData {
    /// Number of symbols
    pub alphabet_size: usize,
    /// Initial state
    pub initial_state: StateId,
    /// Accepting states
    pub final_states: Vec<StateId>,
    /// One row of successors per state
    pub transitions: Vec<Vec<StateId>>,
}

impl From<&Automaton> for AutomatonData {
    fn from(automaton: &Automaton) -> Self {
        Self {
            alphabet_size: automaton.alphabet_size(),
            initial_state: automaton.initial_state(),
            final_states: automaton.final_states().collect(),
            transitions: (0..automaton.states_size())
                .map(|state| automaton.successors(state).to_vec())
                .collect(),
        }
    }
}

impl TryFrom<AutomatonData> for Automaton {
    type Error = FormatError;

    fn try_from(data: AutomatonData) -> Result<Self, Self::Error> {
        Automaton::from_rows(
            data.alphabet_size,
            data.initial_state,
            data.final_states,
            data.transitions,
        )
    }
}
