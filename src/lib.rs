//! # dfa-reach
//!
//! Reachability-based acceptability decisions for deterministic finite
//! automata.
//!
//! Given a DFA and two words `w1` and `w2`, the words are *acceptable* when
//! some state `q`, reachable by any path from the state `w1` leads to, is
//! mapped by `w2` onto an accepting state:
//!
//! > ∃ q. q ∈ reach(δ*(q₀, w1)) ∧ δ*(q, w2) ∈ F
//!
//! The crate provides the automaton model and its numeric description format
//! ([`automaton`]), word parsing ([`word`]), transition application
//! ([`transition`]), breadth-first reachability ([`reachability`]) and the
//! decision itself ([`decision`]).
//!
//! ## Example
//!
//! ```rust
//! use dfa_reach::prelude::*;
//!
//! let dfa = AutomatonLoader::new()
//!     .parse_str("2 2 0 1 1\n0 0 0  0 1 1  1 0 1  1 1 1")
//!     .unwrap();
//!
//! let w1: Word = "0".parse().unwrap();
//! let w2 = Word::empty();
//! assert!(decide(&dfa, &w1, &w2).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod decision;
pub mod error;
pub mod reachability;
pub mod transition;
pub mod word;

mod numbers;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, ErrorKind, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{
        Automaton, AutomatonBuilder, AutomatonLoader, FormatError, LoadError, StateId, Symbol,
        TableLayout,
    };
    pub use crate::decision::{decide, verdict};
    pub use crate::reachability::{closure, reachable, try_reachable};
    pub use crate::transition::{apply, IndexError};
    pub use crate::word::{Word, WordError};
    pub use crate::{Error, ErrorKind};

    #[cfg(feature = "rayon")]
    pub use crate::decision::decide_par;

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        AutomatonSerializer, BincodeSerializer, JsonSerializer, PlainTextSerializer,
    };
}
