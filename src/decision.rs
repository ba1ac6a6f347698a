//! The acceptability decision.
//!
//! Two words `w1` and `w2` are *acceptable* for an automaton when some state
//! `q` is reachable from `δ*(initial, w1)` and `δ*(q, w2)` is accepting. The
//! decision is existential: it answers whether such a witness `q` exists
//! without reporting which one.

use tracing::debug;

use crate::automaton::{Automaton, StateId};
use crate::reachability::reachable;
use crate::transition::{apply, IndexError};
use crate::word::Word;

/// Message printed for a positive decision.
pub const ACCEPTABLE: &str = "Words are acceptable";

/// Message printed for a negative decision.
pub const NOT_ACCEPTABLE: &str = "Words are not acceptable";

/// The user-facing message for a decision.
pub fn verdict(acceptable: bool) -> &'static str {
    if acceptable {
        ACCEPTABLE
    } else {
        NOT_ACCEPTABLE
    }
}

/// Decide whether `word1` and `word2` are acceptable.
///
/// Runs `word1` from the initial state, runs `word2` from every state, and
/// then searches for a state that `word2` maps into an accepting state and
/// that is reachable from where `word1` ended.
///
/// # Errors
///
/// Returns [`IndexError`] if either word contains a symbol outside the
/// alphabet.
///
/// # Example
///
/// ```rust
/// use dfa_reach::automaton::Automaton;
/// use dfa_reach::decision::decide;
/// use dfa_reach::word::Word;
///
/// let dfa = Automaton::from_rows(2, 0, [1], vec![vec![0, 1], vec![1, 1]]).unwrap();
/// assert!(decide(&dfa, &Word::empty(), &Word::from(vec![1])).unwrap());
/// ```
pub fn decide(automaton: &Automaton, word1: &Word, word2: &Word) -> Result<bool, IndexError> {
    let start = apply(automaton, automaton.initial_state(), word1)?;

    let mapped = (0..automaton.states_size())
        .map(|state| apply(automaton, state, word2))
        .collect::<Result<Vec<StateId>, _>>()?;

    let acceptable = mapped
        .iter()
        .enumerate()
        .filter(|&(_, &end)| automaton.is_final(end))
        .any(|(candidate, _)| reachable(automaton, start, candidate));

    debug!(start, acceptable, "decided acceptability");
    Ok(acceptable)
}

/// Parallel variant of [`decide`].
///
/// The per-state runs of `word2` and the reachability checks are spread over
/// the rayon thread pool. Only the shared automaton is read; every
/// reachability query keeps its own scratch space. Always agrees with
/// [`decide`].
///
/// # Errors
///
/// Same as [`decide`].
#[cfg(feature = "rayon")]
pub fn decide_par(automaton: &Automaton, word1: &Word, word2: &Word) -> Result<bool, IndexError> {
    use rayon::prelude::*;

    let start = apply(automaton, automaton.initial_state(), word1)?;

    let mapped = (0..automaton.states_size())
        .into_par_iter()
        .map(|state| apply(automaton, state, word2))
        .collect::<Result<Vec<StateId>, _>>()?;

    let acceptable = mapped
        .par_iter()
        .enumerate()
        .any(|(candidate, &end)| automaton.is_final(end) && reachable(automaton, start, candidate));

    debug!(start, acceptable, "decided acceptability in parallel");
    Ok(acceptable)
}
