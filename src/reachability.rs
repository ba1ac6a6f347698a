//! Breadth-first reachability over the transition graph.
//!
//! The automaton is treated as a directed graph on its states with one edge
//! per `(state, symbol)` pair. A state `t` is reachable from `s` when a path
//! of zero or more edges, with any labels, leads from `s` to `t`.
//!
//! Each query owns its scratch space: a `visited` marker per state and a FIFO
//! frontier. States are marked when enqueued, so every state is enqueued at
//! most once and a query runs in `O(states × alphabet)` time and `O(states)`
//! space.

use std::collections::VecDeque;

use tracing::trace;

use crate::automaton::{Automaton, StateId};
use crate::transition::IndexError;

/// Scratch space for one breadth-first traversal.
struct Search<'a> {
    automaton: &'a Automaton,
    visited: Vec<bool>,
    frontier: VecDeque<StateId>,
}

impl<'a> Search<'a> {
    fn new(automaton: &'a Automaton, source: StateId) -> Self {
        let mut visited = vec![false; automaton.states_size()];
        visited[source] = true;

        Self {
            automaton,
            visited,
            frontier: VecDeque::from([source]),
        }
    }

    // Dequeues the next state and enqueues its unvisited successors.
    fn advance(&mut self) -> Option<StateId> {
        let state = self.frontier.pop_front()?;

        for &next in self.automaton.successors(state) {
            if !self.visited[next] {
                self.visited[next] = true;
                self.frontier.push_back(next);
            }
        }

        Some(state)
    }
}

/// Returns true if `target` is reachable from `source`.
///
/// A state is always reachable from itself. States outside the automaton
/// are never reachable; use [`try_reachable`] to have them reported instead.
pub fn reachable(automaton: &Automaton, source: StateId, target: StateId) -> bool {
    if source == target {
        return automaton.contains_state(source);
    }
    if !automaton.contains_state(source) || !automaton.contains_state(target) {
        return false;
    }

    let mut search = Search::new(automaton, source);
    let mut expanded = 0usize;

    while let Some(state) = search.advance() {
        if state == target {
            trace!(source, target, expanded, "target reached");
            return true;
        }
        expanded += 1;
    }

    trace!(source, target, expanded, "target unreachable");
    false
}

/// Like [`reachable`], but rejects out-of-range states.
///
/// # Errors
///
/// Returns [`IndexError::StateOutOfRange`] for the first of `source` and
/// `target` that is not a state of `automaton`.
pub fn try_reachable(
    automaton: &Automaton,
    source: StateId,
    target: StateId,
) -> Result<bool, IndexError> {
    for state in [source, target] {
        if !automaton.contains_state(state) {
            return Err(IndexError::StateOutOfRange {
                state,
                states_size: automaton.states_size(),
            });
        }
    }
    Ok(reachable(automaton, source, target))
}

/// Every state reachable from `source`, in ascending order.
///
/// The result always contains `source` itself.
///
/// # Errors
///
/// Returns [`IndexError::StateOutOfRange`] if `source` is not a state of
/// `automaton`.
pub fn closure(automaton: &Automaton, source: StateId) -> Result<Vec<StateId>, IndexError> {
    if !automaton.contains_state(source) {
        return Err(IndexError::StateOutOfRange {
            state: source,
            states_size: automaton.states_size(),
        });
    }

    let mut search = Search::new(automaton, source);
    while search.advance().is_some() {}

    Ok(search
        .visited
        .iter()
        .enumerate()
        .filter_map(|(state, &seen)| seen.then_some(state))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 2 -> 2, 3 isolated with a self loop
    fn chain() -> Automaton {
        Automaton::from_rows(
            1,
            0,
            [2],
            vec![vec![1], vec![2], vec![2], vec![3]],
        )
        .unwrap()
    }

    #[test]
    fn test_reflexive() {
        let dfa = chain();
        for state in 0..dfa.states_size() {
            assert!(reachable(&dfa, state, state));
        }
    }

    #[test]
    fn test_forward_only() {
        let dfa = chain();
        assert!(reachable(&dfa, 0, 2));
        assert!(reachable(&dfa, 1, 2));
        assert!(!reachable(&dfa, 2, 0));
        assert!(!reachable(&dfa, 0, 3));
        assert!(!reachable(&dfa, 3, 0));
    }

    #[test]
    fn test_out_of_range_states() {
        let dfa = chain();
        assert!(!reachable(&dfa, 0, 10));
        assert!(!reachable(&dfa, 10, 10));
        assert_eq!(
            try_reachable(&dfa, 0, 10),
            Err(IndexError::StateOutOfRange { state: 10, states_size: 4 })
        );
        assert_eq!(try_reachable(&dfa, 0, 2), Ok(true));
    }

    #[test]
    fn test_closure() {
        let dfa = chain();
        assert_eq!(closure(&dfa, 0).unwrap(), vec![0, 1, 2]);
        assert_eq!(closure(&dfa, 2).unwrap(), vec![2]);
        assert_eq!(closure(&dfa, 3).unwrap(), vec![3]);
        assert!(closure(&dfa, 4).is_err());
    }

    #[test]
    fn test_empty_alphabet_reaches_only_itself() {
        let dfa = Automaton::from_rows(0, 0, [1], vec![vec![], vec![]]).unwrap();
        assert!(reachable(&dfa, 0, 0));
        assert!(!reachable(&dfa, 0, 1));
        assert_eq!(closure(&dfa, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_uses_every_symbol() {
        // symbol 0 self-loops everywhere; only symbol 2 from 0 escapes
        let dfa = Automaton::from_rows(
            3,
            0,
            [],
            vec![vec![0, 0, 1], vec![1, 1, 1]],
        )
        .unwrap();
        assert!(reachable(&dfa, 0, 1));
    }
}
