//! Loader for the numeric automaton description format.
//!
//! # Format
//!
//! A description is a stream of non-negative decimal integers. Any byte that
//! is not an ASCII digit is a separator, so whitespace, newlines and
//! punctuation are interchangeable. Fields are read in this order:
//!
//! ```text
//! alphabet_size states_size initial_state
//! final_states_size final_state...
//! row col target   (one triple per (state, symbol) cell, until end of input)
//! ```
//!
//! For example, a two-symbol, two-state automaton with initial state 0 and
//! final state 1:
//!
//! ```text
//! 2 2 0 1 1
//! 0 0 0  0 1 1  1 0 1  1 1 1
//! ```
//!
//! # Table layouts
//!
//! Triples are placed into the table by position. [`TableLayout::StateMajor`]
//! reads cell `(i, j)` from triple `i * alphabet_size + j` and checks that the
//! triple's `row`/`col` fields agree. [`TableLayout::Legacy`] reproduces the
//! historical tool exactly: it reads cell `(i, j)` from triple
//! `i * states_size + j` and ignores `row`/`col`. The two agree whenever
//! `alphabet_size == states_size`.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use super::error::{FormatError, LoadError};
use super::{Automaton, AutomatonBuilder};
use crate::numbers::{NumberError, Numbers};

const TRIPLE: usize = 3;

/// How the flat triple stream maps onto the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TableLayout {
    /// Triple `i * alphabet_size + j` holds cell `(i, j)`.
    ///
    /// The stream must hold exactly one triple per cell, and each triple's
    /// `(row, col)` must match its position.
    #[default]
    StateMajor,

    /// Triple `i * states_size + j` holds cell `(i, j)`.
    ///
    /// Bit-for-bit compatible with the historical loader: `row`/`col` are
    /// ignored and trailing integers are allowed.
    Legacy,
}

impl TableLayout {
    /// Get a human-readable name for this layout
    pub fn name(&self) -> &'static str {
        match self {
            TableLayout::StateMajor => "state-major",
            TableLayout::Legacy => "legacy",
        }
    }

    // Index of the triple holding cell (state, symbol).
    fn triple_index(&self, state: usize, symbol: usize, alphabet_size: usize, states_size: usize) -> usize {
        match self {
            TableLayout::StateMajor => state * alphabet_size + symbol,
            TableLayout::Legacy => state * states_size + symbol,
        }
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "state-major" | "statemajor" | "corrected" => Ok(TableLayout::StateMajor),
            "legacy" | "compat" => Ok(TableLayout::Legacy),
            _ => Err(format!(
                "Unknown table layout: {}. Valid options: state-major, legacy",
                s
            )),
        }
    }
}

/// Reads [`Automaton`] descriptions.
///
/// ```rust
/// use dfa_reach::automaton::AutomatonLoader;
///
/// let dfa = AutomatonLoader::new()
///     .parse_str("2 2 0 1 1\n0 0 0  0 1 1  1 0 1  1 1 1")
///     .unwrap();
/// assert_eq!(dfa.successors(0), &[0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomatonLoader {
    layout: TableLayout,
}

impl AutomatonLoader {
    /// Create a loader using the state-major layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader using `layout`.
    pub fn with_layout(layout: TableLayout) -> Self {
        Self { layout }
    }

    /// The layout this loader uses.
    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    /// Load a description from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened or read, and
    /// [`LoadError::Format`] if its content is malformed.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Automaton, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), layout = %self.layout, "loading automaton");

        let io_error = |source| LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        self.read_numbers(Numbers::new(BufReader::new(file).bytes()), Some(path))
    }

    /// Load a description from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if reading fails, and [`LoadError::Format`]
    /// if the content is malformed.
    pub fn load<R: Read>(&self, reader: R) -> Result<Automaton, LoadError> {
        self.read_numbers(Numbers::new(BufReader::new(reader).bytes()), None)
    }

    /// Load a description held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Format`] if the content is malformed.
    pub fn parse_str(&self, text: &str) -> Result<Automaton, LoadError> {
        self.load(text.as_bytes())
    }

    fn read_numbers<I>(&self, mut numbers: Numbers<I>, path: Option<&Path>) -> Result<Automaton, LoadError>
    where
        I: Iterator<Item = std::io::Result<u8>>,
    {
        let convert = |err: NumberError<std::io::Error>| match err {
            NumberError::Read(source) => LoadError::Io {
                path: path.map(Path::to_path_buf),
                source,
            },
            NumberError::TooLarge(digits) => FormatError::NumberTooLarge { digits }.into(),
        };

        let field = |numbers: &mut Numbers<I>, name: &'static str| match numbers.next() {
            Some(number) => number.map_err(|err| convert(err)),
            None => Err(LoadError::from(FormatError::UnexpectedEof { field: name })),
        };

        let alphabet_size = field(&mut numbers, "alphabet size")?;
        let states_size = field(&mut numbers, "state count")?;
        let initial_state = field(&mut numbers, "initial state")?;
        let final_states_size = field(&mut numbers, "final state count")?;

        let mut final_states = Vec::new();
        for _ in 0..final_states_size {
            final_states.push(field(&mut numbers, "final state")?);
        }

        debug!(
            alphabet_size,
            states_size,
            initial_state,
            final_states = final_states.len(),
            "parsed automaton header"
        );

        let flat = numbers.collect::<Result<Vec<_>, _>>().map_err(|err| convert(err))?;
        trace!(integers = flat.len(), "read transition stream");

        let mut builder = self.check_stream_length(alphabet_size, states_size, flat.len())?;
        builder = builder.initial_state(initial_state);
        for state in final_states {
            builder.add_final_state(state);
        }

        for state in 0..states_size {
            for symbol in 0..alphabet_size {
                let triple = self
                    .layout
                    .triple_index(state, symbol, alphabet_size, states_size);
                let base = triple * TRIPLE;

                if self.layout == TableLayout::StateMajor {
                    let found = (flat[base], flat[base + 1]);
                    if found != (state, symbol) {
                        return Err(FormatError::TransitionMismatch {
                            index: triple,
                            expected: (state, symbol),
                            found,
                        }
                        .into());
                    }
                }

                builder.add_transition(state, symbol, flat[base + 2]);
            }
        }

        Ok(builder.build()?)
    }

    // Verifies that the triple stream covers every offset the layout reads
    // before anything proportional to the declared dimensions is allocated.
    fn check_stream_length(
        &self,
        alphabet_size: usize,
        states_size: usize,
        found: usize,
    ) -> Result<AutomatonBuilder, FormatError> {
        let overflow = FormatError::DimensionOverflow {
            states_size,
            alphabet_size,
        };

        let cells = states_size
            .checked_mul(alphabet_size)
            .ok_or_else(|| overflow.clone())?;

        let expected = match self.layout {
            TableLayout::StateMajor => cells.checked_mul(TRIPLE),
            TableLayout::Legacy if cells == 0 => Some(0),
            // One past the third element of the last triple read
            TableLayout::Legacy => (states_size - 1)
                .checked_mul(states_size)
                .and_then(|n| n.checked_add(alphabet_size))
                .and_then(|n| n.checked_mul(TRIPLE)),
        }
        .ok_or(overflow)?;

        if found < expected {
            return Err(FormatError::TruncatedTransitions { expected, found });
        }
        if self.layout == TableLayout::StateMajor && found > expected {
            return Err(FormatError::TrailingTransitions { expected, found });
        }

        Ok(Automaton::builder(alphabet_size, states_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2 2 0 1 1\n0 0 0  0 1 1  1 0 1  1 1 1\n";

    #[test]
    fn test_parse_example() {
        let dfa = AutomatonLoader::new().parse_str(EXAMPLE).unwrap();
        let expected = Automaton::from_rows(2, 0, [1], vec![vec![0, 1], vec![1, 1]]).unwrap();
        assert_eq!(dfa, expected);
    }

    #[test]
    fn test_layouts_agree_on_square_tables() {
        let state_major = AutomatonLoader::new().parse_str(EXAMPLE).unwrap();
        let legacy = AutomatonLoader::with_layout(TableLayout::Legacy)
            .parse_str(EXAMPLE)
            .unwrap();
        assert_eq!(state_major, legacy);
    }

    #[test]
    fn test_punctuation_separates() {
        let text = "2,2,0;1:1|(0,0,0)(0,1,1)(1,0,1)(1,1,1)";
        let dfa = AutomatonLoader::new().parse_str(text).unwrap();
        assert_eq!(dfa.successors(1), &[1, 1]);
    }

    #[test]
    fn test_header_eof() {
        let err = AutomatonLoader::new().parse_str("2 2").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::UnexpectedEof { field: "initial state" })
        ));

        let err = AutomatonLoader::new().parse_str("no digits at all").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::UnexpectedEof { field: "alphabet size" })
        ));

        let err = AutomatonLoader::new().parse_str("1 1 0 3 0 0").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::UnexpectedEof { field: "final state" })
        ));
    }

    #[test]
    fn test_truncated_stream() {
        let err = AutomatonLoader::new()
            .parse_str("2 2 0 1 1\n0 0 0  0 1 1  1 0 1  1 1")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::TruncatedTransitions { expected: 12, found: 11 })
        ));
    }

    #[test]
    fn test_trailing_data_rejected_for_state_major() {
        let text = format!("{} 9", EXAMPLE);
        let err = AutomatonLoader::new().parse_str(&text).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::TrailingTransitions { expected: 12, found: 13 })
        ));

        AutomatonLoader::with_layout(TableLayout::Legacy)
            .parse_str(&text)
            .unwrap();
    }

    #[test]
    fn test_mislabelled_triple() {
        let err = AutomatonLoader::new()
            .parse_str("2 2 0 1 1\n0 0 0  0 1 1  1 1 1  1 0 1")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::TransitionMismatch {
                index: 2,
                expected: (1, 0),
                found: (1, 1),
            })
        ));
    }

    #[test]
    fn test_target_out_of_range() {
        let err = AutomatonLoader::new()
            .parse_str("1 1 0 1 0\n0 0 5")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::StateOutOfRange { field: "transition target", state: 5, .. })
        ));
    }

    #[test]
    fn test_initial_state_out_of_range() {
        let err = AutomatonLoader::new()
            .parse_str("1 1 4 0\n0 0 0")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::StateOutOfRange { field: "initial state", .. })
        ));
    }

    #[test]
    fn test_legacy_strides_by_state_count() {
        // alphabet 1, states 2: legacy reads triples 0 and 2, skipping triple 1
        let text = "1 2 0 1 1\n0 0 1  9 9 0  1 0 0";
        let legacy = AutomatonLoader::with_layout(TableLayout::Legacy)
            .parse_str(text)
            .unwrap();
        assert_eq!(legacy.successors(0), &[1]);
        assert_eq!(legacy.successors(1), &[0]);

        // the corrected layout reads consecutive triples and rejects the extra one
        assert!(AutomatonLoader::new().parse_str(text).is_err());
    }

    #[test]
    fn test_legacy_requires_largest_offset() {
        // states 2, alphabet 1: largest triple index is 1*2 + 0 = 2
        let err = AutomatonLoader::with_layout(TableLayout::Legacy)
            .parse_str("1 2 0 0\n0 0 1  1 0 0")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::TruncatedTransitions { expected: 9, found: 6 })
        ));
    }

    #[test]
    fn test_huge_dimensions_fail_before_allocation() {
        let err = AutomatonLoader::new()
            .parse_str("1000000000 1000000000 0 0")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::TruncatedTransitions { found: 0, .. })
                | LoadError::Format(FormatError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn test_number_too_large() {
        let err = AutomatonLoader::new()
            .parse_str("99999999999999999999999 1 0 0")
            .unwrap_err();
        assert!(matches!(err, LoadError::Format(FormatError::NumberTooLarge { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = AutomatonLoader::new()
            .load_path("/definitely/not/here/automaton")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { path: Some(_), .. }));
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("legacy".parse::<TableLayout>(), Ok(TableLayout::Legacy));
        assert_eq!("State-Major".parse::<TableLayout>(), Ok(TableLayout::StateMajor));
        assert!("diagonal".parse::<TableLayout>().is_err());
        assert_eq!(TableLayout::default().to_string(), "state-major");
    }
}
