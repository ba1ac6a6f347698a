//! Plain text serialization in the numeric description format.
//!
//! # Format
//!
//! ```text
//! alphabet_size states_size initial_state
//! final_states_size final_state...
//! row col target
//! row col target
//! ...
//! ```
//!
//! Triples are written in state-major order, one per line, which is the
//! layout [`AutomatonLoader`] reads by default.

use std::io::{BufWriter, Read, Write};

use super::{AutomatonSerializer, SerializationError};
use crate::automaton::{Automaton, AutomatonLoader};

/// Plain text serializer for the numeric description format.
pub struct PlainTextSerializer;

impl AutomatonSerializer for PlainTextSerializer {
    fn serialize<W: Write>(automaton: &Automaton, writer: W) -> Result<(), SerializationError> {
        let mut writer = BufWriter::new(writer);

        writeln!(
            writer,
            "{} {} {}",
            automaton.alphabet_size(),
            automaton.states_size(),
            automaton.initial_state()
        )?;

        let finals: Vec<String> = automaton.final_states().map(|s| s.to_string()).collect();
        if finals.is_empty() {
            writeln!(writer, "0")?;
        } else {
            writeln!(writer, "{} {}", finals.len(), finals.join(" "))?;
        }

        for (state, symbol, target) in automaton.transitions() {
            writeln!(writer, "{} {} {}", state, symbol, target)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Automaton, SerializationError> {
        Ok(AutomatonLoader::new().load(reader)?)
    }
}
