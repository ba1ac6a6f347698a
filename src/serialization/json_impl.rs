//! JSON serializer for human-readable format.

use std::io::{Read, Write};

use super::{AutomatonData, AutomatonSerializer, SerializationError};
use crate::automaton::Automaton;

/// JSON serializer for human-readable format.
///
/// Transitions are written as one array of successors per state.
pub struct JsonSerializer;

impl AutomatonSerializer for JsonSerializer {
    fn serialize<W: Write>(automaton: &Automaton, mut writer: W) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(&mut writer, &AutomatonData::from(automaton))?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Automaton, SerializationError> {
        let data: AutomatonData = serde_json::from_reader(&mut reader)?;
        Ok(Automaton::try_from(data)?)
    }
}
