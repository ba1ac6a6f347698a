//! Bincode serializer for compact binary format.

use std::io::{Read, Write};

use super::{AutomatonData, AutomatonSerializer, SerializationError};
use crate::automaton::Automaton;

/// Bincode serializer for compact binary format.
///
/// Fast and small; the encoding is not meant to be read by people.
pub struct BincodeSerializer;

impl AutomatonSerializer for BincodeSerializer {
    fn serialize<W: Write>(automaton: &Automaton, mut writer: W) -> Result<(), SerializationError> {
        bincode::serialize_into(&mut writer, &AutomatonData::from(automaton))?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Automaton, SerializationError> {
        let data: AutomatonData = bincode::deserialize_from(&mut reader)?;
        Ok(Automaton::try_from(data)?)
    }
}
