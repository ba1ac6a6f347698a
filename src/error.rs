//! Crate-level error type.

use thiserror::Error;

use crate::automaton::{FormatError, LoadError};
use crate::transition::IndexError;
use crate::word::WordError;

#[cfg(feature = "serialization")]
use crate::serialization::SerializationError;

/// Any failure that prevents a decision from being made.
#[derive(Debug, Error)]
pub enum Error {
    /// The automaton description could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A word token could not be parsed.
    #[error("invalid word: {0}")]
    Word(#[from] WordError),

    /// A state or symbol index was out of range.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A serialized automaton could not be read or written.
    #[cfg(feature = "serialization")]
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Load(LoadError::Format(err))
    }
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Description file missing or unreadable
    Io,
    /// Malformed description or word
    Format,
    /// Out-of-range state or symbol
    Index,
}

impl ErrorKind {
    /// Process exit code for this kind.
    ///
    /// `1` and `2` are left to generic failures and usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Io => 3,
            ErrorKind::Format => 4,
            ErrorKind::Index => 5,
        }
    }
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Load(LoadError::Io { .. }) => ErrorKind::Io,
            Error::Load(LoadError::Format(_)) | Error::Word(_) => ErrorKind::Format,
            Error::Index(_) => ErrorKind::Index,
            #[cfg(feature = "serialization")]
            Error::Serialization(err) => match err {
                SerializationError::Io(_) => ErrorKind::Io,
                SerializationError::Load(LoadError::Io { .. }) => ErrorKind::Io,
                _ => ErrorKind::Format,
            },
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
