//! Automaton file format auto-detection

use super::args::SerializationFormat;
use super::paths::file_extension;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detected format with the method that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDetection {
    /// Detected or specified format
    pub format: SerializationFormat,
    /// Detection method used
    pub method: DetectionMethod,
}

/// Method used to detect an automaton's format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Heuristic detection via file extension
    Extension,
    /// Heuristic detection via file content analysis
    Content,
    /// User explicitly specified
    UserSpecified,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extension => write!(f, "heuristic (file extension)"),
            Self::Content => write!(f, "heuristic (content analysis)"),
            Self::UserSpecified => write!(f, "user specified"),
        }
    }
}

/// Detect the format of an existing automaton file
///
/// A user-specified format always wins. Otherwise a `.json`, `.bin` or
/// `.txt` extension decides, and failing that the first bytes are inspected.
pub fn detect_format(path: &Path, user_format: Option<SerializationFormat>) -> Result<FormatDetection> {
    if let Some(format) = user_format {
        return Ok(FormatDetection {
            format,
            method: DetectionMethod::UserSpecified,
        });
    }

    if let Some(format) = format_from_extension(path) {
        return Ok(FormatDetection {
            format,
            method: DetectionMethod::Extension,
        });
    }

    detect_by_content(path)
}

/// Format implied by a path's extension, if any
pub fn format_from_extension(path: &Path) -> Option<SerializationFormat> {
    let ext = path.extension().and_then(|s| s.to_str())?;
    [
        SerializationFormat::Text,
        SerializationFormat::Bincode,
        SerializationFormat::Json,
    ]
    .into_iter()
    .find(|&format| file_extension(format) == ext)
}

/// Detect format via content analysis
///
/// JSON starts with `{` after optional whitespace; a description made only of
/// printable ASCII and whitespace is text; anything else is bincode.
fn detect_by_content(path: &Path) -> Result<FormatDetection> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut buffer = [0u8; 512];
    let n = file
        .read(&mut buffer)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let head = &buffer[..n];

    let first = head.iter().find(|b| !b.is_ascii_whitespace());
    let format = if first == Some(&b'{') {
        SerializationFormat::Json
    } else if head
        .iter()
        .all(|b| b.is_ascii_graphic() || b.is_ascii_whitespace())
    {
        SerializationFormat::Text
    } else {
        SerializationFormat::Bincode
    };

    Ok(FormatDetection {
        format,
        method: DetectionMethod::Content,
    })
}
