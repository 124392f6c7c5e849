use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::loader::EXPECTED_HEADER;

/// Input-side failures. All of these are fatal and abort the run before any
/// report is printed.
#[derive(Debug)]
pub enum InputError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
    HeaderMismatch { found: Vec<String> },
    Malformed { row: usize, message: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFound(path) => {
                write!(f, "Click log not found at {:?}", path)
            }
            InputError::Io { path, source } => {
                write!(f, "Failed to read click log {:?}: {}", path, source)
            }
            InputError::HeaderMismatch { found } => {
                write!(
                    f,
                    "Unexpected click log header [{}], expected [{}]",
                    found.join(", "),
                    EXPECTED_HEADER.join(", ")
                )
            }
            InputError::Malformed { row, message } => {
                write!(f, "Malformed record at row {}: {}", row, message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
