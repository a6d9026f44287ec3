//! Error types for reading sources and writing sinks
//!
//! The transducer itself cannot fail on string input; every variant here comes
//! from the publishing layer around it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while publishing a document
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not exist
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),
    /// The input exists but could not be read as UTF-8 text
    #[error("Error reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output could not be created or written
    #[error("Error writing file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::MissingInput(path) => path,
            ConvertError::Read { path, .. } | ConvertError::Write { path, .. } => path,
        }
    }
}
