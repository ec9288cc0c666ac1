//! Error types for cyan-icc

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::icc::IccError;
use crate::types::ColorSpaceKind;

/// Result type for cyan-icc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in profile service operations
///
/// A missing text tag is not an error; it reads as an empty string.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input path could not be opened or read
    #[error("Cannot read profile {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a valid ICC profile
    #[error("Profile parse error: {0}")]
    Parse(#[from] IccError),

    /// No default profile exists for this color space
    #[error("Unsupported color space: {0}")]
    UnsupportedColorSpace(ColorSpaceKind),

    /// The output could not be created, written or moved into place
    #[error("Cannot write profile {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn file_not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
