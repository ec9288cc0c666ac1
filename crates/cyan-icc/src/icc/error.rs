//! ICC Container Error Types

use std::fmt;

/// Errors that can occur when reading or writing ICC profile containers
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IccError {
    /// Profile data is too small
    TooSmall { expected: usize, actual: usize },
    /// Invalid profile signature (should be 'acsp')
    InvalidSignature(u32),
    /// Profile size in header doesn't match data
    SizeMismatch {
        header_size: u32,
        actual_size: usize,
    },
    /// Tag table does not fit in the profile
    TagTableOutOfBounds { count: u32, profile_size: usize },
    /// Tag offset is out of bounds
    TagOutOfBounds {
        tag: u32,
        offset: u32,
        size: u32,
        profile_size: usize,
    },
    /// Corrupted or invalid data
    CorruptedData(String),
    /// Profile would not fit the 32-bit size fields
    TooLarge(usize),
}

impl fmt::Display for IccError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { expected, actual } => {
                write!(
                    f,
                    "Profile too small: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Self::InvalidSignature(sig) => {
                write!(
                    f,
                    "Invalid profile signature: 0x{:08X} (expected 'acsp')",
                    sig
                )
            }
            Self::SizeMismatch {
                header_size,
                actual_size,
            } => {
                write!(
                    f,
                    "Size mismatch: header says {} bytes, data is {} bytes",
                    header_size, actual_size
                )
            }
            Self::TagTableOutOfBounds {
                count,
                profile_size,
            } => {
                write!(
                    f,
                    "Tag table with {} entries does not fit in {} bytes",
                    count, profile_size
                )
            }
            Self::TagOutOfBounds {
                tag,
                offset,
                size,
                profile_size,
            } => {
                write!(
                    f,
                    "Tag '{:08X}' out of bounds: offset {} + size {} > profile size {}",
                    tag, offset, size, profile_size
                )
            }
            Self::CorruptedData(msg) => {
                write!(f, "Corrupted data: {}", msg)
            }
            Self::TooLarge(len) => {
                write!(f, "Profile too large: {} bytes", len)
            }
        }
    }
}

impl std::error::Error for IccError {}
