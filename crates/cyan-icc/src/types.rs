//! Public API types for cyan-icc
//!
//! These types keep the container internals (`icc` module) out of the
//! service-level API.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::icc::ColorSpace;

/// Color space family a profile belongs to
///
/// Drives which default profile set and which menu a profile is associated
/// with. Anything that is not RGB, CMYK or gray (Lab, XYZ, unknown
/// signatures) maps to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpaceKind {
    #[default]
    None,
    Rgb,
    Cmyk,
    Gray,
}

impl ColorSpaceKind {
    /// All kinds, in code order
    pub const ALL: [Self; 4] = [Self::None, Self::Rgb, Self::Cmyk, Self::Gray];

    /// Stable numeric code (None=0, Rgb=1, Cmyk=2, Gray=3)
    pub const fn as_code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Rgb => 1,
            Self::Cmyk => 2,
            Self::Gray => 3,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Rgb),
            2 => Some(Self::Cmyk),
            3 => Some(Self::Gray),
            _ => None,
        }
    }
}

impl From<ColorSpace> for ColorSpaceKind {
    fn from(cs: ColorSpace) -> Self {
        match cs {
            ColorSpace::Rgb => Self::Rgb,
            ColorSpace::Cmyk => Self::Cmyk,
            ColorSpace::Gray => Self::Gray,
            _ => Self::None,
        }
    }
}

impl fmt::Display for ColorSpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Gray => "Gray",
        })
    }
}

/// Immutable ICC profile bytes
///
/// Cloning shares the underlying buffer. Edits never mutate a blob; they
/// produce new bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ProfileBlob(Arc<[u8]>);

impl ProfileBlob {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for ProfileBlob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ProfileBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ProfileBlob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl From<&[u8]> for ProfileBlob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl fmt::Debug for ProfileBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileBlob")
            .field("len", &self.0.len())
            .finish()
    }
}
