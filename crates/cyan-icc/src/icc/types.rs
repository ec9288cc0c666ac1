//! ICC Profile Basic Types
//!
//! These types match the ICC.1:2022 specification encodings.

use crate::color::Xyz;

/// ICC Tag Signature (4-byte ASCII code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagSignature(pub u32);

impl TagSignature {
    /// Create from 4 ASCII characters
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    /// Convert to ASCII string (if valid)
    pub fn to_string(&self) -> String {
        let bytes = self.0.to_be_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub const A2B0: Self = Self::from_bytes(*b"A2B0");
    pub const B2A0: Self = Self::from_bytes(*b"B2A0");
    pub const BLUE_COLORANT: Self = Self::from_bytes(*b"bXYZ");
    pub const BLUE_TRC: Self = Self::from_bytes(*b"bTRC");
    pub const COPYRIGHT: Self = Self::from_bytes(*b"cprt");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    /// Device model description
    pub const DMDD: Self = Self::from_bytes(*b"dmdd");
    /// Device manufacturer description
    pub const DMND: Self = Self::from_bytes(*b"dmnd");
    pub const GRAY_TRC: Self = Self::from_bytes(*b"kTRC");
    pub const GREEN_COLORANT: Self = Self::from_bytes(*b"gXYZ");
    pub const GREEN_TRC: Self = Self::from_bytes(*b"gTRC");
    pub const MEDIA_WHITE: Self = Self::from_bytes(*b"wtpt");
    pub const RED_COLORANT: Self = Self::from_bytes(*b"rXYZ");
    pub const RED_TRC: Self = Self::from_bytes(*b"rTRC");
}

/// Type signatures for ICC tag data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSignature(pub u32);

impl TypeSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const XYZ: Self = Self::from_bytes(*b"XYZ ");
    pub const CURVE: Self = Self::from_bytes(*b"curv");
    pub const TEXT: Self = Self::from_bytes(*b"text");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const MLUC: Self = Self::from_bytes(*b"mluc");
    pub const LUT16: Self = Self::from_bytes(*b"mft2");

    /// Big-endian bytes as written at the start of a tag element
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// s15Fixed16Number - 16.16 fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct S15Fixed16(pub i32);

impl S15Fixed16 {
    /// Create from f64 value, rounding to the nearest representable step
    pub fn from_f64(val: f64) -> Self {
        Self((val * 65536.0).round() as i32)
    }

    /// Convert to f64
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 65536.0
    }

    /// Parse from big-endian bytes
    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(i32::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// u8Fixed8Number - unsigned 8.8 fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U8Fixed8(pub u16);

impl U8Fixed8 {
    pub fn from_f64(val: f64) -> Self {
        Self((val * 256.0).round().clamp(0.0, u16::MAX as f64) as u16)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 256.0
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// XYZNumber - ICC XYZ value (3 × s15Fixed16)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzNumber {
    pub x: S15Fixed16,
    pub y: S15Fixed16,
    pub z: S15Fixed16,
}

impl XyzNumber {
    /// Encoded D50 illuminant, as stored in the header of every ICC profile
    pub const D50: Self = Self {
        x: S15Fixed16(0x0000_F6D6),
        y: S15Fixed16(0x0001_0000),
        z: S15Fixed16(0x0000_D32D),
    };

    /// Parse from 12 bytes (big-endian)
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 12 {
            return None;
        }
        Some(Self {
            x: S15Fixed16::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            y: S15Fixed16::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            z: S15Fixed16::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        })
    }

    pub fn from_xyz(xyz: Xyz) -> Self {
        Self {
            x: S15Fixed16::from_f64(xyz.x),
            y: S15Fixed16::from_f64(xyz.y),
            z: S15Fixed16::from_f64(xyz.z),
        }
    }

    /// Convert to Xyz color type
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }

    pub fn to_be_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[0..4].copy_from_slice(&self.x.to_be_bytes());
        out[4..8].copy_from_slice(&self.y.to_be_bytes());
        out[8..12].copy_from_slice(&self.z.to_be_bytes());
        out
    }
}

/// dateTimeNumber - ICC date/time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeNumber {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

impl DateTimeNumber {
    /// Parse from 12 bytes (big-endian)
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 12 {
            return None;
        }
        Some(Self {
            year: u16::from_be_bytes([bytes[0], bytes[1]]),
            month: u16::from_be_bytes([bytes[2], bytes[3]]),
            day: u16::from_be_bytes([bytes[4], bytes[5]]),
            hour: u16::from_be_bytes([bytes[6], bytes[7]]),
            minute: u16::from_be_bytes([bytes[8], bytes[9]]),
            second: u16::from_be_bytes([bytes[10], bytes[11]]),
        })
    }

    pub fn to_be_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        for (i, v) in [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
        .into_iter()
        .enumerate()
        {
            out[i * 2..i * 2 + 2].copy_from_slice(&v.to_be_bytes());
        }
        out
    }
}

/// Read a big-endian u32 at `offset`, if in bounds
#[inline]
pub(crate) fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
