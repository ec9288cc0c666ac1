//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile information.
//! See ICC.1:2022 Section 7.2.
//!
//! Enumerated header fields are decoded leniently: a value outside the
//! registered set is kept verbatim instead of rejecting the profile.

use super::error::IccError;
use super::types::{DateTimeNumber, XyzNumber, read_u32};

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header size in bytes
pub const HEADER_SIZE: usize = 128;

/// Minimum valid profile size (header plus tag count)
pub const MIN_PROFILE_SIZE: usize = HEADER_SIZE + 4;

/// Byte range of the profile ID (MD5) inside the header
pub const PROFILE_ID_RANGE: std::ops::Range<usize> = 84..100;

/// ICC Profile Header (128 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Profile size in bytes
    pub size: u32,
    /// Preferred CMM type signature
    pub cmm_type: u32,
    /// Profile version (major.minor.bugfix)
    pub version: ProfileVersion,
    /// Device class (display, input, output, etc.)
    pub device_class: ProfileClass,
    /// Color space of data (RGB, CMYK, etc.)
    pub color_space: ColorSpace,
    /// Profile connection space (XYZ or Lab)
    pub pcs: ColorSpace,
    /// Date and time profile was created
    pub creation_date: DateTimeNumber,
    /// Primary platform signature
    pub platform: u32,
    /// Profile flags
    pub flags: u32,
    /// Device manufacturer signature
    pub manufacturer: u32,
    /// Device model signature
    pub model: u32,
    /// Device attributes
    pub attributes: u64,
    /// Rendering intent
    pub rendering_intent: RenderingIntent,
    /// PCS illuminant (should be D50)
    pub illuminant: XyzNumber,
    /// Profile creator signature
    pub creator: u32,
    /// Profile ID (MD5 hash, or zero)
    pub profile_id: [u8; 16],
}

impl IccHeader {
    /// Parse header from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < HEADER_SIZE {
            return Err(IccError::TooSmall {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let be = |offset: usize| read_u32(data, offset).unwrap_or_default();

        let signature = be(36);
        if signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(signature));
        }

        let version = ProfileVersion {
            major: data[8],
            minor: data[9] >> 4,
            bugfix: data[9] & 0x0F,
        };

        let attributes = u64::from_be_bytes([
            data[56], data[57], data[58], data[59], data[60], data[61], data[62], data[63],
        ]);

        let mut profile_id = [0u8; 16];
        profile_id.copy_from_slice(&data[PROFILE_ID_RANGE]);

        Ok(Self {
            size: be(0),
            cmm_type: be(4),
            version,
            device_class: ProfileClass::from_u32(be(12)),
            color_space: ColorSpace::from_u32(be(16)),
            pcs: ColorSpace::from_u32(be(20)),
            creation_date: DateTimeNumber::from_bytes(&data[24..36]).unwrap_or_default(),
            platform: be(40),
            flags: be(44),
            manufacturer: be(48),
            model: be(52),
            attributes,
            rendering_intent: RenderingIntent::from_u32(be(64)),
            illuminant: XyzNumber::from_bytes(&data[68..80]).unwrap_or_default(),
            creator: be(80),
            profile_id,
        })
    }

    /// Check the declared size against the available data
    pub fn validate(&self, data_len: usize) -> Result<(), IccError> {
        if (self.size as usize) < MIN_PROFILE_SIZE {
            return Err(IccError::SizeMismatch {
                header_size: self.size,
                actual_size: data_len,
            });
        }

        if self.size as usize > data_len {
            return Err(IccError::SizeMismatch {
                header_size: self.size,
                actual_size: data_len,
            });
        }

        Ok(())
    }

    /// Encode the header. The size field is written as stored in `self.size`.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.size.to_be_bytes());
        out[4..8].copy_from_slice(&self.cmm_type.to_be_bytes());
        out[8] = self.version.major;
        out[9] = (self.version.minor << 4) | (self.version.bugfix & 0x0F);
        out[12..16].copy_from_slice(&self.device_class.to_u32().to_be_bytes());
        out[16..20].copy_from_slice(&self.color_space.to_u32().to_be_bytes());
        out[20..24].copy_from_slice(&self.pcs.to_u32().to_be_bytes());
        out[24..36].copy_from_slice(&self.creation_date.to_be_bytes());
        out[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
        out[40..44].copy_from_slice(&self.platform.to_be_bytes());
        out[44..48].copy_from_slice(&self.flags.to_be_bytes());
        out[48..52].copy_from_slice(&self.manufacturer.to_be_bytes());
        out[52..56].copy_from_slice(&self.model.to_be_bytes());
        out[56..64].copy_from_slice(&self.attributes.to_be_bytes());
        out[64..68].copy_from_slice(&self.rendering_intent.to_u32().to_be_bytes());
        out[68..80].copy_from_slice(&self.illuminant.to_be_bytes());
        out[80..84].copy_from_slice(&self.creator.to_be_bytes());
        out[PROFILE_ID_RANGE].copy_from_slice(&self.profile_id);
        out
    }
}

/// ICC Profile Version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub bugfix: u8,
}

impl ProfileVersion {
    pub const V2_1: Self = Self::new(2, 1, 0);
    pub const V4_3: Self = Self::new(4, 3, 0);

    pub const fn new(major: u8, minor: u8, bugfix: u8) -> Self {
        Self {
            major,
            minor,
            bugfix,
        }
    }

    /// Check if version is at least the specified version
    pub fn at_least(&self, major: u8, minor: u8) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// Profiles from v4 on store text as multiLocalizedUnicodeType
    pub fn uses_mluc(&self) -> bool {
        self.major >= 4
    }
}

impl std::fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
    /// Device link
    DeviceLink,
    /// Color space conversion
    ColorSpace,
    /// Abstract profile
    Abstract,
    /// Named color profile
    NamedColor,
    /// Unregistered class signature
    Unknown(u32),
}

impl ProfileClass {
    pub fn from_u32(val: u32) -> Self {
        match &val.to_be_bytes() {
            b"scnr" => Self::Input,
            b"mntr" => Self::Display,
            b"prtr" => Self::Output,
            b"link" => Self::DeviceLink,
            b"spac" => Self::ColorSpace,
            b"abst" => Self::Abstract,
            b"nmcl" => Self::NamedColor,
            _ => Self::Unknown(val),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Input => u32::from_be_bytes(*b"scnr"),
            Self::Display => u32::from_be_bytes(*b"mntr"),
            Self::Output => u32::from_be_bytes(*b"prtr"),
            Self::DeviceLink => u32::from_be_bytes(*b"link"),
            Self::ColorSpace => u32::from_be_bytes(*b"spac"),
            Self::Abstract => u32::from_be_bytes(*b"abst"),
            Self::NamedColor => u32::from_be_bytes(*b"nmcl"),
            Self::Unknown(val) => *val,
        }
    }
}

/// ICC data color space signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    Xyz,
    Lab,
    Luv,
    YCbCr,
    Yxy,
    Rgb,
    Gray,
    Hsv,
    Hls,
    Cmyk,
    Cmy,
    /// N-color spaces ('2CLR' to 'FCLR'), carrying the channel count
    MultiColor(u8),
    /// Unregistered signature
    Unknown(u32),
}

impl ColorSpace {
    pub fn from_u32(val: u32) -> Self {
        let bytes = val.to_be_bytes();
        match &bytes {
            b"XYZ " => Self::Xyz,
            b"Lab " => Self::Lab,
            b"Luv " => Self::Luv,
            b"YCbr" => Self::YCbCr,
            b"Yxy " => Self::Yxy,
            b"RGB " => Self::Rgb,
            b"GRAY" => Self::Gray,
            b"HSV " => Self::Hsv,
            b"HLS " => Self::Hls,
            b"CMYK" => Self::Cmyk,
            b"CMY " => Self::Cmy,
            [n, b'C', b'L', b'R'] => match (*n as char).to_digit(16) {
                Some(count) if count >= 2 => Self::MultiColor(count as u8),
                _ => Self::Unknown(val),
            },
            _ => Self::Unknown(val),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Xyz => u32::from_be_bytes(*b"XYZ "),
            Self::Lab => u32::from_be_bytes(*b"Lab "),
            Self::Luv => u32::from_be_bytes(*b"Luv "),
            Self::YCbCr => u32::from_be_bytes(*b"YCbr"),
            Self::Yxy => u32::from_be_bytes(*b"Yxy "),
            Self::Rgb => u32::from_be_bytes(*b"RGB "),
            Self::Gray => u32::from_be_bytes(*b"GRAY"),
            Self::Hsv => u32::from_be_bytes(*b"HSV "),
            Self::Hls => u32::from_be_bytes(*b"HLS "),
            Self::Cmyk => u32::from_be_bytes(*b"CMYK"),
            Self::Cmy => u32::from_be_bytes(*b"CMY "),
            Self::MultiColor(n) => {
                let digit = std::char::from_digit(*n as u32, 16)
                    .map(|c| c.to_ascii_uppercase() as u8)
                    .unwrap_or(b'0');
                u32::from_be_bytes([digit, b'C', b'L', b'R'])
            }
            Self::Unknown(val) => *val,
        }
    }
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    /// Perceptual - best for photographs
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors
    RelativeColorimetric,
    /// Saturation - maintains saturation
    Saturation,
    /// Absolute colorimetric - preserves white point
    AbsoluteColorimetric,
    /// Out-of-range value, kept as stored
    Unknown(u32),
}

impl RenderingIntent {
    pub fn from_u32(val: u32) -> Self {
        match val {
            0 => Self::Perceptual,
            1 => Self::RelativeColorimetric,
            2 => Self::Saturation,
            3 => Self::AbsoluteColorimetric,
            _ => Self::Unknown(val),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::RelativeColorimetric => 1,
            Self::Saturation => 2,
            Self::AbsoluteColorimetric => 3,
            Self::Unknown(val) => *val,
        }
    }
}
