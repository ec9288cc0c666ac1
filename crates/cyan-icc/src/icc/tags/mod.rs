//! ICC Profile Tag Types
//!
//! Tags contain the actual profile data. Each tag element has:
//! - A 4-byte type signature identifying the data format
//! - 4 reserved bytes
//! - Type-specific data
//!
//! Only the types this crate reads or generates are decoded; everything
//! else is carried as opaque bytes by the container.
//!
//! See ICC.1:2022 Section 10.

mod curves;
mod lut;
mod text;
mod xyz;

pub use curves::CurveData;
pub use lut::Lut16Data;
pub use text::{LocalizedString, TextData};
pub use xyz::XyzTagData;

use super::error::IccError;
use super::types::{TypeSignature, read_u32};

/// Decoded tag element
#[derive(Debug, Clone, PartialEq)]
pub enum TagData {
    /// XYZ type data (colorants, white point)
    Xyz(XyzTagData),
    /// Curve type (TRC)
    Curve(CurveData),
    /// `text`, `desc` or `mluc`
    Text(TextData),
    /// 16-bit LUT
    Lut16(Lut16Data),
    /// Any other type, identified by its type signature
    Unknown { type_sig: u32 },
}

impl TagData {
    /// Parse a tag element, dispatching on its type signature
    pub fn parse(element: &[u8]) -> Result<Self, IccError> {
        let type_sig = read_u32(element, 0).ok_or_else(|| {
            IccError::CorruptedData("Tag data too small for header".to_string())
        })?;

        match TypeSignature(type_sig) {
            TypeSignature::XYZ => XyzTagData::parse(element).map(TagData::Xyz),
            TypeSignature::CURVE => CurveData::parse(element).map(TagData::Curve),
            TypeSignature::TEXT => TextData::parse_text(element).map(TagData::Text),
            TypeSignature::DESC => TextData::parse_desc(element).map(TagData::Text),
            TypeSignature::MLUC => TextData::parse_mluc(element).map(TagData::Text),
            TypeSignature::LUT16 => Lut16Data::parse(element).map(TagData::Lut16),
            _ => Ok(TagData::Unknown { type_sig }),
        }
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match self {
            TagData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_xyz(&self) -> Option<&XyzTagData> {
        match self {
            TagData::Xyz(xyz) => Some(xyz),
            _ => None,
        }
    }

    pub fn as_curve(&self) -> Option<&CurveData> {
        match self {
            TagData::Curve(curve) => Some(curve),
            _ => None,
        }
    }
}
