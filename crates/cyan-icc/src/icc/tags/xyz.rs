//! XYZ Tag Type
//!
//! The XYZType contains an array of XYZ values. Used for colorant tags,
//! white point, black point, etc.
//!
//! See ICC.1:2022 Section 10.31

use crate::color::Xyz;
use crate::icc::error::IccError;
use crate::icc::types::{TypeSignature, XyzNumber};

/// XYZ tag data - contains one or more XYZ values
#[derive(Debug, Clone, PartialEq)]
pub struct XyzTagData {
    /// XYZ values stored in the tag
    pub values: Vec<XyzNumber>,
}

impl XyzTagData {
    pub fn new(xyz: Xyz) -> Self {
        Self {
            values: vec![XyzNumber::from_xyz(xyz)],
        }
    }

    /// Parse a whole XYZ element (type signature included)
    pub fn parse(element: &[u8]) -> Result<Self, IccError> {
        let data = element.get(8..).unwrap_or_default();
        if data.len() < 12 {
            return Err(IccError::CorruptedData("XYZ tag too small".to_string()));
        }

        let values = data
            .chunks_exact(12)
            .filter_map(XyzNumber::from_bytes)
            .collect();

        Ok(Self { values })
    }

    /// Get the first XYZ value as Xyz color type
    pub fn to_xyz(&self) -> Option<Xyz> {
        self.values.first().map(|v| v.to_xyz())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.values.len() * 12);
        out.extend_from_slice(&TypeSignature::XYZ.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        for value in &self.values {
            out.extend_from_slice(&value.to_be_bytes());
        }
        out
    }
}
