//! Profile metadata
//!
//! The descriptive fields a profile dialog shows, derived from a single
//! parse of one blob. Never cached: every call reads the bytes again.

use crate::error::Result;
use crate::icc::{ColorSpace, IccProfile, ProfileClass, ProfileVersion};
use crate::types::ColorSpaceKind;

/// Read-only view of a profile's descriptive fields
///
/// Text fields are empty when the tag is missing or undecodable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileMetadata {
    /// `desc`
    pub description: String,
    /// `dmnd`
    pub manufacturer: String,
    /// `cprt`
    pub copyright: String,
    /// `dmdd`
    pub model: String,
    pub color_space: ColorSpaceKind,
    /// Raw data color space from the header
    pub header_color_space: ColorSpace,
    pub device_class: ProfileClass,
    pub version: ProfileVersion,
}

impl ProfileMetadata {
    pub fn from_profile(profile: &IccProfile<'_>) -> Self {
        Self {
            description: profile.description(),
            manufacturer: profile.manufacturer(),
            copyright: profile.copyright(),
            model: profile.model(),
            color_space: profile.color_space().into(),
            header_color_space: profile.color_space(),
            device_class: profile.header.device_class,
            version: profile.header.version,
        }
    }

    /// Parse `data` and derive its metadata
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::from_profile(&IccProfile::parse(data)?))
    }
}
