//! Reference implementation wrappers
//!
//! Extract profile metadata through the reference CMSs, for comparison
//! with what cyan-icc reads from the same bytes.

use anyhow::anyhow;
use cyan_icc::ColorSpaceKind;
use lcms2::{ColorSpaceSignature, InfoType, Locale, Profile};

/// Metadata as a reference CMS reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMetadata {
    pub description: String,
    pub manufacturer: String,
    pub model: String,
    pub copyright: String,
    pub kind: ColorSpaceKind,
}

/// Read metadata with lcms2 (en_US)
pub fn lcms2_metadata(data: &[u8]) -> anyhow::Result<ReferenceMetadata> {
    let profile = Profile::new_icc(data).map_err(|e| anyhow!("lcms2 parse: {:?}", e))?;
    let info = |kind| {
        profile
            .info(kind, Locale::new("en_US"))
            .unwrap_or_default()
    };

    Ok(ReferenceMetadata {
        description: info(InfoType::Description),
        manufacturer: info(InfoType::Manufacturer),
        model: info(InfoType::Model),
        copyright: info(InfoType::Copyright),
        kind: match profile.color_space() {
            ColorSpaceSignature::RgbData => ColorSpaceKind::Rgb,
            ColorSpaceSignature::CmykData => ColorSpaceKind::Cmyk,
            ColorSpaceSignature::GrayData => ColorSpaceKind::Gray,
            _ => ColorSpaceKind::None,
        },
    })
}

/// Color space family as moxcms reads it
pub fn moxcms_kind(data: &[u8]) -> anyhow::Result<ColorSpaceKind> {
    let profile = moxcms::ColorProfile::new_from_slice(data)
        .map_err(|e| anyhow!("moxcms parse: {:?}", e))?;
    Ok(match profile.color_space {
        moxcms::DataColorSpace::Rgb => ColorSpaceKind::Rgb,
        moxcms::DataColorSpace::Cmyk => ColorSpaceKind::Cmyk,
        moxcms::DataColorSpace::Gray => ColorSpaceKind::Gray,
        _ => ColorSpaceKind::None,
    })
}

/// Description as moxcms reads it, `None` when the tag is absent
pub fn moxcms_description(data: &[u8]) -> anyhow::Result<Option<String>> {
    let profile = moxcms::ColorProfile::new_from_slice(data)
        .map_err(|e| anyhow!("moxcms parse: {:?}", e))?;
    Ok(profile.description.as_ref().map(|text| match text {
        moxcms::ProfileText::PlainString(s) => s.clone(),
        moxcms::ProfileText::Localizable(locs) => {
            locs.first().map(|l| l.value.clone()).unwrap_or_default()
        }
        moxcms::ProfileText::Description(desc) => desc.ascii_string.clone(),
    }))
}

/// Whether qcms accepts the profile
pub fn qcms_accepts(data: &[u8]) -> bool {
    qcms::Profile::new_from_slice(data, false).is_some()
}
