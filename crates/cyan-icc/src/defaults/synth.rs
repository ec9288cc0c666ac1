//! Matrix/TRC and gray profile synthesis
//!
//! Every built-in profile is a v2.1 container with the same descriptive
//! tags: `desc` and `dmdd` carry the profile name, `dmnd` the vendor,
//! `cprt` a public-domain notice, and `wtpt` is D50.

use crate::color::{D50, Xyz, transfer};
use crate::icc::{
    ColorSpace, CurveData, DateTimeNumber, IccError, IccHeader, ProfileClass, ProfileVersion,
    ProfileWriter, RenderingIntent, TagSignature, TextData, U8Fixed8, XyzNumber, XyzTagData,
};

pub(crate) const VENDOR: &str = "Cyan";
pub(crate) const COPYRIGHT: &str = "Public Domain";

/// Entries in sampled sRGB curves
const SRGB_CURVE_ENTRIES: usize = 1024;

/// Header shared by every built-in profile
pub(crate) fn header(class: ProfileClass, color_space: ColorSpace, pcs: ColorSpace) -> IccHeader {
    IccHeader {
        size: 0,
        cmm_type: 0,
        version: ProfileVersion::V2_1,
        device_class: class,
        color_space,
        pcs,
        creation_date: DateTimeNumber {
            year: 2024,
            month: 1,
            day: 1,
            ..Default::default()
        },
        platform: 0,
        flags: 0,
        manufacturer: 0,
        model: 0,
        attributes: 0,
        rendering_intent: RenderingIntent::Perceptual,
        illuminant: XyzNumber::D50,
        creator: u32::from_be_bytes(*b"cyan"),
        profile_id: [0; 16],
    }
}

/// Writer seeded with the descriptive tags and the media white point
pub(crate) fn writer(name: &str, header: &IccHeader) -> ProfileWriter {
    let mut writer = ProfileWriter::new(header);
    writer
        .push(TagSignature::DESC, TextData::encode_desc(name))
        .push(TagSignature::COPYRIGHT, TextData::encode_text(COPYRIGHT))
        .push(TagSignature::DMND, TextData::encode_desc(VENDOR))
        .push(TagSignature::DMDD, TextData::encode_desc(name))
        .push(TagSignature::MEDIA_WHITE, XyzTagData::new(D50).encode());
    writer
}

/// Tone response of a built-in profile
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trc {
    Srgb,
    Gamma(f64),
    /// Raw u8Fixed8 exponent, for gammas that must be stored exactly
    Fixed(u16),
    Linear,
}

impl Trc {
    fn curve(self) -> CurveData {
        match self {
            Trc::Srgb => CurveData::sampled(SRGB_CURVE_ENTRIES, transfer::srgb_decode),
            Trc::Gamma(gamma) => CurveData::gamma(gamma),
            Trc::Fixed(raw) => CurveData::Gamma(U8Fixed8(raw)),
            Trc::Linear => CurveData::Identity,
        }
    }
}

/// D50-adapted colorants of a display RGB space
#[derive(Debug, Clone, Copy)]
pub(crate) struct Colorants {
    pub red: Xyz,
    pub green: Xyz,
    pub blue: Xyz,
}

impl Colorants {
    /// Colorants as moxcms derives them for its built-in profiles
    pub(crate) fn from_moxcms(profile: &moxcms::ColorProfile) -> Self {
        let (r, g, b) = (
            &profile.red_colorant,
            &profile.green_colorant,
            &profile.blue_colorant,
        );
        Self {
            red: Xyz::new(r.x as f64, r.y as f64, r.z as f64),
            green: Xyz::new(g.x as f64, g.y as f64, g.z as f64),
            blue: Xyz::new(b.x as f64, b.y as f64, b.z as f64),
        }
    }

    pub(crate) fn srgb() -> Self {
        Self::from_moxcms(&moxcms::ColorProfile::new_srgb())
    }
}

/// Matrix/TRC display profile
pub(crate) fn rgb_profile(name: &str, colorants: Colorants, trc: Trc) -> Result<Vec<u8>, IccError> {
    let header = header(ProfileClass::Display, ColorSpace::Rgb, ColorSpace::Xyz);
    let curve = trc.curve().encode();

    let mut writer = writer(name, &header);
    writer
        .push(TagSignature::RED_COLORANT, XyzTagData::new(colorants.red).encode())
        .push(TagSignature::GREEN_COLORANT, XyzTagData::new(colorants.green).encode())
        .push(TagSignature::BLUE_COLORANT, XyzTagData::new(colorants.blue).encode())
        .push(TagSignature::RED_TRC, curve.clone())
        .push(TagSignature::GREEN_TRC, curve.clone())
        .push(TagSignature::BLUE_TRC, curve);
    writer.finish()
}

/// Gray display profile with a single `kTRC`
pub(crate) fn gray_profile(name: &str, trc: Trc) -> Result<Vec<u8>, IccError> {
    let header = header(ProfileClass::Display, ColorSpace::Gray, ColorSpace::Xyz);

    let mut writer = writer(name, &header);
    writer.push(TagSignature::GRAY_TRC, trc.curve().encode());
    writer.finish()
}
