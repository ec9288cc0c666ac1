//! Default profile sets
//!
//! The profiles shipped with the application, grouped by color space
//! family. The built-in set is synthesized in-process on first use and
//! shared for the rest of the process; callers can inject their own set.

mod cmyk;
mod synth;

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::icc::{IccError, IccProfile};
use crate::types::{ColorSpaceKind, ProfileBlob};

use synth::{Colorants, Trc};

/// A named profile in a default set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinProfile {
    pub name: String,
    pub blob: ProfileBlob,
}

impl BuiltinProfile {
    pub fn new(name: impl Into<String>, blob: impl Into<ProfileBlob>) -> Self {
        Self {
            name: name.into(),
            blob: blob.into(),
        }
    }
}

/// Ordered profile lists per color space family
///
/// The first entry of each list is that family's default profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultProfileSet {
    rgb: Vec<BuiltinProfile>,
    cmyk: Vec<BuiltinProfile>,
    gray: Vec<BuiltinProfile>,
}

impl DefaultProfileSet {
    /// Empty set, to be filled with [`with_profile`](Self::with_profile)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in set, synthesized once per process
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<DefaultProfileSet> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::synthesize().unwrap_or_default())
    }

    fn synthesize() -> std::result::Result<Self, IccError> {
        let srgb = Colorants::srgb();
        let adobe = Colorants::from_moxcms(&moxcms::ColorProfile::new_adobe_rgb());
        let p3 = Colorants::from_moxcms(&moxcms::ColorProfile::new_display_p3());
        let prophoto = Colorants::from_moxcms(&moxcms::ColorProfile::new_pro_photo_rgb());

        let rgb = [
            ("sRGB", srgb, Trc::Srgb),
            // 2 + 51/256, stored exactly as in the Adobe RGB (1998) specification
            ("Adobe RGB (1998)", adobe, Trc::Fixed(563)),
            ("Display P3", p3, Trc::Srgb),
            ("ProPhoto RGB", prophoto, Trc::Gamma(1.8)),
        ];
        let gray = [
            ("Gray Gamma 2.2", Trc::Gamma(2.2)),
            ("Gray Gamma 1.8", Trc::Gamma(1.8)),
            ("Gray sRGB", Trc::Srgb),
            ("Gray Linear", Trc::Linear),
        ];
        let cmyk = [("Generic CMYK", 1.0), ("Generic CMYK (Light GCR)", 0.5)];

        Ok(Self {
            rgb: rgb
                .into_iter()
                .map(|(name, colorants, trc)| {
                    synth::rgb_profile(name, colorants, trc).map(|b| BuiltinProfile::new(name, b))
                })
                .collect::<std::result::Result<_, _>>()?,
            cmyk: cmyk
                .into_iter()
                .map(|(name, gcr)| cmyk::cmyk_profile(name, gcr).map(|b| BuiltinProfile::new(name, b)))
                .collect::<std::result::Result<_, _>>()?,
            gray: gray
                .into_iter()
                .map(|(name, trc)| synth::gray_profile(name, trc).map(|b| BuiltinProfile::new(name, b)))
                .collect::<std::result::Result<_, _>>()?,
        })
    }

    /// Append a profile to a family's list
    ///
    /// The blob must parse and its header color space must belong to `kind`.
    /// Fails with [`Error::Parse`] for an unreadable blob and
    /// [`Error::UnsupportedColorSpace`] for `ColorSpaceKind::None` or a blob
    /// of another family.
    pub fn with_profile(
        mut self,
        kind: ColorSpaceKind,
        name: impl Into<String>,
        blob: impl Into<ProfileBlob>,
    ) -> Result<Self> {
        let blob = blob.into();
        let list = match kind {
            ColorSpaceKind::Rgb => &mut self.rgb,
            ColorSpaceKind::Cmyk => &mut self.cmyk,
            ColorSpaceKind::Gray => &mut self.gray,
            ColorSpaceKind::None => return Err(Error::UnsupportedColorSpace(kind)),
        };

        let actual = ColorSpaceKind::from(IccProfile::parse(&blob)?.color_space());
        if actual != kind {
            return Err(Error::UnsupportedColorSpace(actual));
        }

        list.push(BuiltinProfile::new(name, blob));
        Ok(self)
    }

    /// Profiles of a family in their fixed order; empty for `None`
    pub fn profiles(&self, kind: ColorSpaceKind) -> &[BuiltinProfile] {
        match kind {
            ColorSpaceKind::Rgb => &self.rgb,
            ColorSpaceKind::Cmyk => &self.cmyk,
            ColorSpaceKind::Gray => &self.gray,
            ColorSpaceKind::None => &[],
        }
    }

    /// First profile of a family
    pub fn default_for(&self, kind: ColorSpaceKind) -> Option<&ProfileBlob> {
        self.profiles(kind).first().map(|p| &p.blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_and_order() {
        let set = DefaultProfileSet::builtin();
        let names = |kind| -> Vec<&str> {
            set.profiles(kind).iter().map(|p| p.name.as_str()).collect()
        };

        assert_eq!(
            names(ColorSpaceKind::Rgb),
            ["sRGB", "Adobe RGB (1998)", "Display P3", "ProPhoto RGB"]
        );
        assert_eq!(
            names(ColorSpaceKind::Cmyk),
            ["Generic CMYK", "Generic CMYK (Light GCR)"]
        );
        assert_eq!(
            names(ColorSpaceKind::Gray),
            ["Gray Gamma 2.2", "Gray Gamma 1.8", "Gray sRGB", "Gray Linear"]
        );
        assert!(set.profiles(ColorSpaceKind::None).is_empty());
    }

    #[test]
    fn test_builtin_profiles_describe_themselves() {
        let set = DefaultProfileSet::builtin();
        for kind in [ColorSpaceKind::Rgb, ColorSpaceKind::Cmyk, ColorSpaceKind::Gray] {
            for profile in set.profiles(kind) {
                let parsed = IccProfile::parse(&profile.blob).unwrap();
                assert_eq!(parsed.description(), profile.name);
                assert_eq!(ColorSpaceKind::from(parsed.color_space()), kind);
            }
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(
            DefaultProfileSet::builtin(),
            DefaultProfileSet::builtin()
        ));
        assert_eq!(DefaultProfileSet::synthesize().unwrap(), *DefaultProfileSet::builtin());
    }

    #[test]
    fn test_custom_set() {
        let blob = DefaultProfileSet::builtin()
            .default_for(ColorSpaceKind::Gray)
            .unwrap()
            .clone();
        let set = DefaultProfileSet::new()
            .with_profile(ColorSpaceKind::Gray, "Mine", blob.clone())
            .unwrap();

        assert_eq!(set.default_for(ColorSpaceKind::Gray), Some(&blob));
        assert_eq!(set.default_for(ColorSpaceKind::Rgb), None);
        assert!(matches!(
            DefaultProfileSet::new().with_profile(ColorSpaceKind::None, "x", blob),
            Err(Error::UnsupportedColorSpace(ColorSpaceKind::None))
        ));
    }

    #[test]
    fn test_custom_profile_of_wrong_family_rejected() {
        let gray = DefaultProfileSet::builtin()
            .default_for(ColorSpaceKind::Gray)
            .unwrap()
            .clone();
        assert!(matches!(
            DefaultProfileSet::new().with_profile(ColorSpaceKind::Rgb, "Not RGB", gray),
            Err(Error::UnsupportedColorSpace(ColorSpaceKind::Gray))
        ));
    }

    #[test]
    fn test_custom_profile_must_parse() {
        assert!(matches!(
            DefaultProfileSet::new().with_profile(ColorSpaceKind::Cmyk, "Junk", vec![1u8, 2, 3]),
            Err(Error::Parse(IccError::TooSmall { .. }))
        ));
    }
}
