//! Test fixtures
//!
//! Profiles used across the test suites: the built-in set, profiles
//! serialized by lcms2 (v4, `mluc` text), and seeded random noise.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use cyan_icc::{ColorSpaceKind, DefaultProfileSet};
use lcms2::{CIExyY, GlobalContext, Profile, ToneCurve};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A profile under test
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Fixture name (profile name for built-ins)
    pub name: String,
    /// Color space family the profile is expected to report
    pub kind: ColorSpaceKind,
    /// Profile bytes
    pub data: Vec<u8>,
}

/// Every built-in profile, in list order per family
pub fn builtin_fixtures() -> Vec<Fixture> {
    let set = DefaultProfileSet::builtin();
    [ColorSpaceKind::Rgb, ColorSpaceKind::Cmyk, ColorSpaceKind::Gray]
        .into_iter()
        .flat_map(|kind| {
            set.profiles(kind).iter().map(move |p| Fixture {
                name: p.name.clone(),
                kind,
                data: p.blob.to_vec(),
            })
        })
        .collect()
}

pub fn d50_white_point() -> CIExyY {
    CIExyY {
        x: 0.3457,
        y: 0.3585,
        Y: 1.0,
    }
}

/// Profiles created and serialized by lcms2
///
/// sRGB and gray are v4 with `mluc` text; Lab and XYZ exercise the
/// color spaces that map to `ColorSpaceKind::None`.
pub fn lcms2_fixtures() -> anyhow::Result<Vec<Fixture>> {
    let srgb = Profile::new_srgb()
        .icc()
        .map_err(|e| anyhow!("lcms2 sRGB: {:?}", e))?;

    let gray = Profile::new_gray(&d50_white_point(), &ToneCurve::new(2.2))
        .and_then(|p| p.icc())
        .map_err(|e| anyhow!("lcms2 gray: {:?}", e))?;

    let lab = Profile::new_lab4_context(GlobalContext::new(), &d50_white_point())
        .and_then(|p| p.icc())
        .map_err(|e| anyhow!("lcms2 Lab: {:?}", e))?;

    let xyz = Profile::new_xyz()
        .icc()
        .map_err(|e| anyhow!("lcms2 XYZ: {:?}", e))?;

    Ok(vec![
        Fixture {
            name: "lcms2 sRGB".into(),
            kind: ColorSpaceKind::Rgb,
            data: srgb,
        },
        Fixture {
            name: "lcms2 gray 2.2".into(),
            kind: ColorSpaceKind::Gray,
            data: gray,
        },
        Fixture {
            name: "lcms2 Lab".into(),
            kind: ColorSpaceKind::None,
            data: lab,
        },
        Fixture {
            name: "lcms2 XYZ".into(),
            kind: ColorSpaceKind::None,
            data: xyz,
        },
    ])
}

/// Write `data` to `dir/name`, returning the path
pub fn write_fixture(dir: &Path, name: &str, data: &[u8]) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, data).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Deterministic random bytes
pub fn garbage(seed: u64, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.fill_bytes(&mut data);
    data
}

/// Random bytes that pass the first header checks: plausible size field
/// and the `acsp` magic, so parsing gets as far as the tag table
pub fn garbage_with_magic(seed: u64, len: usize) -> Vec<u8> {
    let mut data = garbage(seed, len.max(132));
    let size = data.len() as u32;
    data[0..4].copy_from_slice(&size.to_be_bytes());
    data[36..40].copy_from_slice(b"acsp");
    // keep the tag count small so some entries are examined
    let count = u32::from(data[131] % 8);
    data[128..132].copy_from_slice(&count.to_be_bytes());
    data
}
