//! Generic CMYK output profiles
//!
//! A naive subtractive model over sRGB: `rgb = (1 - cmy) * (1 - k)`. The
//! forward table samples that model into Lab; the reverse table inverts it
//! with a configurable amount of gray-component replacement.

use crate::color::{Lab, Matrix3x3, Xyz, transfer};
use crate::icc::{ColorSpace, IccError, Lut16Data, ProfileClass, TagSignature};

use super::synth::{self, Colorants};

/// Grid points of the CMYK→Lab table
const A2B_GRID: u8 = 9;
/// Grid points of the Lab→CMYK table
const B2A_GRID: u8 = 17;

/// Output profile with `A2B0`/`B2A0` lut16 tables and a Lab PCS
///
/// `black_generation` is the fraction of the common CMY component moved
/// into K when separating (1.0 = full GCR).
pub(crate) fn cmyk_profile(name: &str, black_generation: f64) -> Result<Vec<u8>, IccError> {
    let colorants = Colorants::srgb();
    let to_xyz = Matrix3x3::from_colorants(colorants.red, colorants.green, colorants.blue);
    let to_rgb = to_xyz.inverse().ok_or_else(|| {
        IccError::CorruptedData("sRGB colorant matrix is singular".to_string())
    })?;

    let a2b = Lut16Data::from_fn(4, 3, A2B_GRID, |cmyk, lab| {
        lab.copy_from_slice(&cmyk_to_lab(&to_xyz, cmyk));
    });
    let b2a = Lut16Data::from_fn(3, 4, B2A_GRID, |lab, cmyk| {
        cmyk.copy_from_slice(&lab_to_cmyk(&to_rgb, lab, black_generation));
    });

    let header = synth::header(ProfileClass::Output, ColorSpace::Cmyk, ColorSpace::Lab);
    let mut writer = synth::writer(name, &header);
    writer
        .push(TagSignature::A2B0, a2b.encode())
        .push(TagSignature::B2A0, b2a.encode());
    writer.finish()
}

/// Normalized CMYK to normalized v2 PCS Lab
fn cmyk_to_lab(to_xyz: &Matrix3x3, cmyk: &[f64]) -> [f64; 3] {
    let k = cmyk[3];
    let linear = [0, 1, 2].map(|i| transfer::srgb_decode((1.0 - cmyk[i]) * (1.0 - k)));
    let xyz = Xyz::from_array(to_xyz.multiply_vec(linear));
    Lab::from_xyz(xyz).to_v2_encoding()
}

/// Normalized v2 PCS Lab to normalized CMYK
fn lab_to_cmyk(to_rgb: &Matrix3x3, lab: &[f64], black_generation: f64) -> [f64; 4] {
    let lab = Lab::from_v2_encoding(lab[0] * 65535.0, lab[1] * 65535.0, lab[2] * 65535.0);
    let linear = to_rgb.multiply_vec(lab.to_xyz().to_array());
    let cmy = linear.map(|v| 1.0 - transfer::srgb_encode(v.clamp(0.0, 1.0)));

    let k = cmy[0].min(cmy[1]).min(cmy[2]) * black_generation;
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    let [c, m, y] = cmy.map(|v| ((v - k) / (1.0 - k)).clamp(0.0, 1.0));
    [c, m, y, k]
}
