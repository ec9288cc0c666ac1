//! Transfer functions
//!
//! sRGB (IEC 61966-2-1) and pure power curves.

/// sRGB decode (encoded → linear)
#[inline]
pub fn srgb_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB encode (linear → encoded)
#[inline]
pub fn srgb_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// y = x^gamma
#[inline]
pub fn gamma_decode(encoded: f64, gamma: f64) -> f64 {
    if encoded <= 0.0 {
        0.0
    } else {
        encoded.powf(gamma)
    }
}
