//! CIELAB (L*a*b*) Color Space
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis
//! - b*: Blue-yellow axis
//!
//! Always relative to D50 here, since that is the PCS illuminant.

use crate::color::{D50, Xyz};

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from PCS XYZ
    pub fn from_xyz(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D50.x);
        let fy = lab_f(xyz.y / D50.y);
        let fz = lab_f(xyz.z / D50.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to PCS XYZ
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * D50.x,
            lab_f_inv(fy) * D50.y,
            lab_f_inv(fz) * D50.z,
        )
    }

    /// Decode from ICC v2 16-bit Lab encoding (L: 0xFF00 = 100, a/b: 0x8000 = 0)
    pub fn from_v2_encoding(l: f64, a: f64, b: f64) -> Self {
        Self {
            l: l * 100.0 / 65280.0,
            a: a / 256.0 - 128.0,
            b: b / 256.0 - 128.0,
        }
    }

    /// Encode into ICC v2 16-bit Lab, normalized to [0, 1] over 0..=65535
    pub fn to_v2_encoding(&self) -> [f64; 3] {
        [
            self.l * 65280.0 / 100.0 / 65535.0,
            (self.a + 128.0) * 256.0 / 65535.0,
            (self.b + 128.0) * 256.0 / 65535.0,
        ]
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_l100() {
        let lab = Lab::from_xyz(D50);
        assert!(lab.approx_eq(&Lab::new(100.0, 0.0, 0.0), 1e-9));
    }

    #[test]
    fn test_xyz_roundtrip() {
        for xyz in [Xyz::new(0.2, 0.3, 0.1), Xyz::new(0.001, 0.002, 0.003)] {
            let back = Lab::from_xyz(xyz).to_xyz();
            assert!(back.approx_eq(&xyz, 1e-10));
        }
    }

    #[test]
    fn test_v2_encoding() {
        let lab = Lab::from_v2_encoding(65280.0, 32768.0, 32768.0);
        assert!(lab.approx_eq(&Lab::new(100.0, 0.0, 0.0), 1e-9));

        let [l, a, b] = Lab::new(50.0, -20.0, 40.0).to_v2_encoding();
        let back = Lab::from_v2_encoding(l * 65535.0, a * 65535.0, b * 65535.0);
        assert!(back.approx_eq(&Lab::new(50.0, -20.0, 40.0), 1e-9));
    }
}
