//! CIE XYZ Color Space
//!
//! XYZ is the fundamental color space for color management.
//! All ICC profile transforms go through XYZ as the Profile Connection Space (PCS).

/// CIE 1931 XYZ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}
