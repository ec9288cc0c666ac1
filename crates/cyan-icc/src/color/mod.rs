//! Color math used to synthesize built-in profiles
//!
//! - CIE XYZ and CIELAB (D50, the ICC PCS white)
//! - 3x3 matrices for RGB↔XYZ
//! - Transfer functions

pub mod lab;
pub mod matrix;
pub mod transfer;
pub mod xyz;

pub use lab::Lab;
pub use matrix::Matrix3x3;
pub use xyz::Xyz;

/// CIE D50, the Profile Connection Space white point (ICC.1:2022 7.2.16)
pub const D50: Xyz = Xyz::new(0.9642, 1.0, 0.8249);
