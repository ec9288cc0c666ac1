//! Curve Tag Type
//!
//! Tone reproduction curves stored as `curv` (ICC.1:2022 Section 10.6):
//! identity, a single u8Fixed8 gamma, or a table of u16 samples.

use crate::icc::error::IccError;
use crate::icc::types::{TypeSignature, U8Fixed8, read_u32};

/// Curve tag data (curv type)
#[derive(Debug, Clone, PartialEq)]
pub enum CurveData {
    /// Identity curve (count = 0)
    Identity,
    /// Simple gamma (count = 1, value is u8Fixed8)
    Gamma(U8Fixed8),
    /// Lookup table (count > 1, values are u16)
    Table(Vec<u16>),
}

impl CurveData {
    /// Pure power curve with the exponent rounded to u8Fixed8
    pub fn gamma(exponent: f64) -> Self {
        Self::Gamma(U8Fixed8::from_f64(exponent))
    }

    /// Sample `f` over [0, 1] into a table of `entries` points
    pub fn sampled(entries: usize, f: impl Fn(f64) -> f64) -> Self {
        let last = entries.saturating_sub(1).max(1) as f64;
        Self::Table(
            (0..entries)
                .map(|i| (f(i as f64 / last).clamp(0.0, 1.0) * 65535.0).round() as u16)
                .collect(),
        )
    }

    /// Parse a whole curv element (type signature included)
    pub fn parse(element: &[u8]) -> Result<Self, IccError> {
        let count = read_u32(element, 8)
            .ok_or_else(|| IccError::CorruptedData("Curve tag too small".to_string()))?
            as usize;
        let data = &element[12..];

        match count {
            0 => Ok(CurveData::Identity),
            1 => {
                if data.len() < 2 {
                    return Err(IccError::CorruptedData(
                        "Curve gamma value missing".to_string(),
                    ));
                }
                Ok(CurveData::Gamma(U8Fixed8::from_be_bytes([data[0], data[1]])))
            }
            _ => {
                let required_len = count.saturating_mul(2);
                if data.len() < required_len {
                    return Err(IccError::CorruptedData(format!(
                        "Curve table too small: need {} bytes, have {}",
                        required_len,
                        data.len()
                    )));
                }

                Ok(CurveData::Table(
                    data[..required_len]
                        .chunks_exact(2)
                        .map(|c| u16::from_be_bytes([c[0], c[1]]))
                        .collect(),
                ))
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::CURVE.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        match self {
            CurveData::Identity => out.extend_from_slice(&0u32.to_be_bytes()),
            CurveData::Gamma(g) => {
                out.extend_from_slice(&1u32.to_be_bytes());
                out.extend_from_slice(&g.0.to_be_bytes());
            }
            CurveData::Table(table) => {
                out.extend_from_slice(&(table.len() as u32).to_be_bytes());
                for v in table {
                    out.extend_from_slice(&v.to_be_bytes());
                }
            }
        }
        out
    }

    /// Evaluate the curve at a given input (0.0 to 1.0)
    pub fn eval(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);

        match self {
            CurveData::Identity => x,
            CurveData::Gamma(g) => x.powf(g.to_f64()),
            CurveData::Table(table) => {
                if table.len() < 2 {
                    return table.first().map_or(x, |&v| v as f64 / 65535.0);
                }

                let pos = x * (table.len() - 1) as f64;
                let idx = (pos.floor() as usize).min(table.len() - 2);
                let frac = pos - idx as f64;

                let v0 = table[idx] as f64;
                let v1 = table[idx + 1] as f64;
                (v0 + frac * (v1 - v0)) / 65535.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_curve_encoding() {
        let curve = CurveData::gamma(2.2);
        let bytes = curve.encode();
        assert_eq!(&bytes[0..4], b"curv");
        assert_eq!(&bytes[8..12], &[0, 0, 0, 1]);
        assert_eq!(&bytes[12..14], &[0x02, 0x33]);
        assert_eq!(CurveData::parse(&bytes).unwrap(), curve);
    }

    #[test]
    fn test_sampled_curve() {
        let curve = CurveData::sampled(256, |x| x);
        let CurveData::Table(table) = &curve else {
            panic!("expected table");
        };
        assert_eq!(table.len(), 256);
        assert_eq!(table[0], 0);
        assert_eq!(table[255], 65535);
        assert!((curve.eval(0.5) - 0.5).abs() < 1e-3);

        let parsed = CurveData::parse(&curve.encode()).unwrap();
        assert_eq!(parsed, curve);
    }

    #[test]
    fn test_identity_and_truncated() {
        assert_eq!(
            CurveData::parse(&CurveData::Identity.encode()).unwrap(),
            CurveData::Identity
        );
        let truncated = [b'c', b'u', b'r', b'v', 0, 0, 0, 0, 0, 0, 0, 9, 0, 1];
        assert!(CurveData::parse(&truncated).is_err());
    }
}
