//! LUT Tag Type
//!
//! `mft2` (Lut16Type, ICC.1:2022 Section 10.11): a matrix, per-channel input
//! tables, a multidimensional CLUT and per-channel output tables, all 16-bit.
//! The built-in CMYK profiles carry their A2B0/B2A0 transforms in this form.

use crate::icc::error::IccError;
use crate::icc::types::{S15Fixed16, TypeSignature};

/// Offset of the input tables inside an mft2 element
const TABLES_OFFSET: usize = 52;

/// 16-bit LUT data (mft2 / Lut16Type)
#[derive(Debug, Clone, PartialEq)]
pub struct Lut16Data {
    /// Number of input channels
    pub input_channels: u8,
    /// Number of output channels
    pub output_channels: u8,
    /// Number of CLUT grid points
    pub grid_points: u8,
    /// 3x3 matrix (stored row-major)
    pub matrix: [[S15Fixed16; 3]; 3],
    /// Input curves (one per input channel)
    pub input_curves: Vec<Vec<u16>>,
    /// CLUT data, first input channel varying slowest
    pub clut: Vec<u16>,
    /// Output curves (one per output channel)
    pub output_curves: Vec<Vec<u16>>,
}

impl Lut16Data {
    /// Build a LUT with identity matrix and linear 2-entry input/output
    /// tables by sampling `f` at every grid node. `f` receives normalized
    /// inputs and writes normalized outputs.
    pub fn from_fn(
        input_channels: u8,
        output_channels: u8,
        grid_points: u8,
        mut f: impl FnMut(&[f64], &mut [f64]),
    ) -> Self {
        let inputs = input_channels as usize;
        let outputs = output_channels as usize;
        let grid = grid_points as usize;
        let nodes = grid.pow(input_channels as u32);

        let mut clut = Vec::with_capacity(nodes * outputs);
        let mut input = vec![0.0f64; inputs];
        let mut output = vec![0.0f64; outputs];
        let step = (grid - 1).max(1) as f64;

        for node in 0..nodes {
            let mut rest = node;
            for channel in (0..inputs).rev() {
                input[channel] = (rest % grid) as f64 / step;
                rest /= grid;
            }
            f(&input, &mut output);
            clut.extend(
                output
                    .iter()
                    .map(|v| (v.clamp(0.0, 1.0) * 65535.0).round() as u16),
            );
        }

        let one = S15Fixed16::from_f64(1.0);
        let zero = S15Fixed16::default();

        Self {
            input_channels,
            output_channels,
            grid_points,
            matrix: [[one, zero, zero], [zero, one, zero], [zero, zero, one]],
            input_curves: vec![vec![0, 65535]; inputs],
            clut,
            output_curves: vec![vec![0, 65535]; outputs],
        }
    }

    /// Parse a whole mft2 element (type signature included)
    pub fn parse(element: &[u8]) -> Result<Self, IccError> {
        if element.len() < TABLES_OFFSET {
            return Err(IccError::CorruptedData("Lut16 tag too small".to_string()));
        }
        let data = &element[8..];

        let input_channels = data[0];
        let output_channels = data[1];
        let grid_points = data[2];

        let mut matrix = [[S15Fixed16::default(); 3]; 3];
        for (i, cell) in matrix.iter_mut().flatten().enumerate() {
            let offset = 4 + i * 4;
            *cell = S15Fixed16::from_be_bytes([
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ]);
        }

        let input_entries = u16::from_be_bytes([data[40], data[41]]) as usize;
        let output_entries = u16::from_be_bytes([data[42], data[43]]) as usize;

        let clut_len = (grid_points as usize)
            .checked_pow(input_channels as u32)
            .and_then(|n| n.checked_mul(output_channels as usize))
            .ok_or_else(|| IccError::CorruptedData("Lut16 CLUT too large".to_string()))?;

        let mut words = element[TABLES_OFFSET..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]));

        let mut take = |count: usize, what: &str| -> Result<Vec<u16>, IccError> {
            let table: Vec<u16> = words.by_ref().take(count).collect();
            if table.len() < count {
                return Err(IccError::CorruptedData(format!("Lut16 {} truncated", what)));
            }
            Ok(table)
        };

        let input_curves = (0..input_channels)
            .map(|_| take(input_entries, "input tables"))
            .collect::<Result<Vec<_>, _>>()?;
        let clut = take(clut_len, "CLUT")?;
        let output_curves = (0..output_channels)
            .map(|_| take(output_entries, "output tables"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            input_channels,
            output_channels,
            grid_points,
            matrix,
            input_curves,
            clut,
            output_curves,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let input_entries = self.input_curves.first().map_or(0, Vec::len) as u16;
        let output_entries = self.output_curves.first().map_or(0, Vec::len) as u16;

        let mut out = Vec::with_capacity(
            TABLES_OFFSET
                + 2 * (self.input_curves.iter().map(Vec::len).sum::<usize>()
                    + self.clut.len()
                    + self.output_curves.iter().map(Vec::len).sum::<usize>()),
        );
        out.extend_from_slice(&TypeSignature::LUT16.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&[
            self.input_channels,
            self.output_channels,
            self.grid_points,
            0,
        ]);
        for cell in self.matrix.iter().flatten() {
            out.extend_from_slice(&cell.to_be_bytes());
        }
        out.extend_from_slice(&input_entries.to_be_bytes());
        out.extend_from_slice(&output_entries.to_be_bytes());

        let words = self
            .input_curves
            .iter()
            .flatten()
            .chain(&self.clut)
            .chain(self.output_curves.iter().flatten());
        for word in words {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out
    }
}
