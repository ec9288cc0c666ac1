//! ICC Profile Writer
//!
//! Serializes a header and an ordered list of tag elements into a profile:
//! header, tag count, tag table, then element data in table order. Every
//! element starts on a 4-byte boundary and byte-identical elements share
//! storage, which keeps tags that were shared in a source profile shared.
//!
//! The profile ID is always written as zero (not computed).

use super::error::IccError;
use super::header::{HEADER_SIZE, IccHeader, MIN_PROFILE_SIZE, PROFILE_ID_RANGE};
use super::parser::TAG_ENTRY_SIZE;
use super::types::TagSignature;

/// Builder for ICC profile bytes
#[derive(Debug, Clone)]
pub struct ProfileWriter {
    header: [u8; HEADER_SIZE],
    tags: Vec<(TagSignature, Vec<u8>)>,
}

impl ProfileWriter {
    /// Start from a decoded header
    pub fn new(header: &IccHeader) -> Self {
        Self::from_raw_header(header.to_bytes())
    }

    /// Start from raw header bytes, preserved verbatim except size and ID
    pub fn from_raw_header(header: [u8; HEADER_SIZE]) -> Self {
        Self {
            header,
            tags: Vec::new(),
        }
    }

    /// Append a tag. A signature already present is replaced in place.
    pub fn push(&mut self, sig: TagSignature, element: Vec<u8>) -> &mut Self {
        match self.tags.iter_mut().find(|(s, _)| *s == sig) {
            Some((_, existing)) => *existing = element,
            None => self.tags.push((sig, element)),
        }
        self
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Serialize the profile
    pub fn finish(&self) -> Result<Vec<u8>, IccError> {
        let table_end = MIN_PROFILE_SIZE + self.tags.len() * TAG_ENTRY_SIZE;

        // Lay out unique elements after the table
        let mut blocks: Vec<&[u8]> = Vec::new();
        let mut block_offsets: Vec<usize> = Vec::new();
        let mut placement: Vec<(usize, usize)> = Vec::with_capacity(self.tags.len());
        let mut cursor = align4(table_end);

        for (_, element) in &self.tags {
            let shared = blocks.iter().position(|b| *b == element.as_slice());
            let offset = match shared {
                Some(index) => block_offsets[index],
                None => {
                    let offset = cursor;
                    blocks.push(element);
                    block_offsets.push(offset);
                    cursor = align4(offset + element.len());
                    offset
                }
            };
            placement.push((offset, element.len()));
        }

        let total = cursor.max(align4(table_end));
        let total_u32 = u32::try_from(total).map_err(|_| IccError::TooLarge(total))?;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&self.header);
        out[0..4].copy_from_slice(&total_u32.to_be_bytes());
        out[PROFILE_ID_RANGE].fill(0);

        out.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());
        for ((sig, _), (offset, len)) in self.tags.iter().zip(&placement) {
            out.extend_from_slice(&sig.0.to_be_bytes());
            out.extend_from_slice(&(*offset as u32).to_be_bytes());
            out.extend_from_slice(&(*len as u32).to_be_bytes());
        }

        for (block, offset) in blocks.iter().zip(&block_offsets) {
            out.resize(*offset, 0);
            out.extend_from_slice(block);
        }
        out.resize(total, 0);

        Ok(out)
    }
}

#[inline]
fn align4(n: usize) -> usize {
    (n + 3) & !3
}
